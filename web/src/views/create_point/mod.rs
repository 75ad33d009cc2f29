pub mod completed_overlay;
pub mod contact_fields;
pub mod create_point;
pub mod drop_down_cities;
pub mod drop_down_ufs;
pub mod form_state;
pub mod items_grid;
pub mod point_map;

pub use create_point::CreatePoint;
