pub mod create_point;
pub mod home;
pub mod not_found;
