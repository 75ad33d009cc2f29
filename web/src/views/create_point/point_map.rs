use leptos::prelude::*;
use leptos_leaflet::{
    leaflet::{Map, MouseEvent},
    prelude::*,
};
use shared_types::LatLong;

use super::form_state::PositionPicker;

const DEFAULT_ZOOM: f64 = 15.0;

/// Map used to pick the point's position. Follows `initial_position` until
/// the user clicks, and always shows a marker at the picked position.
#[component]
pub fn PointMap(
    initial_position: RwSignal<LatLong>,
    selected_position: RwSignal<PositionPicker>,
) -> impl IntoView {
    let center: Memo<Position> = Memo::new(move |_| {
        let LatLong { lat, long } = initial_position.get();
        Position::new(lat, long)
    });

    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    // Geolocation usually resolves after the map is mounted.
    Effect::new(move |_| {
        let new_pos = center.get();
        if let Some(map) = map.get() {
            map.set_view(&new_pos.as_lat_lng(), map.get_zoom());
        }
    });

    let events = MapEvents::new().mouse_click(move |event: MouseEvent| {
        let clicked = event.lat_lng();
        selected_position.update(|p| p.click(clicked.lat(), clicked.lng()));
    });

    view! {
        <MapContainer
            style="height: 350px; width: 100%; border-radius: 8px; margin-bottom: 24px"
            center=center.get_untracked()
            zoom=DEFAULT_ZOOM
            set_view=true
            map=map.write_only()
            events
        >
            <TileLayer
                url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            />
            {move || {
                let LatLong { lat, long } = selected_position.with(|p| p.position());
                view! {
                    <Marker position=Position::new(lat, long) draggable=false />
                }
            }}
        </MapContainer>
    }
}
