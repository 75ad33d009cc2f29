use leptos::logging::warn;
use shared_types::LatLong;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::Position;

/// Asks the browser for the device position once. The callback only fires on
/// success; denial or an unsupported browser is logged and otherwise ignored.
pub fn request_current_position<F>(on_position: F)
where
    F: Fn(LatLong) + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };

    let geolocation = match window.navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(err) => {
            warn!("Geolocation unavailable: {:?}", err);
            return;
        }
    };

    let on_success = Closure::<dyn FnMut(Position)>::new(
        move |position: Position| {
            let coords = position.coords();
            on_position(LatLong {
                lat: coords.latitude(),
                long: coords.longitude(),
            });
        },
    );
    let on_error = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
        warn!("Geolocation request failed: {:?}", err);
    });

    if let Err(err) = geolocation.get_current_position_with_error_callback(
        on_success.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
    ) {
        warn!("Could not request current position: {:?}", err);
    }

    on_success.forget();
    on_error.forget();
}
