use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::form_state::{OverlayState, OVERLAY_DURATION_MS};

/// Full-screen confirmation shown after a point is created. It has no close
/// button; it closes itself and goes back to the home page.
#[component]
pub fn CompletedOverlay(overlay: RwSignal<OverlayState>) -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move |_| {
        if overlay.get().is_open() {
            let navigate = navigate.clone();
            set_timeout(
                move || {
                    overlay.update(OverlayState::close);
                    navigate("/", Default::default());
                },
                Duration::from_millis(OVERLAY_DURATION_MS),
            );
        }
    });

    view! {
        <div class=move || if overlay.get().is_open() { "completed-overlay show" } else { "completed-overlay" }>
            <div class="completed-overlay__content">
                <img src="/completed.svg" alt="Registration Completed" style="user-select: none" />
                <h2>"Cadastro concluído!"</h2>
            </div>
        </div>
    }
}
