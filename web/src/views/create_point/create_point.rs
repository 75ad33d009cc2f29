use leptos::{
    logging::{log, warn},
    prelude::*,
    task::spawn_local,
};
use shared_types::LatLong;
use thaw::{Button, ButtonAppearance, ButtonType};

use crate::{
    components::{error::ErrorView, navbar::Navbar},
    server::{create_point, get_cities, get_items, get_ufs},
    utils::geolocation::request_current_position,
    views::create_point::{
        completed_overlay::CompletedOverlay,
        contact_fields::ContactFields,
        drop_down_cities::DropDownCities,
        drop_down_ufs::DropDownUfs,
        form_state::{
            CityPicker, ItemSelection, OverlayState, PointForm, PositionPicker, SubmitGuard,
            SubmitOutcome,
        },
        items_grid::ItemsGrid,
        point_map::PointMap,
    },
};

#[component]
pub fn CreatePoint() -> impl IntoView {
    // Contact info
    let entity_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let whatsapp = RwSignal::new(String::new());

    // Location
    let initial_position = RwSignal::new(LatLong::default());
    let selected_position = RwSignal::new(PositionPicker::default());
    let picker = RwSignal::new(CityPicker::default());

    let selection = RwSignal::new(ItemSelection::default());

    // UI state
    let overlay = RwSignal::new(OverlayState::Closed);
    let form_error = RwSignal::new(None::<String>);
    let guard = RwSignal::new(SubmitGuard::default());

    Effect::new(move |_| {
        request_current_position(move |coords| initial_position.set(coords));
    });

    let items = Resource::new(|| (), |_| async move { get_items().await });
    let ufs = Resource::new(|| (), |_| async move { get_ufs().await });

    let on_uf_change = move |uf: String| {
        let Some(ticket) = picker.try_update(|p| p.select_uf(&uf)).flatten() else {
            return;
        };

        spawn_local(async move {
            match get_cities(ticket.uf().to_string()).await {
                Ok(cities) => {
                    let applied = picker
                        .try_update(|p| p.apply_cities(&ticket, cities))
                        .unwrap_or(false);
                    if !applied {
                        log!("Discarded stale city list for {}", ticket.uf());
                    }
                }
                Err(err) => warn!("Error occurred while fetching cities for {}: {}", ticket.uf(), err),
            }
        });
    };

    let on_city_change = move |city: String| picker.update(|p| p.select_city(&city));

    let submit_point = Action::new(move |point: &shared_types::NewPoint| {
        let point = point.clone();
        async move { create_point(point).await }
    });
    let is_submitting = Memo::new(move |_| guard.with(|g| g.is_pending()));

    Effect::new(move |_| {
        if let Some(result) = submit_point.value().get() {
            guard.update(|g| g.finish());
            let outcome = SubmitOutcome::from_result(&result);
            form_error.set(outcome.error_message());
            overlay.update(|o| outcome.apply_to(o));
        }
    });

    let handle_submit = move || {
        let (uf, city) = picker.with_untracked(|p| (p.selected_uf.clone(), p.selected_city.clone()));
        let form = PointForm {
            name: entity_name.get_untracked(),
            email: email.get_untracked(),
            whatsapp: whatsapp.get_untracked(),
            uf,
            city,
            position: selected_position.with_untracked(|p| p.position()),
            items: selection.get_untracked(),
        };

        match form.to_payload() {
            Ok(point) => {
                if !guard.try_update(|g| g.try_begin()).unwrap_or(false) {
                    return;
                }
                form_error.set(None);
                submit_point.dispatch(point);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    view! {
        <div style="position: relative">
            <CompletedOverlay overlay />
            <div id="page-create-point">
                <Navbar back_to_home=true />

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    handle_submit();
                }>
                    <h1>"Cadastro do " <br /> " ponto de coleta"</h1>

                    <ContactFields entity_name email whatsapp />

                    <fieldset>
                        <legend>
                            <h2>"Endereço"</h2>
                            <span>"Selecione o endereço no mapa"</span>
                        </legend>

                        <PointMap initial_position selected_position />

                        <div class="field-group">
                            <DropDownUfs
                                ufs
                                selected_uf=Signal::derive(move || picker.with(|p| p.selected_uf.clone()))
                                on_change=on_uf_change
                            />
                            <DropDownCities
                                cities=Signal::derive(move || picker.with(|p| p.cities.clone()))
                                selected_city=Signal::derive(move || picker.with(|p| p.selected_city.clone()))
                                on_change=on_city_change
                            />
                        </div>
                    </fieldset>

                    <ItemsGrid items selection />

                    {move || form_error.get().map(|message| view! {
                        <ErrorView message=Some(message) />
                    })}

                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::from(is_submitting)
                        loading=Signal::from(is_submitting)
                    >
                        {move || if is_submitting.get() { "Enviando..." } else { "Cadastrar ponto de coleta" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
