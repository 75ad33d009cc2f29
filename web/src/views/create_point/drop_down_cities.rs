use leptos::prelude::*;

use super::form_state::UNSET;

#[component]
pub fn DropDownCities<F>(
    #[prop(into)] cities: Signal<Vec<String>>,
    #[prop(into)] selected_city: Signal<String>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Copy + Send + Sync,
{
    view! {
        <div class="field">
            <label for="city">"Cidade"</label>
            <select
                name="city"
                id="city"
                required
                prop:value=move || selected_city.get()
                on:change=move |ev| on_change(event_target_value(&ev))
            >
                <option value=UNSET>"Selecione uma cidade"</option>
                {move || {
                    cities.get()
                        .into_iter()
                        .map(|city| {
                            let label = city.clone();
                            view! { <option value=city>{label}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
