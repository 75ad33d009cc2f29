use leptos::{logging::warn, prelude::*};

use crate::components::error::ErrorView;

use super::form_state::UNSET;

#[component]
pub fn DropDownUfs<F>(
    ufs: Resource<Result<Vec<String>, ServerFnError>>,
    #[prop(into)] selected_uf: Signal<String>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Copy + Send + Sync,
{
    view! {
        <div class="field">
            <label for="uf">"Estado (UF)"</label>
            <select
                name="uf"
                id="uf"
                required
                prop:value=move || selected_uf.get()
                on:change=move |ev| on_change(event_target_value(&ev))
            >
                <option value=UNSET>"Selecione uma UF"</option>
                {move || {
                    ufs.get()
                        .and_then(Result::ok)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|uf| {
                            let label = uf.clone();
                            view! { <option value=uf>{label}</option> }
                        })
                        .collect_view()
                }}
            </select>
            {move || match ufs.get() {
                Some(Err(err)) => {
                    warn!("Error occurred while fetching states: {}", err);
                    Some(view! {
                        <ErrorView message=Some("Não foi possível carregar os estados.".to_string()) />
                    })
                }
                _ => None,
            }}
        </div>
    }
}
