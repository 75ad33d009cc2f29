use leptos::prelude::*;
use shared_types::CatalogItem;

use crate::components::{error::ErrorView, loading::LoadingView};

use super::form_state::ItemSelection;

#[component]
pub fn ItemsGrid(
    items: Resource<Result<Vec<CatalogItem>, ServerFnError>>,
    selection: RwSignal<ItemSelection>,
) -> impl IntoView {
    view! {
        <fieldset>
            <legend>
                <h2>"Ítens de coleta"</h2>
                <span>"Selecione um ou mais ítens abaixo"</span>
            </legend>

            <Suspense fallback=move || view! {
                <LoadingView message=Some("Carregando ítens...".to_string()) />
            }>
                {move ||
                    match items.get() {
                        Some(Ok(items)) => view! {
                            <ul class="items-grid">
                                {items.into_iter().map(|item| {
                                    let id = item.id;
                                    view! {
                                        <li
                                            class=move || if selection.with(|s| s.contains(id)) { "selected" } else { "" }
                                            on:click=move |_| selection.update(|s| s.toggle(id))
                                        >
                                            <img src=item.image_url alt=item.title.clone() />
                                            <span>{item.title}</span>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        }.into_any(),
                        Some(Err(err)) => {
                            leptos::logging::warn!("Error occurred while fetching items: {}", err);
                            view! {
                                <ErrorView message=Some("Não foi possível carregar os ítens de coleta.".to_string()) />
                            }.into_any()
                        },
                        None => view! {
                            <LoadingView message=Some("Carregando ítens...".to_string()) />
                        }.into_any(),
                    }
                }
            </Suspense>
        </fieldset>
    }
}
