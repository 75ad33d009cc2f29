use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 1rem;">
            <div style="max-width: 600px; width: 100%; text-align: center;">
                <div style="font-size: 8rem; font-weight: 900; color: #34CB79; margin: 0; line-height: 1;">
                    "404"
                </div>

                <h1 style="font-size: 2.5rem; font-weight: 700; color: #322153; margin: 1rem 0;">
                    "Página não encontrada"
                </h1>

                <p style="font-size: 1.2rem; color: #6C6C80; margin: 0 0 2rem 0; line-height: 1.6;">
                    "A página que você procura não existe ou foi movida."
                </p>

                <button
                    on:click=move |_| navigate("/", Default::default())
                    style="background: #34CB79; color: white; padding: 1rem 1.5rem; border-radius: 8px; border: none; font-size: 1rem; font-weight: 600; cursor: pointer;">
                    "Voltar para home"
                </button>
            </div>
        </div>
    }
}
