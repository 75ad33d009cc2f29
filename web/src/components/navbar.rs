use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar(#[prop(optional)] back_to_home: bool) -> impl IntoView {
    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__logo">
                <img src="/logo.svg" alt="Ecoleta" />
            </A>

            {back_to_home.then(|| view! {
                <A href="/" attr:class="navbar__link">
                    <span class="navbar__arrow">"←"</span>
                    "Voltar para home"
                </A>
            })}
        </header>
    }
}
