use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::navbar::Navbar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div id="page-home">
            <div class="content">
                <Navbar />

                <main>
                    <h1>"Seu marketplace de coleta de resíduos."</h1>
                    <p>"Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."</p>

                    <A href="/create-point" attr:class="home__cta">
                        <span class="home__cta-icon">"→"</span>
                        <strong>"Cadastre um ponto de coleta"</strong>
                    </A>
                </main>
            </div>
        </div>
    }
}
