use leptos::prelude::*;

#[component]
pub fn ContactFields(
    entity_name: RwSignal<String>,
    email: RwSignal<String>,
    whatsapp: RwSignal<String>,
) -> impl IntoView {
    view! {
        <fieldset>
            <legend>
                <h2>"Dados"</h2>
            </legend>

            <div class="field">
                <label for="name">"Nome da Entidade"</label>
                <input
                    type="text"
                    name="name"
                    id="name"
                    required
                    prop:value=move || entity_name.get()
                    on:input=move |ev| entity_name.set(event_target_value(&ev))
                />
            </div>

            <div class="field-group">
                <div class="field">
                    <label for="email">"E-mail"</label>
                    <input
                        type="email"
                        name="email"
                        id="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="whatsapp">"Whatsapp"</label>
                    <input
                        type="text"
                        name="whatsapp"
                        id="whatsapp"
                        required
                        prop:value=move || whatsapp.get()
                        on:input=move |ev| whatsapp.set(event_target_value(&ev))
                    />
                </div>
            </div>
        </fieldset>
    }
}
