use leptos::prelude::*;
use thaw::{MessageBar, MessageBarBody, MessageBarIntent};

/// Inline error banner. Falls back to a generic message when none is given.
#[component]
pub fn ErrorView(message: Option<String>) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            <MessageBarBody>
                {message.unwrap_or_else(|| "Ocorreu um erro. Tente novamente.".to_string())}
            </MessageBarBody>
        </MessageBar>
    }
}
