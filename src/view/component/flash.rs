use dioxus::prelude::*;

/// One-shot notices left by the previous request.
#[component]
pub fn FlashMessages(messages: Vec<String>) -> Element {
    rsx!(if !messages.is_empty() {
        div {
            class: "flashes",
            for message in messages {
                div {
                    class: "alert alert-info",
                    role: "alert",
                    "{message}"
                }
            }
        }
    })
}
