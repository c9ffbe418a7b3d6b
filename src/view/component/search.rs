use dioxus::prelude::*;

/// Name search posting `search_term` to `action`.
#[component]
pub fn SearchBox(action: String, placeholder: String, value: String) -> Element {
    rsx!(form {
        class: "search",
        method: "post",
        action: "{action}",
        input {
            r#type: "search",
            class: "input input-bordered",
            name: "search_term",
            placeholder: "{placeholder}",
            value: "{value}",
        }
        button {
            r#type: "submit",
            class: "btn btn-outline",
            "Search"
        }
    })
}
