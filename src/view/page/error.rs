use dioxus::prelude::*;

#[component]
pub fn NotFoundPage() -> Element {
    rsx!(div {
        class: "error-page",
        h1 { "404" }
        p { "Not Found" }
        a { class: "btn btn-outline", href: "/", "Back home" }
    })
}

#[component]
pub fn BadRequestPage(message: String) -> Element {
    rsx!(div {
        class: "error-page",
        h1 { "400" }
        p { "{message}" }
        a { class: "btn btn-outline", href: "/", "Back home" }
    })
}

#[component]
pub fn ServerErrorPage() -> Element {
    rsx!(div {
        class: "error-page",
        h1 { "500" }
        p { "Something went wrong on our end. Please try again." }
        a { class: "btn btn-outline", href: "/", "Back home" }
    })
}
