use dioxus::prelude::*;

use crate::view::SITE_NAME;

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "navbar bg-base-200",
        div {
            class: "navbar-start",
            a {
                class: "btn btn-ghost text-xl",
                href: "/",
                {SITE_NAME}
            }
        }
        div {
            class: "navbar-end gap-2",
            a { class: "btn btn-ghost", href: "/venues", "Venues" }
            a { class: "btn btn-ghost", href: "/artists", "Artists" }
            a { class: "btn btn-ghost", href: "/shows", "Shows" }
        }
    })
}
