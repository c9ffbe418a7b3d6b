use dioxus::prelude::*;

use crate::view::{
    component::{FlashMessages, Header},
    SITE_NAME,
};

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@4.12.14/dist/full.min.css";

/// Full HTML document: head, navigation, flash messages and page content.
#[component]
pub fn Document(title: String, flashes: Vec<String>, children: Element) -> Element {
    rsx!(html {
        lang: "en",
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1",
            }
            title { "{title} | {SITE_NAME}" }
            link { rel: "stylesheet", href: DAISYUI_CSS }
            link { rel: "stylesheet", href: "/static/css/main.css" }
        }
        body {
            class: "bg-base-100",
            Header {}
            main {
                class: "page",
                FlashMessages { messages: flashes }
                {children}
            }
        }
    })
}
