use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::server::util::format::{format_datetime, DateFormat};

/// Picture, linked name and start time of one side of a show.
#[component]
pub fn ShowCard(
    href: String,
    name: String,
    #[props(!optional)] image_link: Option<String>,
    start_time: DateTime<Utc>,
) -> Element {
    let when = format_datetime(start_time, DateFormat::Full);

    rsx!(div {
        class: "card card-side bg-base-200 show-card",
        if let Some(src) = image_link {
            figure {
                img { src: "{src}", alt: "{name}" }
            }
        }
        div {
            class: "card-body",
            h5 {
                class: "card-title",
                a { href: "{href}", "{name}" }
            }
            p { "{when}" }
        }
    })
}
