use dioxus::prelude::*;

use crate::{
    model::{form::FieldErrors, show::ShowForm},
    server::{
        model::show::ShowListing,
        util::format::{format_datetime, DateFormat},
    },
    view::component::form::TextField,
};

#[component]
pub fn ShowsPage(shows: Vec<ShowListing>) -> Element {
    rsx!(div {
        class: "shows",
        for show in shows {
            {
                let when = format_datetime(show.start_time, DateFormat::Full);

                rsx! {
                    div {
                        class: "card card-side bg-base-200 show-card",
                        if let Some(src) = show.artist_image_link.clone() {
                            figure {
                                img { src: "{src}", alt: "{show.artist_name}" }
                            }
                        }
                        div {
                            class: "card-body",
                            p { "{when}" }
                            h5 {
                                a { href: "/artists/{show.artist_id}", "{show.artist_name}" }
                            }
                            p { "playing at" }
                            h5 {
                                a { href: "/venues/{show.venue_id}", "{show.venue_name}" }
                            }
                        }
                    }
                }
            }
        }
    })
}

#[component]
pub fn ShowFormPage(form: ShowForm, errors: FieldErrors) -> Element {
    let error = |field: &str| errors.get(field).map(str::to_string);

    rsx!(form {
        class: "entity-form",
        method: "post",
        action: "/shows/create",
        h3 { "List a new show" }
        TextField {
            label: "Artist ID",
            name: "artist_id",
            value: form.artist_id.clone(),
            error: error("artist_id"),
        }
        TextField {
            label: "Venue ID",
            name: "venue_id",
            value: form.venue_id.clone(),
            error: error("venue_id"),
        }
        TextField {
            label: "Start Time (YYYY-MM-DD HH:MM)",
            name: "start_time",
            value: form.start_time.clone(),
            error: error("start_time"),
        }
        button { r#type: "submit", class: "btn btn-primary", "Create Show" }
    })
}
