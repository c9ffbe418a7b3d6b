use dioxus::prelude::*;

use crate::{
    model::{artist::ArtistForm, choice, form::FieldErrors},
    server::model::artist::{Artist, ArtistDetail},
    view::component::{
        form::{CheckboxField, MultiSelectField, SelectField, TextField},
        SearchBox, ShowCard,
    },
};

#[component]
pub fn ArtistsPage(artists: Vec<Artist>) -> Element {
    rsx!(div {
        SearchBox {
            action: "/artists/search",
            placeholder: "Find an artist",
            value: "",
        }
        ul {
            class: "items",
            for artist in artists {
                li {
                    a {
                        href: "/artists/{artist.id}",
                        div { h5 { "{artist.name}" } }
                    }
                }
            }
        }
    })
}

#[component]
pub fn ArtistDetailPage(detail: ArtistDetail) -> Element {
    let artist = detail.artist.clone();
    let past_count = detail.past_shows_count();
    let upcoming_count = detail.upcoming_shows_count();

    rsx!(div {
        class: "detail",
        div {
            class: "detail-info",
            h1 { "{artist.name}" }
            p { class: "subtitle", "ID: {artist.id}" }
            div {
                class: "genres",
                for genre in artist.genres.iter() {
                    span { class: "badge badge-outline", "{genre}" }
                }
            }
            p { "{artist.city}, {artist.state}" }
            p { {artist.phone.clone().unwrap_or_else(|| "No Phone".to_string())} }
            if let Some(website) = artist.website.clone() {
                p { a { href: "{website}", "{website}" } }
            }
            if let Some(facebook) = artist.facebook_link.clone() {
                p { a { href: "{facebook}", "{facebook}" } }
            }
            if artist.seeking_venue {
                div {
                    class: "seeking",
                    p { "Currently seeking performance venues" }
                    if let Some(description) = artist.seeking_description.clone() {
                        p { "{description}" }
                    }
                }
            } else {
                p { class: "not-seeking", "Not currently seeking performance venues" }
            }
            div {
                class: "actions",
                a { class: "btn btn-outline", href: "/artists/{artist.id}/edit", "Edit" }
                a { class: "btn btn-error btn-outline", href: "/artists/{artist.id}/delete", "Delete" }
            }
        }
        if let Some(src) = artist.image_link.clone() {
            div {
                class: "detail-image",
                img { src: "{src}", alt: "Artist Image" }
            }
        }
    }
    section {
        h2 { "{upcoming_count} Upcoming Shows" }
        div {
            class: "shows",
            for show in detail.upcoming_shows {
                ShowCard {
                    href: "/venues/{show.venue_id}",
                    name: show.venue_name,
                    image_link: show.venue_image_link,
                    start_time: show.start_time,
                }
            }
        }
    }
    section {
        h2 { "{past_count} Past Shows" }
        div {
            class: "shows",
            for show in detail.past_shows {
                ShowCard {
                    href: "/venues/{show.venue_id}",
                    name: show.venue_name,
                    image_link: show.venue_image_link,
                    start_time: show.start_time,
                }
            }
        }
    })
}

/// Create and edit form for an artist, posting back to `action`.
#[component]
pub fn ArtistFormPage(
    heading: String,
    action: String,
    form: ArtistForm,
    errors: FieldErrors,
) -> Element {
    let states: Vec<String> = choice::STATES.iter().map(|s| s.to_string()).collect();
    let genres: Vec<String> = choice::GENRES.iter().map(|g| g.to_string()).collect();
    let error = |field: &str| errors.get(field).map(str::to_string);

    rsx!(form {
        class: "entity-form",
        method: "post",
        action: "{action}",
        h3 { "{heading}" }
        TextField { label: "Name", name: "name", value: form.name.clone(), error: error("name") }
        TextField { label: "City", name: "city", value: form.city.clone(), error: error("city") }
        SelectField {
            label: "State",
            name: "state",
            options: states,
            selected: form.state.clone(),
            error: error("state"),
        }
        TextField {
            label: "Phone",
            name: "phone",
            value: form.phone.clone().unwrap_or_default(),
            error: error("phone"),
        }
        MultiSelectField {
            label: "Genres",
            name: "genres",
            options: genres,
            selected: form.genres.clone(),
            error: error("genres"),
        }
        TextField {
            label: "Facebook Link",
            name: "facebook_link",
            value: form.facebook_link.clone().unwrap_or_default(),
            error: error("facebook_link"),
        }
        TextField {
            label: "Image Link",
            name: "image_link",
            value: form.image_link.clone().unwrap_or_default(),
            error: error("image_link"),
        }
        TextField {
            label: "Website Link",
            name: "website_link",
            value: form.website_link.clone().unwrap_or_default(),
            error: error("website_link"),
        }
        CheckboxField { label: "Looking for Venues", name: "seeking_venue", checked: form.seeking_venue }
        TextField {
            label: "Seeking Description",
            name: "seeking_description",
            value: form.seeking_description.clone().unwrap_or_default(),
            error: error("seeking_description"),
        }
        button { r#type: "submit", class: "btn btn-primary", "{heading}" }
    })
}
