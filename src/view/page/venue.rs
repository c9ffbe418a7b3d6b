use dioxus::prelude::*;

use crate::{
    model::{choice, form::FieldErrors, venue::VenueForm},
    server::model::venue::{VenueArea, VenueDetail},
    view::component::{
        form::{CheckboxField, MultiSelectField, SelectField, TextField},
        SearchBox, ShowCard,
    },
};

#[component]
pub fn VenuesPage(areas: Vec<VenueArea>) -> Element {
    rsx!(div {
        SearchBox {
            action: "/venues/search",
            placeholder: "Find a venue",
            value: "",
        }
        for area in areas {
            div {
                class: "area",
                h3 { "{area.city}, {area.state}" }
                ul {
                    class: "items",
                    for venue in area.venues {
                        li {
                            a {
                                href: "/venues/{venue.id}",
                                div {
                                    h5 { "{venue.name}" }
                                    span { class: "badge", "{venue.num_upcoming_shows} upcoming" }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

#[component]
pub fn VenueDetailPage(detail: VenueDetail) -> Element {
    let venue = detail.venue.clone();
    let past_count = detail.past_shows_count();
    let upcoming_count = detail.upcoming_shows_count();

    rsx!(div {
        class: "detail",
        div {
            class: "detail-info",
            h1 { "{venue.name}" }
            p { class: "subtitle", "ID: {venue.id}" }
            div {
                class: "genres",
                for genre in venue.genres.iter() {
                    span { class: "badge badge-outline", "{genre}" }
                }
            }
            p { "{venue.address}" }
            p { "{venue.city}, {venue.state}" }
            p { {venue.phone.clone().unwrap_or_else(|| "No Phone".to_string())} }
            if let Some(website) = venue.website.clone() {
                p { a { href: "{website}", "{website}" } }
            }
            if let Some(facebook) = venue.facebook_link.clone() {
                p { a { href: "{facebook}", "{facebook}" } }
            }
            if venue.seeking_talent {
                div {
                    class: "seeking",
                    p { "Currently seeking talent" }
                    if let Some(description) = venue.seeking_description.clone() {
                        p { "{description}" }
                    }
                }
            } else {
                p { class: "not-seeking", "Not currently seeking talent" }
            }
            div {
                class: "actions",
                a { class: "btn btn-outline", href: "/venues/{venue.id}/edit", "Edit" }
                a { class: "btn btn-error btn-outline", href: "/venues/{venue.id}/delete", "Delete" }
            }
        }
        if let Some(src) = venue.image_link.clone() {
            div {
                class: "detail-image",
                img { src: "{src}", alt: "Venue Image" }
            }
        }
    }
    section {
        h2 { "{upcoming_count} Upcoming Shows" }
        div {
            class: "shows",
            for show in detail.upcoming_shows {
                ShowCard {
                    href: "/artists/{show.artist_id}",
                    name: show.artist_name,
                    image_link: show.artist_image_link,
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
                    href: "/artists/{show.artist_id}",
                    name: show.artist_name,
                    image_link: show.artist_image_link,
                    start_time: show.start_time,
                }
            }
        }
    })
}

/// Create and edit form for a venue, posting back to `action`.
#[component]
pub fn VenueFormPage(
    heading: String,
    action: String,
    form: VenueForm,
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
        TextField { label: "Address", name: "address", value: form.address.clone(), error: error("address") }
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
        CheckboxField { label: "Looking for Talent", name: "seeking_talent", checked: form.seeking_talent }
        TextField {
            label: "Seeking Description",
            name: "seeking_description",
            value: form.seeking_description.clone().unwrap_or_default(),
            error: error("seeking_description"),
        }
        button { r#type: "submit", class: "btn btn-primary", "{heading}" }
    })
}
