use dioxus::prelude::*;

use crate::{
    server::model::{artist::Artist, venue::Venue},
    view::SITE_NAME,
};

#[component]
pub fn HomePage(recent_venues: Vec<Venue>, recent_artists: Vec<Artist>) -> Element {
    rsx!(div {
        class: "hero",
        div {
            class: "hero-content text-center",
            div {
                h1 { class: "text-4xl", {SITE_NAME} }
                p { "Discover and book live music." }
                div {
                    class: "actions",
                    a { class: "btn btn-primary", href: "/venues/create", "Post a venue" }
                    a { class: "btn btn-primary", href: "/artists/create", "Post an artist" }
                    a { class: "btn btn-primary", href: "/shows/create", "Post a show" }
                }
            }
        }
    }
    div {
        class: "columns",
        section {
            h2 { "Recently listed venues" }
            ul {
                for venue in recent_venues {
                    li {
                        a { href: "/venues/{venue.id}", "{venue.name}" }
                        " · {venue.city}, {venue.state}"
                    }
                }
            }
        }
        section {
            h2 { "Recently listed artists" }
            ul {
                for artist in recent_artists {
                    li {
                        a { href: "/artists/{artist.id}", "{artist.name}" }
                        " · {artist.city}, {artist.state}"
                    }
                }
            }
        }
    })
}
