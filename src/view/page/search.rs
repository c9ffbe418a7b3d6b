use dioxus::prelude::*;

use crate::{
    server::model::{artist::ArtistListItem, search::SearchResults, venue::VenueListItem},
    view::component::SearchBox,
};

/// One matching record in a search result list.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub href: String,
    pub name: String,
    pub num_upcoming_shows: u64,
}

impl From<VenueListItem> for SearchHit {
    fn from(item: VenueListItem) -> Self {
        Self {
            href: format!("/venues/{}", item.id),
            name: item.name,
            num_upcoming_shows: item.num_upcoming_shows,
        }
    }
}

impl From<ArtistListItem> for SearchHit {
    fn from(item: ArtistListItem) -> Self {
        Self {
            href: format!("/artists/{}", item.id),
            name: item.name,
            num_upcoming_shows: item.num_upcoming_shows,
        }
    }
}

/// Converts service results into the hits rendered by `SearchPage`.
pub fn into_hits<T: Into<SearchHit>>(results: SearchResults<T>) -> SearchResults<SearchHit> {
    SearchResults {
        count: results.count,
        data: results.data.into_iter().map(Into::into).collect(),
    }
}

#[component]
pub fn SearchPage(
    action: String,
    placeholder: String,
    search_term: String,
    results: SearchResults<SearchHit>,
) -> Element {
    rsx!(div {
        SearchBox { action, placeholder, value: search_term.clone() }
        h3 { "Number of search results for \"{search_term}\": {results.count}" }
        ul {
            class: "items",
            for hit in results.data {
                li {
                    a {
                        href: "{hit.href}",
                        div {
                            h5 { "{hit.name}" }
                            span { class: "badge", "{hit.num_upcoming_shows} upcoming" }
                        }
                    }
                }
            }
        }
    })
}
