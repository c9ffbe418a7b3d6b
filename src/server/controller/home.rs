use axum::{extract::State, response::Html};
use dioxus::prelude::*;
use tower_sessions::Session;

use crate::{
    server::{
        error::AppError,
        middleware::session::FlashSession,
        service::{artist::ArtistService, venue::VenueService},
        state::AppState,
    },
    view::{page::home::HomePage, render::render_page},
};

/// How many recently listed venues and artists the home page shows.
const RECENT_LIMIT: u64 = 10;

pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let flashes = FlashSession::new(&session).take().await?;

    let recent_venues = VenueService::new(&state.db).get_recent(RECENT_LIMIT).await?;
    let recent_artists = ArtistService::new(&state.db)
        .get_recent(RECENT_LIMIT)
        .await?;

    Ok(render_page(
        "Home",
        flashes,
        rsx! { HomePage { recent_venues, recent_artists } },
    ))
}
