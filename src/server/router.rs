use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    controller::{artist, error, home, show, venue},
    state::AppState,
};

/// Directory served under `/static`.
const STATIC_DIR: &str = "static";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/venues", get(venue::list_venues))
        .route(
            "/venues/search",
            get(venue::search_venues_query).post(venue::search_venues),
        )
        .route(
            "/venues/create",
            get(venue::create_venue_form).post(venue::create_venue),
        )
        .route("/venues/{id}", get(venue::show_venue))
        .route(
            "/venues/{id}/edit",
            get(venue::edit_venue_form).post(venue::edit_venue),
        )
        .route(
            "/venues/{id}/delete",
            get(venue::delete_venue).delete(venue::delete_venue),
        )
        .route("/artists", get(artist::list_artists))
        .route(
            "/artists/search",
            get(artist::search_artists_query).post(artist::search_artists),
        )
        .route(
            "/artists/create",
            get(artist::create_artist_form).post(artist::create_artist),
        )
        .route("/artists/{id}", get(artist::show_artist))
        .route(
            "/artists/{id}/edit",
            get(artist::edit_artist_form).post(artist::edit_artist),
        )
        .route(
            "/artists/{id}/delete",
            get(artist::delete_artist).delete(artist::delete_artist),
        )
        .route("/shows", get(show::list_shows))
        .route(
            "/shows/create",
            get(show::create_show_form).post(show::create_show),
        )
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(error::not_found)
}

/// Builds the complete application: routes, state, sessions and request tracing.
pub fn app(state: AppState, session: SessionManagerLayer<SqliteStore>) -> Router {
    router()
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http())
}
