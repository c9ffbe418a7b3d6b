//! HTTP request handlers.
//!
//! Controllers parse path ids and form bodies, call the services and render pages.
//! Mutating handlers queue a flash message and redirect (Post/Redirect/Get); invalid
//! submissions re-render their form with status 422.

pub mod artist;
pub mod error;
pub mod home;
pub mod show;
pub mod venue;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Response for a form submission that failed validation: the re-rendered form with 422.
pub(crate) fn invalid_form(page: Html<String>) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
}
