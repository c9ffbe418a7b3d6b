//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by controllers. It wraps the
//! domain-specific errors and renders the matching HTML error page through its
//! `IntoResponse` implementation.

pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    server::error::{config::ConfigError, internal::InternalError},
    view::render,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unexpected internal failure such as a value that could not be parsed.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as flash messages cannot be stored.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Failure to bind or serve the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found. Renders the 404 page.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Renders the 400 page with the message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with a custom message, logged but not shown to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Maps each error variant to an HTML error page.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For every other variant, with the error logged
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, render::not_found_page()).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, render::bad_request_page(msg)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into the 500 page.
///
/// The error is logged in full while the client only sees the generic page.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            render::server_error_page(),
        )
            .into_response()
    }
}
