//! Renders page components into complete HTML documents.

use axum::response::Html;
use dioxus::prelude::*;

use crate::view::{
    component::Document,
    page::error::{BadRequestPage, NotFoundPage, ServerErrorPage},
};

/// Wraps `content` in the site document and renders it to a string.
///
/// Text and attribute values are escaped by the renderer.
pub fn render_page(title: &str, flashes: Vec<String>, content: Element) -> Html<String> {
    let title = title.to_string();
    let body = dioxus_ssr::render_element(rsx! {
        Document { title, flashes, {content} }
    });

    Html(format!("<!DOCTYPE html>{}", body))
}

pub fn not_found_page() -> Html<String> {
    render_page("Not Found", Vec::new(), rsx! { NotFoundPage {} })
}

pub fn bad_request_page(message: String) -> Html<String> {
    render_page("Bad Request", Vec::new(), rsx! { BadRequestPage { message } })
}

pub fn server_error_page() -> Html<String> {
    render_page("Server Error", Vec::new(), rsx! { ServerErrorPage {} })
}
