//! Server-rendered HTML views.
//!
//! Pages are dioxus components rendered to strings with `dioxus-ssr`. Nothing is
//! hydrated on the client; every interaction is a plain link or form submission.

pub mod component;
pub mod page;
pub mod render;

pub const SITE_NAME: &str = "Fyyur";
