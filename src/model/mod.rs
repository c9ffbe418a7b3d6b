//! Form definitions shared by controllers and views.
//!
//! Each form is parsed from an `application/x-www-form-urlencoded` body and knows how
//! to validate itself. Choice lists for selects live in `choice`.

pub mod artist;
pub mod choice;
pub mod form;
pub mod search;
pub mod show;
pub mod venue;
