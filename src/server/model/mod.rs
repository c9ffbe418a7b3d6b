//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and handed
//! to the views by the controllers. Parameter types carry validated form input into the
//! data layer.

pub mod artist;
pub mod search;
pub mod show;
pub mod venue;
