//! SeaORM entities for the Fyyur schema.
//!
//! `venue` and `artist` are joined through `show`, which carries the scheduled
//! start time of a performance.

pub mod artist;
pub mod genres;
pub mod prelude;
pub mod show;
pub mod venue;
