//! Database repository layer for venues, artists and shows.
//!
//! Each repository borrows the connection pool and performs the CRUD queries for one
//! entity. Repositories take parameter models and return domain models so the service
//! layer never touches SeaORM entities directly, except where a show is returned with
//! its related rows for the service to flatten.

pub mod artist;
pub mod show;
pub mod venue;

#[cfg(test)]
mod test;
