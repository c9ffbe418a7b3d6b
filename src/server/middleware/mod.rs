//! Request middleware and session helpers.

pub mod session;
