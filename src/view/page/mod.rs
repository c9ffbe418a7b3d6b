pub mod artist;
pub mod error;
pub mod home;
pub mod search;
pub mod show;
pub mod venue;
