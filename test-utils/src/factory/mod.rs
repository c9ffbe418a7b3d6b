//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let venue = factory::create_venue(&db).await?;
//! let artist = factory::artist::ArtistFactory::new(&db)
//!     .name("Guns N Petals")
//!     .build()
//!     .await?;
//! let show = factory::create_show(&db, artist.id, venue.id).await?;
//! ```

pub mod artist;
pub mod helpers;
pub mod show;
pub mod venue;

pub use artist::create_artist;
pub use show::create_show;
pub use venue::create_venue;
