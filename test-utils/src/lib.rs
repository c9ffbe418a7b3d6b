//! Fyyur Test Utils
//!
//! Provides shared testing utilities for the Fyyur application. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases and factories for
//! inserting venues, artists and shows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for venue, artist and show rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_venue() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_fyyur_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let venue = factory::create_venue(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
