//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They combine repository
//! calls into the views a page needs: venues grouped by area, past and upcoming show
//! splits, search results with counts, and the existence checks that guard show
//! creation.

pub mod artist;
pub mod show;
pub mod venue;
