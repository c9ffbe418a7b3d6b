//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for generating distinct test names.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a venue and an artist with default values, ready to be linked by a show.
///
/// # Returns
/// - `Ok((venue, artist))` - The created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_show_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::venue::Model, entity::artist::Model), DbErr> {
    let venue = crate::factory::venue::create_venue(db).await?;
    let artist = crate::factory::artist::create_artist(db).await?;

    Ok((venue, artist))
}
