//! Show factory for creating test show rows.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shows linking an artist to a venue.
pub struct ShowFactory<'a> {
    db: &'a DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
    start_time: DateTime<Utc>,
}

impl<'a> ShowFactory<'a> {
    /// Creates a new ShowFactory starting one day from now.
    pub fn new(db: &'a DatabaseConnection, artist_id: i32, venue_id: i32) -> Self {
        Self {
            db,
            artist_id,
            venue_id,
            start_time: Utc::now() + Duration::days(1),
        }
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Builds and inserts the show row.
    pub async fn build(self) -> Result<entity::show::Model, DbErr> {
        entity::show::ActiveModel {
            id: ActiveValue::NotSet,
            artist_id: ActiveValue::Set(self.artist_id),
            venue_id: ActiveValue::Set(self.venue_id),
            start_time: ActiveValue::Set(self.start_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an upcoming show for the given artist and venue.
pub async fn create_show(
    db: &DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
) -> Result<entity::show::Model, DbErr> {
    ShowFactory::new(db, artist_id, venue_id).build().await
}
