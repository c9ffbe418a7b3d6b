use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::show::{CreateShowParams, Show, ShowWithRelations};

pub struct ShowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShowRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new show row.
    ///
    /// The artist and venue must exist; the foreign keys reject the insert otherwise.
    pub async fn create(&self, params: CreateShowParams) -> Result<Show, DbErr> {
        let show = entity::show::ActiveModel {
            artist_id: ActiveValue::Set(params.artist_id),
            venue_id: ActiveValue::Set(params.venue_id),
            start_time: ActiveValue::Set(params.start_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Show::from_entity(show))
    }

    /// Gets every show with its venue and artist, ordered by start time.
    ///
    /// Venues are joined in the same query, artists are fetched in one batch afterwards.
    pub async fn get_all_with_relations(&self) -> Result<Vec<ShowWithRelations>, DbErr> {
        let shows = entity::prelude::Show::find()
            .find_also_related(entity::prelude::Venue)
            .order_by_asc(entity::show::Column::StartTime)
            .order_by_asc(entity::show::Column::Id)
            .all(self.db)
            .await?;

        let artist_ids: Vec<i32> = shows.iter().map(|(show, _)| show.artist_id).collect();
        let artists: HashMap<i32, entity::artist::Model> = if !artist_ids.is_empty() {
            entity::prelude::Artist::find()
                .filter(entity::artist::Column::Id.is_in(artist_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|a| (a.id, a))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(shows
            .into_iter()
            .map(|(show, venue)| {
                let artist = artists.get(&show.artist_id).cloned();
                ShowWithRelations {
                    show,
                    venue,
                    artist,
                }
            })
            .collect())
    }

    /// Gets the shows played at a venue with their artists, ordered by start time.
    pub async fn get_by_venue_with_artist(
        &self,
        venue_id: i32,
    ) -> Result<Vec<(entity::show::Model, Option<entity::artist::Model>)>, DbErr> {
        entity::prelude::Show::find()
            .filter(entity::show::Column::VenueId.eq(venue_id))
            .find_also_related(entity::prelude::Artist)
            .order_by_asc(entity::show::Column::StartTime)
            .order_by_asc(entity::show::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the shows played by an artist with their venues, ordered by start time.
    pub async fn get_by_artist_with_venue(
        &self,
        artist_id: i32,
    ) -> Result<Vec<(entity::show::Model, Option<entity::venue::Model>)>, DbErr> {
        entity::prelude::Show::find()
            .filter(entity::show::Column::ArtistId.eq(artist_id))
            .find_also_related(entity::prelude::Venue)
            .order_by_asc(entity::show::Column::StartTime)
            .order_by_asc(entity::show::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts shows starting after `now`, keyed by venue id.
    ///
    /// Venues without upcoming shows are absent from the map.
    pub async fn count_upcoming_by_venue(
        &self,
        now: DateTime<Utc>,
    ) -> Result<HashMap<i32, u64>, DbErr> {
        self.count_upcoming_grouped(entity::show::Column::VenueId, now)
            .await
    }

    /// Counts shows starting after `now`, keyed by artist id.
    pub async fn count_upcoming_by_artist(
        &self,
        now: DateTime<Utc>,
    ) -> Result<HashMap<i32, u64>, DbErr> {
        self.count_upcoming_grouped(entity::show::Column::ArtistId, now)
            .await
    }

    async fn count_upcoming_grouped(
        &self,
        key: entity::show::Column,
        now: DateTime<Utc>,
    ) -> Result<HashMap<i32, u64>, DbErr> {
        let counts = entity::prelude::Show::find()
            .select_only()
            .column(key)
            .column_as(entity::show::Column::Id.count(), "count")
            .filter(entity::show::Column::StartTime.gt(now))
            .group_by(key)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(id, count)| (id, count.max(0) as u64))
            .collect())
    }
}
