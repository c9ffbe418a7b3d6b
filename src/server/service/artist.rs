use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{artist::ArtistRepository, show::ShowRepository},
    error::AppError,
    model::{
        artist::{
            Artist, ArtistDetail, ArtistListItem, ArtistShow, CreateArtistParams,
            UpdateArtistParams,
        },
        search::SearchResults,
        show::split_past_upcoming,
    },
};

pub struct ArtistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every artist ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Artist>, AppError> {
        Ok(ArtistRepository::new(self.db).get_all().await?)
    }

    /// Searches artists by case-insensitive substring of their name.
    pub async fn search(&self, term: &str) -> Result<SearchResults<ArtistListItem>, AppError> {
        let artists = ArtistRepository::new(self.db).search_by_name(term).await?;
        let counts = ShowRepository::new(self.db)
            .count_upcoming_by_artist(Utc::now())
            .await?;

        Ok(SearchResults::new(
            artists
                .into_iter()
                .map(|artist| ArtistListItem {
                    num_upcoming_shows: counts.get(&artist.id).copied().unwrap_or(0),
                    id: artist.id,
                    name: artist.name,
                })
                .collect(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Artist>, AppError> {
        Ok(ArtistRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets an artist with their shows split into past and upcoming.
    pub async fn get_detail(&self, id: i32) -> Result<Option<ArtistDetail>, AppError> {
        let Some(artist) = ArtistRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let shows = ShowRepository::new(self.db)
            .get_by_artist_with_venue(id)
            .await?
            .into_iter()
            .map(|(show, venue)| ArtistShow::from_entities(show, venue))
            .collect::<Result<Vec<_>, _>>()?;

        let (past_shows, upcoming_shows) =
            split_past_upcoming(shows, Utc::now(), |show| show.start_time);

        Ok(Some(ArtistDetail {
            artist,
            past_shows,
            upcoming_shows,
        }))
    }

    /// Gets the most recently listed artists for the home page.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<Artist>, AppError> {
        Ok(ArtistRepository::new(self.db).get_recent(limit).await?)
    }

    pub async fn create(&self, params: CreateArtistParams) -> Result<Artist, AppError> {
        Ok(ArtistRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, params: UpdateArtistParams) -> Result<Option<Artist>, AppError> {
        Ok(ArtistRepository::new(self.db).update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Artist>, AppError> {
        Ok(ArtistRepository::new(self.db).delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::{
        builder::TestBuilder,
        factory::{self, artist::ArtistFactory, show::ShowFactory},
    };

    #[tokio::test]
    async fn splits_detail_shows_around_now() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_fyyur_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (venue, artist) = factory::helpers::create_show_dependencies(db).await?;
        let now = Utc::now();
        ShowFactory::new(db, artist.id, venue.id)
            .start_time(now - Duration::days(1))
            .build()
            .await?;
        ShowFactory::new(db, artist.id, venue.id)
            .start_time(now + Duration::days(1))
            .build()
            .await?;
        ShowFactory::new(db, artist.id, venue.id)
            .start_time(now + Duration::days(2))
            .build()
            .await?;

        let detail = ArtistService::new(db)
            .get_detail(artist.id)
            .await?
            .expect("artist exists");

        assert_eq!(detail.past_shows_count(), 1);
        assert_eq!(detail.upcoming_shows_count(), 2);
        assert_eq!(detail.past_shows[0].venue_name, venue.name);

        Ok(())
    }

    #[tokio::test]
    async fn search_counts_upcoming_shows() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_fyyur_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let venue = factory::create_venue(db).await?;
        let sax = ArtistFactory::new(db)
            .name("The Wild Sax Band")
            .build()
            .await?;
        ArtistFactory::new(db).name("Guns N Petals").build().await?;
        factory::create_show(db, sax.id, venue.id).await?;
        factory::create_show(db, sax.id, venue.id).await?;

        let results = ArtistService::new(db).search("sax").await?;

        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].name, "The Wild Sax Band");
        assert_eq!(results.data[0].num_upcoming_shows, 2);

        Ok(())
    }
}
