use sea_orm::DatabaseConnection;

use crate::server::{
    data::{artist::ArtistRepository, show::ShowRepository, venue::VenueRepository},
    error::AppError,
    model::show::{CreateShowParams, Show, ShowListing},
};

pub struct ShowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every show with venue and artist names, ordered by start time.
    pub async fn get_all(&self) -> Result<Vec<ShowListing>, AppError> {
        let shows = ShowRepository::new(self.db).get_all_with_relations().await?;

        Ok(shows
            .into_iter()
            .map(|show| show.into_listing())
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Lists a new show.
    ///
    /// # Returns
    /// - `Ok(Show)` - Created show
    /// - `Err(AppError::BadRequest)` - The artist or venue does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateShowParams) -> Result<Show, AppError> {
        if ArtistRepository::new(self.db)
            .get_by_id(params.artist_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Artist {} does not exist",
                params.artist_id
            )));
        }

        if VenueRepository::new(self.db)
            .get_by_id(params.venue_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Venue {} does not exist",
                params.venue_id
            )));
        }

        Ok(ShowRepository::new(self.db).create(params).await?)
    }
}
