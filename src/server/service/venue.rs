use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{show::ShowRepository, venue::VenueRepository},
    error::AppError,
    model::{
        search::SearchResults,
        show::split_past_upcoming,
        venue::{
            CreateVenueParams, UpdateVenueParams, Venue, VenueArea, VenueDetail, VenueListItem,
            VenueShow,
        },
    },
};

pub struct VenueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every venue grouped by `(city, state)`, each with its upcoming show count.
    pub async fn get_all_by_area(&self) -> Result<Vec<VenueArea>, AppError> {
        let venues = VenueRepository::new(self.db).get_all().await?;
        let counts = ShowRepository::new(self.db)
            .count_upcoming_by_venue(Utc::now())
            .await?;

        Ok(group_by_area(venues, &counts))
    }

    /// Searches venues by case-insensitive substring of their name.
    pub async fn search(&self, term: &str) -> Result<SearchResults<VenueListItem>, AppError> {
        let venues = VenueRepository::new(self.db).search_by_name(term).await?;
        let counts = ShowRepository::new(self.db)
            .count_upcoming_by_venue(Utc::now())
            .await?;

        Ok(SearchResults::new(
            venues
                .into_iter()
                .map(|venue| list_item(venue, &counts))
                .collect(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Venue>, AppError> {
        Ok(VenueRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets a venue with its shows split into past and upcoming.
    ///
    /// # Returns
    /// - `Ok(Some(VenueDetail))` - Venue found
    /// - `Ok(None)` - No venue with the given id
    /// - `Err(AppError::InternalErr)` - A show references a missing artist
    pub async fn get_detail(&self, id: i32) -> Result<Option<VenueDetail>, AppError> {
        let Some(venue) = VenueRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let shows = ShowRepository::new(self.db)
            .get_by_venue_with_artist(id)
            .await?
            .into_iter()
            .map(|(show, artist)| VenueShow::from_entities(show, artist))
            .collect::<Result<Vec<_>, _>>()?;

        let (past_shows, upcoming_shows) =
            split_past_upcoming(shows, Utc::now(), |show| show.start_time);

        Ok(Some(VenueDetail {
            venue,
            past_shows,
            upcoming_shows,
        }))
    }

    /// Gets the most recently listed venues for the home page.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<Venue>, AppError> {
        Ok(VenueRepository::new(self.db).get_recent(limit).await?)
    }

    pub async fn create(&self, params: CreateVenueParams) -> Result<Venue, AppError> {
        Ok(VenueRepository::new(self.db).create(params).await?)
    }

    /// Updates a venue, `None` when it does not exist.
    pub async fn update(&self, params: UpdateVenueParams) -> Result<Option<Venue>, AppError> {
        Ok(VenueRepository::new(self.db).update(params).await?)
    }

    /// Deletes a venue and its shows, returning the deleted venue.
    pub async fn delete(&self, id: i32) -> Result<Option<Venue>, AppError> {
        Ok(VenueRepository::new(self.db).delete(id).await?)
    }
}

fn list_item(venue: Venue, counts: &HashMap<i32, u64>) -> VenueListItem {
    VenueListItem {
        num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
        id: venue.id,
        name: venue.name,
    }
}

/// Groups venues into areas.
///
/// Venues must already be sorted so that each `(city, state)` pair is contiguous.
fn group_by_area(venues: Vec<Venue>, counts: &HashMap<i32, u64>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();

    for venue in venues {
        let same_area = areas
            .last()
            .is_some_and(|area| area.city == venue.city && area.state == venue.state);

        if !same_area {
            areas.push(VenueArea {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: Vec::new(),
            });
        }

        if let Some(area) = areas.last_mut() {
            area.venues.push(list_item(venue, counts));
        }
    }

    areas
}
