//! Domain models for venue operations.

use chrono::{DateTime, Utc};

use crate::{model::venue::VenueForm, server::error::internal::InternalError};

/// A place that hosts shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    /// Converts an entity model to a venue domain model at the repository boundary.
    pub fn from_entity(entity: entity::venue::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            state: entity.state,
            address: entity.address,
            phone: entity.phone,
            website: entity.website,
            facebook_link: entity.facebook_link,
            image_link: entity.image_link,
            genres: entity.genres.into(),
            seeking_talent: entity.seeking_talent,
            seeking_description: entity.seeking_description,
        }
    }

    /// Prefills the edit form with the stored values.
    pub fn into_form(self) -> VenueForm {
        VenueForm {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            image_link: self.image_link,
            genres: self.genres,
            facebook_link: self.facebook_link,
            website_link: self.website,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
        }
    }
}

/// Venue row in listings and search results.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueListItem {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u64,
}

/// Venues sharing a city and state.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueListItem>,
}

/// A show as seen from the venue page.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl VenueShow {
    /// Builds the row from a show and its artist as loaded by `find_also_related`.
    ///
    /// # Returns
    /// - `Ok(VenueShow)` - Artist was loaded
    /// - `Err(InternalError::DanglingShow)` - The show's artist row is missing
    pub fn from_entities(
        show: entity::show::Model,
        artist: Option<entity::artist::Model>,
    ) -> Result<Self, InternalError> {
        let artist = artist.ok_or(InternalError::DanglingShow {
            show_id: show.id,
            relation: "artist",
        })?;

        Ok(Self {
            artist_id: artist.id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: show.start_time,
        })
    }
}

/// Venue with its shows split around the current time.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
}

impl VenueDetail {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

/// Parameters for creating a new venue.
#[derive(Debug, Clone)]
pub struct CreateVenueParams {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl CreateVenueParams {
    /// Converts a validated form into create parameters.
    pub fn from_form(form: VenueForm) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            address: form.address,
            phone: form.phone,
            website: form.website_link,
            facebook_link: form.facebook_link,
            image_link: form.image_link,
            genres: form.genres,
            seeking_talent: form.seeking_talent,
            seeking_description: form.seeking_description,
        }
    }
}

/// Parameters for replacing every editable field of an existing venue.
#[derive(Debug, Clone)]
pub struct UpdateVenueParams {
    /// ID of the venue to update.
    pub id: i32,
    pub fields: CreateVenueParams,
}

impl UpdateVenueParams {
    pub fn from_form(id: i32, form: VenueForm) -> Self {
        Self {
            id,
            fields: CreateVenueParams::from_form(form),
        }
    }
}
