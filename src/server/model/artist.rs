//! Domain models for artist operations.

use chrono::{DateTime, Utc};

use crate::{model::artist::ArtistForm, server::error::internal::InternalError};

/// A performer that plays shows at venues.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    /// Converts an entity model to an artist domain model at the repository boundary.
    pub fn from_entity(entity: entity::artist::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            state: entity.state,
            phone: entity.phone,
            website: entity.website,
            facebook_link: entity.facebook_link,
            image_link: entity.image_link,
            genres: entity.genres.into(),
            seeking_venue: entity.seeking_venue,
            seeking_description: entity.seeking_description,
        }
    }

    /// Prefills the edit form with the stored values.
    pub fn into_form(self) -> ArtistForm {
        ArtistForm {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            image_link: self.image_link,
            genres: self.genres,
            facebook_link: self.facebook_link,
            website_link: self.website,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
        }
    }
}

/// Artist row in listings and search results.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistListItem {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u64,
}

/// A show as seen from the artist page.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl ArtistShow {
    /// Builds the row from a show and its venue as loaded by `find_also_related`.
    pub fn from_entities(
        show: entity::show::Model,
        venue: Option<entity::venue::Model>,
    ) -> Result<Self, InternalError> {
        let venue = venue.ok_or(InternalError::DanglingShow {
            show_id: show.id,
            relation: "venue",
        })?;

        Ok(Self {
            venue_id: venue.id,
            venue_name: venue.name,
            venue_image_link: venue.image_link,
            start_time: show.start_time,
        })
    }
}

/// Artist with their shows split around the current time.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
}

impl ArtistDetail {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

/// Parameters for creating a new artist.
#[derive(Debug, Clone)]
pub struct CreateArtistParams {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl CreateArtistParams {
    /// Converts a validated form into create parameters.
    pub fn from_form(form: ArtistForm) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            phone: form.phone,
            website: form.website_link,
            facebook_link: form.facebook_link,
            image_link: form.image_link,
            genres: form.genres,
            seeking_venue: form.seeking_venue,
            seeking_description: form.seeking_description,
        }
    }
}

/// Parameters for replacing every editable field of an existing artist.
#[derive(Debug, Clone)]
pub struct UpdateArtistParams {
    /// ID of the artist to update.
    pub id: i32,
    pub fields: CreateArtistParams,
}

impl UpdateArtistParams {
    pub fn from_form(id: i32, form: ArtistForm) -> Self {
        Self {
            id,
            fields: CreateArtistParams::from_form(form),
        }
    }
}
