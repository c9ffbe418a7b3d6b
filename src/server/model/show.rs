//! Domain models for show operations.

use chrono::{DateTime, Utc};

use crate::{
    model::{form::FieldErrors, show::ShowForm},
    server::{
        error::internal::InternalError,
        util::parse::{parse_form_id, parse_start_time},
    },
};

/// A scheduled performance of an artist at a venue.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

impl Show {
    pub fn from_entity(entity: entity::show::Model) -> Self {
        Self {
            id: entity.id,
            artist_id: entity.artist_id,
            venue_id: entity.venue_id,
            start_time: entity.start_time,
        }
    }
}

/// Row of the `/shows` listing, enriched with venue and artist details.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show with both sides of the relation as loaded from the database.
#[derive(Debug, Clone)]
pub struct ShowWithRelations {
    pub show: entity::show::Model,
    pub venue: Option<entity::venue::Model>,
    pub artist: Option<entity::artist::Model>,
}

impl ShowWithRelations {
    /// Flattens the relation into a listing row.
    ///
    /// # Returns
    /// - `Ok(ShowListing)` - Both venue and artist were loaded
    /// - `Err(InternalError::DanglingShow)` - Either side is missing
    pub fn into_listing(self) -> Result<ShowListing, InternalError> {
        let show_id = self.show.id;
        let venue = self.venue.ok_or(InternalError::DanglingShow {
            show_id,
            relation: "venue",
        })?;
        let artist = self.artist.ok_or(InternalError::DanglingShow {
            show_id,
            relation: "artist",
        })?;

        Ok(ShowListing {
            venue_id: venue.id,
            venue_name: venue.name,
            artist_id: artist.id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: self.show.start_time,
        })
    }
}

/// Parameters for listing a new show.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateShowParams {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

impl CreateShowParams {
    /// Validates and converts the submitted form.
    ///
    /// An empty start time means "now".
    ///
    /// # Returns
    /// - `Ok(CreateShowParams)` - Every field parsed
    /// - `Err(FieldErrors)` - One error per field that could not be parsed
    pub fn from_form(form: &ShowForm, now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let artist_id = parse_form_id(&form.artist_id);
        if artist_id.is_none() {
            errors.add("artist_id", "Artist ID must be a number.");
        }

        let venue_id = parse_form_id(&form.venue_id);
        if venue_id.is_none() {
            errors.add("venue_id", "Venue ID must be a number.");
        }

        let start_time = if form.start_time.is_empty() {
            Some(now)
        } else {
            parse_start_time(&form.start_time)
        };
        if start_time.is_none() {
            errors.add("start_time", "Expected a date like 2035-04-01 20:00:00.");
        }

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) => Ok(Self {
                artist_id,
                venue_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

/// Splits items into `(past, upcoming)` around `now`.
///
/// An item is past when its start time is at or before `now`. Input order is kept
/// within each half.
pub fn split_past_upcoming<T>(
    items: Vec<T>,
    now: DateTime<Utc>,
    start_time: impl Fn(&T) -> DateTime<Utc>,
) -> (Vec<T>, Vec<T>) {
    items
        .into_iter()
        .partition(|item| start_time(item) <= now)
}
