//! Venue factory for creating test venue rows.

use crate::factory::helpers::next_id;
use entity::genres::Genres;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test venues with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let venue = VenueFactory::new(&db)
///     .name("The Musical Hop")
///     .city("San Francisco")
///     .state("CA")
///     .build()
///     .await?;
/// ```
pub struct VenueFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city: String,
    state: String,
    address: String,
    phone: Option<String>,
    image_link: Option<String>,
    genres: Vec<String>,
    seeking_talent: bool,
    seeking_description: Option<String>,
}

impl<'a> VenueFactory<'a> {
    /// Creates a new VenueFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Venue {id}"` where id is auto-incremented
    /// - city/state: `"San Francisco"`, `"CA"`
    /// - genres: `["Jazz"]`
    /// - seeking_talent: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Venue {}", id),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: format!("{} Musical Hop Lane", id),
            phone: Some("123-123-1234".to_string()),
            image_link: None,
            genres: vec!["Jazz".to_string()],
            seeking_talent: false,
            seeking_description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn image_link(mut self, image_link: Option<String>) -> Self {
        self.image_link = image_link;
        self
    }

    pub fn genres(mut self, genres: &[&str]) -> Self {
        self.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    /// Marks the venue as looking for talent with the given description.
    pub fn seeking_talent(mut self, description: impl Into<String>) -> Self {
        self.seeking_talent = true;
        self.seeking_description = Some(description.into());
        self
    }

    /// Builds and inserts the venue row.
    ///
    /// # Returns
    /// - `Ok(entity::venue::Model)` - Created venue
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::venue::Model, DbErr> {
        entity::venue::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            address: ActiveValue::Set(self.address),
            phone: ActiveValue::Set(self.phone),
            website: ActiveValue::Set(None),
            facebook_link: ActiveValue::Set(None),
            image_link: ActiveValue::Set(self.image_link),
            genres: ActiveValue::Set(Genres(self.genres)),
            seeking_talent: ActiveValue::Set(self.seeking_talent),
            seeking_description: ActiveValue::Set(self.seeking_description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a venue with default values.
///
/// Shorthand for `VenueFactory::new(db).build().await`.
pub async fn create_venue(db: &DatabaseConnection) -> Result<entity::venue::Model, DbErr> {
    VenueFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_venue_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Venue).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let venue = create_venue(db).await?;

        assert!(venue.name.starts_with("Venue "));
        assert_eq!(venue.state, "CA");
        assert_eq!(venue.genres, Genres(vec!["Jazz".to_string()]));
        assert!(!venue.seeking_talent);

        Ok(())
    }

    #[tokio::test]
    async fn creates_venue_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Venue).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let venue = VenueFactory::new(db)
            .name("The Dueling Pianos Bar")
            .city("New York")
            .state("NY")
            .genres(&["Classical", "R&B"])
            .seeking_talent("Looking for pianists")
            .build()
            .await?;

        assert_eq!(venue.name, "The Dueling Pianos Bar");
        assert_eq!(venue.city, "New York");
        assert_eq!(venue.genres.0.len(), 2);
        assert!(venue.seeking_talent);
        assert_eq!(
            venue.seeking_description,
            Some("Looking for pianists".to_string())
        );

        Ok(())
    }
}
