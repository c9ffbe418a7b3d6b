//! Artist factory for creating test artist rows.

use crate::factory::helpers::next_id;
use entity::genres::Genres;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test artists with customizable fields.
pub struct ArtistFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city: String,
    state: String,
    image_link: Option<String>,
    genres: Vec<String>,
    seeking_venue: bool,
    seeking_description: Option<String>,
}

impl<'a> ArtistFactory<'a> {
    /// Creates a new ArtistFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Artist {id}"` where id is auto-incremented
    /// - city/state: `"San Francisco"`, `"CA"`
    /// - genres: `["Rock n Roll"]`
    /// - seeking_venue: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Artist {}", id),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            image_link: None,
            genres: vec!["Rock n Roll".to_string()],
            seeking_venue: false,
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

    /// Marks the artist as looking for venues with the given description.
    pub fn seeking_venue(mut self, description: impl Into<String>) -> Self {
        self.seeking_venue = true;
        self.seeking_description = Some(description.into());
        self
    }

    /// Builds and inserts the artist row.
    pub async fn build(self) -> Result<entity::artist::Model, DbErr> {
        entity::artist::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            phone: ActiveValue::Set(None),
            website: ActiveValue::Set(None),
            facebook_link: ActiveValue::Set(None),
            image_link: ActiveValue::Set(self.image_link),
            genres: ActiveValue::Set(Genres(self.genres)),
            seeking_venue: ActiveValue::Set(self.seeking_venue),
            seeking_description: ActiveValue::Set(self.seeking_description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an artist with default values.
pub async fn create_artist(db: &DatabaseConnection) -> Result<entity::artist::Model, DbErr> {
    ArtistFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_multiple_unique_artists() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Artist).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let artist1 = create_artist(db).await?;
        let artist2 = create_artist(db).await?;

        assert_ne!(artist1.id, artist2.id);
        assert_ne!(artist1.name, artist2.name);

        Ok(())
    }
}
