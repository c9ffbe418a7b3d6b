use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::artist::{Artist, CreateArtistParams, UpdateArtistParams};

pub struct ArtistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new artist row.
    pub async fn create(&self, params: CreateArtistParams) -> Result<Artist, DbErr> {
        let artist = entity::artist::ActiveModel {
            name: ActiveValue::Set(params.name),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            phone: ActiveValue::Set(params.phone),
            website: ActiveValue::Set(params.website),
            facebook_link: ActiveValue::Set(params.facebook_link),
            image_link: ActiveValue::Set(params.image_link),
            genres: ActiveValue::Set(params.genres.into()),
            seeking_venue: ActiveValue::Set(params.seeking_venue),
            seeking_description: ActiveValue::Set(params.seeking_description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Artist::from_entity(artist))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Artist>, DbErr> {
        let artist = entity::prelude::Artist::find_by_id(id).one(self.db).await?;

        Ok(artist.map(Artist::from_entity))
    }

    /// Gets every artist ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Artist>, DbErr> {
        let artists = entity::prelude::Artist::find()
            .order_by_asc(entity::artist::Column::Name)
            .all(self.db)
            .await?;

        Ok(artists.into_iter().map(Artist::from_entity).collect())
    }

    /// Gets artists whose name contains `term` ignoring case, newest first.
    ///
    /// Names are case-folded in Rust since SQLite's `LIKE` only folds ASCII. An empty
    /// term matches every artist.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Artist>, DbErr> {
        let needle = term.to_lowercase();

        let artists = entity::prelude::Artist::find()
            .order_by_desc(entity::artist::Column::Id)
            .all(self.db)
            .await?;

        Ok(artists
            .into_iter()
            .filter(|artist| artist.name.to_lowercase().contains(&needle))
            .map(Artist::from_entity)
            .collect())
    }

    /// Gets the `limit` most recently listed artists.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<Artist>, DbErr> {
        let artists = entity::prelude::Artist::find()
            .order_by_desc(entity::artist::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(artists.into_iter().map(Artist::from_entity).collect())
    }

    /// Replaces every editable field of an artist, `None` when it does not exist.
    pub async fn update(&self, params: UpdateArtistParams) -> Result<Option<Artist>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(artist) = entity::prelude::Artist::find_by_id(params.id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let fields = params.fields;
        let mut active_model: entity::artist::ActiveModel = artist.into();
        active_model.name = ActiveValue::Set(fields.name);
        active_model.city = ActiveValue::Set(fields.city);
        active_model.state = ActiveValue::Set(fields.state);
        active_model.phone = ActiveValue::Set(fields.phone);
        active_model.website = ActiveValue::Set(fields.website);
        active_model.facebook_link = ActiveValue::Set(fields.facebook_link);
        active_model.image_link = ActiveValue::Set(fields.image_link);
        active_model.genres = ActiveValue::Set(fields.genres.into());
        active_model.seeking_venue = ActiveValue::Set(fields.seeking_venue);
        active_model.seeking_description = ActiveValue::Set(fields.seeking_description);

        let artist = active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(Artist::from_entity(artist)))
    }

    /// Deletes an artist together with its shows.
    ///
    /// # Returns
    /// - `Ok(Some(Artist))` - The artist as it was before deletion
    /// - `Ok(None)` - No artist with the given id
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<Option<Artist>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(artist) = entity::prelude::Artist::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        entity::prelude::Show::delete_many()
            .filter(entity::show::Column::ArtistId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Artist::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(Some(Artist::from_entity(artist)))
    }
}
