use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::venue::{CreateVenueParams, UpdateVenueParams, Venue};

pub struct VenueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new venue row.
    pub async fn create(&self, params: CreateVenueParams) -> Result<Venue, DbErr> {
        let venue = entity::venue::ActiveModel {
            name: ActiveValue::Set(params.name),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            address: ActiveValue::Set(params.address),
            phone: ActiveValue::Set(params.phone),
            website: ActiveValue::Set(params.website),
            facebook_link: ActiveValue::Set(params.facebook_link),
            image_link: ActiveValue::Set(params.image_link),
            genres: ActiveValue::Set(params.genres.into()),
            seeking_talent: ActiveValue::Set(params.seeking_talent),
            seeking_description: ActiveValue::Set(params.seeking_description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Venue::from_entity(venue))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Venue>, DbErr> {
        let venue = entity::prelude::Venue::find_by_id(id).one(self.db).await?;

        Ok(venue.map(Venue::from_entity))
    }

    /// Gets every venue ordered by state, city, then name so areas come out contiguous.
    pub async fn get_all(&self) -> Result<Vec<Venue>, DbErr> {
        let venues = entity::prelude::Venue::find()
            .order_by_asc(entity::venue::Column::State)
            .order_by_asc(entity::venue::Column::City)
            .order_by_asc(entity::venue::Column::Name)
            .all(self.db)
            .await?;

        Ok(venues.into_iter().map(Venue::from_entity).collect())
    }

    /// Gets venues whose name contains `term` ignoring case, newest first.
    ///
    /// Names are case-folded in Rust since SQLite's `LIKE` only folds ASCII. An empty
    /// term matches every venue.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Venue>, DbErr> {
        let needle = term.to_lowercase();

        let venues = entity::prelude::Venue::find()
            .order_by_desc(entity::venue::Column::Id)
            .all(self.db)
            .await?;

        Ok(venues
            .into_iter()
            .filter(|venue| venue.name.to_lowercase().contains(&needle))
            .map(Venue::from_entity)
            .collect())
    }

    /// Gets the `limit` most recently listed venues.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<Venue>, DbErr> {
        let venues = entity::prelude::Venue::find()
            .order_by_desc(entity::venue::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(venues.into_iter().map(Venue::from_entity).collect())
    }

    /// Replaces every editable field of a venue.
    ///
    /// # Returns
    /// - `Ok(Some(Venue))` - Updated venue
    /// - `Ok(None)` - No venue with the given id
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn update(&self, params: UpdateVenueParams) -> Result<Option<Venue>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(venue) = entity::prelude::Venue::find_by_id(params.id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let fields = params.fields;
        let mut active_model: entity::venue::ActiveModel = venue.into();
        active_model.name = ActiveValue::Set(fields.name);
        active_model.city = ActiveValue::Set(fields.city);
        active_model.state = ActiveValue::Set(fields.state);
        active_model.address = ActiveValue::Set(fields.address);
        active_model.phone = ActiveValue::Set(fields.phone);
        active_model.website = ActiveValue::Set(fields.website);
        active_model.facebook_link = ActiveValue::Set(fields.facebook_link);
        active_model.image_link = ActiveValue::Set(fields.image_link);
        active_model.genres = ActiveValue::Set(fields.genres.into());
        active_model.seeking_talent = ActiveValue::Set(fields.seeking_talent);
        active_model.seeking_description = ActiveValue::Set(fields.seeking_description);

        let venue = active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(Venue::from_entity(venue)))
    }

    /// Deletes a venue together with its shows.
    ///
    /// # Returns
    /// - `Ok(Some(Venue))` - The venue as it was before deletion
    /// - `Ok(None)` - No venue with the given id
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<Option<Venue>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(venue) = entity::prelude::Venue::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        entity::prelude::Show::delete_many()
            .filter(entity::show::Column::VenueId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Venue::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(Some(Venue::from_entity(venue)))
    }
}
