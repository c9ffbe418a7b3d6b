use super::*;

/// Tests replacing the fields of an existing venue.
///
/// Expected: Ok(Some) with the new values persisted
#[tokio::test]
async fn updates_every_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    let mut fields = venue_params("The Dueling Pianos Bar");
    fields.city = "New York".to_string();
    fields.state = "NY".to_string();
    fields.phone = None;
    fields.seeking_talent = false;
    fields.seeking_description = None;

    let repo = VenueRepository::new(db);
    let updated = repo
        .update(UpdateVenueParams {
            id: venue.id,
            fields,
        })
        .await?
        .expect("venue exists");

    assert_eq!(updated.id, venue.id);
    assert_eq!(updated.name, "The Dueling Pianos Bar");
    assert_eq!(updated.state, "NY");
    assert_eq!(updated.phone, None);
    assert!(!updated.seeking_talent);

    let stored = entity::prelude::Venue::find_by_id(venue.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.city, "New York");

    Ok(())
}

/// Tests updating a venue that does not exist.
///
/// Expected: Ok(None) and nothing inserted
#[tokio::test]
async fn returns_none_for_unknown_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VenueRepository::new(db)
        .update(UpdateVenueParams {
            id: 42,
            fields: venue_params("Ghost"),
        })
        .await?;

    assert!(result.is_none());
    assert!(entity::prelude::Venue::find().all(db).await?.is_empty());

    Ok(())
}
