use super::*;

/// Tests deleting a venue removes its shows as well.
///
/// Expected: Ok(Some) with the deleted venue, no venue or show rows left
#[tokio::test]
async fn deletes_venue_and_its_shows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, artist) = factory::helpers::create_show_dependencies(db).await?;
    factory::create_show(db, artist.id, venue.id).await?;

    let deleted = VenueRepository::new(db).delete(venue.id).await?;

    assert_eq!(deleted.map(|v| v.name), Some(venue.name));
    assert!(entity::prelude::Venue::find_by_id(venue.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Show::find().all(db).await?.is_empty());
    // The artist is untouched
    assert!(entity::prelude::Artist::find_by_id(artist.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a venue that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VenueRepository::new(db).delete(7).await?;

    assert!(result.is_none());

    Ok(())
}
