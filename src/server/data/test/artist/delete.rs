use super::*;

/// Tests deleting an artist removes their shows but keeps the venue.
///
/// Expected: Ok(Some) with the deleted artist
#[tokio::test]
async fn deletes_artist_and_their_shows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, artist) = factory::helpers::create_show_dependencies(db).await?;
    factory::create_show(db, artist.id, venue.id).await?;

    let deleted = ArtistRepository::new(db).delete(artist.id).await?;

    assert_eq!(deleted.map(|a| a.id), Some(artist.id));
    assert!(entity::prelude::Show::find().all(db).await?.is_empty());
    assert!(entity::prelude::Venue::find_by_id(venue.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
