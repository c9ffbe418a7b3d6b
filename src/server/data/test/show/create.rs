use super::*;

/// Tests listing a show between an existing artist and venue.
///
/// Expected: Ok with the stored ids and start time
#[tokio::test]
async fn creates_show() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, artist) = factory::helpers::create_show_dependencies(db).await?;
    let start_time = Utc::now() + Duration::days(30);

    let show = ShowRepository::new(db)
        .create(CreateShowParams {
            artist_id: artist.id,
            venue_id: venue.id,
            start_time,
        })
        .await?;

    assert_eq!(show.artist_id, artist.id);
    assert_eq!(show.venue_id, venue.id);
    assert_eq!(show.start_time, start_time);

    Ok(())
}

/// Tests that the foreign keys reject a show referencing a missing venue.
///
/// Expected: Err
#[tokio::test]
async fn rejects_missing_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::create_artist(db).await?;

    let result = ShowRepository::new(db)
        .create(CreateShowParams {
            artist_id: artist.id,
            venue_id: artist.id + 100,
            start_time: Utc::now(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
