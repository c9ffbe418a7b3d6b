use super::*;

/// Tests that only the venue's shows are returned, each with its artist.
///
/// Expected: Ok with the one show at the requested venue
#[tokio::test]
async fn returns_only_shows_at_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, artist) = factory::helpers::create_show_dependencies(db).await?;
    let other_venue = factory::create_venue(db).await?;
    factory::create_show(db, artist.id, venue.id).await?;
    factory::create_show(db, artist.id, other_venue.id).await?;

    let shows = ShowRepository::new(db)
        .get_by_venue_with_artist(venue.id)
        .await?;

    assert_eq!(shows.len(), 1);
    let (show, show_artist) = &shows[0];
    assert_eq!(show.venue_id, venue.id);
    assert_eq!(show_artist.as_ref().map(|a| a.id), Some(artist.id));

    Ok(())
}
