use super::*;

/// Tests that the artist's shows come back earliest first with their venues.
///
/// Expected: Ok with two shows ordered by start time
#[tokio::test]
async fn returns_artist_shows_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, artist) = factory::helpers::create_show_dependencies(db).await?;
    let now = Utc::now();
    let later = ShowFactory::new(db, artist.id, venue.id)
        .start_time(now + Duration::days(10))
        .build()
        .await?;
    let earlier = ShowFactory::new(db, artist.id, venue.id)
        .start_time(now - Duration::days(10))
        .build()
        .await?;

    let shows = ShowRepository::new(db)
        .get_by_artist_with_venue(artist.id)
        .await?;

    let ids: Vec<i32> = shows.iter().map(|(show, _)| show.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);
    assert!(shows.iter().all(|(_, v)| v.is_some()));

    Ok(())
}
