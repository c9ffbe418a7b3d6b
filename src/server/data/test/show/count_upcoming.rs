use super::*;

/// Tests that only shows after `now` are counted, per venue and per artist.
///
/// Expected: Ok with one upcoming show for the venue and artist, past show ignored
#[tokio::test]
async fn counts_only_upcoming_shows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, artist) = factory::helpers::create_show_dependencies(db).await?;
    let quiet_venue = factory::create_venue(db).await?;
    let now = Utc::now();

    ShowFactory::new(db, artist.id, venue.id)
        .start_time(now + Duration::days(1))
        .build()
        .await?;
    ShowFactory::new(db, artist.id, venue.id)
        .start_time(now - Duration::days(1))
        .build()
        .await?;
    ShowFactory::new(db, artist.id, quiet_venue.id)
        .start_time(now - Duration::days(5))
        .build()
        .await?;

    let repo = ShowRepository::new(db);

    let by_venue = repo.count_upcoming_by_venue(now).await?;
    assert_eq!(by_venue.get(&venue.id), Some(&1));
    assert_eq!(by_venue.get(&quiet_venue.id), None);

    let by_artist = repo.count_upcoming_by_artist(now).await?;
    assert_eq!(by_artist.get(&artist.id), Some(&1));

    Ok(())
}

/// Tests that several upcoming shows are grouped per venue and per artist.
///
/// Expected: Ok with two shows for the first venue, one for the second, three for the artist
#[tokio::test]
async fn groups_counts_per_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, artist) = factory::helpers::create_show_dependencies(db).await?;
    let other_venue = factory::create_venue(db).await?;
    let now = Utc::now();

    for (venue_id, days) in [(venue.id, 1), (venue.id, 2), (other_venue.id, 3)] {
        ShowFactory::new(db, artist.id, venue_id)
            .start_time(now + Duration::days(days))
            .build()
            .await?;
    }

    let repo = ShowRepository::new(db);

    let by_venue = repo.count_upcoming_by_venue(now).await?;
    assert_eq!(by_venue.len(), 2);
    assert_eq!(by_venue.get(&venue.id), Some(&2));
    assert_eq!(by_venue.get(&other_venue.id), Some(&1));

    let by_artist = repo.count_upcoming_by_artist(now).await?;
    assert_eq!(by_artist.get(&artist.id), Some(&3));

    Ok(())
}
