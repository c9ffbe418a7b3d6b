use super::*;
use test_utils::factory::{artist::ArtistFactory, venue::VenueFactory};

/// Tests that every show is returned with its venue and artist, earliest first.
///
/// Expected: Ok with both relations loaded and shows ordered by start time
#[tokio::test]
async fn loads_relations_ordered_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = VenueFactory::new(db).name("The Musical Hop").build().await?;
    let petals = ArtistFactory::new(db).name("Guns N Petals").build().await?;
    let sax = ArtistFactory::new(db).name("The Wild Sax Band").build().await?;

    let now = Utc::now();
    ShowFactory::new(db, sax.id, venue.id)
        .start_time(now + Duration::days(2))
        .build()
        .await?;
    ShowFactory::new(db, petals.id, venue.id)
        .start_time(now - Duration::days(2))
        .build()
        .await?;

    let shows = ShowRepository::new(db).get_all_with_relations().await?;

    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].artist.as_ref().map(|a| a.name.as_str()), Some("Guns N Petals"));
    assert_eq!(shows[1].artist.as_ref().map(|a| a.name.as_str()), Some("The Wild Sax Band"));
    assert!(shows
        .iter()
        .all(|s| s.venue.as_ref().map(|v| v.id) == Some(venue.id)));

    Ok(())
}

/// Tests the empty listing.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_shows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shows = ShowRepository::new(db).get_all_with_relations().await?;

    assert!(shows.is_empty());

    Ok(())
}
