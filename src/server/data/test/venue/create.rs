use super::*;

/// Tests creating a venue and reading it back.
///
/// Verifies that every submitted field, genres included, is stored and returned
/// unchanged by `get_by_id`.
///
/// Expected: Ok with identical venue
#[tokio::test]
async fn creates_venue_and_reads_it_back() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VenueRepository::new(db);
    let created = repo.create(venue_params("The Musical Hop")).await?;

    assert_eq!(created.name, "The Musical Hop");
    assert_eq!(created.genres, vec!["Jazz", "Reggae"]);
    assert!(created.seeking_talent);
    assert_eq!(created.facebook_link, None);

    let fetched = repo.get_by_id(created.id).await?;
    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Tests fetching an id that was never created.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VenueRepository::new(db).get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
