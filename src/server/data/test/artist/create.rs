use super::*;

/// Tests creating an artist and reading it back.
///
/// Expected: Ok with identical artist
#[tokio::test]
async fn creates_artist_and_reads_it_back() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArtistRepository::new(db);
    let created = repo.create(artist_params("Guns N Petals")).await?;

    assert_eq!(created.name, "Guns N Petals");
    assert_eq!(created.genres, vec!["Rock n Roll"]);
    assert!(created.seeking_venue);

    let fetched = repo.get_by_id(created.id).await?;
    assert_eq!(fetched, Some(created));

    Ok(())
}
