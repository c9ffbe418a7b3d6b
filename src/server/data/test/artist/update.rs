use super::*;

/// Tests replacing the fields of an existing artist.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn updates_every_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::create_artist(db).await?;

    let mut fields = artist_params("Matt Quevedo");
    fields.state = "NY".to_string();
    fields.genres = vec!["Jazz".to_string()];
    fields.seeking_venue = false;

    let updated = ArtistRepository::new(db)
        .update(UpdateArtistParams {
            id: artist.id,
            fields,
        })
        .await?
        .expect("artist exists");

    assert_eq!(updated.id, artist.id);
    assert_eq!(updated.name, "Matt Quevedo");
    assert_eq!(updated.genres, vec!["Jazz"]);
    assert!(!updated.seeking_venue);

    Ok(())
}

/// Tests updating an artist that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArtistRepository::new(db)
        .update(UpdateArtistParams {
            id: 1,
            fields: artist_params("Nobody"),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
