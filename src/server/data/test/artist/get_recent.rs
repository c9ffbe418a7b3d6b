use super::*;

/// Tests that a limit larger than the table returns every artist, newest first.
///
/// Expected: Ok with both artists in reverse creation order
#[tokio::test]
async fn returns_all_when_limit_exceeds_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_artist(db).await?;
    let second = factory::create_artist(db).await?;

    let artists = ArtistRepository::new(db).get_recent(10).await?;
    let ids: Vec<i32> = artists.iter().map(|a| a.id).collect();

    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
