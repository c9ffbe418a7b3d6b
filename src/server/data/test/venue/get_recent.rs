use super::*;

/// Tests that the most recently created venues come first and the limit applies.
///
/// Expected: Ok with the last two venues, newest first
#[tokio::test]
async fn returns_newest_first_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let _first = factory::create_venue(db).await?;
    let second = factory::create_venue(db).await?;
    let third = factory::create_venue(db).await?;

    let venues = VenueRepository::new(db).get_recent(2).await?;
    let ids: Vec<i32> = venues.iter().map(|v| v.id).collect();

    assert_eq!(ids, vec![third.id, second.id]);

    Ok(())
}
