use super::*;
use test_utils::factory::venue::VenueFactory;

/// Tests that venues come back ordered by state, city, then name.
///
/// Expected: Ok with venues in area order
#[tokio::test]
async fn orders_by_state_city_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    VenueFactory::new(db)
        .name("Park Square Live Music & Coffee")
        .city("San Francisco")
        .state("CA")
        .build()
        .await?;
    VenueFactory::new(db)
        .name("The Dueling Pianos Bar")
        .city("New York")
        .state("NY")
        .build()
        .await?;
    VenueFactory::new(db)
        .name("The Musical Hop")
        .city("San Francisco")
        .state("CA")
        .build()
        .await?;

    let venues = VenueRepository::new(db).get_all().await?;
    let names: Vec<&str> = venues.iter().map(|v| v.name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "Park Square Live Music & Coffee",
            "The Musical Hop",
            "The Dueling Pianos Bar",
        ]
    );

    Ok(())
}
