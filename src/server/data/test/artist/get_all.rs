use super::*;
use test_utils::factory::artist::ArtistFactory;

/// Tests that artists are listed alphabetically.
///
/// Expected: Ok with artists ordered by name
#[tokio::test]
async fn orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["The Wild Sax Band", "Guns N Petals", "Matt Quevedo"] {
        ArtistFactory::new(db).name(name).build().await?;
    }

    let artists = ArtistRepository::new(db).get_all().await?;
    let names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();

    assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);

    Ok(())
}
