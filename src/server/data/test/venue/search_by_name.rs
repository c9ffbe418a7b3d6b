use super::*;
use test_utils::factory::venue::VenueFactory;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    for name in [
        "The Musical Hop",
        "The Dueling Pianos Bar",
        "Park Square Live Music & Coffee",
    ] {
        VenueFactory::new(db).name(name).build().await?;
    }
    Ok(())
}

/// Tests case-insensitive substring matching.
///
/// "Hop" matches "The Musical Hop" and "Music" matches both "The Musical Hop" and
/// "Park Square Live Music & Coffee" regardless of case.
///
/// Expected: Ok with matching venues only
#[tokio::test]
async fn matches_substring_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = VenueRepository::new(db);

    let hop = repo.search_by_name("hOp").await?;
    assert_eq!(hop.len(), 1);
    assert_eq!(hop[0].name, "The Musical Hop");

    let music = repo.search_by_name("music").await?;
    assert_eq!(music.len(), 2);

    Ok(())
}

/// Tests that an empty term matches every venue.
///
/// Expected: Ok with all venues
#[tokio::test]
async fn empty_term_matches_all() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let venues = VenueRepository::new(db).search_by_name("").await?;

    assert_eq!(venues.len(), 3);

    Ok(())
}

/// Tests a term matching nothing.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let venues = VenueRepository::new(db).search_by_name("zzz").await?;

    assert!(venues.is_empty());

    Ok(())
}

/// Tests that case folding covers accented letters.
///
/// Expected: Ok with "Café Élysée" found by lower, upper and mixed case terms
#[tokio::test]
async fn matches_non_ascii_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;
    VenueFactory::new(db).name("Café Élysée").build().await?;

    let repo = VenueRepository::new(db);

    for term in ["élysée", "ÉLYSÉE", "CAFÉ"] {
        let venues = repo.search_by_name(term).await?;
        assert_eq!(venues.len(), 1, "term {}", term);
        assert_eq!(venues[0].name, "Café Élysée");
    }

    Ok(())
}
