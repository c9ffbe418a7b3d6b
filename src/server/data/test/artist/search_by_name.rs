use super::*;
use test_utils::factory::artist::ArtistFactory;

/// Tests case-insensitive substring matching on artist names.
///
/// "A" matches "Guns N Petals", "Matt Quevedo" and "The Wild Sax Band"; "band"
/// matches only "The Wild Sax Band".
///
/// Expected: Ok with matching artists, newest first
#[tokio::test]
async fn matches_substring_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"] {
        ArtistFactory::new(db).name(name).build().await?;
    }

    let repo = ArtistRepository::new(db);

    let a = repo.search_by_name("A").await?;
    assert_eq!(a.len(), 3);
    assert_eq!(a[0].name, "The Wild Sax Band");

    let band = repo.search_by_name("band").await?;
    assert_eq!(band.len(), 1);
    assert_eq!(band[0].name, "The Wild Sax Band");

    Ok(())
}

/// Tests that case folding covers accented letters.
///
/// Expected: Ok with "Björk Guðmundsdóttir" found by upper case terms
#[tokio::test]
async fn matches_non_ascii_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fyyur_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ArtistFactory::new(db).name("Björk Guðmundsdóttir").build().await?;
    ArtistFactory::new(db).name("Matt Quevedo").build().await?;

    let repo = ArtistRepository::new(db);

    let bjork = repo.search_by_name("BJÖRK").await?;
    assert_eq!(bjork.len(), 1);
    assert_eq!(bjork[0].name, "Björk Guðmundsdóttir");

    assert_eq!(repo.search_by_name("GUÐMUNDSDÓTTIR").await?.len(), 1);

    Ok(())
}
