use super::*;

/// Tests a case-insensitive substring search.
///
/// Expected: Ok(Some) with the matching biome
#[tokio::test]
async fn matches_substring_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::biome::create_biome_named(db, "Cerrado").await?;
    let mata = factory::biome::create_biome_named(db, "Mata Atlântica").await?;

    let repo = BiomeRepository::new(db);
    let found = repo.search_by_name("ATLÂN").await?;

    assert_eq!(found.map(|b| b.id), Some(mata.id));

    Ok(())
}

/// Tests that the first match by name wins when several biomes match.
///
/// Expected: Ok(Some) with the alphabetically first match
#[tokio::test]
async fn returns_first_match_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::biome::create_biome_named(db, "Pampa").await?;
    let pantanal = factory::biome::create_biome_named(db, "Pantanal").await?;
    let campos = factory::biome::create_biome_named(db, "Campos de Altitude").await?;

    let repo = BiomeRepository::new(db);

    assert_eq!(
        repo.search_by_name("P").await?.map(|b| b.id),
        Some(campos.id)
    );
    assert_eq!(
        repo.search_by_name("tanal").await?.map(|b| b.id),
        Some(pantanal.id)
    );

    Ok(())
}

/// Tests a search without matches.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::biome::create_biome_named(db, "Cerrado").await?;

    let repo = BiomeRepository::new(db);

    assert!(repo.search_by_name("Tundra").await?.is_none());

    Ok(())
}
