use super::*;

/// Tests the exact name check with and without an excluded biome.
///
/// Expected: taken for others, free for the biome itself and for other casings
#[tokio::test]
async fn checks_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let biome = factory::biome::create_biome_named(db, "Amazônia").await?;

    let repo = BiomeRepository::new(db);
    assert!(repo.name_taken("Amazônia", None).await?);
    assert!(!repo.name_taken("Amazônia", Some(biome.id)).await?);
    assert!(!repo.name_taken("amazônia", None).await?);

    Ok(())
}
