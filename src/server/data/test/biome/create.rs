use super::*;

/// Tests creating a biome.
///
/// Expected: Ok with every field stored as given
#[tokio::test]
async fn creates_biome() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BiomeRepository::new(db);
    let biome = repo.create(biome_params("Caatinga")).await?;

    assert_eq!(biome.name, "Caatinga");
    assert_eq!(biome.conservation, "Conservação");

    let found = repo.find_by_name("Caatinga").await?;
    assert_eq!(found, Some(biome));

    Ok(())
}

/// Tests that the database rejects a duplicate biome name.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BiomeRepository::new(db);
    repo.create(biome_params("Pantanal")).await?;
    let result = repo.create(biome_params("Pantanal")).await;

    assert!(result.is_err());

    Ok(())
}
