use super::*;

/// Tests loading an image together with its biome.
///
/// Expected: Ok(Some) with the owning biome
#[tokio::test]
async fn includes_biome() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let biome = factory::biome::create_biome(db).await?;
    let image = factory::biome_image::create_biome_image(db, biome.id).await?;

    let repo = BiomeImageRepository::new(db);
    let found = repo.get_with_biome(image.id).await?.unwrap();

    assert_eq!(found.image.id, image.id);
    assert_eq!(found.biome.id, biome.id);
    assert_eq!(found.biome.name, biome.name);

    Ok(())
}

/// Tests loading an image that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_image() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BiomeImageRepository::new(db);

    assert!(repo.get_with_biome(Uuid::new_v4()).await?.is_none());

    Ok(())
}
