use super::*;

/// Tests creating an image row.
///
/// Expected: Ok with filename, description and biome stored
#[tokio::test]
async fn creates_image() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let biome = factory::biome::create_biome(db).await?;

    let repo = BiomeImageRepository::new(db);
    let image = repo
        .create(
            biome.id,
            "abc.png".to_string(),
            Some("Vereda".to_string()),
        )
        .await?;

    assert_eq!(image.filename, "abc.png");
    assert_eq!(image.description.as_deref(), Some("Vereda"));
    assert_eq!(image.biome_id, biome.id);

    Ok(())
}

/// Tests that an image must belong to an existing biome.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_biome() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BiomeImageRepository::new(db);
    let result = repo
        .create(Uuid::new_v4(), "abc.png".to_string(), None)
        .await;

    assert!(result.is_err());

    Ok(())
}
