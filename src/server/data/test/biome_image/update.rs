use super::*;

/// Tests replacing the filename and clearing the description.
///
/// Expected: Ok with new filename, no description and unchanged biome
#[tokio::test]
async fn replaces_filename_and_clears_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let biome = factory::biome::create_biome(db).await?;
    let image = factory::biome_image::BiomeImageFactory::new(db, biome.id)
        .description("Antiga")
        .build()
        .await?;

    let repo = BiomeImageRepository::new(db);
    let updated = repo
        .update(
            image.id,
            BiomeImageChanges {
                filename: Some("new.jpg".to_string()),
                description: Some(None),
                biome_id: None,
            },
        )
        .await?;

    assert_eq!(updated.filename, "new.jpg");
    assert!(updated.description.is_none());
    assert_eq!(updated.biome_id, biome.id);

    Ok(())
}

/// Tests that empty changes leave the row untouched.
///
/// Expected: Ok with the original values
#[tokio::test]
async fn empty_changes_keep_values() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let biome = factory::biome::create_biome(db).await?;
    let image = factory::biome_image::create_biome_image(db, biome.id).await?;

    let repo = BiomeImageRepository::new(db);
    let updated = repo.update(image.id, BiomeImageChanges::default()).await?;

    assert_eq!(updated.filename, image.filename);
    assert_eq!(updated.description, image.description);

    Ok(())
}
