use super::*;

/// Tests a partial biome update.
///
/// Expected: Ok with introduction changed and other fields kept
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let biome = factory::biome::create_biome(db).await?;

    let repo = BiomeRepository::new(db);
    let updated = repo
        .update(UpdateBiomeParams {
            id: biome.id,
            name: None,
            introduction: Some("Nova introdução".to_string()),
            general_characteristics: None,
            natural_resources: None,
            environmental_problems: None,
            conservation: None,
        })
        .await?;

    assert_eq!(updated.introduction, "Nova introdução");
    assert_eq!(updated.name, biome.name);
    assert_eq!(updated.conservation, biome.conservation);

    Ok(())
}

/// Tests updating a biome that doesn't exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_biome() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BiomeRepository::new(db);
    let result = repo
        .update(UpdateBiomeParams {
            id: Uuid::new_v4(),
            name: Some("Nada".to_string()),
            introduction: None,
            general_characteristics: None,
            natural_resources: None,
            environmental_problems: None,
            conservation: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
