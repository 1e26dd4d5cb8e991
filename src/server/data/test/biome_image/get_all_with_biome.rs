use super::*;

/// Tests that images are listed newest first with their biomes.
///
/// Expected: Ok with the later image first
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_biome_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cerrado = factory::biome::create_biome_named(db, "Cerrado").await?;
    let pampa = factory::biome::create_biome_named(db, "Pampa").await?;
    let older = factory::biome_image::create_biome_image(db, cerrado.id).await?;
    let newer = factory::biome_image::create_biome_image(db, pampa.id).await?;

    let repo = BiomeImageRepository::new(db);
    let images = repo.get_all_with_biome().await?;

    let ids: Vec<Uuid> = images.iter().map(|i| i.image.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(images[0].biome.id, pampa.id);
    assert_eq!(images[1].biome.id, cerrado.id);

    Ok(())
}
