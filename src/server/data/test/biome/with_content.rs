use super::*;

/// Tests attaching images and posts to biomes.
///
/// Expected: Ok with each biome holding only its own images and posts
#[tokio::test]
async fn attaches_images_and_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let cerrado = factory::biome::create_biome_named(db, "Cerrado").await?;
    let pampa = factory::biome::create_biome_named(db, "Pampa").await?;
    let image = factory::biome_image::create_biome_image(db, cerrado.id).await?;
    let post = factory::post::create_post_in_biome(db, author.id, cerrado.id).await?;

    let repo = BiomeRepository::new(db);
    let biomes = repo.get_all().await?;
    let expanded = repo.with_content(biomes).await?;

    assert_eq!(expanded.len(), 2);
    assert_eq!(expanded[0].biome.id, cerrado.id);
    assert_eq!(expanded[0].images.len(), 1);
    assert_eq!(expanded[0].images[0].id, image.id);
    assert_eq!(expanded[0].posts.len(), 1);
    assert_eq!(expanded[0].posts[0].id, post.id);

    assert_eq!(expanded[1].biome.id, pampa.id);
    assert!(expanded[1].images.is_empty());
    assert!(expanded[1].posts.is_empty());

    Ok(())
}
