use super::*;

/// Tests deleting a biome with images and posts.
///
/// Verifies that images are removed with the biome while posts stay and lose their
/// biome reference.
///
/// Expected: Ok with image gone and post detached
#[tokio::test]
async fn removes_images_and_detaches_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, biome, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let image = factory::biome_image::create_biome_image(db, biome.id).await?;

    let repo = BiomeRepository::new(db);
    repo.delete(biome.id).await?;

    assert!(repo.find_by_id(biome.id).await?.is_none());
    assert!(entity::prelude::BiomeImage::find_by_id(image.id)
        .one(db)
        .await?
        .is_none());

    let post = entity::prelude::Post::find_by_id(post.id).one(db).await?;
    assert!(post.is_some_and(|p| p.biome_id.is_none()));

    Ok(())
}
