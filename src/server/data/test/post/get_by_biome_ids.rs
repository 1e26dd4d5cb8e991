use super::*;

/// Tests that only posts of the requested biome are returned.
///
/// Expected: Ok with the biome's post only
#[tokio::test]
async fn filters_by_biome() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let cerrado = factory::biome::create_biome_named(db, "Cerrado").await?;
    let pampa = factory::biome::create_biome_named(db, "Pampa").await?;
    let in_cerrado = factory::post::create_post_in_biome(db, author.id, cerrado.id).await?;
    factory::post::create_post_in_biome(db, author.id, pampa.id).await?;
    factory::post::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    let posts = repo.get_by_biome_ids(&[cerrado.id]).await?;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, in_cerrado.id);

    Ok(())
}

/// Tests a biome without posts.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_biome_without_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let biome = factory::biome::create_biome(db).await?;

    let repo = PostRepository::new(db);
    let posts = repo.get_by_biome_ids(&[biome.id]).await?;

    assert!(posts.is_empty());

    Ok(())
}
