use super::*;

/// Tests a partial update of a post.
///
/// Expected: Ok with title changed and content unchanged
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, biome, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let repo = PostRepository::new(db);
    let updated = repo
        .update(post.id, Some("Novo título".to_string()), None, None)
        .await?;

    assert_eq!(updated.title, "Novo título");
    assert_eq!(updated.content, post.content);
    assert_eq!(updated.biome_id, Some(biome.id));

    Ok(())
}

/// Tests moving a post to another biome.
///
/// Expected: Ok with the new biome id
#[tokio::test]
async fn moves_post_to_other_biome() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _biome, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let other = factory::biome::create_biome(db).await?;

    let repo = PostRepository::new(db);
    let updated = repo.update(post.id, None, None, Some(other.id)).await?;

    assert_eq!(updated.biome_id, Some(other.id));

    Ok(())
}

/// Tests updating a post that doesn't exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let result = repo.update(Uuid::new_v4(), None, None, None).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
