use super::*;

/// Tests creating a post linked to a biome.
///
/// Expected: Ok with post created and fields stored as given
#[tokio::test]
async fn creates_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let biome = factory::biome::create_biome(db).await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(CreatePostParams {
            title: "Queimadas no Cerrado".to_string(),
            content: "Relato de campo".to_string(),
            author_id: author.id,
            biome_id: Some(biome.id),
        })
        .await?;

    assert_eq!(post.title, "Queimadas no Cerrado");
    assert_eq!(post.author_id, author.id);
    assert_eq!(post.biome_id, Some(biome.id));

    Ok(())
}

/// Tests that a post must reference an existing author.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let result = repo
        .create(CreatePostParams {
            title: "Orphan".to_string(),
            content: "No author".to_string(),
            author_id: Uuid::new_v4(),
            biome_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
