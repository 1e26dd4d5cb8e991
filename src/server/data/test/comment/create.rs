use super::*;

/// Tests creating a top-level comment.
///
/// Expected: Ok with no parent
#[tokio::test]
async fn creates_top_level_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _biome, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            content: "Ótimo texto".to_string(),
            post_id: post.id,
            author_id: author.id,
            parent_comment_id: None,
        })
        .await?;

    assert_eq!(comment.content, "Ótimo texto");
    assert_eq!(comment.post_id, post.id);
    assert!(!comment.is_reply());

    Ok(())
}

/// Tests creating a reply.
///
/// Expected: Ok with the parent id stored
#[tokio::test]
async fn creates_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (commenter, post, parent) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let reply = repo
        .create(CreateCommentParams {
            content: "Concordo".to_string(),
            post_id: post.id,
            author_id: commenter.id,
            parent_comment_id: Some(parent.id),
        })
        .await?;

    assert_eq!(reply.parent_comment_id, Some(parent.id));
    assert!(reply.is_reply());

    Ok(())
}
