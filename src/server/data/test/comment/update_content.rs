use super::*;

/// Tests replacing a comment's content.
///
/// Expected: Ok with new content and unchanged parent
#[tokio::test]
async fn replaces_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_commenter, _post, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let updated = repo
        .update_content(comment.id, "Editado".to_string())
        .await?;

    assert_eq!(updated.content, "Editado");
    assert_eq!(updated.parent_comment_id, comment.parent_comment_id);

    Ok(())
}

/// Tests updating a comment that doesn't exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let result = repo
        .update_content(Uuid::new_v4(), "Editado".to_string())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
