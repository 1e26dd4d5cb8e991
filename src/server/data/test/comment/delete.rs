use super::*;

/// Tests that deleting a comment removes its replies.
///
/// Expected: Ok with comment and reply gone, sibling kept
#[tokio::test]
async fn cascades_to_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (commenter, post, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let reply = factory::comment::create_reply(db, &comment, commenter.id).await?;
    let sibling = factory::comment::create_comment(db, post.id, commenter.id).await?;

    let repo = CommentRepository::new(db);
    repo.delete(comment.id).await?;

    assert!(repo.find_by_id(comment.id).await?.is_none());
    assert!(repo.find_by_id(reply.id).await?.is_none());
    assert!(repo.find_by_id(sibling.id).await?.is_some());

    Ok(())
}
