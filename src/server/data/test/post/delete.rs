use super::*;

/// Tests that deleting a post removes its comments and replies.
///
/// Expected: Ok with post, comment and reply gone
#[tokio::test]
async fn cascades_to_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (commenter, post, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let reply = factory::comment::create_reply(db, &comment, commenter.id).await?;

    let repo = PostRepository::new(db);
    repo.delete(post.id).await?;

    assert!(repo.find_by_id(post.id).await?.is_none());
    assert!(entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Comment::find_by_id(reply.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
