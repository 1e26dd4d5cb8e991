use super::*;

/// Tests the ordering of comment threads.
///
/// Verifies that top-level comments come newest first while the replies under each
/// of them come oldest first.
///
/// Expected: Ok with [second, first] and first's replies in creation order
#[tokio::test]
async fn orders_threads_newest_first_and_replies_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _biome, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let first = factory::comment::create_comment(db, post.id, author.id).await?;
    let early_reply = factory::comment::create_reply(db, &first, author.id).await?;
    let second = factory::comment::create_comment(db, post.id, author.id).await?;
    let late_reply = factory::comment::create_reply(db, &first, author.id).await?;

    let repo = CommentRepository::new(db);
    let threads = repo.get_threads_for_post(post.id).await?;

    let top_level: Vec<Uuid> = threads.iter().map(|t| t.comment.id).collect();
    assert_eq!(top_level, vec![second.id, first.id]);

    assert!(threads[0].replies.is_empty());
    let replies: Vec<Uuid> = threads[1].replies.iter().map(|r| r.comment.id).collect();
    assert_eq!(replies, vec![early_reply.id, late_reply.id]);

    Ok(())
}

/// Tests that threads of other posts are not included.
///
/// Expected: Ok with only the requested post's comments
#[tokio::test]
async fn only_includes_requested_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _biome, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let other_post = factory::post::create_post(db, author.id).await?;
    let comment = factory::comment::create_comment(db, post.id, author.id).await?;
    factory::comment::create_comment(db, other_post.id, author.id).await?;

    let repo = CommentRepository::new(db);
    let threads = repo.get_threads_for_post(post.id).await?;

    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].comment.id, comment.id);
    assert_eq!(threads[0].author.id, author.id);

    Ok(())
}

/// Tests a post without comments.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_post_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _biome, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let threads = repo.get_threads_for_post(post.id).await?;

    assert!(threads.is_empty());

    Ok(())
}
