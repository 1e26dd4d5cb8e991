use super::*;

/// Tests expanding a user with their posts and comments.
///
/// Verifies that each authored post carries its biome and comments, and each authored
/// comment carries its post and direct replies.
///
/// Expected: Ok with posts and comments attached to the right user
#[tokio::test]
async fn attaches_posts_and_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, biome, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let reader = factory::user::create_user(db).await?;
    let comment = factory::comment::create_comment(db, post.id, reader.id).await?;
    let reply = factory::comment::create_reply(db, &comment, author.id).await?;

    let repo = UserRepository::new(db);
    let users = vec![
        repo.find_by_id(author.id).await?.unwrap(),
        repo.find_by_id(reader.id).await?.unwrap(),
    ];
    let expanded = repo.with_activity(users).await?;

    assert_eq!(expanded.len(), 2);

    let author_activity = &expanded[0];
    assert_eq!(author_activity.user.id, author.id);
    assert_eq!(author_activity.posts.len(), 1);
    assert_eq!(author_activity.posts[0].post.id, post.id);
    assert_eq!(
        author_activity.posts[0].biome.as_ref().map(|b| b.id),
        Some(biome.id)
    );
    let comment_ids: Vec<Uuid> = author_activity.posts[0]
        .comments
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(comment_ids, vec![comment.id, reply.id]);
    assert_eq!(author_activity.comments.len(), 1);
    assert_eq!(author_activity.comments[0].comment.id, reply.id);

    let reader_activity = &expanded[1];
    assert!(reader_activity.posts.is_empty());
    assert_eq!(reader_activity.comments.len(), 1);
    assert_eq!(reader_activity.comments[0].post.id, post.id);
    assert_eq!(reader_activity.comments[0].replies.len(), 1);
    assert_eq!(reader_activity.comments[0].replies[0].id, reply.id);

    Ok(())
}

/// Tests expanding a user without any activity.
///
/// Expected: Ok with empty posts and comments
#[tokio::test]
async fn user_without_activity_has_empty_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let expanded = repo
        .with_activity(vec![repo.find_by_id(user.id).await?.unwrap()])
        .await?;

    assert_eq!(expanded.len(), 1);
    assert!(expanded[0].posts.is_empty());
    assert!(expanded[0].comments.is_empty());

    Ok(())
}
