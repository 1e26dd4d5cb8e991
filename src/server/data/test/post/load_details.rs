use super::*;

/// Tests expanding a post with author, biome and comment threads.
///
/// Expected: Ok with author summary, biome and one thread holding the reply
#[tokio::test]
async fn expands_author_biome_and_threads() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, biome, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let reader = factory::user::create_user(db).await?;
    let comment = factory::comment::create_comment(db, post.id, reader.id).await?;
    let reply = factory::comment::create_reply(db, &comment, author.id).await?;

    let repo = PostRepository::new(db);
    let posts = vec![repo.find_by_id(post.id).await?.unwrap()];
    let details = repo.load_details(posts).await?;

    assert_eq!(details.len(), 1);
    let details = &details[0];
    assert_eq!(details.author.id, author.id);
    assert_eq!(details.author.name, author.name);
    assert_eq!(details.biome.as_ref().map(|b| b.id), Some(biome.id));
    assert_eq!(details.comments.len(), 1);
    assert_eq!(details.comments[0].comment.id, comment.id);
    assert_eq!(details.comments[0].author.id, reader.id);
    assert_eq!(details.comments[0].replies.len(), 1);
    assert_eq!(details.comments[0].replies[0].comment.id, reply.id);

    Ok(())
}

/// Tests a post without biome or comments.
///
/// Expected: Ok with no biome and no comments
#[tokio::test]
async fn post_without_biome_or_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let post = factory::post::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    let details = repo
        .load_details(vec![repo.find_by_id(post.id).await?.unwrap()])
        .await?;

    assert!(details[0].biome.is_none());
    assert!(details[0].comments.is_empty());

    Ok(())
}
