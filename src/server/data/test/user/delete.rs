use super::*;

/// Tests that deleting a user removes their posts and comments.
///
/// Expected: Ok with user, post and comment gone
#[tokio::test]
async fn cascades_to_posts_and_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _biome, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let comment = factory::comment::create_comment(db, post.id, author.id).await?;

    let repo = UserRepository::new(db);
    repo.delete(author.id).await?;

    assert!(entity::prelude::User::find_by_id(author.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Post::find_by_id(post.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
