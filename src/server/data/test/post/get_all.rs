use super::*;

/// Tests that posts are listed newest first.
///
/// Expected: Ok with the later post first
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let older = factory::post::create_post(db, author.id).await?;
    let newer = factory::post::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    let posts = repo.get_all().await?;

    let ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
