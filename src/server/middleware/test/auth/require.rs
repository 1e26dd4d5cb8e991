use super::*;

/// Tests that the author passes the author permission.
///
/// Expected: Ok(User) for the acting user
#[tokio::test]
async fn allows_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let user = AuthGuard::new(db, author.id)
        .require(&[Permission::Author(author.id)])
        .await?;

    assert_eq!(user.id, author.id);

    Ok(())
}

/// Tests that another existing user is rejected.
///
/// Expected: Err(AuthError::NotAuthor)
#[tokio::test]
async fn rejects_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let result = AuthGuard::new(db, other.id)
        .require(&[Permission::Author(author.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthor { .. }))
    ));

    Ok(())
}

/// Tests that an acting user id without a user row is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let result = AuthGuard::new(db, Uuid::new_v4())
        .require(&[Permission::Author(author.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}
