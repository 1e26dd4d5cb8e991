use super::*;

/// Tests that a registered email is reported as taken.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_registered_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "taken@example.com").await?;

    let repo = UserRepository::new(db);
    assert!(repo.email_taken("taken@example.com", None).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}

/// Tests that the excluded user's own email doesn't count as taken.
///
/// Expected: Ok(false) when excluding the owner, Ok(true) otherwise
#[tokio::test]
async fn ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user_with_email(db, "own@example.com").await?;
    let other = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.email_taken("own@example.com", Some(owner.id)).await?);
    assert!(repo.email_taken("own@example.com", Some(other.id)).await?);

    Ok(())
}
