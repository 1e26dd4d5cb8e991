use super::*;

/// Tests replacing a profile image.
///
/// Verifies that the new filename is stored and the previous one is handed back so
/// its file can be removed.
///
/// Expected: Ok with new filename set and previous filename returned
#[tokio::test]
async fn returns_previous_filename() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .profile_image("old.png")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (updated, previous) = repo
        .set_profile_image(user.id, "new.png".to_string())
        .await?;

    assert_eq!(updated.profile_image.as_deref(), Some("new.png"));
    assert_eq!(previous.as_deref(), Some("old.png"));

    Ok(())
}

/// Tests setting the first profile image.
///
/// Expected: Ok with no previous filename
#[tokio::test]
async fn first_image_has_no_previous() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (_, previous) = repo
        .set_profile_image(user.id, "first.png".to_string())
        .await?;

    assert!(previous.is_none());

    Ok(())
}
