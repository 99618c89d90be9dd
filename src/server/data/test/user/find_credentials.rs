use super::*;

/// Tests looking up credentials by username.
///
/// Expected: Ok(Some) carrying the stored hash
#[tokio::test]
async fn returns_stored_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("login")
        .password_hash("$argon2id$stored")
        .build()
        .await?;

    let credentials = UserRepository::new(db)
        .find_credentials("login")
        .await?
        .unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "$argon2id$stored");

    Ok(())
}

/// Tests looking up an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).find_credentials("ghost").await?;

    assert!(result.is_none());

    Ok(())
}
