use super::*;

/// Tests the optional viewer lookup with a valid token.
///
/// Expected: Some(user id)
#[tokio::test]
async fn returns_id_for_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_user(db).await?;
    let headers = bearer(&token_for(&tokens, user.clone()));

    assert_eq!(AuthGuard::new(db, &tokens, &headers).viewer_id(), Some(user.id));

    Ok(())
}

/// Tests the optional viewer lookup without a usable token.
///
/// Verifies that absent and invalid tokens both fall back to anonymous.
///
/// Expected: None in both cases
#[tokio::test]
async fn anonymous_without_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let empty = HeaderMap::new();
    let garbage = bearer("not-a-token");

    assert_eq!(AuthGuard::new(db, &tokens, &empty).viewer_id(), None);
    assert_eq!(AuthGuard::new(db, &tokens, &garbage).viewer_id(), None);

    Ok(())
}
