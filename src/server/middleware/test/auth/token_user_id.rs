use super::*;

/// Tests reading the token's user ID for a user that no longer exists.
///
/// Verifies that only the token is checked, so the caller can decide how to report a
/// deleted account.
///
/// Expected: Ok(4242)
#[tokio::test]
async fn reads_id_without_user_lookup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let ghost = fixture::user::entity_builder().id(4242).build();
    let headers = bearer(&token_for(&tokens, ghost));

    assert_eq!(AuthGuard::new(db, &tokens, &headers).token_user_id()?, 4242);

    Ok(())
}

/// Tests reading the token's user ID from a bad token.
///
/// Expected: Err(AuthError::MissingToken) without a header, Err(AuthError::InvalidToken)
/// for garbage
#[tokio::test]
async fn rejects_missing_or_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let empty = HeaderMap::new();
    let garbage = bearer("not-a-token");

    assert!(matches!(
        AuthGuard::new(db, &tokens, &empty).token_user_id(),
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
    assert!(matches!(
        AuthGuard::new(db, &tokens, &garbage).token_user_id(),
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
