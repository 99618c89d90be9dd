use super::*;

/// Tests a valid token for an existing user.
///
/// Verifies that the AuthGuard decodes the token and loads the user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::user::create_user_with_username(db, "ana").await?;
    let headers = bearer(&token_for(&tokens, user.clone()));

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.username, "ana");

    Ok(())
}

/// Tests a request without an authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an authorization header with a scheme other than Bearer.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic YW5hOnB3"));

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_user(db).await?;
    let headers = bearer(&token_for(&TokenService::new("other-secret", 7), user));

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user was deleted.
///
/// Expected: Err(AuthError::StaleToken)
#[tokio::test]
async fn rejects_user_missing_from_database() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let ghost = fixture::user::entity_builder().id(4242).build();
    let headers = bearer(&token_for(&tokens, ghost));

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::StaleToken(4242)))
    ));

    Ok(())
}

/// Tests the profile owner permission for the owner.
///
/// Expected: Ok(User)
#[tokio::test]
async fn profile_owner_grants_own_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_user(db).await?;
    let headers = bearer(&token_for(&tokens, user.clone()));

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::ProfileOwner(user.id)])
        .await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests the profile owner permission for someone else's profile.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn profile_owner_denies_other_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let headers = bearer(&token_for(&tokens, user.clone()));

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::ProfileOwner(other.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, user.id)
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
