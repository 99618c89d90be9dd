use super::*;

/// Tests liking an event twice.
///
/// Expected: Ok(true) then Ok(false), like recorded once
#[tokio::test]
async fn liking_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;

    let repo = LikeRepository::new(db);
    assert!(repo.like(event.id, user.id).await?);
    assert!(!repo.like(event.id, user.id).await?);
    assert!(liked(db, event.id, user.id).await?);

    Ok(())
}

/// Tests liking an event that doesn't exist.
///
/// Expected: Err(DbErr) classified as a foreign key violation
#[tokio::test]
async fn rejects_unknown_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let err = LikeRepository::new(db).like(4242, user.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
