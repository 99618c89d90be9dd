use super::*;

/// Tests removing a like.
///
/// Expected: Ok(true) then the like row is gone; a second unlike returns Ok(false)
#[tokio::test]
async fn removes_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_like(db, event.id, user.id).await?;

    let repo = LikeRepository::new(db);
    assert!(repo.unlike(event.id, user.id).await?);
    assert!(!liked(db, event.id, user.id).await?);
    assert!(!repo.unlike(event.id, user.id).await?);

    Ok(())
}
