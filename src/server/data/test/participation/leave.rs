use super::*;

/// Tests leaving a joined event.
///
/// Expected: Ok(true) and the user is no longer a participant
#[tokio::test]
async fn removes_participation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_participant(db, event.id, user.id).await?;

    let repo = ParticipationRepository::new(db);
    assert!(repo.leave(event.id, user.id).await?);
    assert!(!repo.is_participant(event.id, user.id).await?);

    Ok(())
}

/// Tests leaving an event that was never joined.
///
/// Expected: Ok(false) without error
#[tokio::test]
async fn leaving_unjoined_event_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;

    let left = ParticipationRepository::new(db)
        .leave(event.id, user.id)
        .await?;

    assert!(!left);

    Ok(())
}
