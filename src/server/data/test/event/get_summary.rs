use super::*;

/// Tests the viewer flags on an event summary.
///
/// Verifies that a viewer who joined and liked the event sees both flags set,
/// while another viewer sees both cleared and an anonymous view sees neither.
///
/// Expected: Ok with flags computed per viewer
#[tokio::test]
async fn sets_viewer_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let fan = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    factory::create_participant(db, event.id, fan.id).await?;
    factory::create_like(db, event.id, fan.id).await?;

    let repo = EventRepository::new(db);

    let as_fan = repo.get_summary(event.id, Some(fan.id)).await?.unwrap();
    assert_eq!(as_fan.is_participant, Some(true));
    assert_eq!(as_fan.liked_by_user, Some(true));
    assert_eq!(as_fan.participant_count, 1);
    assert_eq!(as_fan.like_count, 1);

    let as_stranger = repo.get_summary(event.id, Some(stranger.id)).await?.unwrap();
    assert_eq!(as_stranger.is_participant, Some(false));
    assert_eq!(as_stranger.liked_by_user, Some(false));

    let anonymous = repo.get_summary(event.id, None).await?.unwrap();
    assert_eq!(anonymous.is_participant, None);
    assert_eq!(anonymous.liked_by_user, None);

    Ok(())
}

/// Tests fetching an event that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);

    assert!(repo.get_summary(12345, None).await?.is_none());
    assert!(repo.get_capacity(12345).await?.is_none());
    assert!(!repo.exists(12345).await?);

    Ok(())
}
