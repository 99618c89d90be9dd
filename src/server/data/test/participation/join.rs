use super::*;

/// Tests joining an event twice.
///
/// Verifies that the second join is a no-op and exactly one participation row
/// exists for the (event, user) pair.
///
/// Expected: Ok(true) then Ok(false), one row stored
#[tokio::test]
async fn joining_twice_keeps_one_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;

    let repo = ParticipationRepository::new(db);
    assert!(repo.join(event.id, user.id).await?);
    assert!(!repo.join(event.id, user.id).await?);

    let rows = entity::prelude::EventParticipant::find()
        .filter(entity::event_participant::Column::EventId.eq(event.id))
        .filter(entity::event_participant::Column::UserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(rows, 1);
    assert!(repo.is_participant(event.id, user.id).await?);

    Ok(())
}

/// Tests counting participations per event and per user.
///
/// Expected: Ok with counts matching inserted rows
#[tokio::test]
async fn counts_participations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, _category, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let other = factory::create_event(db, organizer.id).await?;
    let user = factory::create_user(db).await?;
    let friend = factory::create_user(db).await?;

    let repo = ParticipationRepository::new(db);
    repo.join(event.id, user.id).await?;
    repo.join(event.id, friend.id).await?;
    repo.join(other.id, user.id).await?;

    assert_eq!(repo.count_for_event(event.id).await?, 2);
    assert_eq!(repo.count_for_user(user.id).await?, 2);
    assert_eq!(repo.count_for_user(organizer.id).await?, 0);

    Ok(())
}
