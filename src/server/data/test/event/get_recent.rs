use super::*;

/// Tests listing recently created events.
///
/// Verifies that past events are included and the newest creation comes first.
///
/// Expected: Ok with events in reverse creation order
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::create_user(db).await?;
    let first = factory::event::create_past_event(db, organizer.id, 10).await?;
    let second = factory::create_event(db, organizer.id).await?;
    let third = factory::create_event(db, organizer.id).await?;

    let events = EventRepository::new(db).get_recent(2).await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![third.id, second.id]);
    assert!(!ids.contains(&first.id));

    Ok(())
}
