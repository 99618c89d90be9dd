use super::*;

/// Tests popularity ranking.
///
/// Verifies that upcoming events are ordered by participants plus likes and
/// that past events are excluded even when they are more popular.
///
/// Expected: Ok with most popular upcoming event first
#[tokio::test]
async fn ranks_upcoming_by_participants_and_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::create_user(db).await?;
    let quiet = factory::event::EventFactory::new(db, organizer.id)
        .title("Quiet")
        .build()
        .await?;
    let busy = factory::event::EventFactory::new(db, organizer.id)
        .title("Busy")
        .build()
        .await?;
    let past = factory::event::create_past_event(db, organizer.id, 3).await?;

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    factory::create_participant(db, busy.id, a.id).await?;
    factory::create_like(db, busy.id, b.id).await?;
    factory::create_participant(db, past.id, a.id).await?;
    factory::create_participant(db, past.id, b.id).await?;
    factory::create_like(db, past.id, a.id).await?;

    let events = EventRepository::new(db)
        .get_popular(Utc::now().date_naive(), 10)
        .await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![busy.id, quiet.id]);
    assert_eq!(events[0].popularity(), 2);

    Ok(())
}

/// Tests that equally popular events are ordered by date.
///
/// Expected: Ok with the earlier event first, truncated to the limit
#[tokio::test]
async fn breaks_ties_by_date_and_limits() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::create_user(db).await?;
    let today = Utc::now().date_naive();
    factory::event::EventFactory::new(db, organizer.id)
        .date(today + Duration::days(9))
        .build()
        .await?;
    let soon = factory::event::EventFactory::new(db, organizer.id)
        .date(today + Duration::days(2))
        .build()
        .await?;
    factory::event::EventFactory::new(db, organizer.id)
        .date(today + Duration::days(5))
        .build()
        .await?;

    let events = EventRepository::new(db).get_popular(today, 1).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, soon.id);

    Ok(())
}

/// Tests that the limit applies after ranking.
///
/// Verifies that a popular event dated after several quiet ones still makes a page
/// smaller than the number of upcoming events, and that counts reflect both
/// participants and likes.
///
/// Expected: Ok with the late popular event first, then the earliest quiet event
#[tokio::test]
async fn limits_after_ranking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::create_user(db).await?;
    let today = Utc::now().date_naive();
    let earliest = factory::event::EventFactory::new(db, organizer.id)
        .date(today + Duration::days(1))
        .build()
        .await?;
    factory::event::EventFactory::new(db, organizer.id)
        .date(today + Duration::days(2))
        .build()
        .await?;
    let liked = factory::event::EventFactory::new(db, organizer.id)
        .date(today + Duration::days(3))
        .build()
        .await?;
    let popular = factory::event::EventFactory::new(db, organizer.id)
        .date(today + Duration::days(30))
        .build()
        .await?;

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    factory::create_participant(db, popular.id, a.id).await?;
    factory::create_participant(db, popular.id, b.id).await?;
    factory::create_like(db, popular.id, a.id).await?;
    factory::create_like(db, liked.id, b.id).await?;

    let events = EventRepository::new(db).get_popular(today, 3).await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![popular.id, liked.id, earliest.id]);
    assert_eq!(events[0].participant_count, 2);
    assert_eq!(events[0].like_count, 1);

    Ok(())
}
