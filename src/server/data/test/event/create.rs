use super::*;

/// Tests creating a new event.
///
/// Verifies that the repository inserts the event, links it to its category,
/// and that the summary read back carries organizer and category data.
///
/// Expected: Ok with event created
#[tokio::test]
async fn creates_event_with_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::UserFactory::new(db)
        .username("host")
        .first_name("Hana")
        .last_name("Sato")
        .build()
        .await?;
    let category = factory::category::create_category_with_name(db, "Gaming").await?;
    let date = Utc::now().date_naive() + Duration::days(10);

    let repo = EventRepository::new(db);
    let id = repo
        .create(CreateEventParams {
            organizer_id: organizer.id,
            title: "LAN party".to_string(),
            description: "Bring your own PC".to_string(),
            date,
            time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            min_age: 16,
            max_age: 60,
            location: "Community hall".to_string(),
            latitude: Some(40.41),
            longitude: Some(-3.7),
            max_participants: 12,
            category_id: category.id,
            image: None,
        })
        .await?;

    let summary = repo.get_summary(id, None).await?.unwrap();
    assert_eq!(summary.title, "LAN party");
    assert_eq!(summary.date, date);
    assert_eq!(summary.organizer.username, "host");
    assert_eq!(summary.organizer.full_name, "Hana Sato");
    assert_eq!(summary.category.unwrap().name, "Gaming");
    assert_eq!(summary.participant_count, 0);
    assert_eq!(summary.latitude, Some(40.41));

    Ok(())
}

/// Tests creating an event with an unknown category.
///
/// Verifies that the failed category link rolls back the event insert.
///
/// Expected: Err(DbErr) classified as a foreign key violation, no event row stored
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::create_user(db).await?;

    let err = EventRepository::new(db)
        .create(CreateEventParams {
            organizer_id: organizer.id,
            title: "Orphan".to_string(),
            description: String::new(),
            date: Utc::now().date_naive(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            min_age: 0,
            max_age: 99,
            location: "Nowhere".to_string(),
            latitude: None,
            longitude: None,
            max_participants: 1,
            category_id: 777,
            image: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::Event::find().count(db).await?, 0);

    Ok(())
}
