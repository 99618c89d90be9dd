use super::*;

/// Tests adding hobbies twice.
///
/// Verifies that already present hobbies are skipped rather than rejected.
///
/// Expected: Ok with only new links counted
#[tokio::test]
async fn ignores_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let art = factory::category::create_category_with_name(db, "Art").await?;
    let music = factory::category::create_category_with_name(db, "Music").await?;

    assert_eq!(insert_hobbies(db, user.id, &[art.id]).await?, 1);
    insert_hobbies(db, user.id, &[art.id, music.id]).await?;

    let hobbies = HobbyRepository::new(db).get_for_user(user.id).await?;
    let names: Vec<&str> = hobbies.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Art", "Music"]);

    Ok(())
}

/// Tests adding a hobby that references no category.
///
/// Expected: Err(DbErr) classified as a foreign key violation
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let err = insert_hobbies(db, user.id, &[9999]).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
