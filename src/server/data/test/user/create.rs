use super::*;

fn params(username: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        password_hash: "hash".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Lopez".to_string(),
        second_last_name: None,
        birth_date: NaiveDate::from_ymd_opt(1992, 3, 4).unwrap(),
        bio: Some("Climber".to_string()),
        hobbies: Vec::new(),
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository inserts the account and returns the public
/// domain model with the provided fields.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ana")).await?;

    assert_eq!(user.username, "ana");
    assert_eq!(user.bio.as_deref(), Some("Climber"));
    assert!(repo.username_exists("ana").await?);

    Ok(())
}

/// Tests creating a user with a taken username.
///
/// Verifies that the unique constraint on username rejects the second insert
/// with an error SeaORM classifies as a unique violation.
///
/// Expected: Err(DbErr) with UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_username(db, "taken").await?;

    let result = UserRepository::new(db).create(params("taken")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests creating a user together with hobbies.
///
/// Expected: Ok with each hobby linked once
#[tokio::test]
async fn creates_user_with_hobbies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let art = factory::category::create_category_with_name(db, "Art").await?;
    let books = factory::category::create_category_with_name(db, "Books").await?;

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            hobbies: vec![books.id, art.id, books.id],
            ..params("ana")
        })
        .await?;

    let hobbies = HobbyRepository::new(db).get_for_user(user.id).await?;
    let names: Vec<&str> = hobbies.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Art", "Books"]);

    Ok(())
}

/// Tests creating a user with a hobby that references no category.
///
/// Verifies that the failed hobby insert rolls back the account row.
///
/// Expected: Err(DbErr) as a foreign key violation, username still free
#[tokio::test]
async fn unknown_hobby_rolls_back_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let err = repo
        .create(CreateUserParams {
            hobbies: vec![9999],
            ..params("ana")
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(!repo.username_exists("ana").await?);

    Ok(())
}
