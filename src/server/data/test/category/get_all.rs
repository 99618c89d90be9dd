use super::*;

/// Tests listing categories.
///
/// Verifies that categories come back ordered by name regardless of insert order.
///
/// Expected: Ok with categories sorted by name
#[tokio::test]
async fn returns_categories_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_with_name(db, "Music").await?;
    factory::category::create_category_with_name(db, "Art").await?;
    factory::category::create_category_with_name(db, "Sports").await?;

    let categories = CategoryRepository::new(db).get_all().await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Art", "Music", "Sports"]);

    Ok(())
}

/// Tests finding a category by ID.
///
/// Expected: Ok(Some) for an existing ID, Ok(None) otherwise
#[tokio::test]
async fn finds_category_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::category::CategoryFactory::new(db)
        .name("Dance")
        .color("#F43F5E")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.name, "Dance");
    assert_eq!(found.color, "#F43F5E");
    assert!(repo.find_by_id(created.id + 100).await?.is_none());

    Ok(())
}
