//! Hobby factory for attaching categories to users in tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records `category_id` as a hobby of `user_id`.
pub async fn create_hobby(
    db: &DatabaseConnection,
    user_id: i32,
    category_id: i32,
) -> Result<entity::user_hobby::Model, DbErr> {
    entity::user_hobby::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        category_id: ActiveValue::Set(category_id),
    }
    .insert(db)
    .await
}
