//! Like factory for recording event likes in tests.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a like by `user_id` on `event_id`, timestamped now.
pub async fn create_like(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_like::Model, DbErr> {
    create_like_at(db, event_id, user_id, Utc::now()).await
}

/// Inserts a like with an explicit timestamp.
///
/// Useful for asserting ordering by like time.
pub async fn create_like_at(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
    created_at: DateTime<Utc>,
) -> Result<entity::event_like::Model, DbErr> {
    entity::event_like::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(created_at),
    }
    .insert(db)
    .await
}
