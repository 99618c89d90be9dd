//! Participant factory for joining users to events in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a participation row for `user_id` on `event_id`.
///
/// # Returns
/// - `Ok(entity::event_participant::Model)` - Created participation row
/// - `Err(DbErr)` - Database error, including duplicate participation
pub async fn create_participant(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_participant::Model, DbErr> {
    entity::event_participant::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Joins every user in `user_ids` to the event.
pub async fn create_participants(
    db: &DatabaseConnection,
    event_id: i32,
    user_ids: &[i32],
) -> Result<Vec<entity::event_participant::Model>, DbErr> {
    let mut rows = Vec::with_capacity(user_ids.len());
    for user_id in user_ids {
        rows.push(create_participant(db, event_id, *user_id).await?);
    }
    Ok(rows)
}
