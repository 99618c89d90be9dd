use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository for event likes. Like participations, at most one row per (event, user).
pub struct LikeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LikeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Likes an event; returns `false` when the like already existed.
    pub async fn like(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::EventLike::insert(entity::event_like::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::event_like::Column::EventId,
                entity::event_like::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes a like; returns `false` when there was nothing to remove.
    pub async fn unlike(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EventLike::delete_many()
            .filter(entity::event_like::Column::EventId.eq(event_id))
            .filter(entity::event_like::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
