//! Participation data repository.
//!
//! A participation row records that a user joined an event. The composite primary key
//! on (event_id, user_id) guarantees at most one row per pair; `join` relies on it to
//! stay idempotent under concurrent requests.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::event::Participant;

pub struct ParticipationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that a user joined an event.
    ///
    /// # Returns
    /// - `Ok(true)` - A new participation row was inserted
    /// - `Ok(false)` - The user had already joined
    /// - `Err(DbErr)` - Database error during insert
    pub async fn join(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::EventParticipant::insert(
            entity::event_participant::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(Utc::now()),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::event_participant::Column::EventId,
                entity::event_participant::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes a user's participation.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - The user had not joined
    /// - `Err(DbErr)` - Database error during delete
    pub async fn leave(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EventParticipant::delete_many()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .filter(entity::event_participant::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a user joined an event.
    pub async fn is_participant(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let row = entity::prelude::EventParticipant::find_by_id((event_id, user_id))
            .one(self.db)
            .await?;

        Ok(row.is_some())
    }

    /// Counts participants of an event.
    pub async fn count_for_event(&self, event_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .count(self.db)
            .await
    }

    /// Counts events a user joined.
    pub async fn count_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Gets the participants of an event in join order.
    pub async fn get_participants(&self, event_id: i32) -> Result<Vec<Participant>, DbErr> {
        let rows = entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_participant::Column::CreatedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(participation, user)| {
                user.map(|user| Participant::from_entity(participation, user))
            })
            .collect())
    }
}
