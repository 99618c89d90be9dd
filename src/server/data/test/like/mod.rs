use crate::server::data::like::LikeRepository;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod remove;

async fn liked(db: &DatabaseConnection, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
    let row = entity::prelude::EventLike::find_by_id((event_id, user_id))
        .one(db)
        .await?;

    Ok(row.is_some())
}
