use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251101_000001_create_user_table::User, m20251102_000004_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventLike::Table)
                    .if_not_exists()
                    .col(integer(EventLike::EventId))
                    .col(integer(EventLike::UserId))
                    .col(
                        timestamp_with_time_zone(EventLike::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(EventLike::EventId)
                            .col(EventLike::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_like_event_id")
                            .from(EventLike::Table, EventLike::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_like_user_id")
                            .from(EventLike::Table, EventLike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventLike {
    Table,
    EventId,
    UserId,
    CreatedAt,
}
