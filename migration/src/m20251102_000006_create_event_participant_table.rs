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
                    .table(EventParticipant::Table)
                    .if_not_exists()
                    .col(integer(EventParticipant::EventId))
                    .col(integer(EventParticipant::UserId))
                    .col(
                        timestamp_with_time_zone(EventParticipant::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(EventParticipant::EventId)
                            .col(EventParticipant::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_participant_event_id")
                            .from(EventParticipant::Table, EventParticipant::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_participant_user_id")
                            .from(EventParticipant::Table, EventParticipant::UserId)
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
            .drop_table(Table::drop().table(EventParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventParticipant {
    Table,
    EventId,
    UserId,
    CreatedAt,
}
