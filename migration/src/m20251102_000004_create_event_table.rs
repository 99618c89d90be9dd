use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::OrganizerId))
                    .col(string(Event::Title))
                    .col(date(Event::Date))
                    .col(time(Event::Time))
                    .col(text(Event::Description))
                    .col(integer(Event::MinAge).default(0))
                    .col(integer(Event::MaxAge).default(99))
                    .col(string(Event::Location))
                    .col(string_null(Event::Image))
                    .col(double_null(Event::Latitude))
                    .col(double_null(Event::Longitude))
                    .col(integer(Event::MaxParticipants))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Event::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_organizer_id")
                            .from(Event::Table, Event::OrganizerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_date")
                    .table(Event::Table)
                    .col(Event::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    OrganizerId,
    Title,
    Date,
    Time,
    Description,
    MinAge,
    MaxAge,
    Location,
    Image,
    Latitude,
    Longitude,
    MaxParticipants,
    CreatedAt,
    UpdatedAt,
}
