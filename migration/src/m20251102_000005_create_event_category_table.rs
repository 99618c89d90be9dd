use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251101_000002_create_category_table::Category, m20251102_000004_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventCategory::Table)
                    .if_not_exists()
                    .col(integer(EventCategory::EventId))
                    .col(integer(EventCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(EventCategory::EventId)
                            .col(EventCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_category_event_id")
                            .from(EventCategory::Table, EventCategory::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_category_category_id")
                            .from(EventCategory::Table, EventCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventCategory {
    Table,
    EventId,
    CategoryId,
}
