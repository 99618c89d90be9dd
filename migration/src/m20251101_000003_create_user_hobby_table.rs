use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251101_000001_create_user_table::User, m20251101_000002_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserHobby::Table)
                    .if_not_exists()
                    .col(integer(UserHobby::UserId))
                    .col(integer(UserHobby::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(UserHobby::UserId)
                            .col(UserHobby::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_hobby_user_id")
                            .from(UserHobby::Table, UserHobby::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_hobby_category_id")
                            .from(UserHobby::Table, UserHobby::CategoryId)
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
            .drop_table(Table::drop().table(UserHobby::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserHobby {
    Table,
    UserId,
    CategoryId,
}
