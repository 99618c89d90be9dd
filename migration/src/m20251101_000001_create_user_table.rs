use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Username))
                    .col(string(User::PasswordHash))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string_null(User::SecondLastName))
                    .col(date(User::BirthDate))
                    .col(text_null(User::Bio))
                    .col(string_null(User::ProfileImage))
                    .col(string_null(User::Instagram))
                    .col(string_null(User::Facebook))
                    .col(string_null(User::X))
                    .col(string_null(User::Youtube))
                    .col(string_null(User::Tiktok))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    PasswordHash,
    FirstName,
    LastName,
    SecondLastName,
    BirthDate,
    Bio,
    ProfileImage,
    Instagram,
    Facebook,
    X,
    Youtube,
    Tiktok,
    CreatedAt,
    UpdatedAt,
}
