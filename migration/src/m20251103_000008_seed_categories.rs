use sea_orm_migration::prelude::*;

use super::m20251101_000002_create_category_table::Category;

/// Default categories offered at registration and event creation.
const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Sports", "#EF4444"),
    ("Music", "#8B5CF6"),
    ("Art", "#EC4899"),
    ("Technology", "#3B82F6"),
    ("Gaming", "#10B981"),
    ("Food & Drink", "#F59E0B"),
    ("Travel", "#06B6D4"),
    ("Outdoors", "#22C55E"),
    ("Books", "#A16207"),
    ("Cinema", "#6366F1"),
    ("Photography", "#64748B"),
    ("Dance", "#F43F5E"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Category::Table)
            .columns([Category::Name, Category::Color]);

        for (name, color) in DEFAULT_CATEGORIES {
            insert
                .values([(*name).into(), (*color).into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        insert.on_conflict(OnConflict::column(Category::Name).do_nothing().to_owned());

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = DEFAULT_CATEGORIES.iter().map(|(name, _)| *name).collect();

        let delete = Query::delete()
            .from_table(Category::Table)
            .and_where(Expr::col(Category::Name).is_in(names))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
