pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_user_table;
mod m20251101_000002_create_category_table;
mod m20251101_000003_create_user_hobby_table;
mod m20251102_000004_create_event_table;
mod m20251102_000005_create_event_category_table;
mod m20251102_000006_create_event_participant_table;
mod m20251102_000007_create_event_like_table;
mod m20251103_000008_seed_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_user_table::Migration),
            Box::new(m20251101_000002_create_category_table::Migration),
            Box::new(m20251101_000003_create_user_hobby_table::Migration),
            Box::new(m20251102_000004_create_event_table::Migration),
            Box::new(m20251102_000005_create_event_category_table::Migration),
            Box::new(m20251102_000006_create_event_participant_table::Migration),
            Box::new(m20251102_000007_create_event_like_table::Migration),
            Box::new(m20251103_000008_seed_categories::Migration),
        ]
    }
}
