//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions on unique columns such as usernames.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an upcoming event together with its organizer and category.
///
/// This is a convenience method that creates:
/// 1. User (as organizer)
/// 2. Category
/// 3. Event linked to the category
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((organizer, category, event))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let organizer = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let event = crate::factory::event::EventFactory::new(db, organizer.id)
        .category(category.id)
        .build()
        .await?;

    Ok((organizer, category, event))
}

/// Creates an upcoming event organized by an existing user.
///
/// # Arguments
/// - `db` - Database connection
/// - `organizer` - User entity to use as organizer
///
/// # Returns
/// - `Ok((category, event))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_for_user(
    db: &DatabaseConnection,
    organizer: &entity::user::Model,
) -> Result<(entity::category::Model, entity::event::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let event = crate::factory::event::EventFactory::new(db, organizer.id)
        .category(category.id)
        .build()
        .await?;

    Ok((category, event))
}
