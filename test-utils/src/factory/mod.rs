//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert into the database and return the
//! created entity model, so foreign keys used by later factories are always valid.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let category = factory::create_category(&db).await?;
//!
//!     // Create with all dependencies
//!     let (organizer, category, event) =
//!         factory::helpers::create_event_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let event = factory::event::EventFactory::new(&db, organizer.id)
//!     .title("Board games night")
//!     .max_participants(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user accounts
//! - `category` - Create categories
//! - `event` - Create events
//! - `participant` - Join users to events
//! - `like` - Record event likes
//! - `hobby` - Attach categories to users as hobbies
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod category;
pub mod event;
pub mod helpers;
pub mod hobby;
pub mod like;
pub mod participant;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use category::create_category;
pub use event::create_event;
pub use hobby::create_hobby;
pub use like::create_like;
pub use participant::create_participant;
pub use user::create_user;
