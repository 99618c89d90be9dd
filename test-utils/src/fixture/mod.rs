//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # When to Use Fixtures
//!
//! - **Unit testing**: Test conversions and business logic without database overhead
//! - **Serialization tests**: Test DTO conversion without persistence
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let user = fixture::user::entity();
//!
//! // Create with custom fields
//! let event = fixture::event::entity_builder()
//!     .title("Picnic")
//!     .build();
//! ```

pub mod category;
pub mod event;
pub mod user;

pub use category::entity as category_entity;
pub use event::{entity as event_entity, entity_builder as event_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
