//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Duplicate-safe writes (joins, likes, hobbies) rely on composite primary keys and
//! `ON CONFLICT DO NOTHING` rather than application-level locking.

pub mod category;
pub mod event;
pub mod hobby;
pub mod like;
pub mod participation;
pub mod user;
