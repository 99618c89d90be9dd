//! HTTP request handlers.
//!
//! Controllers authenticate the request through `AuthGuard`, convert DTOs and form data
//! into domain parameters, call a service and wrap the resulting DTO in the
//! `ApiResponse` envelope. Each handler carries a `#[utoipa::path]` annotation that
//! feeds the generated OpenAPI document.

pub mod auth;
pub mod category;
pub mod event;
pub mod health;
pub mod search;
pub mod user;
