//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation rules such as event capacity and hobby existence
//! - **Orchestration**: Coordinating multiple repository calls into one operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Database-bound services borrow the connection (`XService<'a>`) and are constructed per
//! request. `TokenService` and `UploadService` hold configuration and live in `AppState`.

pub mod auth;
pub mod category;
pub mod event;
pub mod search;
pub mod token;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
