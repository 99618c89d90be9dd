pub mod api;
pub mod auth;
pub mod category;
pub mod event;
pub mod search;
pub mod user;
