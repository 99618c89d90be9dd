//! SeaORM entity definitions for the MyEventz schema.
//!
//! One module per table. The schema itself is owned by the `migration` crate;
//! these definitions must be kept in sync with it.

pub mod prelude;

pub mod category;
pub mod event;
pub mod event_category;
pub mod event_like;
pub mod event_participant;
pub mod user;
pub mod user_hobby;
