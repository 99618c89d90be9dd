//! Small parsing, extraction, form and hashing helpers shared by controllers and services.

pub mod extract;
pub mod multipart;
pub mod parse;
pub mod password;
