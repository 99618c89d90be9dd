use crate::server::data::hobby::{insert_hobbies, replace_hobbies, HobbyRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
