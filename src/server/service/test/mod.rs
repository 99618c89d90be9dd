use crate::server::{error::AppError, service::token::TokenService};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};


fn tokens() -> TokenService {
    TokenService::new("test-secret", 7)
}
