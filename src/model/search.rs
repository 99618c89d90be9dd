use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{event::EventDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SearchResultsDto {
    pub users: Vec<UserDto>,
    pub events: Vec<EventDto>,
}
