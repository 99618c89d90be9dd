use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub color: String,
}
