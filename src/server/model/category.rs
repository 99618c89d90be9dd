//! Category domain model.
//!
//! Categories classify events and double as user hobbies.

use crate::model::category::CategoryDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// Display color in hex format (e.g., "#EF4444").
    pub color: String,
}

impl Category {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            color: self.color,
        }
    }

    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            color: entity.color,
        }
    }
}
