use std::collections::HashSet;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, event::EventRepository},
    error::AppError,
    model::{category::Category, event::EventSummary},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    /// Creates a new CategoryService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    /// Gets one category.
    ///
    /// # Returns
    /// - `Ok(Category)` - Category found
    /// - `Err(AppError::NotFound)` - No category with this ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Gets upcoming events of a category ordered by date.
    ///
    /// # Returns
    /// - `Ok(Vec<EventSummary>)` - Possibly empty list
    /// - `Err(AppError::NotFound)` - No category with this ID
    pub async fn get_upcoming_events(&self, id: i32) -> Result<Vec<EventSummary>, AppError> {
        let category = self.get_by_id(id).await?;
        let today = Utc::now().date_naive();

        Ok(EventRepository::new(self.db)
            .get_upcoming_by_category(category.id, today)
            .await?)
    }

    /// Ensures every ID names an existing category.
    ///
    /// Used for hobby lists; duplicates are allowed.
    ///
    /// # Returns
    /// - `Ok(())` - All IDs exist, or the list is empty
    /// - `Err(AppError::BadRequest)` - At least one unknown ID
    pub async fn ensure_exist(&self, ids: &[i32]) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        let wanted: HashSet<i32> = ids.iter().copied().collect();
        let wanted: Vec<i32> = wanted.into_iter().collect();
        let existing = CategoryRepository::new(self.db)
            .find_existing_ids(&wanted)
            .await?;

        if existing.len() != wanted.len() {
            let missing: Vec<String> = wanted
                .iter()
                .filter(|id| !existing.contains(id))
                .map(i32::to_string)
                .collect();
            return Err(AppError::BadRequest(format!(
                "Invalid hobby categories: {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }
}
