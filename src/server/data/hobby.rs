use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::category::Category;

/// Repository for the user ↔ category hobby links.
pub struct HobbyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HobbyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the categories a user lists as hobbies, ordered by name.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Category>, DbErr> {
        let category_ids: Vec<i32> = entity::prelude::UserHobby::find()
            .filter(entity::user_hobby::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|h| h.category_id)
            .collect();

        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let categories = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(category_ids))
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }
}

/// Adds hobbies to a user, ignoring ones already present.
///
/// Takes any connection so account creation can run it inside its transaction.
///
/// # Returns
/// - `Ok(u64)` - Number of newly inserted links
/// - `Err(DbErr)` - Database error, including a foreign key violation for unknown categories
pub(super) async fn insert_hobbies<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    category_ids: &[i32],
) -> Result<u64, DbErr> {
    if category_ids.is_empty() {
        return Ok(0);
    }

    let models = category_ids
        .iter()
        .map(|category_id| entity::user_hobby::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            category_id: ActiveValue::Set(*category_id),
        });

    entity::prelude::UserHobby::insert_many(models)
        .on_conflict(
            OnConflict::columns([
                entity::user_hobby::Column::UserId,
                entity::user_hobby::Column::CategoryId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await
}

/// Replaces a user's whole hobby set.
///
/// Callers run this inside a transaction so a failed insert keeps the old set.
pub(super) async fn replace_hobbies<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    category_ids: &[i32],
) -> Result<(), DbErr> {
    entity::prelude::UserHobby::delete_many()
        .filter(entity::user_hobby::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;

    insert_hobbies(conn, user_id, category_ids).await?;

    Ok(())
}
