use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub color: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_category::Entity")]
    EventCategory,
    #[sea_orm(has_many = "super::user_hobby::Entity")]
    UserHobby,
}

impl Related<super::event_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventCategory.def()
    }
}

impl Related<super::user_hobby::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserHobby.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
