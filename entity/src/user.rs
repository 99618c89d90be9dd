use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: Option<String>,
    pub birth_date: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub x: Option<String>,
    pub youtube: Option<String>,
    pub tiktok: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
    #[sea_orm(has_many = "super::event_participant::Entity")]
    EventParticipant,
    #[sea_orm(has_many = "super::event_like::Entity")]
    EventLike,
    #[sea_orm(has_many = "super::user_hobby::Entity")]
    UserHobby,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::event_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventParticipant.def()
    }
}

impl Related<super::event_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventLike.def()
    }
}

impl Related<super::user_hobby::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserHobby.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
