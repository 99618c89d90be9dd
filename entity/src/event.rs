use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub organizer_id: i32,
    pub title: String,
    pub date: Date,
    pub time: Time,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub min_age: i32,
    pub max_age: i32,
    pub location: String,
    pub image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub max_participants: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OrganizerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::event_category::Entity")]
    EventCategory,
    #[sea_orm(has_many = "super::event_participant::Entity")]
    EventParticipant,
    #[sea_orm(has_many = "super::event_like::Entity")]
    EventLike,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::event_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventCategory.def()
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

impl ActiveModelBehavior for ActiveModel {}
