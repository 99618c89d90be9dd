pub use super::category::Entity as Category;
pub use super::event::Entity as Event;
pub use super::event_category::Entity as EventCategory;
pub use super::event_like::Entity as EventLike;
pub use super::event_participant::Entity as EventParticipant;
pub use super::user::Entity as User;
pub use super::user_hobby::Entity as UserHobby;
