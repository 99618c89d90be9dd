use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository, event::EventRepository, like::LikeRepository,
        participation::ParticipationRepository,
    },
    error::AppError,
    model::event::{CreateEventParams, EventDetail, EventSummary},
    service::upload::UploadService,
    util::{
        multipart::UploadedFile,
        parse::{clamp_limit, parse_id_list},
    },
};

/// Default number of events returned by the popular listing.
pub const DEFAULT_POPULAR_LIMIT: u64 = 10;
/// Default number of events returned by the recent listing.
pub const DEFAULT_RECENT_LIMIT: u64 = 20;

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new EventService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    ///
    /// # Returns
    /// - `EventService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets upcoming events ranked by participants plus likes.
    ///
    /// # Arguments
    /// - `limit` - Requested page size, clamped to 1..=100 (default 10)
    pub async fn get_popular(&self, limit: Option<u64>) -> Result<Vec<EventSummary>, AppError> {
        let limit = clamp_limit(limit, DEFAULT_POPULAR_LIMIT);
        let today = Utc::now().date_naive();

        Ok(EventRepository::new(self.db).get_popular(today, limit).await?)
    }

    /// Gets the most recently created events.
    ///
    /// # Arguments
    /// - `limit` - Requested page size, clamped to 1..=100 (default 20)
    pub async fn get_recent(&self, limit: Option<u64>) -> Result<Vec<EventSummary>, AppError> {
        let limit = clamp_limit(limit, DEFAULT_RECENT_LIMIT);

        Ok(EventRepository::new(self.db).get_recent(limit).await?)
    }

    /// Searches upcoming events by text and categories.
    ///
    /// # Arguments
    /// - `term` - Optional substring of title, description or location
    /// - `categories` - Optional comma separated category IDs; unparseable entries are ignored
    pub async fn search(
        &self,
        term: Option<&str>,
        categories: Option<&str>,
    ) -> Result<Vec<EventSummary>, AppError> {
        let category_ids = categories.map(parse_id_list).unwrap_or_default();
        let today = Utc::now().date_naive();

        Ok(EventRepository::new(self.db)
            .search(today, term, &category_ids)
            .await?)
    }

    /// Gets an event with its participants.
    ///
    /// # Arguments
    /// - `id` - Event ID
    /// - `viewer` - Authenticated caller, if any; fills the participation and like flags
    ///
    /// # Returns
    /// - `Ok(EventDetail)` - Event found
    /// - `Err(AppError::NotFound)` - No event with this ID
    pub async fn get_detail(&self, id: i32, viewer: Option<i32>) -> Result<EventDetail, AppError> {
        let summary = EventRepository::new(self.db)
            .get_summary(id, viewer)
            .await?
            .ok_or_else(event_not_found)?;

        let participants = ParticipationRepository::new(self.db)
            .get_participants(id)
            .await?;

        Ok(EventDetail {
            summary,
            participants,
        })
    }

    /// Creates an event, storing its image first when one was uploaded.
    ///
    /// # Returns
    /// - `Ok(EventSummary)` - The created event
    /// - `Err(AppError::BadRequest)` - Unknown category
    /// - `Err(AppError::UploadErr)` - Image rejected or not stored
    pub async fn create(
        &self,
        mut params: CreateEventParams,
        image: Option<UploadedFile>,
        uploads: &UploadService,
    ) -> Result<EventSummary, AppError> {
        if CategoryRepository::new(self.db)
            .find_by_id(params.category_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("Invalid category".to_string()));
        }

        if let Some(image) = image {
            params.image = Some(uploads.save(image).await?);
        }

        let organizer_id = params.organizer_id;
        let stored_image = params.image.clone();
        let event_repo = EventRepository::new(self.db);
        let id = match event_repo.create(params).await {
            Ok(id) => id,
            Err(e) => {
                if let Some(path) = stored_image {
                    uploads.discard(&path).await;
                }
                return Err(e.into());
            }
        };

        tracing::info!("User {} created event {}", organizer_id, id);

        event_repo.get_summary(id, None).await?.ok_or_else(|| {
            AppError::InternalError(format!("Event {} missing right after insert", id))
        })
    }

    /// Adds the user to an event's participants.
    ///
    /// Joining an event the user already joined succeeds without changes, even when the
    /// event is full.
    ///
    /// # Returns
    /// - `Ok(())` - User is a participant
    /// - `Err(AppError::NotFound)` - No event with this ID
    /// - `Err(AppError::Conflict)` - Event is at capacity
    pub async fn join(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        let capacity = EventRepository::new(self.db)
            .get_capacity(event_id)
            .await?
            .ok_or_else(event_not_found)?;

        let participation_repo = ParticipationRepository::new(self.db);
        if participation_repo.is_participant(event_id, user_id).await? {
            return Ok(());
        }

        let count = participation_repo.count_for_event(event_id).await?;
        if count >= capacity.max(0) as u64 {
            return Err(AppError::Conflict("Event is full".to_string()));
        }

        participation_repo.join(event_id, user_id).await?;

        Ok(())
    }

    /// Removes the user from an event's participants; a no-op if they never joined.
    pub async fn leave(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        ParticipationRepository::new(self.db)
            .leave(event_id, user_id)
            .await?;

        Ok(())
    }

    /// Likes an event. Liking twice keeps one like.
    ///
    /// # Returns
    /// - `Ok(())` - Event is liked
    /// - `Err(AppError::NotFound)` - No event with this ID
    pub async fn like(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        if !EventRepository::new(self.db).exists(event_id).await? {
            return Err(event_not_found());
        }

        LikeRepository::new(self.db).like(event_id, user_id).await?;

        Ok(())
    }

    /// Removes a like; a no-op if the event wasn't liked.
    pub async fn unlike(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        LikeRepository::new(self.db).unlike(event_id, user_id).await?;

        Ok(())
    }
}

fn event_not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}
