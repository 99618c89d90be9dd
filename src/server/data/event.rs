//! Event data repository for database operations.
//!
//! This module provides the `EventRepository`, which owns every event query: creation,
//! the public listings (popular, recent, search, by category) and the per-user listings
//! (organized, participating, liked). Listings return `EventSummary` domain models
//! enriched with organizer, category and counters. Relations are batch loaded with
//! `IN` queries and joined in memory rather than issuing one query per event.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    sea_query::{Expr, ExprTrait, Func, Query},
};

use crate::server::model::{
    category::Category,
    event::{CreateEventParams, EventSummary, Organizer},
    user::full_name,
};

/// Repository providing database operations for events.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event and links it to its category.
    ///
    /// Both rows are written in one transaction; if the category link fails no event is
    /// left behind.
    ///
    /// # Arguments
    /// - `params` - Validated event fields, organizer and category
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the created event
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn create(&self, params: CreateEventParams) -> Result<i32, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let event = entity::event::ActiveModel {
            organizer_id: ActiveValue::Set(params.organizer_id),
            title: ActiveValue::Set(params.title),
            date: ActiveValue::Set(params.date),
            time: ActiveValue::Set(params.time),
            description: ActiveValue::Set(params.description),
            min_age: ActiveValue::Set(params.min_age),
            max_age: ActiveValue::Set(params.max_age),
            location: ActiveValue::Set(params.location),
            image: ActiveValue::Set(params.image),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            max_participants: ActiveValue::Set(params.max_participants),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::event_category::ActiveModel {
            event_id: ActiveValue::Set(event.id),
            category_id: ActiveValue::Set(params.category_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(event.id)
    }

    /// Gets an event's participant capacity.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - The event's `max_participants`
    /// - `Ok(None)` - Event not found
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_capacity(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let event = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(event.map(|e| e.max_participants))
    }

    /// Checks whether an event exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Event::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets one event summary.
    ///
    /// When `viewer` is set, the summary carries `is_participant` and `liked_by_user`
    /// flags for that user.
    ///
    /// # Returns
    /// - `Ok(Some(EventSummary))` - Event found
    /// - `Ok(None)` - Event not found
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_summary(
        &self,
        id: i32,
        viewer: Option<i32>,
    ) -> Result<Option<EventSummary>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.summarize(vec![event], viewer).await?.pop())
    }

    /// Gets upcoming events ranked by participants plus likes.
    ///
    /// Ranking and the limit are applied in the query so only the returned page is
    /// summarized. Ties are broken by the earliest date and time.
    ///
    /// # Arguments
    /// - `today` - First date considered upcoming
    /// - `limit` - Maximum number of events to return
    pub async fn get_popular(
        &self,
        today: NaiveDate,
        limit: u64,
    ) -> Result<Vec<EventSummary>, DbErr> {
        let events = entity::prelude::Event::find()
            .filter(entity::event::Column::Date.gte(today))
            .order_by(popularity(), Order::Desc)
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Time)
            .order_by_asc(entity::event::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.summarize(events, None).await
    }

    /// Gets the most recently created events, past or upcoming.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<EventSummary>, DbErr> {
        let events = entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::CreatedAt)
            .order_by_desc(entity::event::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.summarize(events, None).await
    }

    /// Searches upcoming events.
    ///
    /// # Arguments
    /// - `today` - First date considered upcoming
    /// - `term` - Optional text matched against title, description and location
    /// - `category_ids` - Optional category filter; empty means any category
    ///
    /// # Returns
    /// - `Ok(Vec<EventSummary>)` - Matching events ordered by date and time
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(
        &self,
        today: NaiveDate,
        term: Option<&str>,
        category_ids: &[i32],
    ) -> Result<Vec<EventSummary>, DbErr> {
        let mut query = entity::prelude::Event::find()
            .filter(entity::event::Column::Date.gte(today))
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Time);

        if let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) {
            query = query.filter(
                sea_orm::Condition::any()
                    .add(entity::event::Column::Title.contains(term))
                    .add(entity::event::Column::Description.contains(term))
                    .add(entity::event::Column::Location.contains(term)),
            );
        }

        if !category_ids.is_empty() {
            let event_ids = self.event_ids_in_categories(category_ids).await?;
            if event_ids.is_empty() {
                return Ok(Vec::new());
            }
            query = query.filter(entity::event::Column::Id.is_in(event_ids));
        }

        let events = query.all(self.db).await?;

        self.summarize(events, None).await
    }

    /// Gets upcoming events in a category ordered by date and time.
    pub async fn get_upcoming_by_category(
        &self,
        category_id: i32,
        today: NaiveDate,
    ) -> Result<Vec<EventSummary>, DbErr> {
        self.search(today, None, &[category_id]).await
    }

    /// Gets events organized by a user, latest date first.
    pub async fn get_organized_by(&self, user_id: i32) -> Result<Vec<EventSummary>, DbErr> {
        let events = entity::prelude::Event::find()
            .filter(entity::event::Column::OrganizerId.eq(user_id))
            .order_by_desc(entity::event::Column::Date)
            .order_by_desc(entity::event::Column::Time)
            .all(self.db)
            .await?;

        self.summarize(events, None).await
    }

    /// Counts events organized by a user.
    pub async fn count_organized_by(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::OrganizerId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Gets events a user joined, latest date first.
    pub async fn get_participating(&self, user_id: i32) -> Result<Vec<EventSummary>, DbErr> {
        let event_ids: Vec<i32> = entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| p.event_id)
            .collect();

        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let events = entity::prelude::Event::find()
            .filter(entity::event::Column::Id.is_in(event_ids))
            .order_by_desc(entity::event::Column::Date)
            .order_by_desc(entity::event::Column::Time)
            .all(self.db)
            .await?;

        self.summarize(events, None).await
    }

    /// Gets events a user liked, most recently liked first.
    ///
    /// Every returned summary has `liked_by_user` set to `true`.
    pub async fn get_liked_by(&self, user_id: i32) -> Result<Vec<EventSummary>, DbErr> {
        let likes = entity::prelude::EventLike::find()
            .filter(entity::event_like::Column::UserId.eq(user_id))
            .order_by_desc(entity::event_like::Column::CreatedAt)
            .all(self.db)
            .await?;

        if likes.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: Vec<i32> = likes.iter().map(|l| l.event_id).collect();
        let mut events: HashMap<i32, entity::event::Model> = entity::prelude::Event::find()
            .filter(entity::event::Column::Id.is_in(event_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        // Restore like order
        let ordered: Vec<entity::event::Model> = likes
            .iter()
            .filter_map(|like| events.remove(&like.event_id))
            .collect();

        let mut summaries = self.summarize(ordered, None).await?;
        for summary in &mut summaries {
            summary.liked_by_user = Some(true);
        }

        Ok(summaries)
    }

    /// Event IDs linked to any of the given categories.
    async fn event_ids_in_categories(&self, category_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        let links = entity::prelude::EventCategory::find()
            .filter(entity::event_category::Column::CategoryId.is_in(category_ids.to_vec()))
            .all(self.db)
            .await?;

        let ids: HashSet<i32> = links.into_iter().map(|l| l.event_id).collect();

        Ok(ids.into_iter().collect())
    }

    /// Enriches event rows with organizer, category and counters.
    ///
    /// Preserves the input order. When `viewer` is set, also fills the
    /// `is_participant` and `liked_by_user` flags for that user.
    async fn summarize(
        &self,
        events: Vec<entity::event::Model>,
        viewer: Option<i32>,
    ) -> Result<Vec<EventSummary>, DbErr> {
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: Vec<i32> = events.iter().map(|e| e.id).collect();
        let organizer_ids: HashSet<i32> = events.iter().map(|e| e.organizer_id).collect();

        // Fetch organizers in one query
        let organizers: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(organizer_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        // Fetch category links and the categories they point to
        let links = entity::prelude::EventCategory::find()
            .filter(entity::event_category::Column::EventId.is_in(event_ids.clone()))
            .order_by_asc(entity::event_category::Column::CategoryId)
            .all(self.db)
            .await?;
        let category_ids: HashSet<i32> = links.iter().map(|l| l.category_id).collect();
        let categories: HashMap<i32, entity::category::Model> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Category::find()
                .filter(entity::category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };
        let mut event_categories: HashMap<i32, Category> = HashMap::new();
        for link in links {
            if let Some(category) = categories.get(&link.category_id) {
                event_categories
                    .entry(link.event_id)
                    .or_insert_with(|| Category::from_entity(category.clone()));
            }
        }

        let participations = entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.is_in(event_ids.clone()))
            .all(self.db)
            .await?;
        let likes = entity::prelude::EventLike::find()
            .filter(entity::event_like::Column::EventId.is_in(event_ids))
            .all(self.db)
            .await?;

        let mut participant_counts: HashMap<i32, u64> = HashMap::new();
        let mut joined_by_viewer: HashSet<i32> = HashSet::new();
        for participation in &participations {
            *participant_counts.entry(participation.event_id).or_default() += 1;
            if viewer == Some(participation.user_id) {
                joined_by_viewer.insert(participation.event_id);
            }
        }

        let mut like_counts: HashMap<i32, u64> = HashMap::new();
        let mut liked_by_viewer: HashSet<i32> = HashSet::new();
        for like in &likes {
            *like_counts.entry(like.event_id).or_default() += 1;
            if viewer == Some(like.user_id) {
                liked_by_viewer.insert(like.event_id);
            }
        }

        let mut summaries = Vec::with_capacity(events.len());
        for event in events {
            let organizer = organizers.get(&event.organizer_id).ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Organizer {} of event {} not found",
                    event.organizer_id, event.id
                ))
            })?;

            let id = event.id;
            let mut summary = EventSummary::from_entity(
                event,
                Organizer {
                    id: organizer.id,
                    username: organizer.username.clone(),
                    full_name: full_name(
                        &organizer.first_name,
                        &organizer.last_name,
                        organizer.second_last_name.as_deref(),
                    ),
                    profile_image: organizer.profile_image.clone(),
                },
                event_categories.get(&id).cloned(),
                participant_counts.get(&id).copied().unwrap_or(0),
                like_counts.get(&id).copied().unwrap_or(0),
            );

            if viewer.is_some() {
                summary.is_participant = Some(joined_by_viewer.contains(&id));
                summary.liked_by_user = Some(liked_by_viewer.contains(&id));
            }

            summaries.push(summary);
        }

        Ok(summaries)
    }
}

/// Participant count plus like count of the outer `event` row, as correlated subqueries.
fn popularity() -> Expr {
    let participants = Query::select()
        .expr(Func::count(Expr::col((
            entity::prelude::EventParticipant,
            entity::event_participant::Column::UserId,
        ))))
        .from(entity::prelude::EventParticipant)
        .and_where(
            Expr::col((
                entity::prelude::EventParticipant,
                entity::event_participant::Column::EventId,
            ))
            .equals((entity::prelude::Event, entity::event::Column::Id)),
        )
        .to_owned();
    let likes = Query::select()
        .expr(Func::count(Expr::col((
            entity::prelude::EventLike,
            entity::event_like::Column::UserId,
        ))))
        .from(entity::prelude::EventLike)
        .and_where(
            Expr::col((entity::prelude::EventLike, entity::event_like::Column::EventId))
                .equals((entity::prelude::Event, entity::event::Column::Id)),
        )
        .to_owned();

    Expr::from(participants).add(Expr::from(likes))
}
