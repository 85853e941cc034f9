//! Concurrent in-memory event store with time-windowed retrieval
//!
//! Events live in a two-level mapping, user id to (event id to event),
//! behind a single shared/exclusive lock. Readers run concurrently; a
//! writer excludes everything for the duration of its mutation, so no
//! caller ever observes a half-applied update. A user's sub-map is
//! created lazily on first create and retained (possibly empty) after
//! its last event is deleted.

use crate::events::types::{Event, EventId, UserId};
use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Failure kinds of the store, exhaustive. All are expected, recoverable
/// conditions surfaced to the caller; the store never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Duplicate event id on create; the existing event is untouched
    #[error("already exists")]
    AlreadyExists,

    /// The user owns no sub-map at all
    #[error("user not found")]
    UserNotFound,

    /// The user exists but the event id does not
    #[error("event not found")]
    EventNotFound,
}

/// In-memory event store
pub struct EventStore {
    storage: RwLock<HashMap<UserId, HashMap<EventId, Event>>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            storage: RwLock::new(HashMap::new()),
        }
    }

    /// Insert an event under `user_id`/`event_id`.
    ///
    /// The event id is supplied by the caller; the store never generates
    /// identifiers. Fails with `AlreadyExists` if the id is already taken
    /// for that user, leaving the original event unchanged.
    pub async fn create(
        &self,
        user_id: UserId,
        event_id: EventId,
        event: Event,
    ) -> Result<(), StoreError> {
        let mut storage = self.storage.write().await;

        let user_events = storage.entry(user_id).or_default();
        if user_events.contains_key(&event_id) {
            return Err(StoreError::AlreadyExists);
        }

        user_events.insert(event_id, event);
        Ok(())
    }

    /// Replace the text and date of an existing event wholesale.
    pub async fn update(
        &self,
        user_id: UserId,
        event_id: EventId,
        text: String,
        date: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut storage = self.storage.write().await;

        let user_events = storage.get_mut(&user_id).ok_or(StoreError::UserNotFound)?;
        let event = user_events
            .get_mut(&event_id)
            .ok_or(StoreError::EventNotFound)?;

        event.text = text;
        event.date = date;
        Ok(())
    }

    /// Remove an event. The user's sub-map is retained even when this
    /// deletes its last event.
    pub async fn delete(&self, user_id: UserId, event_id: EventId) -> Result<(), StoreError> {
        let mut storage = self.storage.write().await;

        let user_events = storage.get_mut(&user_id).ok_or(StoreError::UserNotFound)?;
        user_events
            .remove(&event_id)
            .map(|_| ())
            .ok_or(StoreError::EventNotFound)
    }

    /// Events whose timestamp equals `date` exactly.
    ///
    /// Strict instant equality, including time of day; not calendar-day
    /// matching. A known user with no matches yields an empty map.
    pub async fn events_for_day(
        &self,
        user_id: UserId,
        date: DateTime<Utc>,
    ) -> Result<HashMap<EventId, Event>, StoreError> {
        self.filter_events(user_id, |event| event.date == date).await
    }

    /// Events in the same ISO 8601 week as `date`.
    ///
    /// Compares the (week-year, week-number) pair, so dates near calendar
    /// year boundaries land in the adjacent year's week where ISO rules
    /// say they should.
    pub async fn events_for_week(
        &self,
        user_id: UserId,
        date: DateTime<Utc>,
    ) -> Result<HashMap<EventId, Event>, StoreError> {
        let target = date.iso_week();
        self.filter_events(user_id, |event| {
            let week = event.date.iso_week();
            week.year() == target.year() && week.week() == target.week()
        })
        .await
    }

    /// Events in the same calendar (year, month) as `date`, ignoring day
    /// and time of day.
    pub async fn events_for_month(
        &self,
        user_id: UserId,
        date: DateTime<Utc>,
    ) -> Result<HashMap<EventId, Event>, StoreError> {
        self.filter_events(user_id, |event| {
            event.date.year() == date.year() && event.date.month() == date.month()
        })
        .await
    }

    /// Clone the user's events that satisfy `matches` under a read lock.
    ///
    /// `UserNotFound` only when the user owns no sub-map at all; an empty
    /// result is returned as an empty map, never as an error.
    async fn filter_events<F>(
        &self,
        user_id: UserId,
        matches: F,
    ) -> Result<HashMap<EventId, Event>, StoreError>
    where
        F: Fn(&Event) -> bool,
    {
        let storage = self.storage.read().await;
        let user_events = storage.get(&user_id).ok_or(StoreError::UserNotFound)?;

        Ok(user_events
            .iter()
            .filter(|(_, event)| matches(event))
            .map(|(uid, event)| (*uid, event.clone()))
            .collect())
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
