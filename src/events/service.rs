//! Use-case layer over the event store
//!
//! Forwards calls one-to-one and attaches tracing context so a failure
//! names the operation it came from. Errors pass through typed; retries,
//! if any, belong to the caller.

use crate::events::store::{EventStore, StoreError};
use crate::events::types::{Event, EventId, UserId};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;

/// Calendar use-cases, backed by the in-memory store
#[derive(Clone)]
pub struct EventService {
    store: Arc<EventStore>,
}

impl EventService {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        user_id: UserId,
        event_id: EventId,
        event: Event,
    ) -> Result<(), StoreError> {
        self.store.create(user_id, event_id, event).await.map_err(|e| {
            tracing::debug!(user_id, %event_id, error = %e, "create rejected");
            e
        })
    }

    pub async fn update(
        &self,
        user_id: UserId,
        event_id: EventId,
        text: String,
        date: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.store
            .update(user_id, event_id, text, date)
            .await
            .map_err(|e| {
                tracing::debug!(user_id, %event_id, error = %e, "update rejected");
                e
            })
    }

    pub async fn delete(&self, user_id: UserId, event_id: EventId) -> Result<(), StoreError> {
        self.store.delete(user_id, event_id).await.map_err(|e| {
            tracing::debug!(user_id, %event_id, error = %e, "delete rejected");
            e
        })
    }

    pub async fn events_for_day(
        &self,
        user_id: UserId,
        date: DateTime<Utc>,
    ) -> Result<HashMap<EventId, Event>, StoreError> {
        self.store.events_for_day(user_id, date).await
    }

    pub async fn events_for_week(
        &self,
        user_id: UserId,
        date: DateTime<Utc>,
    ) -> Result<HashMap<EventId, Event>, StoreError> {
        self.store.events_for_week(user_id, date).await
    }

    pub async fn events_for_month(
        &self,
        user_id: UserId,
        date: DateTime<Utc>,
    ) -> Result<HashMap<EventId, Event>, StoreError> {
        self.store.events_for_month(user_id, date).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn make_service() -> EventService {
        EventService::new(Arc::new(EventStore::new()))
    }

    #[tokio::test]
    async fn test_service_round_trip() {
        let service = make_service();
        let date = Utc.with_ymd_and_hms(2026, 1, 1, 10, 0, 0).unwrap();
        let uid = Uuid::new_v4();

        service
            .create(
                1,
                uid,
                Event {
                    date,
                    text: "call mom".to_string(),
                },
            )
            .await
            .unwrap();

        let events = service.events_for_day(1, date).await.unwrap();
        assert_eq!(events[&uid].text, "call mom");

        service.delete(1, uid).await.unwrap();
        assert!(service.events_for_day(1, date).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_service_passes_errors_through() {
        let service = make_service();
        let date = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        let err = service
            .update(5, Uuid::new_v4(), "x".to_string(), date)
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::UserNotFound);

        let err = service.events_for_week(5, date).await.unwrap_err();
        assert_eq!(err, StoreError::UserNotFound);
    }
}
