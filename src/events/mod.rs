//! Per-user calendar events
//!
//! The store owns all event data; the service forwards calls and adds
//! tracing context; the handlers expose the REST surface and map typed
//! store errors to status codes.

pub mod handler;
pub mod service;
pub mod store;
pub mod types;

pub use handler::{events_router, EventsState};
pub use service::EventService;
pub use store::{EventStore, StoreError};
pub use types::{Date, Event, EventId, UserId};
