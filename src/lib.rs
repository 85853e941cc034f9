//! Agenda - per-user calendar service with an in-memory event store
//!
//! Events are keyed by owner (a positive integer user id) and a
//! caller-facing UUID, and retrieved through day, ISO-week, and calendar
//! month windows. The store is memory-resident only; nothing survives a
//! restart.
//!
//! ## Modules
//!
//! - [`events`]: the event store, use-case layer, and REST handlers
//! - [`server`]: router assembly and HTTP lifecycle
//! - [`config`]: configuration management
//! - [`error`]: top-level error types

pub mod config;
pub mod error;
pub mod events;
pub mod server;

pub use config::AgendaConfig;
pub use error::{Error, Result};
