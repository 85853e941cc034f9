//! HTTP server assembly and lifecycle

use crate::config::AgendaConfig;
use crate::error::{Error, Result};
use crate::events::{events_router, EventService, EventStore, EventsState};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Agenda HTTP server
///
/// Owns the event store for its lifetime; all access goes through the
/// routed handlers. The store is volatile, so stopping the server drops
/// every event with it.
pub struct Server {
    config: AgendaConfig,
    store: Arc<EventStore>,
}

impl Server {
    /// Create a server with the given configuration and a fresh store
    pub fn new(config: AgendaConfig) -> Self {
        Self {
            config,
            store: Arc::new(EventStore::new()),
        }
    }

    /// Build the full application router
    pub fn router(&self) -> Router {
        let state = EventsState {
            service: EventService::new(self.store.clone()),
        };

        Router::new()
            .route("/healthz", get(|| async { "ok" }))
            .merge(events_router(state))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Bind and serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tracing::info!("Agenda listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| Error::Server(e.to_string()))?;

        tracing::info!("Agenda stopped");
        Ok(())
    }
}

/// Builder for Server
pub struct ServerBuilder {
    config: AgendaConfig,
}

impl ServerBuilder {
    /// Create a new builder with default config
    pub fn new() -> Self {
        Self {
            config: AgendaConfig::default(),
        }
    }

    /// Set the configuration
    pub fn config(mut self, config: AgendaConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the server host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.server.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    /// Build the server
    pub fn build(self) -> Server {
        Server::new(self.config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
