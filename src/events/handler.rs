//! HTTP handlers for the calendar API
//!
//! Provides 6 REST endpoints under /v1:
//! - POST /v1/create_event     — create an event (server generates the uid)
//! - POST /v1/update_event     — replace an event's text and date
//! - POST /v1/delete_event     — delete an event
//! - GET  /v1/events_for_day   — events at the exact query instant
//! - GET  /v1/events_for_week  — events in the query date's ISO week
//! - GET  /v1/events_for_month — events in the query date's calendar month

use crate::events::service::EventService;
use crate::events::store::StoreError;
use crate::events::types::*;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Shared state for event handlers
#[derive(Clone)]
pub struct EventsState {
    pub service: EventService,
}

/// Create the events router with all REST endpoints
pub fn events_router(state: EventsState) -> Router {
    Router::new()
        .route("/v1/create_event", post(create_event))
        .route("/v1/update_event", post(update_event))
        .route("/v1/delete_event", post(delete_event))
        .route("/v1/events_for_day", get(events_for_day))
        .route("/v1/events_for_week", get(events_for_week))
        .route("/v1/events_for_month", get(events_for_month))
        .with_state(state)
}

/// Query parameters shared by the three window endpoints
#[derive(Debug, Deserialize)]
struct WindowQuery {
    user_id: Option<String>,
    date: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /v1/create_event
async fn create_event(
    State(state): State<EventsState>,
    Json(body): Json<CreateRequest>,
) -> Response {
    let user_id = match validate_user_id(body.user_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Some(date) = body.date else {
        return error_response(StatusCode::BAD_REQUEST, "date required");
    };
    if body.text.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "text required");
    }

    let event = Event {
        date: date.0,
        text: body.text,
    };
    let uid = Uuid::new_v4();

    match state.service.create(user_id, uid, event.clone()).await {
        Ok(()) => Json(EventResponse {
            result: ResultEvent::new(user_id, uid, &event),
        })
        .into_response(),
        Err(e) => store_error_response(e),
    }
}

/// POST /v1/update_event
async fn update_event(
    State(state): State<EventsState>,
    Json(body): Json<UpdateRequest>,
) -> Response {
    let user_id = match validate_user_id(body.user_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if body.uid.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "uid required");
    }
    let Some(date) = body.date else {
        return error_response(StatusCode::BAD_REQUEST, "date required");
    };
    if body.text.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "text required");
    }
    let Ok(uid) = Uuid::parse_str(&body.uid) else {
        return error_response(StatusCode::BAD_REQUEST, "invalid uid format");
    };

    match state
        .service
        .update(user_id, uid, body.text.clone(), date.0)
        .await
    {
        Ok(()) => {
            let event = Event {
                date: date.0,
                text: body.text,
            };
            Json(EventResponse {
                result: ResultEvent::new(user_id, uid, &event),
            })
            .into_response()
        }
        Err(e) => store_error_response(e),
    }
}

/// POST /v1/delete_event
async fn delete_event(
    State(state): State<EventsState>,
    Json(body): Json<DeleteRequest>,
) -> Response {
    let user_id = match validate_user_id(body.user_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if body.uid.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "uid required");
    }
    let Ok(uid) = Uuid::parse_str(&body.uid) else {
        return error_response(StatusCode::BAD_REQUEST, "invalid uid format");
    };

    match state.service.delete(user_id, uid).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => store_error_response(e),
    }
}

/// GET /v1/events_for_day
async fn events_for_day(
    State(state): State<EventsState>,
    Query(params): Query<WindowQuery>,
) -> Response {
    window_response(params, |user_id, date| async move {
        state.service.events_for_day(user_id, date).await
    })
    .await
}

/// GET /v1/events_for_week
async fn events_for_week(
    State(state): State<EventsState>,
    Query(params): Query<WindowQuery>,
) -> Response {
    window_response(params, |user_id, date| async move {
        state.service.events_for_week(user_id, date).await
    })
    .await
}

/// GET /v1/events_for_month
async fn events_for_month(
    State(state): State<EventsState>,
    Query(params): Query<WindowQuery>,
) -> Response {
    window_response(params, |user_id, date| async move {
        state.service.events_for_month(user_id, date).await
    })
    .await
}

// =============================================================================
// Shared plumbing
// =============================================================================

/// Validate and run a window query, serializing matches as an array of
/// response envelopes. Zero matches is an empty array with 200, not 404.
async fn window_response<F, Fut>(params: WindowQuery, query: F) -> Response
where
    F: FnOnce(UserId, DateTime<Utc>) -> Fut,
    Fut: std::future::Future<
        Output = Result<std::collections::HashMap<EventId, Event>, StoreError>,
    >,
{
    let Some(date) = params.date.as_deref().and_then(|d| Date::parse(d).ok()) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "invalid date format, expected: YYYY-MM-DD",
        );
    };
    let Some(raw_user) = params.user_id.as_deref().and_then(|u| u.parse::<i64>().ok()) else {
        return error_response(StatusCode::BAD_REQUEST, "invalid user_id format");
    };
    let user_id = match validate_user_id(raw_user) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match query(user_id, date.0).await {
        Ok(events) => {
            let responses: Vec<EventResponse> = events
                .iter()
                .map(|(uid, event)| EventResponse {
                    result: ResultEvent::new(user_id, *uid, event),
                })
                .collect();
            Json(responses).into_response()
        }
        Err(e) => store_error_response(e),
    }
}

fn validate_user_id(raw: i64) -> Result<UserId, Response> {
    if raw <= 0 {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "user_id required and cant be less than 1",
        ));
    }
    Ok(raw as UserId)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// Map store failures to status codes: conflict for a duplicate id,
/// not-found for both missing-user and missing-event.
fn store_error_response(err: StoreError) -> Response {
    let status = match err {
        StoreError::AlreadyExists => StatusCode::CONFLICT,
        StoreError::UserNotFound | StoreError::EventNotFound => StatusCode::NOT_FOUND,
    };
    error_response(status, &err.to_string())
}
