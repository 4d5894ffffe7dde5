// Request handlers for API endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use chrono::Local;
use serde::Deserialize;
use tracing::{info, warn};

use crate::api::responses::{
    ApiError, CreateEventResponse, DashboardResponse, HealthResponse, RegistrationResponse,
};
use crate::api::AppState;
use crate::core::errors::CatalogError;
use crate::core::models::{parse_date, Event, EventDraft, EventId, RegistrationDraft, RegistrationView};

/// Number of events shown on the dashboard
pub const RECENT_EVENTS_LIMIT: usize = 3;

/// Query parameters for the event list
#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Extract request ID from headers or generate UUID
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Dashboard handler
///
/// GET /api/dashboard
pub async fn dashboard_handler(State(app_state): State<AppState>) -> Json<DashboardResponse> {
    let today = Local::now().date_naive();

    let response = app_state
        .catalog
        .view(|catalog| DashboardResponse {
            stats: catalog.dashboard_stats(today),
            recent_events: catalog.recent_events(RECENT_EVENTS_LIMIT).to_vec(),
        })
        .await;

    Json(response)
}

/// Event list handler
///
/// GET /api/events?category=&search=
pub async fn list_events_handler(
    State(app_state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Json<Vec<Event>> {
    let events = app_state
        .catalog
        .view(|catalog| {
            catalog
                .filter_events(query.category.as_deref(), query.search.as_deref())
                .into_iter()
                .cloned()
                .collect()
        })
        .await;

    Json(events)
}

/// Event creation handler
///
/// POST /api/events
pub async fn create_event_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<EventDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateEventResponse>), ApiError> {
    let request_id = request_id(&headers);
    let Json(draft) = payload.map_err(|rejection| {
        warn!(request_id = %request_id, error = %rejection, "Rejected event body");
        ApiError::from_json_rejection(rejection, request_id.clone())
    })?;

    let event = app_state
        .catalog
        .transact(|catalog| catalog.create_event(draft).cloned())
        .await
        .map_err(|e| {
            warn!(request_id = %request_id, error = %e, "Event creation failed");
            ApiError::from_catalog_error_with_id(e, request_id.clone())
        })?;

    info!(request_id = %request_id, event_id = event.id, "Created event");

    Ok((
        StatusCode::CREATED,
        Json(CreateEventResponse {
            success: true,
            event,
        }),
    ))
}

/// Single event handler
///
/// GET /api/events/{id}
pub async fn get_event_handler(
    State(app_state): State<AppState>,
    Path(event_id): Path<EventId>,
) -> Result<Json<Event>, ApiError> {
    let event = app_state
        .catalog
        .view(|catalog| catalog.get_event_by_id(event_id).cloned())
        .await
        .ok_or(CatalogError::NotFound(event_id))?;

    Ok(Json(event))
}

/// Registration handler
///
/// POST /api/events/{id}/register
///
/// Unknown event, full event and duplicate student all answer 400 with the
/// same body shape as a success; missing fields answer 400 with `error`.
pub async fn register_handler(
    State(app_state): State<AppState>,
    Path(event_id): Path<EventId>,
    headers: HeaderMap,
    payload: Result<Json<RegistrationDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<RegistrationResponse>), ApiError> {
    let request_id = request_id(&headers);
    let Json(draft) = payload.map_err(|rejection| {
        warn!(request_id = %request_id, error = %rejection, "Rejected registration body");
        ApiError::from_json_rejection(rejection, request_id.clone())
    })?;

    let outcome = app_state
        .catalog
        .transact(|catalog| {
            catalog
                .register_for_event(event_id, draft)
                .map(|registration| registration.id)
        })
        .await;

    match outcome {
        Ok(registration_id) => {
            info!(
                request_id = %request_id,
                event_id,
                registration_id,
                "Registration successful"
            );
            Ok((StatusCode::OK, Json(RegistrationResponse::accepted())))
        }
        Err(e) if e.is_registration_rejection() => {
            warn!(
                request_id = %request_id,
                event_id,
                reason = %e,
                "Registration rejected"
            );
            Ok((
                StatusCode::BAD_REQUEST,
                Json(RegistrationResponse::rejected(e.user_message())),
            ))
        }
        Err(e) => Err(ApiError::from_catalog_error_with_id(e, request_id)),
    }
}

/// Registration list handler
///
/// GET /api/registrations
pub async fn registrations_handler(
    State(app_state): State<AppState>,
) -> Json<Vec<RegistrationView>> {
    Json(app_state.catalog.view(|catalog| catalog.all_registrations()).await)
}

/// Calendar month handler
///
/// GET /api/calendar/{year}/{month}
pub async fn calendar_month_handler(
    State(app_state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Json<Vec<Event>> {
    let events = app_state
        .catalog
        .view(|catalog| {
            catalog
                .events_by_month(year, month)
                .into_iter()
                .cloned()
                .collect()
        })
        .await;

    Json(events)
}

/// Calendar day handler
///
/// GET /api/calendar/date/{dateStr}
///
/// A date that does not parse matches no events.
pub async fn calendar_date_handler(
    State(app_state): State<AppState>,
    Path(date_str): Path<String>,
) -> Json<Vec<Event>> {
    let Some(date) = parse_date(&date_str) else {
        return Json(Vec::new());
    };

    let events = app_state
        .catalog
        .view(|catalog| catalog.events_by_date(date).into_iter().cloned().collect())
        .await;

    Json(events)
}

/// Health check handler
///
/// GET /health
pub async fn health_handler(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let (events, registrations) = app_state
        .catalog
        .view(|catalog| (catalog.len(), catalog.total_registrations()))
        .await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        events,
        registrations,
    })
}
