// Axum web server layer

use axum::{error_handling::HandleErrorLayer, http::StatusCode, routing::get, routing::post, BoxError, Router};
use std::sync::Arc;
use tower::ServiceBuilder;

pub mod handlers;
pub mod middleware;
pub mod responses;

pub use crate::config::Config;
pub use crate::state::SharedCatalog;

/// Application state shared by all handlers
///
/// Cloning is cheap: the catalog handle and the config are both reference
/// counted.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: SharedCatalog, config: Config) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }
}

/// Create the Axum router with all routes and middleware
///
/// Middleware stack (outermost to innermost):
/// - Timeout (tower::timeout) with HandleErrorLayer mapping to 408
/// - CORS (tower-http::cors)
/// - Tracing (tower-http::trace)
/// - Body size limit (tower-http::limit)
pub fn create_router(app_state: AppState) -> Router {
    let config = Arc::clone(&app_state.config);

    let router = Router::new()
        .route("/api/dashboard", get(handlers::dashboard_handler))
        .route(
            "/api/events",
            get(handlers::list_events_handler).post(handlers::create_event_handler),
        )
        .route("/api/events/:id", get(handlers::get_event_handler))
        .route("/api/events/:id/register", post(handlers::register_handler))
        .route("/api/registrations", get(handlers::registrations_handler))
        .route("/api/calendar/date/:date_str", get(handlers::calendar_date_handler))
        .route("/api/calendar/:year/:month", get(handlers::calendar_month_handler))
        .route("/health", get(handlers::health_handler))
        .with_state(app_state);

    // Layers are applied in reverse order: the last one added wraps outermost
    let router = router
        .layer(middleware::body_size_limit_layer(config.body_size_limit_bytes))
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config));

    let timeout_stack = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|e: BoxError| async move {
            let status = if e.is::<tower::timeout::error::Elapsed>() {
                StatusCode::REQUEST_TIMEOUT
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string())
        }))
        .timeout(middleware::request_timeout(&config))
        .into_inner();

    router.layer(timeout_stack)
}
