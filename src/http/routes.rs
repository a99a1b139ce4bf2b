use super::handlers;
use super::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Language catalog
        .route("/languages", get(handlers::list_languages))
        // Session control
        .route("/sessions/start", post(handlers::start_session))
        .route("/sessions/:session_id/stop", post(handlers::stop_session))
        .route("/sessions/:session_id", delete(handlers::end_session))
        // Pipeline input
        .route(
            "/sessions/:session_id/translate",
            post(handlers::translate_text),
        )
        .route("/sessions/:session_id/audio", post(handlers::push_audio))
        // Transcript
        .route(
            "/sessions/:session_id/clear",
            post(handlers::clear_transcript),
        )
        .route(
            "/sessions/:session_id/status",
            get(handlers::get_session_status),
        )
        .route(
            "/sessions/:session_id/transcript",
            get(handlers::get_transcript),
        )
        .route(
            "/sessions/:session_id/transcript/export",
            get(handlers::export_transcript),
        )
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
