//! HTTP API server for external control (presentation boundary)
//!
//! This module provides a REST API for driving translation sessions:
//! - POST /sessions/start - Create a session and begin listening
//! - POST /sessions/:id/stop - Stop intent for the listen loop
//! - DELETE /sessions/:id - End the session entirely
//! - POST /sessions/:id/translate - Single-shot typed text
//! - POST /sessions/:id/audio - Push a captured audio segment
//! - POST /sessions/:id/clear - Clear the transcript
//! - GET /sessions/:id/status - Query session status
//! - GET /sessions/:id/transcript - Get the transcript
//! - GET /sessions/:id/transcript/export - Transcript as CSV
//! - GET /languages - Language catalog
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::{AppState, SessionEntry};
