use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::languages;

/// Configuration for a translation session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "session-2026-08-07-lobby")
    pub session_id: String,

    /// Source language code, or "auto" to let the backend detect
    pub source_language: String,

    /// Target language code
    pub target_language: String,

    /// How long one listen cycle waits for audio before reporting a
    /// timeout and cycling
    pub listen_timeout: Duration,

    /// Upper bound on a single utterance
    pub phrase_limit: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("session-{}", uuid::Uuid::new_v4()),
            source_language: languages::FALLBACK_CODE.to_string(),
            target_language: "es".to_string(),
            listen_timeout: Duration::from_secs(10),
            phrase_limit: Duration::from_secs(10),
        }
    }
}
