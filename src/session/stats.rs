use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::events::PipelineState;

/// Statistics about a translation session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Whether the continuous-listen loop is active
    pub is_listening: bool,

    /// Current pipeline state
    pub state: PipelineState,

    /// When the session started
    pub started_at: DateTime<Utc>,

    /// Total duration in seconds
    pub duration_secs: f64,

    /// Number of exchanges currently in the transcript
    pub exchange_count: usize,

    /// Number of reported adapter errors so far
    pub error_count: usize,
}
