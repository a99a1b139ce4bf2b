use crate::audio::PushHandle;
use crate::config::PipelineConfig;
use crate::nats::NatsClient;
use crate::session::TranslationSession;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A live session plus the handle the boundary uses to push captured
/// audio into its listen loop.
#[derive(Clone)]
pub struct SessionEntry {
    pub session: Arc<TranslationSession>,
    pub push: PushHandle,
}

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Active translation sessions (session_id → session)
    pub sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,

    /// Client for the recognition/translation/synthesis services
    pub nats: Arc<NatsClient>,

    /// Defaults applied when a start request leaves fields out
    pub defaults: PipelineConfig,
}

impl AppState {
    pub fn new(nats: Arc<NatsClient>, defaults: PipelineConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            nats,
            defaults,
        }
    }
}
