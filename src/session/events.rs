use serde::{Deserialize, Serialize};
use std::fmt;

use crate::transcript::Exchange;

/// Where the pipeline currently is.
///
/// `Listening` is the steady state of continuous mode; `Idle` of
/// single-shot mode. The rest are transient stages of one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Idle,
    Listening,
    Recognizing,
    Translating,
    Synthesizing,
    Reporting,
}

impl PipelineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::Listening => "listening",
            PipelineState::Recognizing => "recognizing",
            PipelineState::Translating => "translating",
            PipelineState::Synthesizing => "synthesizing",
            PipelineState::Reporting => "reporting",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a session tells the presentation boundary as it runs.
///
/// Carried over a broadcast channel; sessions run fine with zero
/// subscribers.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Pipeline moved to a new state ("listening", "translating", ...)
    StateChanged(PipelineState),

    /// An exchange completed and was appended to the transcript
    ExchangeCompleted(Exchange),

    /// Synthesized audio for the most recent exchange, ready for playback
    AudioReady { wav: Vec<u8> },

    /// Non-fatal condition (listen timeout, synthesis failure)
    Warning(String),

    /// Adapter failure; the current exchange (if any) was discarded
    Error(String),
}
