//! Translation session management
//!
//! This module provides the `TranslationSession` abstraction that manages:
//! - The continuous-listen loop over a segment source
//! - The single-shot typed-text path
//! - Recognition, translation, and synthesis adapter calls
//! - Transcript accumulation and export
//! - Session statistics, state, and event reporting

mod config;
mod events;
mod session;
mod stats;

pub use config::SessionConfig;
pub use events::{PipelineState, SessionEvent};
pub use session::{ExchangeOutcome, TranslationSession};
pub use stats::SessionStats;
