//! Error taxonomy for the adapter boundaries.
//!
//! Each adapter call returns a typed error instead of throwing through the
//! pipeline; the session converts every failure into a reported status and
//! keeps running. Recognition errors are recoverable (the listen loop
//! continues), a translation error aborts the current exchange, and a
//! synthesis error is a warning on an exchange that has already been
//! recorded.

use thiserror::Error;

/// Failures from the speech-recognition boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecognizeError {
    /// No speech was captured before the listen timeout elapsed.
    #[error("no speech detected within {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Audio was captured but the recognizer could not produce text.
    #[error("could not understand audio")]
    NoMatch,

    /// The recognition service is unreachable or returned an error.
    #[error("recognition service error: {0}")]
    Service(String),
}

/// Failures from the translation boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// The translation service is unreachable or returned an error.
    #[error("translation service error: {0}")]
    Service(String),

    /// The service replied but the reply was unusable.
    #[error("malformed response from translation service: {0}")]
    MalformedResponse(String),
}

/// Failures from the text-to-speech boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthesizeError {
    /// The synthesis service is unreachable or returned an error.
    #[error("synthesis service error: {0}")]
    Service(String),
}
