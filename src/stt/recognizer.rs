use std::collections::VecDeque;
use std::sync::Mutex;

use crate::audio::AudioSegment;
use crate::error::RecognizeError;

/// Speech-to-text boundary.
///
/// Failures are non-fatal to the session: the listen loop reports them
/// and moves on to the next utterance.
#[async_trait::async_trait]
pub trait Recognizer: Send + Sync {
    /// Recognize a captured segment as text in the given source language
    /// ("auto" lets the service pick).
    async fn recognize(
        &self,
        segment: &AudioSegment,
        language: &str,
    ) -> Result<String, RecognizeError>;

    /// Get recognizer name for logging
    fn name(&self) -> &str;
}

/// Scripted recognizer for tests and demos.
///
/// Returns queued results in order, then falls back to a fixed response.
pub struct MockRecognizer {
    script: Mutex<VecDeque<Result<String, RecognizeError>>>,
    fallback: String,
}

impl MockRecognizer {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: "mock recognition".to_string(),
        }
    }

    /// Set the response returned once the script is exhausted.
    pub fn with_fallback(mut self, text: &str) -> Self {
        self.fallback = text.to_string();
        self
    }

    /// Queue a successful recognition.
    pub fn with_ok(self, text: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    /// Queue a failure.
    pub fn with_err(self, error: RecognizeError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }
}

impl Default for MockRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Recognizer for MockRecognizer {
    async fn recognize(
        &self,
        _segment: &AudioSegment,
        _language: &str,
    ) -> Result<String, RecognizeError> {
        let scripted = self.script.lock().unwrap().pop_front();
        scripted.unwrap_or_else(|| Ok(self.fallback.clone()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
