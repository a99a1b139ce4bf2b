use std::collections::HashMap;
use std::time::Duration;

use crate::error::TranslateError;
use crate::languages;

/// A successful translation.
#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    /// Language the backend detected when asked to auto-detect; absent
    /// when the source was given explicitly.
    pub detected_source: Option<String>,
}

/// Text-translation boundary.
///
/// Callers pass trimmed, non-empty text; empty input never reaches an
/// implementation (the session treats it as a no-op upstream).
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text between language codes. `source` may be "auto".
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, TranslateError>;

    /// Get translator name for logging
    fn name(&self) -> &str;
}

/// Phrasebook translator for tests and demos.
///
/// Known (phrase, target) pairs translate from the built-in table;
/// anything else gets a marked-up rendition so output is never silently
/// the input. Deterministic by construction.
pub struct MockTranslator {
    phrasebook: HashMap<(String, String), String>,
    fail: bool,
    delay: Option<Duration>,
}

impl MockTranslator {
    pub fn new() -> Self {
        let mut phrasebook = HashMap::new();
        for (phrase, target, translated) in [
            ("hello", "es", "hola"),
            ("hello", "fr", "bonjour"),
            ("hello", "de", "hallo"),
            ("good morning", "es", "buenos días"),
            ("good morning", "fr", "bonjour"),
            ("thank you", "es", "gracias"),
            ("thank you", "fr", "merci"),
            ("goodbye", "es", "adiós"),
            ("goodbye", "fr", "au revoir"),
        ] {
            phrasebook.insert((phrase.to_string(), target.to_string()), translated.to_string());
        }

        Self {
            phrasebook,
            fail: false,
            delay: None,
        }
    }

    /// Add a (phrase, target) entry.
    pub fn with_phrase(mut self, phrase: &str, target: &str, translated: &str) -> Self {
        self.phrasebook.insert(
            (phrase.to_lowercase(), target.to_string()),
            translated.to_string(),
        );
        self
    }

    /// Make every call fail with a service error.
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Simulate backend latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl Default for MockTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, TranslateError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            return Err(TranslateError::Service(
                "mock translation failure".to_string(),
            ));
        }

        let key = (text.to_lowercase(), target.to_string());
        let translated = self
            .phrasebook
            .get(&key)
            .cloned()
            .unwrap_or_else(|| format!("{} [{}]", text, target));

        let detected_source = if source == languages::AUTO_CODE {
            Some(languages::FALLBACK_CODE.to_string())
        } else {
            None
        };

        Ok(Translation {
            text: translated,
            detected_source,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
