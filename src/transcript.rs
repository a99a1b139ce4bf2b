//! Session transcript: the ordered log of completed exchanges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed translation exchange.
///
/// Created only when translation succeeds; immutable afterwards. Audio is
/// never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    /// Text as spoken or typed
    pub original_text: String,
    /// Source language code (the detected language when auto-detect was used)
    pub source_language: String,
    /// Translated text
    pub translated_text: String,
    /// Target language code
    pub target_language: String,
    /// When the translation completed
    pub timestamp: DateTime<Utc>,
}

/// Append-only log of exchanges for one session, oldest-first.
///
/// Newest-first display is a presentation concern; the canonical order
/// here is completion order.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Exchange>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, exchange: Exchange) {
        self.entries.push(exchange);
    }

    /// Empty the transcript. Idempotent; an exchange currently mid-pipeline
    /// is unaffected and will append after the clear.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All exchanges in completion order.
    pub fn all(&self) -> &[Exchange] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// CSV export: header row plus one row per exchange, oldest-first.
    pub fn export_csv(&self) -> Vec<u8> {
        let mut out = String::from("original,from_lang,translated,to_lang\n");

        for exchange in &self.entries {
            out.push_str(&csv_field(&exchange.original_text));
            out.push(',');
            out.push_str(&csv_field(&exchange.source_language));
            out.push(',');
            out.push_str(&csv_field(&exchange.translated_text));
            out.push(',');
            out.push_str(&csv_field(&exchange.target_language));
            out.push('\n');
        }

        out.into_bytes()
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
