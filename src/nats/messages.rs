use serde::{Deserialize, Serialize};

/// Reply status shared by the translation and synthesis services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Ok,
    Error,
}

/// Reply status from the recognition service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognizeStatus {
    Ok,
    /// Audio arrived but produced no usable text.
    NoMatch,
    Error,
}

/// Request sent to the recognition service on `stt.recognize`
#[derive(Debug, Serialize, Deserialize)]
pub struct RecognizeRequest {
    pub session_id: String,
    /// Base64-encoded PCM bytes (i16 little-endian, interleaved)
    pub pcm: String,
    pub sample_rate: u32,
    pub channels: u16,
    /// Source language code, or "auto"
    pub language: String,
    /// Upper bound on utterance length the service should honor
    pub phrase_limit_ms: u64,
}

/// Reply from the recognition service
#[derive(Debug, Serialize, Deserialize)]
pub struct RecognizeResponse {
    pub status: RecognizeStatus,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request sent to the translation service on `mt.translate`
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    /// Source language code, or "auto"
    pub source: String,
    pub target: String,
}

/// Reply from the translation service
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub status: ServiceStatus,
    #[serde(default)]
    pub text: String,
    /// Language the service detected when the request source was "auto"
    #[serde(default)]
    pub detected_source: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request sent to the synthesis service on `tts.synthesize`
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    pub language: String,
}

/// Reply from the synthesis service
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeResponse {
    pub status: ServiceStatus,
    /// Base64-encoded audio bytes
    #[serde(default)]
    pub audio: String,
    /// Audio container format, e.g. "wav"
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub error: Option<String>,
}
