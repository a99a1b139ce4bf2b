use base64::Engine;
use std::sync::Arc;
use tracing::debug;

use super::recognizer::Recognizer;
use crate::audio::AudioSegment;
use crate::error::RecognizeError;
use crate::nats::{NatsClient, RecognizeRequest, RecognizeStatus};

/// Recognizer backed by the NATS recognition service.
pub struct NatsRecognizer {
    client: Arc<NatsClient>,
    session_id: String,
    phrase_limit_ms: u64,
}

impl NatsRecognizer {
    pub fn new(client: Arc<NatsClient>, session_id: String, phrase_limit_ms: u64) -> Self {
        Self {
            client,
            session_id,
            phrase_limit_ms,
        }
    }
}

#[async_trait::async_trait]
impl Recognizer for NatsRecognizer {
    async fn recognize(
        &self,
        segment: &AudioSegment,
        language: &str,
    ) -> Result<String, RecognizeError> {
        let request = RecognizeRequest {
            session_id: self.session_id.clone(),
            pcm: base64::engine::general_purpose::STANDARD.encode(segment.to_pcm_bytes()),
            sample_rate: segment.sample_rate,
            channels: segment.channels,
            language: language.to_string(),
            phrase_limit_ms: self.phrase_limit_ms,
        };

        let response = self
            .client
            .recognize(&request)
            .await
            .map_err(|e| RecognizeError::Service(e.to_string()))?;

        match response.status {
            RecognizeStatus::Ok => {
                let text = response.text.trim();
                debug!("Recognized {:.1}s of audio: {:?}", segment.duration_seconds(), text);

                if text.is_empty() {
                    Err(RecognizeError::NoMatch)
                } else {
                    Ok(text.to_string())
                }
            }
            RecognizeStatus::NoMatch => Err(RecognizeError::NoMatch),
            RecognizeStatus::Error => Err(RecognizeError::Service(
                response.error.unwrap_or_else(|| "unspecified".to_string()),
            )),
        }
    }

    fn name(&self) -> &str {
        "nats-stt"
    }
}
