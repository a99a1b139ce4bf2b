use base64::Engine;
use std::sync::Arc;
use tracing::debug;

use super::synthesizer::Synthesizer;
use crate::error::SynthesizeError;
use crate::nats::{NatsClient, ServiceStatus, SynthesizeRequest};

/// Synthesizer backed by the NATS synthesis service.
pub struct NatsSynthesizer {
    client: Arc<NatsClient>,
}

impl NatsSynthesizer {
    pub fn new(client: Arc<NatsClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Synthesizer for NatsSynthesizer {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SynthesizeError> {
        let request = SynthesizeRequest {
            text: text.to_string(),
            language: language.to_string(),
        };

        let response = self
            .client
            .synthesize(&request)
            .await
            .map_err(|e| SynthesizeError::Service(e.to_string()))?;

        match response.status {
            ServiceStatus::Ok => {
                let audio = base64::engine::general_purpose::STANDARD
                    .decode(&response.audio)
                    .map_err(|e| {
                        SynthesizeError::Service(format!("invalid audio payload: {}", e))
                    })?;

                if audio.is_empty() {
                    return Err(SynthesizeError::Service("empty audio payload".to_string()));
                }

                debug!(
                    "Synthesized {} bytes of {} audio for {} chars",
                    audio.len(),
                    response.format,
                    text.chars().count()
                );

                Ok(audio)
            }
            ServiceStatus::Error => Err(SynthesizeError::Service(
                response.error.unwrap_or_else(|| "unspecified".to_string()),
            )),
        }
    }

    fn name(&self) -> &str {
        "nats-tts"
    }
}
