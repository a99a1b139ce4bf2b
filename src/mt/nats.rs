use std::sync::Arc;
use tracing::debug;

use super::translator::{Translation, Translator};
use crate::error::TranslateError;
use crate::nats::{NatsClient, ServiceStatus, TranslateRequest};

/// Translator backed by the NATS translation service.
pub struct NatsTranslator {
    client: Arc<NatsClient>,
}

impl NatsTranslator {
    pub fn new(client: Arc<NatsClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Translator for NatsTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, TranslateError> {
        let request = TranslateRequest {
            text: text.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        };

        let response = self
            .client
            .translate(&request)
            .await
            .map_err(|e| TranslateError::Service(e.to_string()))?;

        match response.status {
            ServiceStatus::Ok => {
                if response.text.trim().is_empty() {
                    return Err(TranslateError::MalformedResponse(
                        "empty translation for non-empty input".to_string(),
                    ));
                }

                debug!("Translated {} -> {}: {:?}", source, target, response.text);

                Ok(Translation {
                    text: response.text,
                    detected_source: response.detected_source,
                })
            }
            ServiceStatus::Error => Err(TranslateError::Service(
                response.error.unwrap_or_else(|| "unspecified".to_string()),
            )),
        }
    }

    fn name(&self) -> &str {
        "nats-mt"
    }
}
