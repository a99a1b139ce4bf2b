use anyhow::{anyhow, Context, Result};
use async_nats::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

use super::messages::{
    RecognizeRequest, RecognizeResponse, SynthesizeRequest, SynthesizeResponse, TranslateRequest,
    TranslateResponse,
};

/// Subject the recognition service answers on
pub const RECOGNIZE_SUBJECT: &str = "stt.recognize";
/// Subject the translation service answers on
pub const TRANSLATE_SUBJECT: &str = "mt.translate";
/// Subject the synthesis service answers on
pub const SYNTHESIZE_SUBJECT: &str = "tts.synthesize";

/// Request/reply client for the three speech services.
///
/// Every request is bounded by the configured timeout; a backend that
/// never answers surfaces as an error instead of wedging the session.
pub struct NatsClient {
    client: Client,
    request_timeout: Duration,
}

impl NatsClient {
    /// Connect to NATS server
    pub async fn connect(url: &str, request_timeout: Duration) -> Result<Self> {
        info!("Connecting to NATS at {}", url);

        let client = async_nats::connect(url)
            .await
            .context("Failed to connect to NATS")?;

        info!("Connected to NATS successfully");

        Ok(Self {
            client,
            request_timeout,
        })
    }

    /// Ask the recognition service for text from a captured segment.
    pub async fn recognize(&self, request: &RecognizeRequest) -> Result<RecognizeResponse> {
        self.request(RECOGNIZE_SUBJECT, request).await
    }

    /// Ask the translation service for a translation.
    pub async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse> {
        self.request(TRANSLATE_SUBJECT, request).await
    }

    /// Ask the synthesis service for audio.
    pub async fn synthesize(&self, request: &SynthesizeRequest) -> Result<SynthesizeResponse> {
        self.request(SYNTHESIZE_SUBJECT, request).await
    }

    async fn request<Req, Resp>(&self, subject: &'static str, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let payload = serde_json::to_vec(request).context("Failed to serialize request")?;

        let reply = timeout(
            self.request_timeout,
            self.client.request(subject, payload.into()),
        )
        .await
        .map_err(|_| {
            anyhow!(
                "No reply from {} within {} ms",
                subject,
                self.request_timeout.as_millis()
            )
        })?
        .with_context(|| format!("Request to {} failed", subject))?;

        serde_json::from_slice(&reply.payload)
            .with_context(|| format!("Failed to parse reply from {}", subject))
    }
}
