use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub nats: NatsConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct NatsConfig {
    pub url: String,
    /// Upper bound on each recognition/translation/synthesis request
    pub request_timeout_ms: u64,
}

/// Defaults for new sessions; individual start requests may override the
/// languages.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Source language code, or "auto"
    pub source_language: String,
    pub target_language: String,
    pub listen_timeout_secs: u64,
    pub phrase_limit_secs: u64,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
