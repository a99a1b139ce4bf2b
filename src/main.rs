use anyhow::Result;
use clap::Parser;
use loqa_translate::{create_router, AppState, Config, NatsClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "loqa-translate", about = "Speech and text translation service")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/loqa-translate")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!(
        "Default languages: {} -> {}",
        cfg.pipeline.source_language, cfg.pipeline.target_language
    );

    let nats = Arc::new(
        NatsClient::connect(
            &cfg.nats.url,
            Duration::from_millis(cfg.nats.request_timeout_ms),
        )
        .await?,
    );

    let state = AppState::new(nats, cfg.pipeline.clone());
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
