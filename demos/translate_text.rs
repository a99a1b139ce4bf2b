// Single-shot translation example: typed text through the full pipeline
//
// Runs entirely against the mock adapters, so no NATS server or speech
// services are needed:
// 1. Typed text goes straight to translation (recognition is bypassed)
// 2. The translation is synthesized to an in-memory WAV buffer
// 3. Each completed exchange lands in the session transcript
// 4. The transcript is printed and exported as CSV
//
// Usage: cargo run --example translate_text

use anyhow::Result;
use loqa_translate::{
    FileSource, MockRecognizer, MockSynthesizer, MockTranslator, SessionConfig,
    TranslationSession,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("💬 Single-shot translation demo (en -> es)");

    let config = SessionConfig {
        session_id: "demo-text".to_string(),
        source_language: "en".to_string(),
        target_language: "es".to_string(),
        ..SessionConfig::default()
    };

    // Typed-text mode never touches the audio source; an empty file
    // source satisfies the constructor.
    let session = TranslationSession::new(
        config,
        Arc::new(MockRecognizer::new()),
        Arc::new(MockTranslator::new()),
        Arc::new(MockSynthesizer::new()),
        Box::new(FileSource::from_segments(Vec::new())),
    );

    for text in ["hello", "good morning", "   ", "thank you"] {
        match session.translate_text(text).await? {
            Some(outcome) => {
                let audio_bytes = outcome.audio.map(|wav| wav.len()).unwrap_or(0);
                info!(
                    "✅ {:?} -> {:?} ({} bytes of audio)",
                    outcome.exchange.original_text, outcome.exchange.translated_text, audio_bytes
                );
            }
            None => info!("⏭️  Skipped empty input"),
        }
    }

    info!("");
    info!("📜 Transcript ({} exchanges):", session.transcript().await.len());
    for exchange in session.transcript().await {
        info!(
            "   {:?} ({}) -> {:?} ({})",
            exchange.original_text,
            exchange.source_language,
            exchange.translated_text,
            exchange.target_language
        );
    }

    let csv = session.export_transcript().await;
    info!("");
    info!("📤 CSV export:\n{}", String::from_utf8_lossy(&csv));

    Ok(())
}
