// Continuous-listen example: audio segments through the full pipeline
//
// Runs entirely against the mock adapters. A push source stands in for
// the microphone: the demo pushes three captured "utterances", the
// scripted recognizer turns them into text (failing once in the middle
// to show the loop recovering), and every completed exchange is
// reported over the session event stream.
//
// Usage: cargo run --example listen_loop

use anyhow::Result;
use loqa_translate::{
    AudioSegment, MockRecognizer, MockSynthesizer, MockTranslator, PushSource, RecognizeError,
    SessionConfig, SessionEvent, TranslationSession,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("🎙️  Continuous-listen demo (en -> es)");

    let config = SessionConfig {
        session_id: "demo-listen".to_string(),
        source_language: "en".to_string(),
        target_language: "es".to_string(),
        listen_timeout: Duration::from_secs(2),
        ..SessionConfig::default()
    };

    // Recognition script: two utterances, one service hiccup in between.
    let recognizer = MockRecognizer::new()
        .with_ok("hello")
        .with_err(RecognizeError::Service("backend hiccup".to_string()))
        .with_ok("goodbye");

    let (source, push) = PushSource::new(8);

    let session = Arc::new(TranslationSession::new(
        config,
        Arc::new(recognizer),
        Arc::new(MockTranslator::new()),
        Arc::new(MockSynthesizer::new()),
        Box::new(source),
    ));

    let mut events = session.subscribe();

    // Event listener task: prints what the presentation layer would show
    let listener = tokio::spawn(async move {
        let mut exchanges = 0;

        while let Ok(event) = events.recv().await {
            match event {
                SessionEvent::StateChanged(state) => info!("   state: {}", state),
                SessionEvent::ExchangeCompleted(exchange) => {
                    exchanges += 1;
                    info!(
                        "📝 #{}: {:?} -> {:?}",
                        exchanges, exchange.original_text, exchange.translated_text
                    );
                }
                SessionEvent::AudioReady { wav } => {
                    info!("🔊 {} bytes of audio ready for playback", wav.len())
                }
                SessionEvent::Warning(message) => info!("⚠️  {}", message),
                SessionEvent::Error(message) => info!("❌ {}", message),
            }
        }
    });

    session.start_listening().await?;

    // Three captured "utterances" (the middle one hits the scripted
    // recognition failure and the loop keeps going).
    for _ in 0..3 {
        let segment = AudioSegment::new(vec![0i16; 16000], 16000, 1);
        push.push(segment).await?;
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    let stats = session.stop_listening().await?;
    info!("");
    info!(
        "🏁 Listen loop done: {} exchanges, {} errors",
        stats.exchange_count, stats.error_count
    );

    for exchange in session.transcript().await {
        info!(
            "   {:?} ({}) -> {:?} ({})",
            exchange.original_text,
            exchange.source_language,
            exchange.translated_text,
            exchange.target_language
        );
    }

    // Events channel closes with the session; give the listener a moment
    let _ = timeout(Duration::from_millis(500), listener).await;

    Ok(())
}
