// Integration tests for the translation pipeline
//
// These tests drive the session controller end to end against the mock
// adapters: the single-shot text path, the continuous-listen loop, the
// stop intent, and the error taxonomy at each stage.

use loqa_translate::{
    AudioSegment, Exchange, FileSource, MockRecognizer, MockSynthesizer, MockTranslator,
    PipelineState, PushSource, RecognizeError, SegmentSource, SessionConfig, SessionEvent,
    TranslateError, TranslationSession,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::timeout;

fn test_config() -> SessionConfig {
    SessionConfig {
        session_id: "test-session".to_string(),
        source_language: "en".to_string(),
        target_language: "es".to_string(),
        listen_timeout: Duration::from_millis(200),
        phrase_limit: Duration::from_secs(10),
    }
}

fn text_only_session(
    config: SessionConfig,
    translator: MockTranslator,
    synthesizer: MockSynthesizer,
) -> TranslationSession {
    TranslationSession::new(
        config,
        Arc::new(MockRecognizer::new()),
        Arc::new(translator),
        Arc::new(synthesizer),
        Box::new(FileSource::from_segments(Vec::new())),
    )
}

fn listen_session(
    config: SessionConfig,
    recognizer: MockRecognizer,
    source: Box<dyn SegmentSource>,
) -> TranslationSession {
    TranslationSession::new(
        config,
        Arc::new(recognizer),
        Arc::new(MockTranslator::new()),
        Arc::new(MockSynthesizer::new()),
        source,
    )
}

fn segment() -> AudioSegment {
    AudioSegment::new(vec![100i16; 16000], 16000, 1)
}

/// Wait for the next completed exchange on the event stream.
async fn next_exchange(rx: &mut broadcast::Receiver<SessionEvent>) -> Option<Exchange> {
    loop {
        match timeout(Duration::from_secs(5), rx.recv()).await {
            Ok(Ok(SessionEvent::ExchangeCompleted(exchange))) => return Some(exchange),
            Ok(Ok(_)) => continue,
            Ok(Err(_)) | Err(_) => return None,
        }
    }
}

#[tokio::test]
async fn test_single_shot_exchange_is_recorded() {
    let session = text_only_session(test_config(), MockTranslator::new(), MockSynthesizer::new());

    let outcome = session
        .translate_text("hello")
        .await
        .unwrap()
        .expect("non-empty input should produce an exchange");

    assert_eq!(outcome.exchange.original_text, "hello");
    assert_eq!(outcome.exchange.translated_text, "hola");
    assert_eq!(outcome.exchange.source_language, "en");
    assert_eq!(outcome.exchange.target_language, "es");

    // Synthesized audio is an in-memory WAV buffer
    let audio = outcome.audio.expect("synthesis should succeed");
    assert!(audio.starts_with(b"RIFF"));
    assert!(outcome.synthesis_warning.is_none());

    let transcript = session.transcript().await;
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].translated_text, "hola");

    let stats = session.stats().await;
    assert_eq!(stats.exchange_count, 1);
    assert_eq!(stats.error_count, 0);
    assert!(!stats.is_listening);
    assert_eq!(stats.state, PipelineState::Idle);
}

#[tokio::test]
async fn test_empty_input_is_a_noop() {
    let session = text_only_session(test_config(), MockTranslator::new(), MockSynthesizer::new());

    assert!(session.translate_text("").await.unwrap().is_none());
    assert!(session.translate_text("   \t\n").await.unwrap().is_none());

    let stats = session.stats().await;
    assert_eq!(stats.exchange_count, 0);
    assert_eq!(stats.error_count, 0);
    assert!(session.transcript().await.is_empty());
}

#[tokio::test]
async fn test_translation_failure_aborts_exchange() {
    let session = text_only_session(
        test_config(),
        MockTranslator::new().with_failure(),
        MockSynthesizer::new(),
    );

    let result = session.translate_text("hello").await;
    assert!(matches!(result, Err(TranslateError::Service(_))));

    // Nothing recorded, failure counted
    assert!(session.transcript().await.is_empty());
    let stats = session.stats().await;
    assert_eq!(stats.exchange_count, 0);
    assert_eq!(stats.error_count, 1);
}

#[tokio::test]
async fn test_synthesis_failure_still_records_exchange() {
    let session = text_only_session(
        test_config(),
        MockTranslator::new(),
        MockSynthesizer::new().with_failure(),
    );

    let outcome = session
        .translate_text("hello")
        .await
        .unwrap()
        .expect("translation succeeded, so the exchange must be recorded");

    assert!(outcome.audio.is_none());
    assert!(outcome.synthesis_warning.is_some());
    assert_eq!(outcome.exchange.translated_text, "hola");

    assert_eq!(session.transcript().await.len(), 1);
}

#[tokio::test]
async fn test_repeat_input_appends_distinct_exchanges() {
    let session = text_only_session(test_config(), MockTranslator::new(), MockSynthesizer::new());

    let first = session.translate_text("hello").await.unwrap().unwrap();
    let second = session.translate_text("hello").await.unwrap().unwrap();

    // Deterministic backend, no transcript deduplication
    assert_eq!(first.exchange.translated_text, second.exchange.translated_text);
    assert_eq!(session.transcript().await.len(), 2);
}

#[tokio::test]
async fn test_translation_never_echoes_input() {
    let session = text_only_session(test_config(), MockTranslator::new(), MockSynthesizer::new());

    // A phrase outside the mock phrasebook still comes back changed
    let outcome = session
        .translate_text("zebra crossing")
        .await
        .unwrap()
        .unwrap();

    assert_ne!(outcome.exchange.translated_text, "zebra crossing");
}

#[tokio::test]
async fn test_custom_phrasebook_entry() {
    let translator = MockTranslator::new().with_phrase("See you", "es", "nos vemos");
    let session = text_only_session(test_config(), translator, MockSynthesizer::new());

    let outcome = session.translate_text("see you").await.unwrap().unwrap();
    assert_eq!(outcome.exchange.translated_text, "nos vemos");
}

#[tokio::test]
async fn test_auto_detect_surfaces_detected_language() {
    let config = SessionConfig {
        source_language: "auto".to_string(),
        ..test_config()
    };
    let session = text_only_session(config, MockTranslator::new(), MockSynthesizer::new());

    let outcome = session.translate_text("hello").await.unwrap().unwrap();

    // The mock backend detects English for auto requests
    assert_eq!(outcome.exchange.source_language, "en");
}

#[tokio::test]
async fn test_listen_loop_appends_in_completion_order() {
    let recognizer = MockRecognizer::new()
        .with_ok("hello")
        .with_ok("good morning");
    let (source, push) = PushSource::new(8);
    let session = listen_session(test_config(), recognizer, Box::new(source));

    let mut events = session.subscribe();
    session.start_listening().await.unwrap();
    assert!(session.is_listening());

    push.push(segment()).await.unwrap();
    push.push(segment()).await.unwrap();

    let first = next_exchange(&mut events).await.expect("first exchange");
    let second = next_exchange(&mut events).await.expect("second exchange");
    assert_eq!(first.original_text, "hello");
    assert_eq!(second.original_text, "good morning");

    let stats = session.stop_listening().await.unwrap();
    assert_eq!(stats.exchange_count, 2);
    assert!(!stats.is_listening);

    let transcript = session.transcript().await;
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].original_text, "hello");
    assert_eq!(transcript[1].original_text, "good morning");
}

#[tokio::test]
async fn test_stop_intent_prevents_new_cycles() {
    let (source, push) = PushSource::new(8);
    let session = listen_session(test_config(), MockRecognizer::new(), Box::new(source));

    session.start_listening().await.unwrap();
    let stats = session.stop_listening().await.unwrap();

    assert!(!stats.is_listening);
    assert_eq!(stats.state, PipelineState::Idle);

    // The source was stopped with the loop; pushes are rejected now
    assert!(push.push(segment()).await.is_err());
    assert!(session.transcript().await.is_empty());
}

#[tokio::test]
async fn test_inflight_exchange_completes_after_stop() {
    let recognizer = MockRecognizer::new().with_ok("hello");
    let (source, push) = PushSource::new(8);

    let session = TranslationSession::new(
        test_config(),
        Arc::new(recognizer),
        Arc::new(MockTranslator::new().with_delay(Duration::from_millis(300))),
        Arc::new(MockSynthesizer::new()),
        Box::new(source),
    );

    session.start_listening().await.unwrap();
    push.push(segment()).await.unwrap();

    // Let the exchange get past recognition into the slow translation
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Stop waits for the in-flight exchange; its result is still recorded
    let stats = session.stop_listening().await.unwrap();
    assert_eq!(stats.exchange_count, 1);
    assert_eq!(session.transcript().await[0].original_text, "hello");
}

#[tokio::test]
async fn test_recognition_failures_keep_loop_alive() {
    let recognizer = MockRecognizer::new()
        .with_err(RecognizeError::Service("backend unreachable".to_string()))
        .with_err(RecognizeError::NoMatch)
        .with_ok("hello");
    let (source, push) = PushSource::new(8);
    let session = listen_session(test_config(), recognizer, Box::new(source));

    let mut events = session.subscribe();
    session.start_listening().await.unwrap();

    for _ in 0..3 {
        push.push(segment()).await.unwrap();
    }

    // Two failures are reported, then the loop recovers and completes an
    // exchange with no retry cap kicking in.
    let exchange = next_exchange(&mut events).await.expect("loop recovered");
    assert_eq!(exchange.original_text, "hello");

    let stats = session.stop_listening().await.unwrap();
    assert_eq!(stats.exchange_count, 1);
    assert_eq!(stats.error_count, 2);
}

#[tokio::test]
async fn test_listen_loop_ends_when_source_closes() {
    let recognizer = MockRecognizer::new().with_ok("hello");
    let source = FileSource::from_segments(vec![segment()]);
    let session = listen_session(test_config(), recognizer, Box::new(source));

    let mut events = session.subscribe();
    session.start_listening().await.unwrap();

    let exchange = next_exchange(&mut events).await.expect("file segment");
    assert_eq!(exchange.original_text, "hello");

    // One segment, then the source closes and the loop winds down
    let deadline = tokio::time::Instant::now() + Duration::from_secs(3);
    while session.is_listening() && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    assert!(!session.is_listening());
    assert_eq!(session.transcript().await.len(), 1);
}

#[tokio::test]
async fn test_clear_does_not_disturb_listening() {
    let recognizer = MockRecognizer::new().with_ok("hello").with_ok("goodbye");
    let (source, push) = PushSource::new(8);
    let session = listen_session(test_config(), recognizer, Box::new(source));

    let mut events = session.subscribe();
    session.start_listening().await.unwrap();

    push.push(segment()).await.unwrap();
    next_exchange(&mut events).await.expect("first exchange");

    session.clear_transcript().await;
    assert!(session.transcript().await.is_empty());

    // Still listening; the next exchange lands in the cleared transcript
    push.push(segment()).await.unwrap();
    let exchange = next_exchange(&mut events).await.expect("second exchange");
    assert_eq!(exchange.original_text, "goodbye");

    session.stop_listening().await.unwrap();
    let transcript = session.transcript().await;
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].original_text, "goodbye");
}
