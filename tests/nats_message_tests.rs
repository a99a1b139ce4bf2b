// Tests for the service boundary message shapes.

use base64::Engine;
use loqa_translate::nats::{
    RecognizeRequest, RecognizeResponse, RecognizeStatus, ServiceStatus, SynthesizeResponse,
    TranslateRequest, TranslateResponse,
};

#[test]
fn test_recognize_request_serialization() {
    let msg = RecognizeRequest {
        session_id: "test-session".to_string(),
        pcm: base64::engine::general_purpose::STANDARD.encode([0u8; 100]),
        sample_rate: 16000,
        channels: 1,
        language: "en".to_string(),
        phrase_limit_ms: 10000,
    };

    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("test-session"));
    assert!(json.contains("16000"));
    assert!(json.contains("\"language\":\"en\""));
    assert!(json.contains("\"phrase_limit_ms\":10000"));

    let deserialized: RecognizeRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.session_id, "test-session");
    assert_eq!(deserialized.sample_rate, 16000);
    assert_eq!(deserialized.channels, 1);
}

#[test]
fn test_recognize_status_wire_format() {
    assert_eq!(
        serde_json::to_string(&RecognizeStatus::NoMatch).unwrap(),
        "\"no_match\""
    );
    assert_eq!(
        serde_json::to_string(&RecognizeStatus::Ok).unwrap(),
        "\"ok\""
    );
    assert_eq!(
        serde_json::to_string(&ServiceStatus::Error).unwrap(),
        "\"error\""
    );
}

#[test]
fn test_recognize_response_minimal_reply() {
    // A no-match reply carries no text and no error
    let json = r#"{"status": "no_match"}"#;

    let msg: RecognizeResponse = serde_json::from_str(json).unwrap();
    assert_eq!(msg.status, RecognizeStatus::NoMatch);
    assert!(msg.text.is_empty());
    assert!(msg.error.is_none());
}

#[test]
fn test_translate_round_trip() {
    let request = TranslateRequest {
        text: "hello".to_string(),
        source: "auto".to_string(),
        target: "es".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    let deserialized: TranslateRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.source, "auto");

    let reply = r#"{
        "status": "ok",
        "text": "hola",
        "detected_source": "en"
    }"#;

    let msg: TranslateResponse = serde_json::from_str(reply).unwrap();
    assert_eq!(msg.status, ServiceStatus::Ok);
    assert_eq!(msg.text, "hola");
    assert_eq!(msg.detected_source.as_deref(), Some("en"));
}

#[test]
fn test_translate_response_without_detection() {
    let reply = r#"{"status": "ok", "text": "hola"}"#;

    let msg: TranslateResponse = serde_json::from_str(reply).unwrap();
    assert_eq!(msg.detected_source, None);
}

#[test]
fn test_translate_error_reply() {
    let reply = r#"{"status": "error", "error": "backend unreachable"}"#;

    let msg: TranslateResponse = serde_json::from_str(reply).unwrap();
    assert_eq!(msg.status, ServiceStatus::Error);
    assert_eq!(msg.error.as_deref(), Some("backend unreachable"));
    assert!(msg.text.is_empty());
}

#[test]
fn test_synthesize_audio_round_trip() {
    let audio_bytes: Vec<u8> = vec![82, 73, 70, 70, 1, 2, 3, 4];
    let encoded = base64::engine::general_purpose::STANDARD.encode(&audio_bytes);

    let reply = SynthesizeResponse {
        status: ServiceStatus::Ok,
        audio: encoded,
        format: "wav".to_string(),
        error: None,
    };

    let json = serde_json::to_string(&reply).unwrap();
    let deserialized: SynthesizeResponse = serde_json::from_str(&json).unwrap();

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(&deserialized.audio)
        .unwrap();
    assert_eq!(decoded, audio_bytes);
    assert_eq!(deserialized.format, "wav");
}
