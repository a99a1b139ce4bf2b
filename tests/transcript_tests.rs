// Tests for the transcript store: ordering, clear semantics, CSV export.

use chrono::Utc;
use loqa_translate::{Exchange, Transcript};

fn exchange(original: &str, translated: &str) -> Exchange {
    Exchange {
        original_text: original.to_string(),
        source_language: "en".to_string(),
        translated_text: translated.to_string(),
        target_language: "es".to_string(),
        timestamp: Utc::now(),
    }
}

#[test]
fn test_append_preserves_completion_order() {
    let mut transcript = Transcript::new();

    for i in 0..5 {
        transcript.append(exchange(&format!("original {}", i), &format!("translated {}", i)));
    }

    let all = transcript.all();
    assert_eq!(all.len(), 5);
    for (i, entry) in all.iter().enumerate() {
        assert_eq!(entry.original_text, format!("original {}", i));
    }
}

#[test]
fn test_clear_empties_regardless_of_size() {
    let mut transcript = Transcript::new();
    for _ in 0..10 {
        transcript.append(exchange("hello", "hola"));
    }

    transcript.clear();
    assert!(transcript.is_empty());
    assert_eq!(transcript.all().len(), 0);

    // Idempotent
    transcript.clear();
    assert!(transcript.is_empty());
}

#[test]
fn test_append_after_clear() {
    let mut transcript = Transcript::new();
    transcript.append(exchange("hello", "hola"));
    transcript.clear();
    transcript.append(exchange("goodbye", "adiós"));

    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.all()[0].original_text, "goodbye");
}

#[test]
fn test_csv_export_header_and_rows() {
    let mut transcript = Transcript::new();
    transcript.append(exchange("hello", "hola"));
    transcript.append(exchange("thank you", "gracias"));

    let csv = String::from_utf8(transcript.export_csv()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "original,from_lang,translated,to_lang");
    assert_eq!(lines[1], "hello,en,hola,es");
    assert_eq!(lines[2], "thank you,en,gracias,es");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_csv_export_empty_transcript() {
    let transcript = Transcript::new();
    let csv = String::from_utf8(transcript.export_csv()).unwrap();

    assert_eq!(csv, "original,from_lang,translated,to_lang\n");
}

#[test]
fn test_csv_export_escapes_delimiters_and_quotes() {
    let mut transcript = Transcript::new();
    transcript.append(exchange("hello, world", "say \"hola\""));

    let csv = String::from_utf8(transcript.export_csv()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[1], "\"hello, world\",en,\"say \"\"hola\"\"\",es");
}

#[test]
fn test_csv_export_quotes_embedded_newlines() {
    let mut transcript = Transcript::new();
    transcript.append(exchange("line one\nline two", "hola"));

    let csv = String::from_utf8(transcript.export_csv()).unwrap();
    assert!(csv.contains("\"line one\nline two\""));
}
