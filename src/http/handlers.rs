use super::state::{AppState, SessionEntry};
use crate::audio::{AudioSegment, PushSource};
use crate::languages;
use crate::mt::NatsTranslator;
use crate::session::{SessionConfig, SessionStats, TranslationSession};
use crate::stt::NatsRecognizer;
use crate::transcript::Exchange;
use crate::tts::NatsSynthesizer;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    /// Optional session ID (if not provided, generate UUID)
    pub session_id: Option<String>,

    /// Source language: display name, code, or "auto" (default from config)
    pub source_language: Option<String>,

    /// Target language: display name or code (default from config)
    pub target_language: Option<String>,

    /// Begin the continuous-listen loop immediately (default: true).
    /// Pass false for a typed-text-only session.
    pub listen: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct StartSessionResponse {
    pub session_id: String,
    pub status: String,
    pub source_language: String,
    pub target_language: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StopSessionResponse {
    pub session_id: String,
    pub status: String,
    pub message: String,
    pub stats: SessionStats,
}

#[derive(Debug, Deserialize)]
pub struct TranslateTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateTextResponse {
    /// The recorded exchange; absent when the input was empty
    pub exchange: Option<Exchange>,

    /// Base64-encoded WAV audio for playback, when synthesis succeeded
    pub audio: Option<String>,

    /// Why audio is missing, when synthesis failed
    pub synthesis_warning: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PushAudioRequest {
    /// Base64-encoded PCM bytes (i16 little-endian, interleaved)
    pub pcm: String,
    pub sample_rate: u32,
    pub channels: u16,
}

#[derive(Debug, Serialize)]
pub struct PushAudioResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ClearTranscriptResponse {
    pub session_id: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /sessions/start
/// Create a translation session and (by default) begin listening
pub async fn start_session(
    State(state): State<AppState>,
    Json(req): Json<StartSessionRequest>,
) -> impl IntoResponse {
    // Generate or use provided session ID
    let session_id = req
        .session_id
        .unwrap_or_else(|| format!("session-{}", uuid::Uuid::new_v4()));

    info!("Starting translation session: {}", session_id);

    // Check if the session already exists
    {
        let sessions = state.sessions.read().await;
        if sessions.contains_key(&session_id) {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: format!("Session {} already exists", session_id),
                }),
            )
                .into_response();
        }
    }

    // Unrecognized selections fall back to the catalog default by policy
    let source_language = languages::resolve_code(
        req.source_language
            .as_deref()
            .unwrap_or(&state.defaults.source_language),
    )
    .to_string();
    let target_language = languages::resolve_code(
        req.target_language
            .as_deref()
            .unwrap_or(&state.defaults.target_language),
    )
    .to_string();

    let config = SessionConfig {
        session_id: session_id.clone(),
        source_language: source_language.clone(),
        target_language: target_language.clone(),
        listen_timeout: Duration::from_secs(state.defaults.listen_timeout_secs),
        phrase_limit: Duration::from_secs(state.defaults.phrase_limit_secs),
    };

    let (source, push) = PushSource::new(32);

    let recognizer = Arc::new(NatsRecognizer::new(
        Arc::clone(&state.nats),
        session_id.clone(),
        config.phrase_limit.as_millis() as u64,
    ));
    let translator = Arc::new(NatsTranslator::new(Arc::clone(&state.nats)));
    let synthesizer = Arc::new(NatsSynthesizer::new(Arc::clone(&state.nats)));

    let session = Arc::new(TranslationSession::new(
        config,
        recognizer,
        translator,
        synthesizer,
        Box::new(source),
    ));

    let listen = req.listen.unwrap_or(true);
    if listen {
        if let Err(e) = session.start_listening().await {
            error!("Failed to start listening: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to start listening: {}", e),
                }),
            )
                .into_response();
        }
    }

    // Store session
    {
        let mut sessions = state.sessions.write().await;
        sessions.insert(session_id.clone(), SessionEntry { session, push });
    }

    let status = if listen { "listening" } else { "idle" };
    info!("Session {} started ({})", session_id, status);

    (
        StatusCode::OK,
        Json(StartSessionResponse {
            session_id: session_id.clone(),
            status: status.to_string(),
            source_language,
            target_language,
            message: format!("Session {} started", session_id),
        }),
    )
        .into_response()
}

/// POST /sessions/:session_id/stop
/// Stop intent: the listen loop winds down after any in-flight exchange
pub async fn stop_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    info!("Stopping session: {}", session_id);

    let entry = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match entry {
        Some(entry) => match entry.session.stop_listening().await {
            Ok(stats) => (
                StatusCode::OK,
                Json(StopSessionResponse {
                    session_id: session_id.clone(),
                    status: "stopped".to_string(),
                    message: "Listening stopped".to_string(),
                    stats,
                }),
            )
                .into_response(),
            Err(e) => {
                error!("Failed to stop session: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: format!("Failed to stop session: {}", e),
                    }),
                )
                    .into_response()
            }
        },
        None => session_not_found(&session_id),
    }
}

/// DELETE /sessions/:session_id
/// End the session: stop listening and drop its transcript
pub async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    info!("Ending session: {}", session_id);

    let entry = {
        let mut sessions = state.sessions.write().await;
        sessions.remove(&session_id)
    };

    match entry {
        Some(entry) => {
            let stats = match entry.session.stop_listening().await {
                Ok(stats) => stats,
                Err(e) => {
                    error!("Failed to stop session while ending it: {}", e);
                    entry.session.stats().await
                }
            };

            (
                StatusCode::OK,
                Json(StopSessionResponse {
                    session_id: session_id.clone(),
                    status: "ended".to_string(),
                    message: "Session ended".to_string(),
                    stats,
                }),
            )
                .into_response()
        }
        None => session_not_found(&session_id),
    }
}

/// POST /sessions/:session_id/translate
/// Single-shot typed text; bypasses recognition
pub async fn translate_text(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<TranslateTextRequest>,
) -> impl IntoResponse {
    let entry = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    let Some(entry) = entry else {
        return session_not_found(&session_id);
    };

    match entry.session.translate_text(&req.text).await {
        Ok(outcome) => {
            let (exchange, audio, synthesis_warning) = match outcome {
                Some(outcome) => (
                    Some(outcome.exchange),
                    outcome
                        .audio
                        .map(|wav| base64::engine::general_purpose::STANDARD.encode(wav)),
                    outcome.synthesis_warning,
                ),
                None => (None, None, None),
            };

            (
                StatusCode::OK,
                Json(TranslateTextResponse {
                    exchange,
                    audio,
                    synthesis_warning,
                }),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// POST /sessions/:session_id/audio
/// Push a captured audio segment into the session's listen loop
pub async fn push_audio(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<PushAudioRequest>,
) -> impl IntoResponse {
    let entry = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    let Some(entry) = entry else {
        return session_not_found(&session_id);
    };

    let pcm = match base64::engine::general_purpose::STANDARD.decode(&req.pcm) {
        Ok(bytes) => bytes,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid PCM payload: {}", e),
                }),
            )
                .into_response();
        }
    };

    let segment = AudioSegment::from_pcm_bytes(&pcm, req.sample_rate, req.channels);

    match entry.push.push(segment).await {
        Ok(()) => (
            StatusCode::ACCEPTED,
            Json(PushAudioResponse {
                status: "accepted".to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// POST /sessions/:session_id/clear
/// Clear the session transcript (idempotent)
pub async fn clear_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let entry = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match entry {
        Some(entry) => {
            entry.session.clear_transcript().await;
            (
                StatusCode::OK,
                Json(ClearTranscriptResponse {
                    session_id,
                    status: "cleared".to_string(),
                }),
            )
                .into_response()
        }
        None => session_not_found(&session_id),
    }
}

/// GET /sessions/:session_id/status
/// Get status of a translation session
pub async fn get_session_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let entry = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match entry {
        Some(entry) => (StatusCode::OK, Json(entry.session.stats().await)).into_response(),
        None => session_not_found(&session_id),
    }
}

/// GET /sessions/:session_id/transcript
/// Get the session transcript (oldest-first)
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let entry = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match entry {
        Some(entry) => {
            let transcript: Vec<Exchange> = entry.session.transcript().await;
            (StatusCode::OK, Json(transcript)).into_response()
        }
        None => session_not_found(&session_id),
    }
}

/// GET /sessions/:session_id/transcript/export
/// Export the transcript as CSV
pub async fn export_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let entry = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match entry {
        Some(entry) => {
            let csv = entry.session.export_transcript().await;
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
                csv,
            )
                .into_response()
        }
        None => session_not_found(&session_id),
    }
}

/// GET /languages
/// List supported languages, sorted by display name
pub async fn list_languages() -> impl IntoResponse {
    let entries: Vec<LanguageEntry> = languages::all_languages()
        .into_iter()
        .map(|(code, name)| LanguageEntry {
            code: code.to_string(),
            name: name.to_string(),
        })
        .collect();

    (StatusCode::OK, Json(entries))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

fn session_not_found(session_id: &str) -> axum::response::Response {
    error!("Session {} not found", session_id);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Session {} not found", session_id),
        }),
    )
        .into_response()
}
