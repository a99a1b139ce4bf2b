use super::config::SessionConfig;
use super::events::{PipelineState, SessionEvent};
use super::stats::SessionStats;
use crate::audio::{AudioSegment, SegmentSource};
use crate::error::{RecognizeError, TranslateError};
use crate::languages;
use crate::mt::Translator;
use crate::stt::Recognizer;
use crate::transcript::{Exchange, Transcript};
use crate::tts::Synthesizer;
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// What one completed exchange hands back to the boundary.
#[derive(Debug, Clone)]
pub struct ExchangeOutcome {
    /// The recorded exchange
    pub exchange: Exchange,
    /// Synthesized audio for playback, when synthesis succeeded
    pub audio: Option<Vec<u8>>,
    /// Why audio is missing, when it is
    pub synthesis_warning: Option<String>,
}

/// A translation session that manages the continuous-listen loop, the
/// single-shot text path, and the session transcript.
///
/// One exchange is in flight at a time; exchanges append to the
/// transcript strictly in completion order.
pub struct TranslationSession {
    /// Session configuration
    config: SessionConfig,

    /// State shared with the listen task
    shared: Arc<PipelineShared>,

    /// Audio source, parked here while the loop is not running
    source: Arc<Mutex<Option<Box<dyn SegmentSource>>>>,

    /// Whether the continuous-listen loop is active
    is_listening: Arc<AtomicBool>,

    /// When the session started
    started_at: chrono::DateTime<Utc>,

    /// Handle for the listen loop task
    listen_task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

/// The pieces of a session both the owner and the listen task touch.
struct PipelineShared {
    config: SessionConfig,
    recognizer: Arc<dyn Recognizer>,
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn Synthesizer>,
    state: Mutex<PipelineState>,
    transcript: Mutex<Transcript>,
    error_count: AtomicUsize,
    events: broadcast::Sender<SessionEvent>,
    /// Held for the span of one exchange so single-shot requests cannot
    /// interleave with a listen-loop exchange
    gate: Mutex<()>,
}

impl PipelineShared {
    async fn set_state(&self, state: PipelineState) {
        *self.state.lock().await = state;
        let _ = self.events.send(SessionEvent::StateChanged(state));
    }

    fn report_warning(&self, message: String) {
        warn!("{}", message);
        let _ = self.events.send(SessionEvent::Warning(message));
    }

    fn report_error(&self, message: String) {
        error!("{}", message);
        self.error_count.fetch_add(1, Ordering::SeqCst);
        let _ = self.events.send(SessionEvent::Error(message));
    }

    /// Run one piece of recognized or typed text through translation,
    /// synthesis, and reporting.
    ///
    /// Empty or whitespace-only input is a no-op: no exchange, no error.
    /// A translation failure aborts the exchange before synthesis; a
    /// synthesis failure is reported as a warning after the exchange has
    /// already been appended.
    async fn process_text(
        &self,
        text: &str,
        source_hint: &str,
    ) -> std::result::Result<Option<ExchangeOutcome>, TranslateError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        self.set_state(PipelineState::Translating).await;

        let translation = self
            .translator
            .translate(trimmed, source_hint, &self.config.target_language)
            .await?;

        let source_language = match translation.detected_source {
            Some(detected) => detected,
            None if source_hint == languages::AUTO_CODE => languages::FALLBACK_CODE.to_string(),
            None => source_hint.to_string(),
        };

        let exchange = Exchange {
            original_text: trimmed.to_string(),
            source_language,
            translated_text: translation.text,
            target_language: self.config.target_language.clone(),
            timestamp: Utc::now(),
        };

        self.set_state(PipelineState::Synthesizing).await;

        let (audio, synthesis_warning) = match self
            .synthesizer
            .synthesize(&exchange.translated_text, &self.config.target_language)
            .await
        {
            Ok(wav) => (Some(wav), None),
            Err(e) => (None, Some(e.to_string())),
        };

        self.set_state(PipelineState::Reporting).await;

        {
            let mut transcript = self.transcript.lock().await;
            transcript.append(exchange.clone());
        }

        info!(
            "Exchange recorded: {:?} ({}) -> {:?} ({})",
            exchange.original_text,
            exchange.source_language,
            exchange.translated_text,
            exchange.target_language
        );

        let _ = self
            .events
            .send(SessionEvent::ExchangeCompleted(exchange.clone()));

        if let Some(wav) = &audio {
            let _ = self.events.send(SessionEvent::AudioReady { wav: wav.clone() });
        }

        if let Some(warning) = &synthesis_warning {
            self.report_warning(format!("Audio playback unavailable: {}", warning));
        }

        Ok(Some(ExchangeOutcome {
            exchange,
            audio,
            synthesis_warning,
        }))
    }
}

impl TranslationSession {
    /// Create a new translation session over the given adapters and
    /// audio source. Nothing starts until a start or translate intent.
    pub fn new(
        config: SessionConfig,
        recognizer: Arc<dyn Recognizer>,
        translator: Arc<dyn Translator>,
        synthesizer: Arc<dyn Synthesizer>,
        source: Box<dyn SegmentSource>,
    ) -> Self {
        info!(
            "Creating translation session: {} ({} -> {})",
            config.session_id,
            languages::display_name(&config.source_language),
            languages::display_name(&config.target_language)
        );

        info!(
            "Adapters: stt={}, mt={}, tts={}",
            recognizer.name(),
            translator.name(),
            synthesizer.name()
        );

        let (events, _) = broadcast::channel(64);

        let shared = Arc::new(PipelineShared {
            config: config.clone(),
            recognizer,
            translator,
            synthesizer,
            state: Mutex::new(PipelineState::Idle),
            transcript: Mutex::new(Transcript::new()),
            error_count: AtomicUsize::new(0),
            events,
            gate: Mutex::new(()),
        });

        Self {
            config,
            shared,
            source: Arc::new(Mutex::new(Some(source))),
            is_listening: Arc::new(AtomicBool::new(false)),
            started_at: Utc::now(),
            listen_task: Arc::new(Mutex::new(None)),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Subscribe to status, exchange, audio, and error events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.shared.events.subscribe()
    }

    pub fn is_listening(&self) -> bool {
        self.is_listening.load(Ordering::SeqCst)
    }

    /// Start the continuous-listen loop.
    pub async fn start_listening(&self) -> Result<()> {
        if self.is_listening.load(Ordering::SeqCst) {
            warn!("Session {} is already listening", self.config.session_id);
            return Ok(());
        }

        let mut source = {
            let mut slot = self.source.lock().await;
            slot.take().context("Audio source is unavailable")?
        };

        info!(
            "Starting listen loop: {} (source: {})",
            self.config.session_id,
            source.name()
        );

        let segment_rx = match source.start().await {
            Ok(rx) => rx,
            Err(e) => {
                // Park the source again so a later start can retry.
                *self.source.lock().await = Some(source);
                return Err(e.context("Failed to start audio source"));
            }
        };

        self.is_listening.store(true, Ordering::SeqCst);
        self.shared.set_state(PipelineState::Listening).await;

        let shared = Arc::clone(&self.shared);
        let is_listening = Arc::clone(&self.is_listening);
        let source_slot = Arc::clone(&self.source);

        let task = tokio::spawn(async move {
            listen_loop(Arc::clone(&shared), Arc::clone(&is_listening), segment_rx).await;

            // Loop ended (stop intent or source closed): release the
            // source and settle back to idle.
            is_listening.store(false, Ordering::SeqCst);

            if let Err(e) = source.stop().await {
                warn!("Failed to stop audio source: {}", e);
            }
            *source_slot.lock().await = Some(source);

            shared.set_state(PipelineState::Idle).await;
        });

        {
            let mut handle = self.listen_task.lock().await;
            *handle = Some(task);
        }

        Ok(())
    }

    /// Stop intent.
    ///
    /// Cooperative: no new listen cycle begins once observed, but an
    /// in-flight exchange completes and is still recorded. Waiting is
    /// bounded by the listen timeout plus the in-flight adapter calls.
    pub async fn stop_listening(&self) -> Result<SessionStats> {
        if !self.is_listening.load(Ordering::SeqCst) {
            warn!("Session {} is not listening", self.config.session_id);
            return Ok(self.stats().await);
        }

        info!("Stopping listen loop: {}", self.config.session_id);
        self.is_listening.store(false, Ordering::SeqCst);

        {
            let mut handle = self.listen_task.lock().await;
            if let Some(task) = handle.take() {
                if let Err(e) = task.await {
                    error!("Listen task panicked: {}", e);
                }
            }
        }

        info!("Listen loop stopped: {}", self.config.session_id);

        Ok(self.stats().await)
    }

    /// Single-shot typed-text path; recognition is skipped entirely.
    ///
    /// Returns `Ok(None)` for empty or whitespace-only input. A
    /// translation failure is reported through the event stream as well
    /// as returned.
    pub async fn translate_text(
        &self,
        text: &str,
    ) -> std::result::Result<Option<ExchangeOutcome>, TranslateError> {
        // One exchange in flight at a time, shared with the listen loop.
        let _gate = self.shared.gate.lock().await;

        let result = self
            .shared
            .process_text(text, &self.config.source_language)
            .await;

        if let Err(e) = &result {
            self.shared.set_state(PipelineState::Reporting).await;
            self.shared.report_error(format!("Translation failed: {}", e));
        }

        // Return to the controlling mode's steady state.
        let steady = if self.is_listening.load(Ordering::SeqCst) {
            PipelineState::Listening
        } else {
            PipelineState::Idle
        };
        self.shared.set_state(steady).await;

        result
    }

    /// Accumulated transcript, oldest-first.
    pub async fn transcript(&self) -> Vec<Exchange> {
        self.shared.transcript.lock().await.all().to_vec()
    }

    /// Clear the transcript. Idempotent; an exchange mid-pipeline is
    /// unaffected and will append after the clear.
    pub async fn clear_transcript(&self) {
        let mut transcript = self.shared.transcript.lock().await;
        transcript.clear();
        info!("Transcript cleared: {}", self.config.session_id);
    }

    /// Transcript as CSV bytes.
    pub async fn export_transcript(&self) -> Vec<u8> {
        self.shared.transcript.lock().await.export_csv()
    }

    /// Get current session statistics
    pub async fn stats(&self) -> SessionStats {
        let duration = Utc::now().signed_duration_since(self.started_at);
        let state = *self.shared.state.lock().await;
        let exchange_count = self.shared.transcript.lock().await.len();

        SessionStats {
            is_listening: self.is_listening.load(Ordering::SeqCst),
            state,
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            exchange_count,
            error_count: self.shared.error_count.load(Ordering::SeqCst),
        }
    }
}

/// The sequential listen loop: wait for a segment, recognize, translate,
/// synthesize, report, repeat.
///
/// Every failure is reported and the loop keeps cycling until a stop
/// intent arrives or the source closes; recognition failures retry
/// indefinitely with no cap.
async fn listen_loop(
    shared: Arc<PipelineShared>,
    is_listening: Arc<AtomicBool>,
    mut segment_rx: mpsc::Receiver<AudioSegment>,
) {
    let listen_timeout = shared.config.listen_timeout;
    let source_language = shared.config.source_language.clone();

    while is_listening.load(Ordering::SeqCst) {
        shared.set_state(PipelineState::Listening).await;

        let segment = match timeout(listen_timeout, segment_rx.recv()).await {
            Ok(Some(segment)) => segment,
            Ok(None) => {
                info!("Audio source closed; leaving listen loop");
                break;
            }
            Err(_) => {
                let e = RecognizeError::Timeout {
                    timeout_ms: listen_timeout.as_millis() as u64,
                };
                shared.report_warning(e.to_string());
                continue;
            }
        };

        // A stop intent may have arrived while waiting for audio. The
        // segment would start a new cycle, so drop it instead.
        if !is_listening.load(Ordering::SeqCst) {
            break;
        }

        let _gate = shared.gate.lock().await;

        shared.set_state(PipelineState::Recognizing).await;

        let text = match shared
            .recognizer
            .recognize(&segment, &source_language)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                shared.set_state(PipelineState::Reporting).await;
                shared.report_error(format!("Recognition failed: {}", e));
                continue;
            }
        };

        if let Err(e) = shared.process_text(&text, &source_language).await {
            shared.set_state(PipelineState::Reporting).await;
            shared.report_error(format!("Translation failed: {}", e));
        }
    }
}
