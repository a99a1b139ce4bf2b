use anyhow::{bail, Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{info, warn};

use super::file::AudioFile;
use super::segment::AudioSegment;

/// Capture boundary for the listen loop.
///
/// Implementations deliver one [`AudioSegment`] per utterance over a
/// channel; the session applies its own listen timeout while waiting on
/// the receiver. Microphone capture lives behind this trait on the
/// presentation side — the pipeline only ever sees segments.
#[async_trait::async_trait]
pub trait SegmentSource: Send + Sync {
    /// Start delivering segments.
    ///
    /// Returns a channel receiver that will receive captured segments.
    async fn start(&mut self) -> Result<mpsc::Receiver<AudioSegment>>;

    /// Stop delivering segments.
    async fn stop(&mut self) -> Result<()>;

    /// Check if the source is currently capturing
    fn is_capturing(&self) -> bool;

    /// Get source name for logging
    fn name(&self) -> &str;
}

/// Segment source fed by the presentation boundary.
///
/// The boundary holds a [`PushHandle`] and pushes captured segments in;
/// the session consumes them from the channel returned by `start`.
pub struct PushSource {
    sender: Arc<Mutex<Option<mpsc::Sender<AudioSegment>>>>,
    capturing: Arc<AtomicBool>,
    capacity: usize,
}

impl PushSource {
    pub fn new(capacity: usize) -> (Self, PushHandle) {
        let sender = Arc::new(Mutex::new(None));
        let source = Self {
            sender: Arc::clone(&sender),
            capturing: Arc::new(AtomicBool::new(false)),
            capacity,
        };
        (source, PushHandle { sender })
    }
}

#[async_trait::async_trait]
impl SegmentSource for PushSource {
    async fn start(&mut self) -> Result<mpsc::Receiver<AudioSegment>> {
        let (tx, rx) = mpsc::channel(self.capacity);

        {
            let mut sender = self.sender.lock().await;
            *sender = Some(tx);
        }

        self.capturing.store(true, Ordering::SeqCst);
        info!("Push source started");

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        {
            let mut sender = self.sender.lock().await;
            *sender = None;
        }

        self.capturing.store(false, Ordering::SeqCst);
        info!("Push source stopped");

        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.capturing.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "push"
    }
}

/// Sender half of a [`PushSource`], held by the boundary.
#[derive(Clone)]
pub struct PushHandle {
    sender: Arc<Mutex<Option<mpsc::Sender<AudioSegment>>>>,
}

impl PushHandle {
    /// Push a captured segment into the session's listen loop.
    ///
    /// Fails when the session is not listening.
    pub async fn push(&self, segment: AudioSegment) -> Result<()> {
        let tx = {
            let sender = self.sender.lock().await;
            sender.clone()
        };

        match tx {
            Some(tx) => tx
                .send(segment)
                .await
                .context("Listen loop is no longer receiving audio"),
            None => bail!("Session is not listening"),
        }
    }
}

/// Segment source that replays a fixed set of segments, then closes.
///
/// Used for batch translation of recorded audio and in tests.
pub struct FileSource {
    name: String,
    segments: Vec<AudioSegment>,
    capturing: Arc<AtomicBool>,
}

impl FileSource {
    /// Load a WAV file and split it by the phrase limit.
    pub fn from_file(path: &str, phrase_limit_secs: u64) -> Result<Self> {
        let file = AudioFile::open(path)?;
        let segments = file.segments(phrase_limit_secs);

        info!(
            "File source ready: {} ({} segments)",
            file.path,
            segments.len()
        );

        Ok(Self {
            name: file.path,
            segments,
            capturing: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn from_segments(segments: Vec<AudioSegment>) -> Self {
        Self {
            name: "segments".to_string(),
            segments,
            capturing: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait::async_trait]
impl SegmentSource for FileSource {
    async fn start(&mut self) -> Result<mpsc::Receiver<AudioSegment>> {
        let (tx, rx) = mpsc::channel(16);
        let segments = self.segments.clone();
        let capturing = Arc::clone(&self.capturing);

        capturing.store(true, Ordering::SeqCst);

        tokio::spawn(async move {
            for segment in segments {
                if !capturing.load(Ordering::SeqCst) {
                    break;
                }

                if tx.send(segment).await.is_err() {
                    warn!("Listen loop dropped before file playback finished");
                    break;
                }
            }

            // Channel closes when tx drops; the listen loop sees the end
            // of input and winds down.
            capturing.store(false, Ordering::SeqCst);
        });

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        self.capturing.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.capturing.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
