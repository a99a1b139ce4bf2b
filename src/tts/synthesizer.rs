use std::io::Cursor;

use crate::error::SynthesizeError;

/// Text-to-speech boundary.
///
/// Synthesized audio comes back as an in-memory encoded buffer (WAV);
/// no implementation may leave temporary files behind. Synthesis is
/// best-effort: a failure here never invalidates the exchange that
/// produced the text.
#[async_trait::async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesize speech for translated text in the target language.
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SynthesizeError>;

    /// Get synthesizer name for logging
    fn name(&self) -> &str;
}

/// Tone-generating synthesizer for tests and demos.
///
/// Produces a short in-memory WAV whose length tracks the text length,
/// so playback plumbing can be exercised without a speech backend.
pub struct MockSynthesizer {
    sample_rate: u32,
    fail: bool,
}

impl MockSynthesizer {
    pub fn new() -> Self {
        Self {
            sample_rate: 16000,
            fail: false,
        }
    }

    /// Make every call fail with a service error.
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Default for MockSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Synthesizer for MockSynthesizer {
    async fn synthesize(&self, text: &str, _language: &str) -> Result<Vec<u8>, SynthesizeError> {
        if self.fail {
            return Err(SynthesizeError::Service(
                "mock synthesis failure".to_string(),
            ));
        }

        // 60ms of tone per character, at least 200ms total
        let duration_ms = (text.chars().count() as u64 * 60).max(200);
        let sample_count = (self.sample_rate as u64 * duration_ms / 1000) as usize;

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)
                .map_err(|e| SynthesizeError::Service(e.to_string()))?;

            for n in 0..sample_count {
                let t = n as f32 / self.sample_rate as f32;
                let sample = (t * 440.0 * 2.0 * std::f32::consts::PI).sin();
                writer
                    .write_sample((sample * i16::MAX as f32 * 0.3) as i16)
                    .map_err(|e| SynthesizeError::Service(e.to_string()))?;
            }

            writer
                .finalize()
                .map_err(|e| SynthesizeError::Service(e.to_string()))?;
        }

        Ok(cursor.into_inner())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
