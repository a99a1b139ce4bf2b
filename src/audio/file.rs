use anyhow::{Context, Result};
use hound::WavReader;
use std::path::Path;
use tracing::info;

use super::segment::AudioSegment;

/// WAV file input, for batch translation and tests.
pub struct AudioFile {
    pub path: String,
    pub duration_seconds: f64,
    pub sample_rate: u32,
    pub channels: u16,
    pub samples: Vec<i16>,
}

impl AudioFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening audio file: {}", path.display());

        let reader = WavReader::open(path).context("Failed to open WAV file")?;

        let spec = reader.spec();
        let samples: Vec<i16> = reader
            .into_samples::<i16>()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read audio samples")?;

        let duration_seconds =
            samples.len() as f64 / (spec.sample_rate as f64 * spec.channels as f64);

        info!(
            "Audio file loaded: {:.1}s, {}Hz, {} channels, {} samples",
            duration_seconds,
            spec.sample_rate,
            spec.channels,
            samples.len()
        );

        Ok(Self {
            path: path.display().to_string(),
            duration_seconds,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            samples,
        })
    }

    /// Whole file as one segment.
    pub fn segment(&self) -> AudioSegment {
        AudioSegment::new(self.samples.clone(), self.sample_rate, self.channels)
    }

    /// File split into segments no longer than `phrase_limit_secs`, the
    /// bound a listen loop puts on a single utterance.
    pub fn segments(&self, phrase_limit_secs: u64) -> Vec<AudioSegment> {
        let samples_per_segment = (self.sample_rate as usize * self.channels as usize)
            * phrase_limit_secs.max(1) as usize;

        self.samples
            .chunks(samples_per_segment.max(1))
            .map(|chunk| AudioSegment::new(chunk.to_vec(), self.sample_rate, self.channels))
            .collect()
    }
}
