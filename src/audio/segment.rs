use serde::{Deserialize, Serialize};

/// A captured utterance (16-bit PCM, interleaved).
///
/// Segments are transient: produced by a capture source, consumed by the
/// recognition adapter, never retained in the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSegment {
    /// Raw audio samples (i16 PCM, interleaved)
    pub samples: Vec<i16>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u16,
}

impl AudioSegment {
    pub fn new(samples: Vec<i16>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Segment length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples as little-endian PCM bytes, the wire format for the
    /// recognition service.
    pub fn to_pcm_bytes(&self) -> Vec<u8> {
        self.samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    /// Rebuild a segment from little-endian PCM bytes. A trailing odd byte
    /// is dropped.
    pub fn from_pcm_bytes(bytes: &[u8], sample_rate: u32, channels: u16) -> Self {
        let samples: Vec<i16> = bytes
            .chunks_exact(2)
            .map(|chunk| i16::from_le_bytes([chunk[0], chunk[1]]))
            .collect();

        Self {
            samples,
            sample_rate,
            channels,
        }
    }
}
