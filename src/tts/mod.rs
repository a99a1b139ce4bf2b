//! Synthesis adapter: translated text in, playable audio out.

mod nats;
mod synthesizer;

pub use nats::NatsSynthesizer;
pub use synthesizer::{MockSynthesizer, Synthesizer};
