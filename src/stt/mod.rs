//! Recognition adapter: speech in, text out.

mod nats;
mod recognizer;

pub use nats::NatsRecognizer;
pub use recognizer::{MockRecognizer, Recognizer};
