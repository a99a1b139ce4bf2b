//! Translation adapter: source text in, target text out.

mod nats;
mod translator;

pub use nats::NatsTranslator;
pub use translator::{MockTranslator, Translation, Translator};
