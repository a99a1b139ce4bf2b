pub mod audio;
pub mod config;
pub mod error;
pub mod http;
pub mod languages;
pub mod mt;
pub mod nats;
pub mod session;
pub mod stt;
pub mod transcript;
pub mod tts;

pub use audio::{AudioFile, AudioSegment, FileSource, PushHandle, PushSource, SegmentSource};
pub use config::Config;
pub use error::{RecognizeError, SynthesizeError, TranslateError};
pub use http::{create_router, AppState};
pub use mt::{MockTranslator, NatsTranslator, Translation, Translator};
pub use nats::NatsClient;
pub use session::{
    ExchangeOutcome, PipelineState, SessionConfig, SessionEvent, SessionStats, TranslationSession,
};
pub use stt::{MockRecognizer, NatsRecognizer, Recognizer};
pub use transcript::{Exchange, Transcript};
pub use tts::{MockSynthesizer, NatsSynthesizer, Synthesizer};
