pub mod client;
pub mod messages;

pub use client::NatsClient;
pub use messages::{
    RecognizeRequest, RecognizeResponse, RecognizeStatus, ServiceStatus, SynthesizeRequest,
    SynthesizeResponse, TranslateRequest, TranslateResponse,
};
