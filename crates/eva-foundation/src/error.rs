use crate::session::SessionState;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvaError {
    #[error("Speech capture/recognition error: {0}")]
    Stt(#[from] SttError),

    #[error("Speech synthesis error: {0}")]
    Tts(#[from] TtsError),

    #[error("Response backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid session transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: SessionState,
        to: SessionState,
    },
}

/// Errors from the capture/recognition boundary.
///
/// A capture timeout or unrecognized utterance is NOT an error; those are
/// reported as `None` / an empty `RecognitionResult` so callers can tell a
/// quiet room from a broken service.
#[derive(Error, Debug)]
pub enum SttError {
    #[error("Audio device error: {0}")]
    Device(String),

    #[error("Calibration failed: {0}")]
    Calibration(String),

    #[error("Recognition service error: {0}")]
    Service(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum TtsError {
    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    #[error("Playback failed: {0}")]
    Playback(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Generation request failed: {0}")]
    Request(String),

    #[error("Backend returned an empty response")]
    EmptyResponse,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {name}")]
    MissingVar { name: String },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}
