//! Speech capture and transcription abstraction layer for Eva
//!
//! Real ASR lives behind these traits; the state-machine core in
//! `eva-core` only ever sees `AudioClip` and `RecognitionResult`.

pub mod capture;
pub mod mock;
pub mod recognize;
pub mod types;

pub use capture::AudioCapture;
pub use recognize::TranscriptionService;
pub use types::{AudioClip, RecognitionResult};
