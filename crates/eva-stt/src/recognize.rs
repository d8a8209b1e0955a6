//! Transcription boundary

use crate::types::{AudioClip, RecognitionResult};
use async_trait::async_trait;
use eva_foundation::error::SttError;

/// Maps an audio clip to text with a confidence score.
///
/// Implementations try `hints` (ordered locale codes) in turn and return
/// the first alternative with confidence above 0.3, or the only alternative
/// offered. Total recognition failure is `Ok(RecognitionResult::none())`;
/// `Err` is reserved for service faults (network, auth), which callers
/// downgrade to a miss with a warning.
#[async_trait]
pub trait TranscriptionService: Send {
    async fn recognize(
        &mut self,
        clip: &AudioClip,
        hints: &[&str],
    ) -> Result<RecognitionResult, SttError>;
}
