//! Audio capture boundary
//!
//! The host platform supplies the real implementation (microphone, browser
//! stream, ...). The core only depends on this trait.

use crate::types::AudioClip;
use async_trait::async_trait;
use eva_foundation::error::SttError;
use std::time::Duration;

/// Bounded audio capture with ambient-noise calibration.
///
/// `listen` fails soft: a quiet room or a phrase-start timeout is
/// `Ok(None)`, and only device-level faults surface as `Err`. Callers in
/// the core log the error and treat it like a miss.
#[async_trait]
pub trait AudioCapture: Send {
    /// Wait up to `timeout` for speech to start, then record at most
    /// `max_phrase` of audio.
    async fn listen(
        &mut self,
        timeout: Duration,
        max_phrase: Duration,
    ) -> Result<Option<AudioClip>, SttError>;

    /// Re-measure the ambient-noise baseline for `duration`.
    async fn calibrate(&mut self, duration: Duration) -> Result<(), SttError>;
}
