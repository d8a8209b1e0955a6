//! Speech output boundary

use async_trait::async_trait;
use eva_foundation::error::TtsError;
use eva_foundation::locale::Locale;

/// Fire-and-forget speech playback.
///
/// The core never treats a synthesis failure as fatal; it logs the error
/// and carries on, so implementations are free to fail loudly.
#[async_trait]
pub trait SpeechOutput: Send {
    async fn speak(&mut self, text: &str, locale: Locale) -> Result<(), TtsError>;
}
