//! Fire-and-forget speech helper

use eva_foundation::locale::Locale;
use eva_tts::SpeechOutput;

/// Speak a line, logging synthesis failures instead of propagating them.
/// The user never hears raw error text; a failed prompt is just silence.
pub(crate) async fn say<S: SpeechOutput>(speech: &mut S, text: &str, locale: Locale) {
    tracing::debug!(%text, "speaking");
    if let Err(e) = speech.speak(text, locale).await {
        tracing::warn!(error = %e, "speech output failed, continuing");
    }
}
