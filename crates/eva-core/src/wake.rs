//! Wake phrase detection
//!
//! Polls capture + recognition with short timeouts until a wake phrase is
//! confidently heard. Never returns an error: every miss is retried, and
//! repeated recognition failures trigger a mic recalibration rather than a
//! report to the caller. Process shutdown is the only way out besides a
//! detected wake phrase.

use crate::config::{LocaleBundle, WakeConfig};
use crate::phrases::WakeMatch;
use crate::speak::say;
use eva_foundation::session::Session;
use eva_stt::{AudioCapture, RecognitionResult, TranscriptionService};
use eva_tts::SpeechOutput;

pub struct WakePhraseDetector {
    config: WakeConfig,
}

impl Default for WakePhraseDetector {
    fn default() -> Self {
        Self::new(WakeConfig::default())
    }
}

impl WakePhraseDetector {
    pub fn new(config: WakeConfig) -> Self {
        Self { config }
    }

    /// Block until a wake phrase is detected, then acknowledge and return.
    pub async fn await_wake<C, R, S>(
        &self,
        session: &mut Session,
        bundle: &LocaleBundle,
        capture: &mut C,
        recognizer: &mut R,
        speech: &mut S,
    ) where
        C: AudioCapture,
        R: TranscriptionService,
        S: SpeechOutput,
    {
        tracing::info!("Listening for wake phrase");

        loop {
            let clip = match capture
                .listen(self.config.listen_timeout, self.config.max_phrase)
                .await
            {
                Ok(Some(clip)) => clip,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "capture failed while awaiting wake");
                    continue;
                }
            };

            let result = match recognizer
                .recognize(&clip, bundle.locale.recognition_hints())
                .await
            {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(error = %e, "recognition failed while awaiting wake");
                    RecognitionResult::none()
                }
            };

            let Some(transcript) = result.transcript else {
                self.note_failure(session, capture).await;
                continue;
            };

            session.reset_wake_failures();
            tracing::debug!(
                transcript = %transcript,
                confidence = result.confidence,
                "heard while awaiting wake"
            );

            let accepted = match bundle.phrases.wake_match(&transcript) {
                WakeMatch::Exact => true,
                WakeMatch::Partial => result.confidence > self.config.confidence_floor,
                WakeMatch::Miss => false,
            };

            if accepted {
                tracing::info!(confidence = result.confidence, "wake phrase detected");
                say(speech, &bundle.prompts.wake_ack, bundle.locale).await;
                return;
            }
        }
    }

    /// Count one unrecognizable utterance; after enough in a row the
    /// ambient-noise baseline has probably drifted, so recalibrate and
    /// start counting again.
    async fn note_failure<C: AudioCapture>(&self, session: &mut Session, capture: &mut C) {
        let failures = session.record_wake_failure();
        if failures >= self.config.max_failures {
            tracing::info!(failures, "recalibrating microphone due to poor recognition");
            if let Err(e) = capture.calibrate(self.config.calibrate_duration).await {
                tracing::warn!(error = %e, "recalibration failed");
            }
            session.reset_wake_failures();
        }
    }
}
