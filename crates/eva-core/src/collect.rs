//! Multi-segment command collection
//!
//! One `collect` call assembles a logical command out of pause-delimited
//! speech segments. Accumulating segment by segment, instead of one long
//! capture, keeps each capture call bounded, distinguishes a breath from
//! "I am finished", and gives the user a cancel path that does not discard
//! unrelated earlier work.
//!
//! The command buffer and silence counter are locals of a single call, so
//! every invocation starts fresh by construction.

use crate::config::{CollectorConfig, LocaleBundle};
use crate::speak::say;
use eva_stt::{AudioCapture, RecognitionResult, TranscriptionService};
use eva_tts::SpeechOutput;

/// Terminal result of one collection invocation.
///
/// These are the user-directed terminations of the state machine; none of
/// them is an error. The caller branches on the variant: `Completed` is
/// routed, `Cancelled`/`GaveUp` return to listening, `Exit` tears down the
/// whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectOutcome {
    /// The space-joined segments, ready for routing.
    Completed(String),
    /// The user said a cancel phrase; the buffer was discarded.
    Cancelled,
    /// Nothing usable was collected.
    GaveUp,
    /// The user asked to terminate the session; carries the farewell that
    /// was already spoken.
    Exit(String),
}

pub struct CommandSegmentCollector {
    config: CollectorConfig,
}

impl Default for CommandSegmentCollector {
    fn default() -> Self {
        Self::new(CollectorConfig::default())
    }
}

impl CommandSegmentCollector {
    pub fn new(config: CollectorConfig) -> Self {
        Self { config }
    }

    /// Collect segments until a done, cancel, or exit phrase, or until the
    /// user goes quiet for good.
    pub async fn collect<C, R, S>(
        &self,
        bundle: &LocaleBundle,
        capture: &mut C,
        recognizer: &mut R,
        speech: &mut S,
    ) -> CollectOutcome
    where
        C: AudioCapture,
        R: TranscriptionService,
        S: SpeechOutput,
    {
        tracing::info!("Collecting command segments");

        let mut segments: Vec<String> = Vec::new();
        let mut silence_count: u32 = 0;

        loop {
            let clip = match capture
                .listen(self.config.segment_timeout, self.config.max_segment)
                .await
            {
                Ok(clip) => clip,
                Err(e) => {
                    tracing::warn!(error = %e, "capture failed mid-command, treating as silence");
                    None
                }
            };

            let Some(clip) = clip else {
                if segments.is_empty() {
                    // An entirely silent first segment is not retried.
                    say(speech, &bundle.prompts.didnt_hear, bundle.locale).await;
                    return CollectOutcome::GaveUp;
                }

                silence_count += 1;
                if silence_count >= self.config.max_silence {
                    let preview = self.preview(&segments, bundle);
                    say(speech, &bundle.prompts.recap(&preview), bundle.locale).await;
                    silence_count = 0;
                } else {
                    say(speech, &bundle.prompts.still_listening, bundle.locale).await;
                }
                continue;
            };

            let result = match recognizer
                .recognize(&clip, bundle.locale.recognition_hints())
                .await
            {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(error = %e, "recognition failed mid-command");
                    RecognitionResult::none()
                }
            };

            let Some(segment) = result.transcript else {
                if segments.is_empty() {
                    say(speech, &bundle.prompts.couldnt_hear, bundle.locale).await;
                    return CollectOutcome::GaveUp;
                }
                say(speech, &bundle.prompts.didnt_catch_part, bundle.locale).await;
                continue;
            };

            silence_count = 0;
            tracing::debug!(
                segment = %segment,
                confidence = result.confidence,
                "heard segment"
            );

            if bundle.phrases.is_cancel(&segment) {
                say(speech, &bundle.prompts.cancelled, bundle.locale).await;
                return CollectOutcome::Cancelled;
            }

            if bundle.phrases.is_done(&segment) {
                if segments.is_empty() {
                    say(speech, &bundle.prompts.no_command, bundle.locale).await;
                    return CollectOutcome::GaveUp;
                }

                let command = segments.join(" ");
                tracing::info!(command = %command, "command complete");

                if command.chars().count() > self.config.announce_threshold {
                    let preview = self.preview(&segments, bundle);
                    say(speech, &bundle.prompts.processing(&preview), bundle.locale).await;
                }
                return CollectOutcome::Completed(command);
            }

            if bundle.phrases.is_exit(&segment) {
                let farewell = bundle.prompts.farewell.clone();
                say(speech, &farewell, bundle.locale).await;
                return CollectOutcome::Exit(farewell);
            }

            segments.push(segment);

            // Feedback tapers off so the assistant does not talk over a
            // user who is mid-sentence.
            match segments.len() {
                1 => say(speech, &bundle.prompts.got_it, bundle.locale).await,
                n if n % 3 == 0 => {
                    say(speech, &bundle.prompts.listening_ping, bundle.locale).await
                }
                _ => tracing::debug!("continuing to listen"),
            }
        }
    }

    fn preview(&self, segments: &[String], bundle: &LocaleBundle) -> String {
        if segments.is_empty() {
            return bundle.prompts.no_command_yet.clone();
        }
        let joined = segments.join(" ");
        if joined.chars().count() > self.config.preview_limit {
            let cut: String = joined.chars().take(self.config.preview_cut).collect();
            format!("{cut}...")
        } else {
            joined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eva_foundation::locale::Locale;

    fn bundle() -> LocaleBundle {
        LocaleBundle::new(Locale::English, "Alex", "Eva")
    }

    #[test]
    fn preview_passes_short_commands_through() {
        let collector = CommandSegmentCollector::default();
        let segments = vec!["turn on".to_string(), "the lights".to_string()];
        assert_eq!(collector.preview(&segments, &bundle()), "turn on the lights");
    }

    #[test]
    fn preview_truncates_long_commands() {
        let collector = CommandSegmentCollector::default();
        let segments = vec!["a".repeat(60)];
        let preview = collector.preview(&segments, &bundle());
        assert_eq!(preview.chars().count(), 50);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_of_nothing_names_itself() {
        let collector = CommandSegmentCollector::default();
        assert_eq!(collector.preview(&[], &bundle()), "No command yet");
    }
}
