//! Top-level session orchestration
//!
//! Greets once, then cycles wake detection → command collection → routing
//! until an exit intent comes back from the collector. Strictly sequential:
//! one logical thread of control, every collaborator call a suspension
//! point, no shared-state locking anywhere.

use crate::backend::ResponseBackend;
use crate::collect::{CollectOutcome, CommandSegmentCollector};
use crate::config::{CollectorConfig, LocaleBundle, WakeConfig};
use crate::router::CommandRouter;
use crate::speak::say;
use crate::wake::WakePhraseDetector;
use chrono::Timelike;
use eva_foundation::error::EvaError;
use eva_foundation::session::{Session, SessionState};
use eva_stt::{AudioCapture, TranscriptionService};
use eva_tts::SpeechOutput;

/// Consecutive cancelled/given-up collections before going back to sleep.
pub const MAX_CONSECUTIVE_GIVE_UPS: u32 = 3;

pub struct SessionLoop<C, R, S, B>
where
    C: AudioCapture,
    R: TranscriptionService,
    S: SpeechOutput,
    B: ResponseBackend,
{
    session: Session,
    bundle: LocaleBundle,
    wake: WakePhraseDetector,
    collector: CommandSegmentCollector,
    router: CommandRouter<B>,
    capture: C,
    recognizer: R,
    speech: S,
}

impl<C, R, S, B> SessionLoop<C, R, S, B>
where
    C: AudioCapture,
    R: TranscriptionService,
    S: SpeechOutput,
    B: ResponseBackend,
{
    pub fn new(bundle: LocaleBundle, capture: C, recognizer: R, speech: S, backend: B) -> Self {
        Self {
            session: Session::new(bundle.locale),
            bundle,
            wake: WakePhraseDetector::default(),
            collector: CommandSegmentCollector::default(),
            router: CommandRouter::new(backend),
            capture,
            recognizer,
            speech,
        }
    }

    pub fn with_wake_config(mut self, config: WakeConfig) -> Self {
        self.wake = WakePhraseDetector::new(config);
        self
    }

    pub fn with_collector_config(mut self, config: CollectorConfig) -> Self {
        self.collector = CommandSegmentCollector::new(config);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn speech(&self) -> &S {
        &self.speech
    }

    pub fn capture(&self) -> &C {
        &self.capture
    }

    /// Run until the user asks to exit.
    pub async fn run(&mut self) -> Result<(), EvaError> {
        let greeting = self.bundle.prompts.greeting(chrono::Local::now().hour());
        say(&mut self.speech, &greeting, self.bundle.locale).await;

        self.session.transition(SessionState::AwaitingWake)?;

        loop {
            self.wake
                .await_wake(
                    &mut self.session,
                    &self.bundle,
                    &mut self.capture,
                    &mut self.recognizer,
                    &mut self.speech,
                )
                .await;

            self.session.transition(SessionState::Collecting)?;

            if !self.collect_until_dismissed().await? {
                self.session.transition(SessionState::Idle)?;
                tracing::info!("exit intent received, session over");
                return Ok(());
            }

            self.session.transition(SessionState::AwaitingWake)?;
        }
    }

    /// Inner command loop for one wake cycle. Returns `true` to go back to
    /// wake listening, `false` on exit intent.
    async fn collect_until_dismissed(&mut self) -> Result<bool, EvaError> {
        let mut give_ups: u32 = 0;

        loop {
            let outcome = self
                .collector
                .collect(
                    &self.bundle,
                    &mut self.capture,
                    &mut self.recognizer,
                    &mut self.speech,
                )
                .await;

            match outcome {
                CollectOutcome::Completed(command) => {
                    give_ups = 0;
                    let response = self
                        .router
                        .route(&command, &self.bundle, &mut self.speech)
                        .await;
                    say(&mut self.speech, &response, self.bundle.locale).await;

                    if self.bundle.phrases.is_stop(&response) {
                        say(&mut self.speech, &self.bundle.prompts.stop_ack, self.bundle.locale)
                            .await;
                        return Ok(true);
                    }
                }
                CollectOutcome::Cancelled | CollectOutcome::GaveUp => {
                    give_ups += 1;
                    if give_ups >= MAX_CONSECUTIVE_GIVE_UPS {
                        say(
                            &mut self.speech,
                            &self.bundle.prompts.back_to_sleep,
                            self.bundle.locale,
                        )
                        .await;
                        return Ok(true);
                    }
                }
                CollectOutcome::Exit(_farewell) => {
                    // The collector already spoke the farewell.
                    return Ok(false);
                }
            }
        }
    }
}
