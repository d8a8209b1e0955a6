//! Wake detection, command segmentation, and routing for Eva
//!
//! The core state machine of the assistant: decide, utterance by
//! utterance, whether we are idle, waiting for a wake phrase, or mid-way
//! through assembling a multi-segment command, and when to finish, cancel,
//! retry, or give up. Audio capture, transcription, synthesis, and
//! generative inference all live behind traits from `eva-stt`, `eva-tts`,
//! and [`backend`].

pub mod backend;
pub mod collect;
pub mod config;
pub mod phrases;
pub mod prompts;
pub mod router;
pub mod session_loop;
pub mod table;
pub mod wake;

mod speak;

pub use backend::ResponseBackend;
pub use collect::{CollectOutcome, CommandSegmentCollector};
pub use config::{CollectorConfig, LocaleBundle, WakeConfig};
pub use phrases::{ControlPhrases, WakeMatch};
pub use prompts::Prompts;
pub use router::CommandRouter;
pub use session_loop::SessionLoop;
pub use table::PhraseTable;
pub use wake::WakePhraseDetector;
