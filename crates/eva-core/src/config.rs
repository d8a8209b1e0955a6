//! Timing and threshold configuration
//!
//! Defaults are tuned for noisy rooms: short, responsive captures while
//! idle, long pause-tolerant captures once a command is underway.

use crate::phrases::ControlPhrases;
use crate::prompts::Prompts;
use crate::table::PhraseTable;
use eva_foundation::locale::Locale;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WakeConfig {
    /// How long to wait for speech to start while idle.
    pub listen_timeout: Duration,
    /// Longest wake utterance worth capturing.
    pub max_phrase: Duration,
    /// Minimum confidence for a token-only wake hit. An exact full-phrase
    /// hit bypasses this gate.
    pub confidence_floor: f32,
    /// Consecutive recognition failures before recalibrating the mic.
    pub max_failures: u32,
    /// Ambient-noise calibration length.
    pub calibrate_duration: Duration,
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            listen_timeout: Duration::from_secs(2),
            max_phrase: Duration::from_secs(4),
            confidence_floor: 0.4,
            max_failures: 5,
            calibrate_duration: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// How long to wait for each segment to start.
    pub segment_timeout: Duration,
    /// Longest single segment worth capturing.
    pub max_segment: Duration,
    /// Consecutive timeouts tolerated before the recap prompt.
    pub max_silence: u32,
    /// Previews longer than this get truncated...
    pub preview_limit: usize,
    /// ...to this many characters plus an ellipsis.
    pub preview_cut: usize,
    /// Joined commands longer than this get a spoken preview before
    /// processing.
    pub announce_threshold: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            segment_timeout: Duration::from_secs(15),
            max_segment: Duration::from_secs(10),
            max_silence: 3,
            preview_limit: 50,
            preview_cut: 47,
            announce_threshold: 100,
        }
    }
}

/// Everything locale-dependent, bundled so one parameterized state machine
/// serves every language instead of one module fork per language.
#[derive(Debug, Clone)]
pub struct LocaleBundle {
    pub locale: Locale,
    pub phrases: ControlPhrases,
    pub prompts: Prompts,
    pub table: PhraseTable,
}

impl LocaleBundle {
    pub fn new(locale: Locale, user: &str, assistant: &str) -> Self {
        Self {
            locale,
            phrases: ControlPhrases::for_locale(locale),
            prompts: Prompts::for_locale(locale, user, assistant),
            table: PhraseTable::builtin(),
        }
    }

    pub fn with_table(mut self, table: PhraseTable) -> Self {
        self.table = table;
        self
    }
}
