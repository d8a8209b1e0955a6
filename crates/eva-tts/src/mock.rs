//! Speech output doubles for testing

use crate::output::SpeechOutput;
use async_trait::async_trait;
use eva_foundation::error::TtsError;
use eva_foundation::locale::Locale;

/// Discards everything. Useful when a test only cares about outcomes.
#[derive(Debug, Default)]
pub struct NullSpeech;

#[async_trait]
impl SpeechOutput for NullSpeech {
    async fn speak(&mut self, _text: &str, _locale: Locale) -> Result<(), TtsError> {
        Ok(())
    }
}

/// Records every spoken line so tests can assert on user-facing prompts.
#[derive(Debug, Default)]
pub struct RecordingSpeech {
    spoken: Vec<String>,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> &[String] {
        &self.spoken
    }

    pub fn spoke_containing(&self, needle: &str) -> bool {
        self.spoken.iter().any(|line| line.contains(needle))
    }
}

#[async_trait]
impl SpeechOutput for RecordingSpeech {
    async fn speak(&mut self, text: &str, _locale: Locale) -> Result<(), TtsError> {
        self.spoken.push(text.to_string());
        Ok(())
    }
}

/// Always fails, for verifying that synthesis errors never abort a session.
#[derive(Debug, Default)]
pub struct FailingSpeech {
    attempts: u32,
}

impl FailingSpeech {
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

#[async_trait]
impl SpeechOutput for FailingSpeech {
    async fn speak(&mut self, _text: &str, _locale: Locale) -> Result<(), TtsError> {
        self.attempts += 1;
        Err(TtsError::Playback("no audio sink".into()))
    }
}
