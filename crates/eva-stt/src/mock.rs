//! Scripted capture/recognition doubles for testing
//!
//! Tests script the exact sequence of capture and recognition outcomes and
//! assert on what the state machine does with them. When a script runs out,
//! the capture mock reports silence forever, so scripts for wake-phrase
//! tests must end in an accepted utterance.

use crate::capture::AudioCapture;
use crate::recognize::TranscriptionService;
use crate::types::{AudioClip, RecognitionResult};
use async_trait::async_trait;
use eva_foundation::error::SttError;
use std::collections::VecDeque;
use std::time::Duration;

/// One scripted outcome of an `AudioCapture::listen` call.
#[derive(Debug, Clone)]
pub enum CaptureStep {
    /// Speech was captured; the clip contents are a placeholder.
    Audio,
    /// Nothing heard before the timeout.
    Timeout,
    /// Device-level fault.
    DeviceError(String),
}

#[derive(Debug, Default)]
pub struct ScriptedCapture {
    steps: VecDeque<CaptureStep>,
    listen_calls: u32,
    calibrate_calls: u32,
}

impl ScriptedCapture {
    pub fn new(steps: Vec<CaptureStep>) -> Self {
        Self {
            steps: steps.into(),
            listen_calls: 0,
            calibrate_calls: 0,
        }
    }

    /// A capture that hears speech `n` times in a row.
    pub fn hearing(n: usize) -> Self {
        Self::new(vec![CaptureStep::Audio; n])
    }

    pub fn listen_calls(&self) -> u32 {
        self.listen_calls
    }

    pub fn calibrate_calls(&self) -> u32 {
        self.calibrate_calls
    }

    fn placeholder_clip() -> AudioClip {
        AudioClip::new(vec![0; 160], 16_000)
    }
}

#[async_trait]
impl AudioCapture for ScriptedCapture {
    async fn listen(
        &mut self,
        _timeout: Duration,
        _max_phrase: Duration,
    ) -> Result<Option<AudioClip>, SttError> {
        self.listen_calls += 1;
        match self.steps.pop_front() {
            Some(CaptureStep::Audio) => Ok(Some(Self::placeholder_clip())),
            Some(CaptureStep::Timeout) | None => Ok(None),
            Some(CaptureStep::DeviceError(msg)) => Err(SttError::Device(msg)),
        }
    }

    async fn calibrate(&mut self, _duration: Duration) -> Result<(), SttError> {
        self.calibrate_calls += 1;
        Ok(())
    }
}

/// One scripted outcome of a `TranscriptionService::recognize` call.
#[derive(Debug, Clone)]
pub enum RecognizeStep {
    /// Transcript plus confidence.
    Heard(&'static str, f32),
    /// Audio arrived but nothing was recognized.
    Miss,
    /// Service fault.
    ServiceError(String),
}

#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    steps: VecDeque<RecognizeStep>,
    recognize_calls: u32,
    last_hints: Vec<String>,
}

impl ScriptedRecognizer {
    pub fn new(steps: Vec<RecognizeStep>) -> Self {
        Self {
            steps: steps.into(),
            recognize_calls: 0,
            last_hints: Vec::new(),
        }
    }

    /// A recognizer that returns the given transcripts, all confidently.
    pub fn transcripts(texts: &[&'static str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|t| RecognizeStep::Heard(*t, 0.9))
                .collect(),
        )
    }

    pub fn recognize_calls(&self) -> u32 {
        self.recognize_calls
    }

    /// The hint list passed to the most recent `recognize` call.
    pub fn last_hints(&self) -> &[String] {
        &self.last_hints
    }
}

#[async_trait]
impl TranscriptionService for ScriptedRecognizer {
    async fn recognize(
        &mut self,
        _clip: &AudioClip,
        hints: &[&str],
    ) -> Result<RecognitionResult, SttError> {
        self.recognize_calls += 1;
        self.last_hints = hints.iter().map(|h| (*h).to_string()).collect();
        match self.steps.pop_front() {
            Some(RecognizeStep::Heard(text, confidence)) => {
                Ok(RecognitionResult::recognized(text, confidence))
            }
            Some(RecognizeStep::Miss) | None => Ok(RecognitionResult::none()),
            Some(RecognizeStep::ServiceError(msg)) => Err(SttError::Service(msg)),
        }
    }
}
