//! Console harness collaborators
//!
//! Lets the whole session loop run without microphone hardware or cloud
//! credentials: each line typed on stdin stands in for one captured
//! utterance, responses are printed instead of synthesized, and the
//! generative backend is a trivial echo. Swap these for real
//! implementations of the same traits to go live.
//!
//! The typed text travels out of band through a queue shared between the
//! capture and recognizer halves; the `AudioClip` handed across the trait
//! boundary is a placeholder.

use async_trait::async_trait;
use eva_core::backend::ResponseBackend;
use eva_foundation::error::{BackendError, SttError, TtsError};
use eva_foundation::locale::Locale;
use eva_stt::{AudioCapture, AudioClip, RecognitionResult, TranscriptionService};
use eva_tts::SpeechOutput;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

type SharedLines = Arc<Mutex<VecDeque<String>>>;

pub fn console_pair() -> (ConsoleCapture, ConsoleRecognizer) {
    let queue: SharedLines = Arc::new(Mutex::new(VecDeque::new()));
    (
        ConsoleCapture::new(Arc::clone(&queue)),
        ConsoleRecognizer::new(queue),
    )
}

pub struct ConsoleCapture {
    lines: Lines<BufReader<Stdin>>,
    queue: SharedLines,
}

impl ConsoleCapture {
    fn new(queue: SharedLines) -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            queue,
        }
    }

    fn placeholder_clip() -> AudioClip {
        AudioClip::new(vec![0; 160], 16_000)
    }
}

#[async_trait]
impl AudioCapture for ConsoleCapture {
    async fn listen(
        &mut self,
        timeout: Duration,
        _max_phrase: Duration,
    ) -> Result<Option<AudioClip>, SttError> {
        match tokio::time::timeout(timeout, self.lines.next_line()).await {
            Err(_elapsed) => Ok(None),
            Ok(Ok(Some(line))) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    return Ok(None);
                }
                self.queue.lock().push_back(line);
                Ok(Some(Self::placeholder_clip()))
            }
            Ok(Ok(None)) => {
                // stdin closed; pace the retry loop instead of spinning.
                tokio::time::sleep(timeout).await;
                Ok(None)
            }
            Ok(Err(e)) => Err(SttError::Io(e)),
        }
    }

    async fn calibrate(&mut self, duration: Duration) -> Result<(), SttError> {
        tracing::info!(?duration, "console capture has no mic to calibrate");
        Ok(())
    }
}

pub struct ConsoleRecognizer {
    queue: SharedLines,
}

impl ConsoleRecognizer {
    fn new(queue: SharedLines) -> Self {
        Self { queue }
    }
}

#[async_trait]
impl TranscriptionService for ConsoleRecognizer {
    async fn recognize(
        &mut self,
        _clip: &AudioClip,
        _hints: &[&str],
    ) -> Result<RecognitionResult, SttError> {
        match self.queue.lock().pop_front() {
            Some(line) => Ok(RecognitionResult::recognized(line.to_lowercase(), 1.0)),
            None => Ok(RecognitionResult::none()),
        }
    }
}

pub struct ConsoleSpeech;

#[async_trait]
impl SpeechOutput for ConsoleSpeech {
    async fn speak(&mut self, text: &str, _locale: Locale) -> Result<(), TtsError> {
        println!("eva> {text}");
        Ok(())
    }
}

/// Stand-in generative backend for the console harness.
pub struct EchoBackend;

#[async_trait]
impl ResponseBackend for EchoBackend {
    async fn generate(&mut self, prompt: &str, _locale: Locale) -> Result<String, BackendError> {
        let command = prompt.lines().next().unwrap_or_default();
        Ok(format!("I don't have a canned answer for {command}."))
    }
}
