//! Core value types for speech capture and recognition

/// One bounded microphone capture, delimited by timeout or phrase length.
///
/// 16 kHz mono S16LE is assumed throughout; the core never inspects the
/// samples, it only hands the clip to a `TranscriptionService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub samples: Vec<i16>,
    pub sample_rate_hz: u32,
}

impl AudioClip {
    pub fn new(samples: Vec<i16>, sample_rate_hz: u32) -> Self {
        Self {
            samples,
            sample_rate_hz,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate_hz == 0 {
            return 0;
        }
        (self.samples.len() as u64 * 1000) / self.sample_rate_hz as u64
    }
}

/// Outcome of one recognition call.
///
/// `transcript` is `None` when the service heard nothing usable; a present
/// transcript is already lowercased by the service. Produced once per call
/// and consumed immediately, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    pub transcript: Option<String>,
    /// Recognition certainty in [0, 1]. Zero when no transcript.
    pub confidence: f32,
}

impl RecognitionResult {
    pub fn recognized(transcript: impl Into<String>, confidence: f32) -> Self {
        Self {
            transcript: Some(transcript.into()),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Total failure: nothing heard, nothing recognized.
    pub fn none() -> Self {
        Self {
            transcript: None,
            confidence: 0.0,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.transcript.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_duration() {
        let clip = AudioClip::new(vec![0; 16_000], 16_000);
        assert_eq!(clip.duration_ms(), 1000);
    }

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(RecognitionResult::recognized("hi", 1.7).confidence, 1.0);
        assert_eq!(RecognitionResult::recognized("hi", -0.2).confidence, 0.0);
    }

    #[test]
    fn none_result_has_zero_confidence() {
        let result = RecognitionResult::none();
        assert!(!result.is_recognized());
        assert_eq!(result.confidence, 0.0);
    }
}
