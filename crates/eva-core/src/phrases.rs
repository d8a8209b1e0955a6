//! Control-phrase sets and matching policy
//!
//! Matching is deliberately lenient. ASR output for short control
//! utterances is frequently truncated or garbled ("hey eva" arrives as
//! "eva" or "hey ava"), so everything here is substring based rather than
//! exact equality. The policies are:
//!
//!   - wake: full phrase substring, or any single wake token substring
//!     (a token hit is only accepted above the confidence floor)
//!   - cancel: substring
//!   - done: equality or substring
//!   - exit: any exit word contained in the segment
//!   - stop: full stop phrase substring, or the assistant's name mentioned
//!     together with a bare stop token ("bye", "stop", ...)

use eva_foundation::locale::Locale;

/// How a transcript matched the wake phrase set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeMatch {
    /// A full wake phrase appeared verbatim in the transcript.
    /// Bypasses the confidence gate.
    Exact,
    /// Only an individual wake token appeared; confidence gated.
    Partial,
    Miss,
}

/// Immutable per-locale control phrase sets. Built once at startup.
#[derive(Debug, Clone)]
pub struct ControlPhrases {
    pub wake: Vec<String>,
    pub stop: Vec<String>,
    pub done: Vec<String>,
    pub cancel: Vec<String>,
    pub exit: Vec<String>,
    /// The name users address the assistant by; combined with
    /// `stop_tokens` for the loose stop-phrase heuristic.
    pub assistant_name: String,
    pub stop_tokens: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl ControlPhrases {
    pub fn english() -> Self {
        Self {
            wake: owned(&["hey eva", "eva"]),
            stop: owned(&["bye eva", "stop eva", "sleep eva", "goodbye eva"]),
            done: owned(&["finished eva"]),
            cancel: owned(&["cancel"]),
            exit: owned(&["leave", "exit", "quit", "goodbye"]),
            assistant_name: "eva".to_string(),
            stop_tokens: owned(&["bye", "stop", "goodbye", "sleep", "quiet", "shut up"]),
        }
    }

    pub fn swahili() -> Self {
        Self {
            wake: owned(&["hujambo eva", "hey eva"]),
            stop: owned(&["kwaheri eva", "bye eva"]),
            done: owned(&["nimemaliza eva", "finished eva"]),
            cancel: owned(&["ghairi", "cancel"]),
            exit: owned(&["ondoka", "toka", "kwaheri", "leave", "exit", "quit", "goodbye"]),
            assistant_name: "eva".to_string(),
            stop_tokens: owned(&[
                "kwaheri", "simama", "bye", "stop", "goodbye", "sleep", "quiet", "shut up",
            ]),
        }
    }

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => Self::english(),
            Locale::Swahili => Self::swahili(),
        }
    }

    /// Test a transcript against the wake set.
    ///
    /// Any exact full-phrase hit wins over a token hit, even when a token
    /// of an earlier phrase also matched.
    pub fn wake_match(&self, transcript: &str) -> WakeMatch {
        let text = transcript.to_lowercase();
        let mut partial = false;

        for phrase in &self.wake {
            if text.contains(phrase.as_str()) {
                return WakeMatch::Exact;
            }
            if phrase.split_whitespace().any(|token| text.contains(token)) {
                partial = true;
            }
        }

        if partial {
            WakeMatch::Partial
        } else {
            WakeMatch::Miss
        }
    }

    pub fn is_cancel(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        let text = text.trim();
        self.cancel.iter().any(|phrase| text.contains(phrase.as_str()))
    }

    pub fn is_done(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        let text = text.trim();
        self.done
            .iter()
            .any(|phrase| phrase.as_str() == text || text.contains(phrase.as_str()))
    }

    /// Exit intent terminates the whole session, not just the current
    /// collection.
    pub fn is_exit(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.exit.iter().any(|word| text.contains(word.as_str()))
    }

    pub fn is_stop(&self, text: &str) -> bool {
        let text = text.to_lowercase();

        if self.stop.iter().any(|phrase| text.contains(phrase.as_str())) {
            return true;
        }

        // "bye" alone is too loose, but "bye" plus the assistant's name
        // anywhere in the utterance is a clear dismissal.
        if text.contains(self.assistant_name.as_str()) {
            return self
                .stop_tokens
                .iter()
                .any(|token| text.contains(token.as_str()));
        }

        false
    }
}
