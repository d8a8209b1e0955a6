use serde::{Deserialize, Serialize};

/// Languages the assistant can operate in.
///
/// Each locale carries an ordered list of recognition hints that the
/// transcription service tries in turn, mirroring the language-variant
/// fallback the cloud recognizers offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    English,
    Swahili,
}

impl Locale {
    /// Ordered locale codes handed to the transcription service.
    /// The first entry is the preferred variant; the rest are fallbacks.
    pub fn recognition_hints(&self) -> &'static [&'static str] {
        match self {
            Locale::English => &["en-IN", "en-US", "en-GB"],
            Locale::Swahili => &["sw-KE", "sw-UG", "en-US"],
        }
    }

    /// Short language tag for speech synthesis.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Swahili => "sw",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Locale::English),
            "sw" | "swahili" => Some(Locale::Swahili),
            _ => None,
        }
    }
}
