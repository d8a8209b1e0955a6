//! Canned-response phrase table
//!
//! An explicitly ordered list of (trigger, response) pairs. Lookup is
//! first-match-wins over insertion order; with triggers that share tokens
//! ("play music" / "stop music") the earlier entry shadows the later one
//! for ambiguous input, and that ordering is part of the table's contract,
//! not an accident of map iteration.

/// Immutable trigger → response table, consulted read-only after startup.
#[derive(Debug, Clone)]
pub struct PhraseTable {
    entries: Vec<(String, String)>,
}

impl PhraseTable {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(trigger, response)| (trigger.to_lowercase(), (*response).to_string()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Find the canned response for a normalized (lowercased, trimmed)
    /// command, if any.
    ///
    /// A trigger matches when it appears as a substring of the command, or
    /// when any of its tokens appears as a token of the command. The first
    /// matching entry wins.
    pub fn lookup(&self, command: &str) -> Option<&str> {
        let command_tokens: Vec<&str> = command.split_whitespace().collect();

        for (trigger, response) in &self.entries {
            if command.contains(trigger.as_str()) {
                return Some(response);
            }
            if trigger
                .split_whitespace()
                .any(|token| command_tokens.contains(&token))
            {
                return Some(response);
            }
        }
        None
    }

    /// The built-in English table.
    pub fn builtin() -> Self {
        Self::from_pairs(&[
            // Greetings
            ("hello", "Hello! How can I help you today?"),
            ("hi", "Hi there! What can I do for you?"),
            ("good morning", "Good morning! Ready to start the day?"),
            ("good afternoon", "Good afternoon! How's your day going?"),
            ("good evening", "Good evening! What can I help you with?"),
            (
                "tell me about solutech",
                "solutech is a software company based in nairobi that uses data to provide valuable insights to users",
            ),
            (
                "what can you do",
                "I can help with time, weather, opening applications, playing music, setting reminders, telling jokes, and answering questions!",
            ),
            (
                "explain customer support",
                "calls can be routed to me and i will take crucial information and schedule a call back with highlighted notes from the missed call streamlining customer support",
            ),
            // Music and media
            ("play music", "Starting your music playlist."),
            ("stop music", "Music stopped."),
            ("volume up", "Increasing volume."),
            ("volume down", "Decreasing volume."),
            ("mute", "Audio muted."),
            // Information
            (
                "tell me a joke",
                "Why did the robot go on a diet? It had a byte problem!",
            ),
            ("news", "Let me get the latest news for you."),
            ("search", "What would you like me to search for?"),
            // Personal assistant
            ("remind me", "What would you like me to remind you about?"),
            ("set alarm", "What time should I set the alarm for?"),
            ("calendar", "Let me check your calendar."),
            ("email", "Opening your email application."),
            // Smart home
            ("lights on", "Turning the lights on."),
            ("lights off", "Turning the lights off."),
            ("lock doors", "Doors are now locked."),
            ("unlock doors", "Doors are now unlocked."),
            // Help and info
            (
                "help",
                "I can help you with various tasks like checking time, weather, opening apps, playing music, and much more. Just tell me what you need!",
            ),
            (
                "about you",
                "I'm Eva, your voice assistant. I'm here to help make your day easier!",
            ),
            // Fun
            (
                "tell me something interesting",
                "Did you know that honey never spoils? Archaeologists have found pots of honey in ancient Egyptian tombs that are over 3,000 years old!",
            ),
            (
                "motivate me",
                "You're doing great! Every small step counts. Keep pushing forward!",
            ),
            (
                "compliment me",
                "You have excellent taste in voice assistants! You're awesome!",
            ),
            // Status
            (
                "how are you",
                "I'm doing well and ready to help! How are you doing?",
            ),
            (
                "are you okay",
                "Yes, all systems are running perfectly! Thanks for asking.",
            ),
            ("battery", "Let me check the system status for you."),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_trigger_substring_matches() {
        let table = PhraseTable::builtin();
        assert_eq!(table.lookup("play music"), Some("Starting your music playlist."));
        assert_eq!(
            table.lookup("please play music now"),
            Some("Starting your music playlist.")
        );
    }

    #[test]
    fn token_overlap_matches() {
        let table = PhraseTable::from_pairs(&[("set alarm", "Setting it.")]);
        assert_eq!(table.lookup("alarm for six"), Some("Setting it."));
        // Tokens match whole words only; "alarming" is not "alarm".
        assert_eq!(table.lookup("that is alarming"), None);
    }

    #[test]
    fn first_match_wins_over_shared_tokens() {
        let table = PhraseTable::from_pairs(&[
            ("play music", "Playing."),
            ("stop music", "Stopping."),
        ]);
        // "music" is a token of both triggers; insertion order decides.
        assert_eq!(table.lookup("music please"), Some("Playing."));
    }

    #[test]
    fn no_match_returns_none() {
        let table = PhraseTable::builtin();
        // No trigger substring and no shared token with any trigger.
        assert_eq!(table.lookup("quantum flux capacitor"), None);
    }

    #[test]
    fn builtin_capabilities_answer_lists_abilities() {
        let table = PhraseTable::builtin();
        assert_eq!(
            table.lookup("what can you do"),
            Some(
                "I can help with time, weather, opening applications, playing music, setting reminders, telling jokes, and answering questions!"
            )
        );
    }

    #[test]
    fn builtin_table_is_nonempty_and_ordered() {
        let table = PhraseTable::builtin();
        assert!(!table.is_empty());
        // "hello" precedes "hi"; "hello there hi" must hit "hello".
        assert_eq!(
            table.lookup("hello there hi"),
            Some("Hello! How can I help you today?")
        );
    }
}
