//! Per-locale user-facing strings
//!
//! Every line the assistant ever speaks lives here, templated once at
//! startup with the user's and the assistant's names. The English and
//! Swahili bundles drive the exact same state machine; only these strings
//! differ between them.

use eva_foundation::locale::Locale;

#[derive(Debug, Clone)]
pub struct Prompts {
    pub wake_ack: String,
    pub didnt_hear: String,
    pub couldnt_hear: String,
    pub didnt_catch_part: String,
    pub still_listening: String,
    pub got_it: String,
    pub listening_ping: String,
    pub cancelled: String,
    pub no_command: String,
    pub no_command_yet: String,
    pub farewell: String,
    pub processing_request: String,
    pub apology: String,
    pub back_to_sleep: String,
    pub stop_ack: String,
    pub brief_instruction: String,

    recap_template: String,
    processing_template: String,
    greeting_morning: String,
    greeting_afternoon: String,
    greeting_evening: String,
    greeting_default: String,
    greeting_instructions: String,
}

impl Prompts {
    pub fn english(user: &str, assistant: &str) -> Self {
        Self {
            wake_ack: format!(
                "I'm listening {user}. Say your command and then say 'finished eva' when finished."
            ),
            didnt_hear: "I didn't hear anything. Please try again.".to_string(),
            couldnt_hear: "I couldn't hear you clearly. Please try again.".to_string(),
            didnt_catch_part: "I didn't catch that part. Please continue or say 'finished eva'."
                .to_string(),
            still_listening: "I'm still listening. Continue or say 'finished eva'.".to_string(),
            got_it: "Got it. Continue or say 'finished eva'.".to_string(),
            listening_ping: "Still listening...".to_string(),
            cancelled: "Command cancelled. Give me a new command.".to_string(),
            no_command: "You didn't give me a command. Please try again.".to_string(),
            no_command_yet: "No command yet".to_string(),
            farewell: format!("Good bye {user}, have an amazing day!"),
            processing_request: "Processing your request...".to_string(),
            apology: "I'm having trouble processing that request right now.".to_string(),
            back_to_sleep: "Going back to sleep. Say Hey Eva to wake me up.".to_string(),
            stop_ack: "Okay. Just say Hey Eva when you need me again.".to_string(),
            brief_instruction: "Please respond briefly and clearly.".to_string(),
            recap_template:
                "I have: {preview}. Say 'finished eva' to process, 'cancel' to start over, or continue your command."
                    .to_string(),
            processing_template: "Processing: {preview}".to_string(),
            greeting_morning: format!("Good morning {user}"),
            greeting_afternoon: format!("Good afternoon {user}"),
            greeting_evening: format!("Good evening {user}"),
            greeting_default: format!("Hello {user}"),
            greeting_instructions: format!(
                ". I am {assistant}. Say Hey Eva to activate me. Give me your command and say 'finished eva' when finished. You can also say 'cancel' to start over. When you are done say bye eva to deactivate."
            ),
        }
    }

    pub fn swahili(user: &str, assistant: &str) -> Self {
        Self {
            wake_ack: format!(
                "Ninasikiliza {user}. Nipe amri yako na useme 'nimemaliza eva' ukimaliza."
            ),
            didnt_hear: "Sikuskia chochote. Tafadhali jaribu tena.".to_string(),
            couldnt_hear: "Sikukusikia vizuri. Tafadhali jaribu tena.".to_string(),
            didnt_catch_part: "Sikuelewa sehemu hiyo. Endelea au sema 'nimemaliza eva'."
                .to_string(),
            still_listening: "Bado ninasikiliza. Endelea au sema 'nimemaliza eva'.".to_string(),
            got_it: "Nimepata. Endelea au sema 'nimemaliza eva'.".to_string(),
            listening_ping: "Bado ninasikiliza...".to_string(),
            cancelled: "Amri imeghairiwa. Nipe amri mpya.".to_string(),
            no_command: "Hukunipa amri. Tafadhali jaribu tena.".to_string(),
            no_command_yet: "Hakuna amri bado".to_string(),
            farewell: format!("Kwaheri {user}, uwe na siku njema!"),
            processing_request: "Ninachakata ombi lako...".to_string(),
            apology: "Nina shida kuchakata ombi hilo kwa sasa.".to_string(),
            back_to_sleep: "Ninarudi kulala. Sema Hujambo Eva kuniamsha.".to_string(),
            stop_ack: "Sawa. Sema Hujambo Eva utakaponihitaji tena.".to_string(),
            brief_instruction: "Tafadhali jibu kwa ufupi na kwa uwazi.".to_string(),
            recap_template:
                "Nina: {preview}. Sema 'nimemaliza eva' kuchakata, 'ghairi' kuanza upya, au endelea na amri yako."
                    .to_string(),
            processing_template: "Ninachakata: {preview}".to_string(),
            greeting_morning: format!("Habari za asubuhi {user}"),
            greeting_afternoon: format!("Habari za mchana {user}"),
            greeting_evening: format!("Habari za jioni {user}"),
            greeting_default: format!("Hujambo {user}"),
            greeting_instructions: format!(
                ". Mimi ni {assistant}. Sema Hujambo Eva kuniamsha. Nipe amri yako na useme 'nimemaliza eva' ukimaliza. Unaweza pia kusema 'ghairi' kuanza upya. Ukimaliza sema kwaheri eva kunizima."
            ),
        }
    }

    pub fn for_locale(locale: Locale, user: &str, assistant: &str) -> Self {
        match locale {
            Locale::English => Self::english(user, assistant),
            Locale::Swahili => Self::swahili(user, assistant),
        }
    }

    /// The status recap spoken after repeated silence mid-command.
    pub fn recap(&self, preview: &str) -> String {
        self.recap_template.replace("{preview}", preview)
    }

    /// Announced before processing a long assembled command.
    pub fn processing(&self, preview: &str) -> String {
        self.processing_template.replace("{preview}", preview)
    }

    /// Time-of-day greeting with usage instructions, spoken once at startup.
    pub fn greeting(&self, hour: u32) -> String {
        let opening = match hour {
            6..=11 => &self.greeting_morning,
            12..=16 => &self.greeting_afternoon,
            17..=18 => &self.greeting_evening,
            _ => &self.greeting_default,
        };
        format!("{}{}", opening, self.greeting_instructions)
    }
}
