//! Command routing: canned phrase table first, generative backend second

use crate::backend::ResponseBackend;
use crate::config::LocaleBundle;
use crate::speak::say;
use eva_tts::SpeechOutput;

/// Commands longer than this get a spoken "processing" notice before the
/// backend round trip.
const LONG_COMMAND_CHARS: usize = 50;

pub struct CommandRouter<B: ResponseBackend> {
    backend: B,
}

impl<B: ResponseBackend> CommandRouter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Resolve a command to its spoken response.
    ///
    /// Table hits return the canned response verbatim and never touch the
    /// backend. Misses are forwarded with a brief-response instruction;
    /// backend replies are stripped down to plain sentence punctuation and
    /// backend failures become a fixed apology, never an error.
    pub async fn route<S: SpeechOutput>(
        &mut self,
        command: &str,
        bundle: &LocaleBundle,
        speech: &mut S,
    ) -> String {
        let command = command.to_lowercase();
        let command = command.trim();
        tracing::info!(command = %command, "routing command");

        if let Some(response) = bundle.table.lookup(command) {
            tracing::info!(response = %response, "phrase table hit");
            return response.to_string();
        }

        if command.chars().count() > LONG_COMMAND_CHARS {
            say(speech, &bundle.prompts.processing_request, bundle.locale).await;
        }

        let prompt = format!("{command}\n{}", bundle.prompts.brief_instruction);
        match self.backend.generate(&prompt, bundle.locale).await {
            Ok(raw) => {
                let response = sanitize(&raw);
                tracing::info!(response = %response, "backend response");
                response
            }
            Err(e) => {
                tracing::warn!(error = %e, "backend failed, apologizing");
                bundle.prompts.apology.clone()
            }
        }
    }
}

/// Strip everything but word characters, whitespace, and `. , ? !` so the
/// synthesizer never reads markdown asterisks or stray symbols aloud.
fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| {
            c.is_alphanumeric() || *c == '_' || c.is_whitespace() || matches!(c, '.' | ',' | '?' | '!')
        })
        .collect::<String>()
        .trim()
        .to_string()
}
