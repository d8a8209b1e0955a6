//! Generative response backend boundary

use async_trait::async_trait;
use eva_foundation::error::BackendError;
use eva_foundation::locale::Locale;

/// Best-effort generative completion for commands with no canned response.
///
/// The router appends a brief-response instruction to the prompt, strips
/// the reply down to plain sentence punctuation, and maps any `Err` to a
/// fixed apology. Nothing a backend does can abort a session.
#[async_trait]
pub trait ResponseBackend: Send {
    async fn generate(&mut self, prompt: &str, locale: Locale) -> Result<String, BackendError>;
}

/// Backend double returning a fixed reply.
#[derive(Debug)]
pub struct CannedBackend {
    reply: String,
    calls: u32,
    last_prompt: Option<String>,
}

impl CannedBackend {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: 0,
            last_prompt: None,
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls
    }

    pub fn last_prompt(&self) -> Option<&str> {
        self.last_prompt.as_deref()
    }
}

#[async_trait]
impl ResponseBackend for CannedBackend {
    async fn generate(&mut self, prompt: &str, _locale: Locale) -> Result<String, BackendError> {
        self.calls += 1;
        self.last_prompt = Some(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Backend double that always fails.
#[derive(Debug, Default)]
pub struct FailingBackend {
    calls: u32,
}

impl FailingBackend {
    pub fn calls(&self) -> u32 {
        self.calls
    }
}

#[async_trait]
impl ResponseBackend for FailingBackend {
    async fn generate(&mut self, _prompt: &str, _locale: Locale) -> Result<String, BackendError> {
        self.calls += 1;
        Err(BackendError::Unavailable("model endpoint down".into()))
    }
}
