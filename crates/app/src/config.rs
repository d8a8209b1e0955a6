//! Startup configuration from the environment
//!
//! A bad locale or a missing name is a startup failure; the process must
//! not reach the session loop half-configured.

use eva_foundation::error::ConfigError;
use eva_foundation::locale::Locale;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub locale: Locale,
    pub user: String,
    pub assistant: String,
}

impl AppConfig {
    /// Read `EVA_LOCALE`, `EVA_USER`/`USER`, and `EVA_NAME`/`HOSTNAME`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::var("EVA_LOCALE").ok().as_deref(),
            std::env::var("EVA_USER")
                .or_else(|_| std::env::var("USER"))
                .ok()
                .as_deref(),
            std::env::var("EVA_NAME")
                .or_else(|_| std::env::var("HOSTNAME"))
                .ok()
                .as_deref(),
        )
    }

    fn from_parts(
        locale_tag: Option<&str>,
        user: Option<&str>,
        assistant: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let locale = match locale_tag {
            Some(tag) => Locale::from_tag(tag).ok_or_else(|| ConfigError::InvalidValue {
                name: "EVA_LOCALE".to_string(),
                value: tag.to_string(),
            })?,
            None => Locale::default(),
        };

        Ok(Self {
            locale,
            user: user.unwrap_or("User").to_string(),
            assistant: assistant.unwrap_or("Eva").to_string(),
        })
    }
}
