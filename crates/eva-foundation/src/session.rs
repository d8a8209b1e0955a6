use crate::error::EvaError;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// Top-level session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Process started, greeting not yet finished or shutting down.
    Idle,
    /// Waiting for the wake phrase.
    AwaitingWake,
    /// Assembling a multi-segment command.
    Collecting,
}

/// Process-wide session state, passed by mutable reference into each
/// component call rather than held in a global.
///
/// The state field is the only thing that transitions; the wake-failure
/// counter is owned here because recalibration policy is session-scoped,
/// not collector-scoped.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    consecutive_wake_failures: u32,
    locale: Locale,
}

impl Session {
    pub fn new(locale: Locale) -> Self {
        Self {
            state: SessionState::Idle,
            consecutive_wake_failures: 0,
            locale,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Move to a new phase, rejecting transitions the loop never makes.
    pub fn transition(&mut self, new_state: SessionState) -> Result<(), EvaError> {
        let valid = matches!(
            (self.state, new_state),
            (SessionState::Idle, SessionState::AwaitingWake)
                | (SessionState::AwaitingWake, SessionState::Collecting)
                | (SessionState::AwaitingWake, SessionState::Idle)
                | (SessionState::Collecting, SessionState::AwaitingWake)
                | (SessionState::Collecting, SessionState::Idle)
        );

        if !valid {
            return Err(EvaError::InvalidTransition {
                from: self.state,
                to: new_state,
            });
        }

        tracing::debug!("Session transition: {:?} -> {:?}", self.state, new_state);
        self.state = new_state;
        Ok(())
    }

    /// Record one failed recognition while awaiting the wake phrase.
    /// Returns the updated consecutive-failure count.
    pub fn record_wake_failure(&mut self) -> u32 {
        self.consecutive_wake_failures += 1;
        self.consecutive_wake_failures
    }

    pub fn reset_wake_failures(&mut self) {
        self.consecutive_wake_failures = 0;
    }

    pub fn consecutive_wake_failures(&self) -> u32 {
        self.consecutive_wake_failures
    }
}
