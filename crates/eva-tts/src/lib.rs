//! Speech output abstraction layer for Eva

pub mod mock;
pub mod output;

pub use output::SpeechOutput;
