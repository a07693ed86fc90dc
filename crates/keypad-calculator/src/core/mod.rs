//! Core calculator: engine, operators and number conversion
//!
//! The engine itself is total. [`CalcError`] only covers the edges: key
//! labels that name no button, terminal I/O, snapshot serialization and
//! logger setup.

pub mod engine;
pub mod number;
mod operations;

pub use engine::{transition, CalcState, Event};
pub use number::{format_number, parse_display};
pub use operations::{calculate, calculate_symbol, Operator};

use thiserror::Error;

/// Result type for calculator front-end operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised around the engine
#[derive(Debug, Error)]
pub enum CalcError {
    /// A key label that matches no keypad button
    #[error("Unknown key: {label:?}")]
    UnknownKey {
        /// The label as given
        label: String,
    },

    /// Terminal or log file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// State snapshot could not be serialized
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl CalcError {
    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(label: impl Into<String>) -> Self {
        Self::UnknownKey {
            label: label.into(),
        }
    }

    /// Create a logging setup error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
