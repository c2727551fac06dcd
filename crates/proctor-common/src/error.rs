//! Common error types for Proctor components.

use thiserror::Error;

/// Common errors across Proctor components
#[derive(Debug, Error)]
pub enum QuizError {
    /// More questions requested than the bank holds.
    /// Indicates a code or deployment defect, never a client mistake.
    #[error("Configuration error: requested {requested} questions but the bank holds {available}")]
    Configuration { requested: usize, available: usize },

    /// The question bank violates one of its invariants
    #[error("Invalid question bank: {0}")]
    InvalidBank(String),

    /// The passcode counter could not be read, advanced, or persisted
    #[error("Counter store error: {0}")]
    CounterStore(String),
}

impl QuizError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Configuration { .. } => 500,
            Self::InvalidBank(_) => 500,
            Self::CounterStore(_) => 503,
        }
    }

    /// Returns true if this error indicates a defect rather than a runtime condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::InvalidBank(_))
    }
}
