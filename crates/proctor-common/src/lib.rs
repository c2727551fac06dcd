//! # Proctor Common
//!
//! Shared types, constants, and data used across Proctor components.
//!
//! ## Modules
//! - `types` - Core data structures (Question, Passcode, QuizResult, etc.)
//! - `questions` - The built-in question bank
//! - `error` - Common error types
//! - `constants` - Quiz policy and deployment defaults

pub mod constants;
pub mod error;
pub mod questions;
pub mod types;

pub use error::QuizError;
pub use questions::BUILTIN_QUESTIONS;
pub use types::*;
