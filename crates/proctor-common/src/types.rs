//! Core types shared across Proctor components.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{PASS_MARK, QUIZ_TOTAL, passcode};

/// A question record in the bank.
///
/// Invariant: `correct_answer` is one of `options`. Checked when a bank
/// is assembled, not here, so static tables stay `const`-constructible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Question text, unique within a bank
    pub text: &'static str,

    /// Answer options in display order
    pub options: [&'static str; 4],

    /// The correct option, verbatim
    pub correct_answer: &'static str,
}

impl Question {
    pub const fn new(
        text: &'static str,
        options: [&'static str; 4],
        correct_answer: &'static str,
    ) -> Self {
        Self {
            text,
            options,
            correct_answer,
        }
    }

    /// Returns true if the correct answer is one of the options
    pub fn is_well_formed(&self) -> bool {
        self.options.contains(&self.correct_answer)
    }

    /// Exact, case-sensitive answer check
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// Question sent to the client, without its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedQuestion {
    /// Position within the sampled quiz (0-indexed)
    pub id: usize,

    /// Question text
    #[serde(rename = "question")]
    pub text: String,

    /// Answer options in display order
    pub options: Vec<String>,
}

impl PresentedQuestion {
    pub fn new(id: usize, question: &Question) -> Self {
        Self {
            id,
            text: question.text.to_string(),
            options: question.options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// One client-submitted answer.
///
/// Either field may be missing in a sloppy submission; a missing field
/// never matches a bank entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    /// Claimed question text
    #[serde(default)]
    pub question: Option<String>,

    /// Claimed answer text
    #[serde(default)]
    pub answer: Option<String>,
}

impl SubmittedAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }
}

/// Outcome of scoring a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u32,
    pub total: u32,
    pub passed: bool,
}

impl ScoreReport {
    /// Build a report for a raw score using the fixed total and pass mark
    pub fn from_score(score: u32) -> Self {
        Self {
            score,
            total: QUIZ_TOTAL,
            passed: score >= PASS_MARK,
        }
    }
}

/// A passcode issued for a passing submission, e.g. `LW007P`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Passcode(String);

impl Passcode {
    /// Derive the passcode for a post-increment counter value.
    ///
    /// Values of 1000 and above simply grow wider (`LW1000P`).
    pub fn from_counter(value: u64) -> Self {
        Self(format!(
            "{}{:0width$}{}",
            passcode::PREFIX,
            value,
            passcode::SUFFIX,
            width = passcode::MIN_DIGITS
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Response body for a quiz submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub passed: bool,

    /// Present only when `passed`; serialized as `null` otherwise
    pub passcode: Option<Passcode>,

    pub pass_mark: u32,
}

impl QuizResult {
    pub fn new(report: ScoreReport, passcode: Option<Passcode>) -> Self {
        Self {
            score: report.score,
            total: report.total,
            passed: report.passed,
            passcode,
            pass_mark: PASS_MARK,
        }
    }
}
