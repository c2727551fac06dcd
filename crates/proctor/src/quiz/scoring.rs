//! Submission parsing and scoring.
//!
//! Submissions are scored against the whole bank, not the subset that was
//! presented, and every matching entry counts, including repeats.

use proctor_common::{ScoreReport, SubmittedAnswer};
use serde_json::Value;

use super::QuestionBank;

/// Answers from one submission, keyed by the client's own identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub answers: Vec<(String, SubmittedAnswer)>,
}

impl Submission {
    pub fn new(answers: Vec<(String, SubmittedAnswer)>) -> Self {
        Self { answers }
    }

    /// Parse a raw request body without ever failing.
    ///
    /// Anything that is not the expected shape is dropped: invalid JSON or a
    /// missing `answers` object yields an empty submission, a non-object entry
    /// becomes an empty answer, and non-string fields become absent.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                tracing::debug!(error = %e, "Submission body is not JSON, scoring as empty");
                Self::default()
            }
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let Some(entries) = value.get("answers").and_then(Value::as_object) else {
            return Self::default();
        };

        let answers = entries
            .iter()
            .map(|(key, entry)| {
                let field = |name: &str| entry.get(name).and_then(Value::as_str).map(str::to_string);
                let answer = SubmittedAnswer {
                    question: field("question"),
                    answer: field("answer"),
                };
                (key.clone(), answer)
            })
            .collect();

        Self { answers }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Count correct answers against the full bank
pub fn score_submission(bank: &QuestionBank, submission: &Submission) -> ScoreReport {
    let score = submission
        .answers
        .iter()
        .filter(|(_, submitted)| is_correct(bank, submitted))
        .count();

    ScoreReport::from_score(u32::try_from(score).unwrap_or(u32::MAX))
}

fn is_correct(bank: &QuestionBank, submitted: &SubmittedAnswer) -> bool {
    let (Some(question), Some(answer)) = (&submitted.question, &submitted.answer) else {
        return false;
    };

    bank.find_by_text(question)
        .is_some_and(|q| q.is_correct(answer))
}
