//! Quiz selection, scoring, and passcode issuance.
//!
//! Flow: `get_quiz` samples the bank and strips answers; `submit_quiz`
//! scores against the full bank and, on a pass, draws the next passcode.

mod bank;
mod scoring;
mod submission;

pub use bank::QuestionBank;
pub use scoring::{Submission, score_submission};
pub use submission::submit_quiz;

use proctor_common::constants::QUESTIONS_PER_QUIZ;
use proctor_common::{PresentedQuestion, QuizError};

/// Sample a quiz and strip the answers. Nothing about the draw is retained.
pub fn get_quiz(bank: &QuestionBank) -> Result<Vec<PresentedQuestion>, QuizError> {
    let questions = bank
        .sample(QUESTIONS_PER_QUIZ)?
        .into_iter()
        .enumerate()
        .map(|(id, q)| PresentedQuestion::new(id, q))
        .collect();

    Ok(questions)
}
