//! Submission orchestration: score, then issue a passcode on a pass.

use proctor_common::{Passcode, QuizError, QuizResult};

use super::{QuestionBank, Submission, score_submission};
use crate::passcode::CounterStore;

/// Score a submission and, if it passes, consume exactly one counter value.
///
/// The counter is never touched for a failing submission. A counter that
/// cannot be advanced or persisted fails the whole call with
/// [`QuizError::CounterStore`] so no unrecorded passcode is handed out.
pub async fn submit_quiz(
    bank: &QuestionBank,
    counter: &dyn CounterStore,
    submission: &Submission,
) -> Result<QuizResult, QuizError> {
    let report = score_submission(bank, submission);

    tracing::debug!(
        answers = submission.len(),
        score = report.score,
        passed = report.passed,
        "Scored quiz submission"
    );

    let passcode = if report.passed {
        let value = counter
            .increment_and_get()
            .await
            .map_err(|e| QuizError::CounterStore(format!("{e:#}")))?;
        let passcode = Passcode::from_counter(value);

        tracing::info!(
            passcode = %passcode,
            counter = value,
            score = report.score,
            backend = counter.backend(),
            "Passcode issued"
        );

        Some(passcode)
    } else {
        None
    };

    Ok(QuizResult::new(report, passcode))
}
