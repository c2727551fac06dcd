//! Quiz endpoints.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::quiz::{self, Submission};
use crate::state::AppState;
use proctor_common::{PresentedQuestion, QuizResult};

/// Serve a freshly sampled quiz without answers
pub async fn get_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<PresentedQuestion>>, StatusCode> {
    let questions = quiz::get_quiz(&state.bank).map_err(|e| {
        tracing::error!(error = %e, fatal = e.is_fatal(), "Failed to sample quiz");
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    tracing::debug!(count = questions.len(), "Served quiz");

    Ok(Json(questions))
}

/// Score a submission and issue a passcode on a pass.
///
/// Takes the raw body so malformed JSON degrades to an empty submission
/// instead of a 4xx from the `Json` extractor.
pub async fn submit_quiz(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QuizResult>, StatusCode> {
    let submission = Submission::from_body(&body);

    let result = quiz::submit_quiz(&state.bank, state.counter.as_ref(), &submission)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to issue passcode");
            StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::SERVICE_UNAVAILABLE)
        })?;

    Ok(Json(result))
}
