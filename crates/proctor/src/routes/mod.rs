//! HTTP route handlers for Proctor.

use axum::{Json, Router, extract::State, http::StatusCode, routing::{get, post}};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use proctor_common::QuizError;
use proctor_common::constants::{PASS_MARK, QUESTIONS_PER_QUIZ};

mod health;
mod quiz;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.cors_permissive {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        // Health & Status
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))

        // Quiz endpoints
        .route("/get_questions", get(quiz::get_questions))
        .route("/submit_quiz", post(quiz::submit_quiz))

        // Operator endpoints
        .nest("/admin", admin_routes())

        .layer(cors)
        .layer(TraceLayer::new_for_http())

        // Add shared state
        .with_state(state)
}

fn admin_routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

// === Admin Handlers ===

#[derive(Serialize)]
struct StatsResponse {
    passcodes_issued: u64,
    bank_size: usize,
    questions_per_quiz: usize,
    pass_mark: u32,
    counter_backend: &'static str,
    started_at: chrono::DateTime<chrono::Utc>,
    uptime_secs: u64,
}

async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, StatusCode> {
    let passcodes_issued = state.counter.read().await.map_err(|e| {
        let e = QuizError::CounterStore(format!("{e:#}"));
        tracing::error!(error = %e, "Failed to read passcode counter");
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::SERVICE_UNAVAILABLE)
    })?;

    Ok(Json(StatsResponse {
        passcodes_issued,
        bank_size: state.bank.len(),
        questions_per_quiz: QUESTIONS_PER_QUIZ,
        pass_mark: PASS_MARK,
        counter_backend: state.counter.backend(),
        started_at: state.started_at,
        uptime_secs: state.uptime_secs(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::passcode::{CounterStore, FileCounterStore};
    use crate::quiz::QuestionBank;
    use axum::body::Body;
    use axum::http::{Request, header};
    use proctor_common::BUILTIN_QUESTIONS;
    use proctor_common::constants::passcode::MAX_COUNTER;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state(dir: &tempfile::TempDir) -> AppState {
        let counter: Arc<dyn CounterStore> =
            Arc::new(FileCounterStore::new(dir.path().join("passcode_counter.txt")));
        AppState::with_parts(AppConfig::default(), QuestionBank::builtin().unwrap(), counter)
            .unwrap()
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = create_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    fn submit(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/submit_quiz")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    fn passing_body() -> String {
        let answers: serde_json::Map<String, Value> = BUILTIN_QUESTIONS
            .iter()
            .take(5)
            .enumerate()
            .map(|(i, q)| {
                (
                    format!("q{i}"),
                    json!({"question": q.text, "answer": q.correct_answer}),
                )
            })
            .collect();
        json!({ "answers": answers }).to_string()
    }

    #[tokio::test]
    async fn test_get_questions_returns_seven_without_answers() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder()
            .uri("/get_questions")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(test_state(&dir), request).await;

        assert_eq!(status, StatusCode::OK);
        let questions = body.as_array().unwrap();
        assert_eq!(questions.len(), 7);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q["id"], i);
            assert!(q["question"].is_string());
            assert_eq!(q["options"].as_array().unwrap().len(), 4);
            assert!(q.get("answer").is_none());
        }
    }

    #[tokio::test]
    async fn test_submit_single_answer_example() {
        let dir = tempfile::tempdir().unwrap();
        let body = json!({
            "answers": {
                "q1": {
                    "question": "What kind of data does RPA work best with?",
                    "answer": "Structured data."
                }
            }
        });

        let (status, body) = send(test_state(&dir), submit(body.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"score": 1, "total": 7, "passed": false, "passcode": null, "pass_mark": 5})
        );
    }

    #[tokio::test]
    async fn test_first_pass_issues_lw001p() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let (status, body) = send(state.clone(), submit(passing_body())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 5);
        assert_eq!(body["passed"], true);
        assert_eq!(body["passcode"], "LW001P");

        let (_, body) = send(state, submit(passing_body())).await;
        assert_eq!(body["passcode"], "LW002P");
    }

    #[tokio::test]
    async fn test_exhausted_counter_returns_503() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let path = dir.path().join("passcode_counter.txt");
        std::fs::write(&path, MAX_COUNTER.to_string()).unwrap();

        let (status, _) = send(state.clone(), submit(passing_body())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), MAX_COUNTER.to_string());

        // Failing submissions still score normally
        let (status, body) = send(state.clone(), submit("{}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["passed"], false);

        std::fs::write(&path, u64::MAX.to_string()).unwrap();
        let request = Request::builder().uri("/admin/stats").body(Body::empty()).unwrap();
        let (status, _) = send(state, request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_malformed_submission_scores_zero() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        for raw in ["", "{", "[1,2]", r#"{"answers": 5}"#] {
            let (status, body) = send(state.clone(), submit(raw)).await;
            assert_eq!(status, StatusCode::OK, "body {raw:?}");
            assert_eq!(body["score"], 0);
            assert_eq!(body["passcode"], Value::Null);
        }
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(state.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "proctor");
        assert!(body["uptime_secs"].is_u64());

        let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
        let (status, body) = send(state, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["counter_store"], true);
    }

    #[tokio::test]
    async fn test_stats_reports_issued_passcodes() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        send(state.clone(), submit(passing_body())).await;

        let request = Request::builder().uri("/admin/stats").body(Body::empty()).unwrap();
        let (status, body) = send(state, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["passcodes_issued"], 1);
        assert_eq!(body["bank_size"], 15);
        assert_eq!(body["questions_per_quiz"], 7);
        assert_eq!(body["pass_mark"], 5);
        assert_eq!(body["counter_backend"], "file");
    }
}
