use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tokio_util::sync::CancellationToken;

use crate::completion::ProviderKind;
use crate::evaluation::{AggregateEvaluation, EvaluationOptions, EvaluationOrchestrator};

use super::types::{ErrorBody, EvaluateRequest};

pub type ApiResult<T> = Result<T, (StatusCode, Json<ErrorBody>)>;

/// Shared state for the evaluation API.
#[derive(Clone)]
pub struct ServerState {
    pub orchestrator: Arc<EvaluationOrchestrator>,
    pub default_provider: ProviderKind,
}

/// Builds the evaluation router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/evaluate", post(handle_evaluate))
        .with_state(state)
}

/// Runs the full evaluation fan-out for one submission.
///
/// Partial failure still returns 200 with an `errors` field so the caller
/// can render whatever subset succeeded; only a total failure becomes 5xx.
pub async fn handle_evaluate(
    State(state): State<ServerState>,
    Json(req): Json<EvaluateRequest>,
) -> ApiResult<Json<AggregateEvaluation>> {
    if req.text.trim().is_empty() {
        return Err(bad_request("No text provided"));
    }

    let provider = req.api.unwrap_or(state.default_provider);
    let options = EvaluationOptions {
        platform: req.platform.unwrap_or_default(),
        tone: None,
    };
    let cancel = CancellationToken::new();

    let aggregate = state
        .orchestrator
        .evaluate_all(&req.text, provider, &options, &cancel)
        .await;

    if aggregate.is_total_failure() {
        return Err(internal_error(
            "Failed to evaluate text",
            aggregate.errors.join("; "),
        ));
    }

    Ok(Json(aggregate))
}

fn bad_request(msg: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: msg.into(),
            details: None,
        }),
    )
}

fn internal_error(
    msg: impl Into<String>,
    details: impl Into<String>,
) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: msg.into(),
            details: Some(details.into()),
        }),
    )
}
