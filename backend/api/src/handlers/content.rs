use axum::{
    extract::{Path, Query, State},
    Json,
};
use prepmaster_catalog::{McqQuestion, Problem, SubmissionOutcome};
use serde::Deserialize;
use std::sync::Arc;

use crate::extractors::AppJson;
use crate::services::{content_service, content_service::ContentService, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McqQuery {
    pub topic_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub code: String,
}

/// GET /api/problems
pub async fn list_problems(State(state): State<Arc<AppState>>) -> Json<Vec<Problem>> {
    Json(ContentService::new(&state).list_problems().await)
}

/// GET /api/mcqs?topicId=
pub async fn list_mcqs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<McqQuery>,
) -> Json<Vec<McqQuestion>> {
    Json(
        ContentService::new(&state)
            .list_mcqs(query.topic_id.as_deref())
            .await,
    )
}

/// POST /api/problems/{id}/submit
pub async fn submit_solution(
    State(state): State<Arc<AppState>>,
    Path(problem_id): Path<String>,
    AppJson(req): AppJson<SubmitRequest>,
) -> Json<SubmissionOutcome> {
    Json(content_service::submit_solution(&state, &problem_id, &req.code).await)
}
