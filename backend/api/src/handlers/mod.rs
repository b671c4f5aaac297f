use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::services::AppState;

pub mod auth;
pub mod content;

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mongo_healthy = matches!(
        tokio::time::timeout(
            std::time::Duration::from_secs(1),
            state.mongo.run_command(mongodb::bson::doc! { "ping": 1 }),
        )
        .await,
        Ok(Ok(_))
    );

    // Content endpoints degrade to bundled defaults, so a lost database
    // means "degraded", not "down".
    let (status_code, status) = if mongo_healthy {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::OK, "degraded")
    };

    (
        status_code,
        Json(json!({
            "status": status,
            "service": "prepmaster-api",
            "version": env!("CARGO_PKG_VERSION"),
            "mongodb": mongo_healthy,
        })),
    )
}
