use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use prepmaster_catalog::UserSummary;
use std::sync::Arc;

use crate::{
    error::ServiceError,
    extractors::AppJson,
    middlewares::auth::{JwtClaims, JwtService},
    models::user::{LoginRequest, RegisterRequest},
    services::{auth_service::AuthService, AppState},
};

fn auth_service(state: &AppState) -> AuthService {
    let jwt_service = JwtService::new(&state.config.jwt_secret);
    AuthService::new(
        state.mongo.clone(),
        jwt_service,
        state.config.token_ttl_seconds,
    )
}

/// POST /api/auth/register - Register a new user
pub async fn register(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    tracing::info!("Registering new user: {}", req.email);

    let response = auth_service(&state).register(req).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// POST /api/auth/login - Login with email and password
pub async fn login(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    tracing::info!("Login attempt for user: {}", req.email);

    let response = auth_service(&state).login(req).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/auth/me - Identity behind the presented bearer token.
///
/// Lets the client verify a locally restored token instead of trusting it
/// blindly; a 401 here is the client's cue to discard the token.
pub async fn whoami(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<JwtClaims>,
) -> Result<Json<UserSummary>, ServiceError> {
    let user = auth_service(&state).get_user_by_id(&claims.sub).await?;
    Ok(Json(user.into()))
}
