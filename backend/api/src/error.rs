use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error taxonomy shared by every service. Auth errors always surface to the
/// caller; content reads never fail through this type because the content
/// service degrades to the bundled defaults instead.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Missing or malformed request fields. Never retried.
    #[error("{0}")]
    Validation(String),

    /// Uniqueness violation, e.g. duplicate email. The caller must change
    /// input; never retried.
    #[error("{0}")]
    Conflict(String),

    /// Unknown user or wrong password. The message never reveals which.
    #[error("Invalid credentials")]
    Unauthorized,

    /// Unexpected persistence or server-side failure.
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // The REST contract pins duplicate email to 400, same as
            // missing fields.
            ServiceError::Validation(_) | ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::Internal(ref err) = self {
            tracing::error!("Internal error: {:#}", err);
        }
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_follows_rest_contract() {
        assert_eq!(
            ServiceError::Validation("Missing fields".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Conflict("Email already exists".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_error_body_does_not_leak_details() {
        let err = ServiceError::Internal(anyhow::anyhow!("connection pool exhausted"));
        assert_eq!(err.to_string(), "Server error");
    }
}
