use crate::error::ClientError;
use crate::session::SessionContext;
use prepmaster_catalog::{
    default_mcqs_for_topic, default_problems, AuthResponse, McqQuestion, Problem,
    SubmissionOutcome, UserSummary,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Every outbound call is bounded by this timeout; an unanswered
    /// request is an availability failure, not a hang.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Wraps every outbound call to the backend. Each call independently decides
/// live-versus-fallback; there is no retry, no backoff, and no memory of a
/// previous failure. Reads degrade to the bundled dataset, the submission
/// write degrades to deterministic optimistic acceptance, and both are
/// logged so the degradation stays observable.
pub struct ResilientDataClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl ResilientDataClient {
    pub fn new(config: ClientConfig, session: Arc<SessionContext>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("reqwest client construction cannot fail with static options");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// All problems, or the bundled defaults when the backend is
    /// unavailable. The caller cannot tell the sources apart by type.
    pub async fn list_problems(&self) -> Result<Vec<Problem>, ClientError> {
        match self.get_json::<Vec<Problem>>("/api/problems").await {
            Ok(problems) => Ok(problems),
            Err(e) if e.is_availability() => {
                tracing::warn!("Problems API unavailable, serving bundled defaults: {}", e);
                Ok(default_problems())
            }
            Err(e) => Err(e),
        }
    }

    /// MCQs for one topic, filtered identically on the live and fallback
    /// paths.
    pub async fn list_mcqs_by_topic(&self, topic_id: &str) -> Result<Vec<McqQuestion>, ClientError> {
        let path = format!("/api/mcqs?topicId={}", topic_id);
        match self.get_json::<Vec<McqQuestion>>(&path).await {
            Ok(mcqs) => Ok(mcqs),
            Err(e) if e.is_availability() => {
                tracing::warn!(
                    topic_id,
                    "MCQ API unavailable, serving bundled defaults: {}",
                    e
                );
                Ok(default_mcqs_for_topic(topic_id))
            }
            Err(e) => Err(e),
        }
    }

    /// Submit a solution. On an unavailable backend this synthesizes a
    /// deterministic optimistic acceptance instead of erroring, trading
    /// consistency for availability on purpose.
    pub async fn submit_solution(
        &self,
        problem_id: &str,
        code: &str,
    ) -> Result<SubmissionOutcome, ClientError> {
        let path = format!("/api/problems/{}/submit", problem_id);
        let body = serde_json::json!({ "code": code });

        match self.post_json::<_, SubmissionOutcome>(&path, &body).await {
            Ok(outcome) => Ok(outcome),
            Err(e) if e.is_availability() => {
                tracing::warn!(
                    problem_id,
                    "Submission API unavailable, reporting optimistic acceptance: {}",
                    e
                );
                Ok(SubmissionOutcome::accepted())
            }
            Err(e) => Err(e),
        }
    }

    /// Login. Bad credentials surface as an error; an unreachable backend
    /// degrades to an offline mock session so the app stays usable.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let body = serde_json::json!({ "email": email, "password": password });

        match self.post_json::<_, AuthResponse>("/api/auth/login", &body).await {
            Ok(response) => Ok(response),
            Err(e) if e.is_availability() => {
                tracing::warn!("Auth API unavailable, using offline mock session: {}", e);
                Ok(offline_session(email))
            }
            Err(e) => Err(e),
        }
    }

    /// Register. Validation and conflict errors always surface; only an
    /// unreachable backend degrades to the offline mock session.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ClientError> {
        let body = serde_json::json!({ "name": name, "email": email, "password": password });

        match self
            .post_json::<_, AuthResponse>("/api/auth/register", &body)
            .await
        {
            Ok(response) => Ok(response),
            Err(e) if e.is_availability() => {
                tracing::warn!("Auth API unavailable, using offline mock session: {}", e);
                Ok(offline_session(email))
            }
            Err(e) => Err(e),
        }
    }

    /// Identity behind the current token. No fallback here: the session
    /// manager decides what each failure class means for restored state.
    pub async fn whoami(&self) -> Result<UserSummary, ClientError> {
        self.get_json("/api/auth/me").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let mut request = self.http.get(format!("{}{}", self.base_url, path));
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        decode_response(request.send().await?).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let mut request = self.http.post(format!("{}{}", self.base_url, path)).json(body);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        decode_response(request.send().await?).await
    }
}

async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or_else(|| status.to_string());
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json::<T>().await?)
}

/// The deterministic session handed out when the auth backend cannot be
/// reached at all.
fn offline_session(email: &str) -> AuthResponse {
    AuthResponse {
        token: "mock_token".to_string(),
        user: UserSummary {
            id: "1".to_string(),
            name: "Jayant Dev".to_string(),
            email: email.to_string(),
            solved_problems: Vec::new(),
            points: 1250,
        },
    }
}
