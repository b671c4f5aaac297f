use crate::api::ResilientDataClient;
use crate::error::ClientError;
use prepmaster_catalog::UserSummary;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

const TOKEN_FILE: &str = "auth_token";

/// The one place the session token lives. Constructed once and shared with
/// the data client, so there is no module-global token to fall out of sync.
#[derive(Debug, Default)]
pub struct SessionContext {
    token: RwLock<Option<String>>,
}

impl SessionContext {
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write().expect("token lock poisoned") = token;
    }
}

/// Durable storage for the single opaque session token, one file under a
/// caller-chosen directory.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(TOKEN_FILE),
        }
    }

    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(token) if !token.trim().is_empty() => Some(token.trim().to_string()),
            Ok(_) => None,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read stored token: {}", e);
                None
            }
        }
    }

    pub fn save(&self, token: &str) -> Result<(), std::io::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write-then-rename so a crash mid-write cannot leave a torn token.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, token)?;
        fs::rename(&tmp, &self.path)
    }

    pub fn clear(&self) -> Result<(), std::io::Error> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Client-side authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticating,
    /// Holds the verified identity when the server was reachable; `None`
    /// when the session was restored offline from a stored token.
    Authenticated(Option<UserSummary>),
}

/// Owns the persisted token and the derived [`AuthState`]. Persisting or
/// removing the token and flipping the state happen inside one transition:
/// if the store write fails, the state does not change.
pub struct AuthSessionManager {
    store: TokenStore,
    context: std::sync::Arc<SessionContext>,
    state: AuthState,
}

impl AuthSessionManager {
    pub fn new(store: TokenStore, context: std::sync::Arc<SessionContext>) -> Self {
        Self {
            store,
            context,
            state: AuthState::Unauthenticated,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Restore the session at process start. A stored token is not trusted
    /// blindly: it is verified against the server first, and a verification
    /// failure is treated as a logout. Only when the backend is unreachable
    /// does the stored token win, keeping the app usable offline.
    pub async fn restore(&mut self, client: &ResilientDataClient) -> &AuthState {
        let Some(token) = self.store.load() else {
            self.state = AuthState::Unauthenticated;
            return &self.state;
        };

        self.context.set_token(Some(token));

        match client.whoami().await {
            Ok(user) => {
                self.state = AuthState::Authenticated(Some(user));
            }
            Err(e) if e.is_availability() => {
                tracing::warn!("Session restore offline, trusting stored token: {}", e);
                self.state = AuthState::Authenticated(None);
            }
            Err(e) => {
                tracing::warn!("Stored token rejected, logging out: {}", e);
                let _ = self.store.clear();
                self.context.set_token(None);
                self.state = AuthState::Unauthenticated;
            }
        }

        &self.state
    }

    pub async fn login(
        &mut self,
        client: &ResilientDataClient,
        email: &str,
        password: &str,
    ) -> Result<UserSummary, ClientError> {
        self.state = AuthState::Authenticating;

        let response = match client.login(email, password).await {
            Ok(response) => response,
            Err(e) => {
                self.state = AuthState::Unauthenticated;
                return Err(e);
            }
        };

        self.commit_session(response.token, response.user.clone())?;
        Ok(response.user)
    }

    pub async fn register(
        &mut self,
        client: &ResilientDataClient,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserSummary, ClientError> {
        self.state = AuthState::Authenticating;

        let response = match client.register(name, email, password).await {
            Ok(response) => response,
            Err(e) => {
                self.state = AuthState::Unauthenticated;
                return Err(e);
            }
        };

        self.commit_session(response.token, response.user.clone())?;
        Ok(response.user)
    }

    /// Clears the persisted token and the cached identity.
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.store.clear()?;
        self.context.set_token(None);
        self.state = AuthState::Unauthenticated;
        Ok(())
    }

    fn commit_session(&mut self, token: String, user: UserSummary) -> Result<(), ClientError> {
        if let Err(e) = self.store.save(&token) {
            self.state = AuthState::Unauthenticated;
            self.context.set_token(None);
            return Err(e.into());
        }
        self.context.set_token(Some(token));
        self.state = AuthState::Authenticated(Some(user));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path());

        assert_eq!(store.load(), None);

        store.save("abc123").unwrap();
        assert_eq!(store.load(), Some("abc123".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load(), None);

        // Clearing an already-empty store is not an error.
        store.clear().unwrap();
    }

    #[test]
    fn context_starts_without_a_token() {
        let context = SessionContext::default();
        assert_eq!(context.token(), None);
        context.set_token(Some("t".into()));
        assert_eq!(context.token(), Some("t".into()));
    }
}
