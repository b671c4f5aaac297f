/// Errors surfaced by the data client.
///
/// Failures split into two classes. Availability failures (the backend
/// cannot be reached, times out, answers 5xx, or returns an undecodable
/// body) are absorbed by the fallback dataset on reads and by optimistic
/// acceptance on writes. Everything else, in particular explicit 4xx
/// answers, reaches the caller: masking a programmer or credential error
/// with fallback data would hide real bugs.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("token store error: {0}")]
    Store(#[from] std::io::Error),
}

impl ClientError {
    /// True for failures that mean "the backend is unavailable", the only
    /// class the fallback dataset may absorb.
    pub fn is_availability(&self) -> bool {
        match self {
            ClientError::Transport(_) => true,
            ClientError::Status { status, .. } => *status >= 500,
            ClientError::Store(_) => false,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if *status == 401 || *status == 403)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> ClientError {
        ClientError::Status {
            status: code,
            message: String::new(),
        }
    }

    #[test]
    fn only_server_side_statuses_count_as_availability() {
        assert!(status(500).is_availability());
        assert!(status(503).is_availability());
        assert!(!status(400).is_availability());
        assert!(!status(401).is_availability());
        assert!(!status(404).is_availability());
    }

    #[test]
    fn unauthorized_covers_401_and_403() {
        assert!(status(401).is_unauthorized());
        assert!(status(403).is_unauthorized());
        assert!(!status(500).is_unauthorized());
    }
}
