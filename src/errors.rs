// src/errors.rs

use thiserror::Error;

/// Why a completion call did not produce reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionFailure {
    Network,
    Unauthorized,
    RateLimited,
    Status,
    Malformed,
}

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    MalformedResponse(String),

    #[error("Failed to parse profile: {0}")]
    Profile(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to start logger: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

pub type FolioResult<T> = Result<T, FolioError>;

impl FolioError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        FolioError::Config(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        FolioError::MalformedResponse(msg.into())
    }

    /// Classifies a completion error. `None` for errors that never come out of
    /// a completion call.
    pub fn completion_failure(&self) -> Option<CompletionFailure> {
        match self {
            FolioError::Http(_) => Some(CompletionFailure::Network),
            FolioError::Api { status, .. } => Some(match status {
                401 | 403 => CompletionFailure::Unauthorized,
                429 => CompletionFailure::RateLimited,
                _ => CompletionFailure::Status,
            }),
            FolioError::MalformedResponse(_) => Some(CompletionFailure::Malformed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_status_maps_to_failure_kind() {
        let unauthorized = FolioError::Api {
            status: 403,
            body: "key invalid".to_string(),
        };
        assert_eq!(
            unauthorized.completion_failure(),
            Some(CompletionFailure::Unauthorized)
        );

        let limited = FolioError::Api {
            status: 429,
            body: String::new(),
        };
        assert_eq!(
            limited.completion_failure(),
            Some(CompletionFailure::RateLimited)
        );

        let server = FolioError::Api {
            status: 503,
            body: String::new(),
        };
        assert_eq!(server.completion_failure(), Some(CompletionFailure::Status));
    }

    #[test]
    fn config_errors_are_not_completion_failures() {
        let err = FolioError::config_error("model name is required");
        assert!(err.completion_failure().is_none());
        assert_eq!(
            err.to_string(),
            "Configuration error: model name is required"
        );
    }
}
