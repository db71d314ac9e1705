use thiserror::Error;

use crate::notify::{Notification, Severity};

/// Session-level error type.
/// Every failure a caller can see goes through here so it can be surfaced as a toast.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed token: {0}")]
    Token(String),

    #[error("Identity provider error: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;

impl SessionError {
    pub fn validation(message: impl Into<String>) -> Self {
        SessionError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SessionError::Validation(_))
    }

    /// Builds the destructive toast shown when an operation titled `title` fails.
    pub fn notification(&self, title: &str) -> Notification {
        let description = match self {
            SessionError::Validation(msg) => msg.clone(),
            SessionError::Storage(e) => {
                tracing::error!("Session storage error: {e}");
                "Your session could not be saved. Please try again.".to_string()
            }
            SessionError::Serialization(e) => {
                tracing::error!("Session serialization error: {e}");
                "Please check your information and try again.".to_string()
            }
            SessionError::Token(msg) => {
                tracing::error!("Token error: {msg}");
                "Please check your credentials and try again.".to_string()
            }
            SessionError::Provider(msg) => {
                tracing::error!("Identity provider error: {msg}");
                "Please check your credentials and try again.".to_string()
            }
        };

        Notification {
            title: title.to_string(),
            description,
            severity: Severity::Destructive,
        }
    }
}
