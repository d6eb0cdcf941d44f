use crate::token_store::TokenStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Not signed in: no credential stored")]
    Unauthenticated,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http {
        status: u16,
        message: String,
        /// `message` field of a JSON error body, when the server sent one.
        server_message: Option<String>,
    },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Storage(#[from] TokenStoreError),
}

impl AppError {
    /// HTTP status of a rejected request.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server could not be reached at all.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_display_includes_status() {
        let err = AppError::Http {
            status: 404,
            message: "Case not found".to_string(),
            server_message: Some("Case not found".to_string()),
        };
        assert_eq!(err.to_string(), "Request failed (404): Case not found");
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_unreachable());
    }

    #[test]
    fn test_network_and_timeout_are_unreachable() {
        assert!(AppError::Network("refused".to_string()).is_unreachable());
        assert!(AppError::Timeout("slow".to_string()).is_unreachable());
        assert!(!AppError::Unauthenticated.is_unreachable());
    }
}
