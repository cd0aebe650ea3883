use thiserror::Error;

/// Main error type for spaceapi
#[derive(Debug, Error)]
pub enum SpaceApiError {
    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SpaceApiError {
    /// HTTP status code, when the remote service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            SpaceApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using SpaceApiError
pub type Result<T> = std::result::Result<T, SpaceApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = SpaceApiError::Api {
            status: 403,
            body: "API_KEY_INVALID".to_string(),
        };
        assert_eq!(err.to_string(), "API returned status 403: API_KEY_INVALID");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn non_api_errors_have_no_status() {
        assert_eq!(SpaceApiError::Network("refused".into()).status(), None);
        assert_eq!(SpaceApiError::Parse("eof".into()).status(), None);
    }
}
