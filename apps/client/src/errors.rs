use thiserror::Error;

/// Client-level error type.
///
/// `Validation` is raised before any network traffic; the remaining variants
/// classify transport, status, and decode failures so callers can branch on
/// the kind instead of matching message strings.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_embeds_status_and_body() {
        let err = ApiError::Api {
            status: 500,
            body: "server error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("server error"));
    }

    #[test]
    fn test_validation_error_message() {
        let err = ApiError::Validation("user id is required".to_string());
        assert_eq!(err.to_string(), "validation error: user id is required");
    }
}
