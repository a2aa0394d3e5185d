/// Error types for completion requests
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to encode request: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("failed to build request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    #[error("failed to send prompt: {0}")]
    Transport(#[source] reqwest::Error),

    /// Any non-200 status. `body` is `None` when the body could not be read.
    #[error(
        "failed to send prompt: {status}{}",
        .body.as_deref().map(|b| format!(" ({b})")).unwrap_or_default()
    )]
    Api {
        status: StatusCode,
        body: Option<String>,
    },

    #[error("failed to decode response: {0}")]
    Decoding(#[source] DecodeError),

    #[error("failed to parse response")]
    ResponseShape,
}

/// Why a 200 response body could not be decoded
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body stream broke off before it was fully read
    #[error(transparent)]
    Body(reqwest::Error),

    /// The body is not a JSON object
    #[error(transparent)]
    Json(serde_json::Error),
}

impl ClientError {
    /// HTTP status of an API error response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_with_body() {
        let err = ClientError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Some("internal error".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "failed to send prompt: 500 Internal Server Error (internal error)"
        );
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_api_error_without_body() {
        let err = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: None,
        };
        assert_eq!(err.to_string(), "failed to send prompt: 401 Unauthorized");
    }

    #[test]
    fn test_response_shape_message() {
        assert_eq!(
            ClientError::ResponseShape.to_string(),
            "failed to parse response"
        );
        assert_eq!(ClientError::ResponseShape.status(), None);
    }

    #[test]
    fn test_decoding_keeps_source() {
        let cause = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ClientError::Decoding(DecodeError::Json(cause));
        assert!(err.to_string().starts_with("failed to decode response: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}
