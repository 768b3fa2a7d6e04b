//! Error type for SeaTunnel API calls.

/// Result type for SeaTunnel API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error types for SeaTunnel API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("SeaTunnel API rejected the request ({status}): {body}")]
    RemoteRejected {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the API
        body: String,
    },

    /// The request never completed (DNS, refused connection, reset, timeout).
    #[error("SeaTunnel API is unreachable: {cause}")]
    Unreachable {
        #[source]
        cause: reqwest::Error,
    },

    /// The API answered with something that is not JSON.
    #[error("Malformed response from SeaTunnel API: {cause}")]
    MalformedResponse {
        #[source]
        cause: serde_json::Error,
    },

    /// Bad input detected before any request was sent.
    #[error("Invalid input: {0}")]
    InvalidLocalInput(String),
}

impl ApiError {
    /// Stable classification name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RemoteRejected { .. } => "RemoteRejected",
            Self::Unreachable { .. } => "Unreachable",
            Self::MalformedResponse { .. } => "MalformedResponse",
            Self::InvalidLocalInput(_) => "InvalidLocalInput",
        }
    }

    /// HTTP status, for `RemoteRejected` only.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // Builder errors come from our own inputs (e.g. an unparsable base URL).
        if err.is_builder() {
            Self::InvalidLocalInput(err.to_string())
        } else {
            Self::Unreachable { cause: err }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(cause: serde_json::Error) -> Self {
        Self::MalformedResponse { cause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_rejected_classification() {
        let err = ApiError::RemoteRejected { status: 404, body: "not found".to_string() };
        assert_eq!(err.kind(), "RemoteRejected");
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_malformed_from_serde() {
        let cause = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ApiError::from(cause);
        assert_eq!(err.kind(), "MalformedResponse");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_invalid_local_input() {
        let err = ApiError::InvalidLocalInput("missing.conf".to_string());
        assert_eq!(err.kind(), "InvalidLocalInput");
        assert!(err.to_string().contains("missing.conf"));
    }
}
