//! Error types for the aggregation service client.

use thiserror::Error;

/// Errors that can occur while talking to the aggregation service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service could not be reached (connect, timeout, broken body).
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Request { status: u16 },

    /// A strictly-typed endpoint returned a body we could not decode.
    #[error("Failed to decode {context} response: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The service reported a failure inside a 200 response.
    #[error("Service error: {message}")]
    Service { message: String },

    /// The configured base URL is not an absolute http(s) URL.
    #[error("Invalid service URL '{url}'")]
    InvalidBaseUrl { url: String },

    /// The HTTP client itself could not be built.
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Status code for `Request` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status } => Some(*status),
            _ => None,
        }
    }

    /// Short error-type tag, used in logs and JSON output.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "network_error",
            ApiError::Request { .. } => "request_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::Service { .. } => "service_error",
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::Client { .. } => "client_error",
        }
    }

    /// The single line shown to the user in place of the article list.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { source } if source.is_timeout() => {
                "The news service did not respond in time".to_string()
            }
            ApiError::Network { .. } => "Could not reach the news service".to_string(),
            ApiError::Request { status } => {
                format!("The news service returned an error (HTTP {})", status)
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_carries_status() {
        let err = ApiError::Request { status: 503 };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.error_type(), "request_error");
        assert!(err.user_message().contains("503"));
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn non_request_errors_have_no_status() {
        let err = ApiError::InvalidBaseUrl {
            url: "ftp://x".into(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(err.user_message(), "Invalid service URL 'ftp://x'");
    }

    #[test]
    fn service_error_message() {
        let err = ApiError::Service {
            message: "Event not found".into(),
        };
        assert_eq!(err.user_message(), "Service error: Event not found");
    }
}
