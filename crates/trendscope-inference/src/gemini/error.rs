//! Gemini-specific error handling.

use trendscope_core::Error;

/// Gemini API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeminiErrorCode {
    /// Missing, invalid or unauthorized API key.
    AuthenticationError,
    /// Quota or rate limit exhausted.
    RateLimitExceeded,
    /// Model not found or not available.
    ModelNotFound,
    /// Malformed request, or a feature the model does not support.
    InvalidArgument,
    /// Server error.
    ServerError,
    /// Unknown error.
    Unknown,
}

impl GeminiErrorCode {
    /// Determine error code from HTTP status and the API's `error.status`.
    pub fn from_response(status: u16, error_status: &str) -> Self {
        match (status, error_status) {
            (401 | 403, _) | (_, "UNAUTHENTICATED" | "PERMISSION_DENIED") => {
                Self::AuthenticationError
            }
            (429, _) | (_, "RESOURCE_EXHAUSTED") => Self::RateLimitExceeded,
            (404, _) | (_, "NOT_FOUND") => Self::ModelNotFound,
            (400, _) | (_, "INVALID_ARGUMENT" | "FAILED_PRECONDITION") => Self::InvalidArgument,
            (500..=599, _) => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimitExceeded | Self::ServerError)
    }
}

/// Convert a Gemini error to a trendscope [`Error`].
pub fn to_core_error(code: GeminiErrorCode, message: &str) -> Error {
    match code {
        GeminiErrorCode::AuthenticationError => {
            Error::Config(format!("Authentication failed: {}", message))
        }
        GeminiErrorCode::RateLimitExceeded => {
            Error::Inference(format!("Rate limit exceeded: {}", message))
        }
        GeminiErrorCode::ModelNotFound => Error::Config(format!("Model not found: {}", message)),
        GeminiErrorCode::InvalidArgument => {
            Error::Inference(format!("Invalid request: {}", message))
        }
        GeminiErrorCode::ServerError => Error::Inference(format!("Server error: {}", message)),
        GeminiErrorCode::Unknown => Error::Inference(message.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_from_401() {
        let code = GeminiErrorCode::from_response(401, "UNAUTHENTICATED");
        assert_eq!(code, GeminiErrorCode::AuthenticationError);
    }

    #[test]
    fn test_error_code_from_invalid_key_status() {
        // Gemini reports a bad key as 400 with PERMISSION_DENIED in some regions.
        let code = GeminiErrorCode::from_response(400, "PERMISSION_DENIED");
        assert_eq!(code, GeminiErrorCode::AuthenticationError);
    }

    #[test]
    fn test_error_code_from_429() {
        let code = GeminiErrorCode::from_response(429, "RESOURCE_EXHAUSTED");
        assert_eq!(code, GeminiErrorCode::RateLimitExceeded);
    }

    #[test]
    fn test_error_code_from_404() {
        let code = GeminiErrorCode::from_response(404, "NOT_FOUND");
        assert_eq!(code, GeminiErrorCode::ModelNotFound);
    }

    #[test]
    fn test_error_code_from_400() {
        let code = GeminiErrorCode::from_response(400, "INVALID_ARGUMENT");
        assert_eq!(code, GeminiErrorCode::InvalidArgument);
    }

    #[test]
    fn test_error_code_from_503() {
        let code = GeminiErrorCode::from_response(503, "UNAVAILABLE");
        assert_eq!(code, GeminiErrorCode::ServerError);
    }

    #[test]
    fn test_error_code_from_unknown() {
        let code = GeminiErrorCode::from_response(418, "");
        assert_eq!(code, GeminiErrorCode::Unknown);
    }

    #[test]
    fn test_retryable() {
        assert!(GeminiErrorCode::RateLimitExceeded.is_retryable());
        assert!(GeminiErrorCode::ServerError.is_retryable());
        assert!(!GeminiErrorCode::AuthenticationError.is_retryable());
        assert!(!GeminiErrorCode::InvalidArgument.is_retryable());
    }

    #[test]
    fn test_to_core_error_auth() {
        let err = to_core_error(GeminiErrorCode::AuthenticationError, "API key not valid");
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("Authentication failed"));
    }

    #[test]
    fn test_to_core_error_keeps_message() {
        let err = to_core_error(
            GeminiErrorCode::InvalidArgument,
            "Model does not support tools",
        );
        assert!(err.to_string().contains("does not support tools"));
    }
}
