//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Error returned by handlers, rendered as `{"error": message}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(trendscope_core::Error),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    /// The analytics source could not produce data.
    #[error("{0}")]
    Unavailable(String),
}

impl From<trendscope_core::Error> for ApiError {
    fn from(err: trendscope_core::Error) -> Self {
        use trendscope_core::Error;
        match err {
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::Analytics(msg) => ApiError::Unavailable(msg),
            other => ApiError::Core(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        }

        let body = Json(serde_json::json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendscope_core::Error;

    #[test]
    fn test_core_error_mapping() {
        assert!(matches!(
            ApiError::from(Error::NotFound("x".into())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(Error::InvalidInput("x".into())),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(Error::Analytics("x".into())),
            ApiError::Unavailable(_)
        ));
        assert!(matches!(
            ApiError::from(Error::Internal("x".into())),
            ApiError::Core(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Unavailable("down".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(ApiError::Conflict("stale".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Core(Error::Internal("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unavailable_message_is_bare() {
        let err = ApiError::Unavailable("Failed to load dashboard data.".into());
        assert_eq!(err.to_string(), "Failed to load dashboard data.");
    }
}
