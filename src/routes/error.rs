use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::core::{Notice, PaginationError, SessionError};
use crate::models::ErrorResponse;
use crate::services::DogApiError;

/// Errors returned by HTTP handlers, rendered as `ErrorResponse` JSON
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Please select at least one favorite dog.")]
    NoFavorites,

    #[error("No active session, please log in")]
    MissingSession,

    #[error("Login failed. Please check your credentials.")]
    LoginFailed,

    #[error("{0}")]
    Upstream(#[from] DogApiError),

    #[error("Search failed: {0}")]
    Search(#[source] DogApiError),

    #[error("Match generation failed: {0}")]
    Match(#[source] DogApiError),

    #[error("Failed to load breeds: {0}")]
    Breeds(#[source] DogApiError),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::InvalidArgument(_) => "invalid_argument",
            ApiError::NoFavorites => "no_favorites",
            ApiError::MissingSession => "unauthorized",
            ApiError::LoginFailed => "login_failed",
            ApiError::Upstream(err) | ApiError::Search(err) | ApiError::Match(err) | ApiError::Breeds(err) => {
                match err {
                    DogApiError::Unauthorized => "unauthorized",
                    DogApiError::InvalidInput(_) => "invalid_argument",
                    _ => "upstream_error",
                }
            }
        }
    }

    /// Toast shown by the UI alongside the error, if any
    pub fn notice(&self) -> Option<Notice> {
        let message = match self {
            ApiError::NoFavorites => "Please select at least one favorite dog.",
            ApiError::LoginFailed => "Login failed. Please check your credentials.",
            ApiError::Search(_) => "Search failed. Please try again.",
            ApiError::Match(_) => "Match generation failed. Please try again.",
            ApiError::Breeds(_) => "Failed to load breeds.",
            _ => return None,
        };
        Some(Notice::error(message))
    }
}

impl From<PaginationError> for ApiError {
    fn from(err: PaginationError) -> Self {
        match err {
            PaginationError::InvalidArgument(message) => ApiError::InvalidArgument(message),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NoFavorites => ApiError::NoFavorites,
            SessionError::Pagination(err) => err.into(),
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidArgument(_) | ApiError::NoFavorites => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MissingSession | ApiError::LoginFailed => StatusCode::UNAUTHORIZED,
            ApiError::Upstream(err) | ApiError::Search(err) | ApiError::Match(err) | ApiError::Breeds(err) => {
                match err {
                    DogApiError::Unauthorized => StatusCode::UNAUTHORIZED,
                    DogApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                    _ => StatusCode::BAD_GATEWAY,
                }
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
            notice: self.notice(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::Validation(format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ApiError::InvalidArgument(format!("Invalid query: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoticeLevel;
    use actix_web::ResponseError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::NoFavorites.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingSession.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Upstream(DogApiError::Unauthorized).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Upstream(DogApiError::ApiError("boom".into())).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_context_errors_keep_upstream_status() {
        let search = ApiError::Search(DogApiError::ApiError("boom".into()));
        assert_eq!(search.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(search.code(), "upstream_error");

        let matched = ApiError::Match(DogApiError::Unauthorized);
        assert_eq!(matched.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(matched.code(), "unauthorized");
    }

    #[test]
    fn test_error_notices() {
        let notice = ApiError::Search(DogApiError::ApiError("boom".into())).notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Search failed. Please try again.");

        assert_eq!(
            ApiError::Match(DogApiError::ApiError("boom".into())).notice().unwrap().message,
            "Match generation failed. Please try again."
        );
        assert_eq!(
            ApiError::Breeds(DogApiError::Unauthorized).notice().unwrap().message,
            "Failed to load breeds."
        );
        assert_eq!(
            ApiError::NoFavorites.notice().unwrap().message,
            "Please select at least one favorite dog."
        );
        assert_eq!(
            ApiError::LoginFailed.notice().unwrap().message,
            "Login failed. Please check your credentials."
        );
        assert!(ApiError::MissingSession.notice().is_none());
        assert!(ApiError::InvalidArgument("page".into()).notice().is_none());
    }

    #[test]
    fn test_session_error_conversion() {
        let err: ApiError = SessionError::Pagination(PaginationError::InvalidArgument("bad".into())).into();
        assert!(matches!(err, ApiError::InvalidArgument(ref m) if m == "bad"));
    }
}
