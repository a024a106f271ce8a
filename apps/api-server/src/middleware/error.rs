//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};

use tabloid_core::DomainError;
use tabloid_core::ports::AuthError;
use tabloid_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized(detail) => ErrorResponse::unauthorized(detail),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error");
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Unauthenticated => {
                AppError::Unauthorized("No active user profile for this identity".to_string())
            }
            // Authorization failures share the 401 status with missing identities.
            DomainError::Forbidden => {
                AppError::Unauthorized("Not allowed to access this resource".to_string())
            }
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{entity_type} with id {id} not found"))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Duplicate(msg) => AppError::Conflict(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let detail = match err {
            AuthError::TokenExpired => {
                "Your authentication token has expired. Please sign in again.".to_string()
            }
            AuthError::InvalidToken(msg) => msg,
            AuthError::MissingAuth => {
                "Please provide a valid Bearer token in the Authorization header.".to_string()
            }
        };
        AppError::Unauthorized(detail)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Problem document for bodies that fail to deserialize.
pub fn json_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let body = ErrorResponse::bad_request(err.to_string()).with_instance(req.path());
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Problem document for path segments that fail to parse.
pub fn path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    let body = ErrorResponse::bad_request(err.to_string()).with_instance(req.path());
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
