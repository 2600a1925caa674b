//! Error handling middleware - RFC 7807 compliant responses.

use std::fmt;

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use cookbook_core::DomainError;
use cookbook_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(Vec<String>),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Validation(errors) => ErrorResponse::unprocessable(errors.join("; ")),
            AppError::Internal(detail) => {
                // Details stay in the log, never in the response.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(errors) => AppError::Validation(errors.messages()),
            DomainError::RecipeNotFound { id } => {
                AppError::NotFound(format!("Recipe with id {} not found", id))
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Malformed or incomplete JSON bodies are validation failures.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(vec![format!("body: {}", err)]).into()
}

/// Path segments that do not parse (e.g. `/recipes/abc`) are validation failures.
pub fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(vec![format!("path: {}", err)]).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use cookbook_core::domain::ValidationErrors;

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "must not be empty");

        let invalid = AppError::from(DomainError::InvalidInput(errors));
        let missing = AppError::from(DomainError::RecipeNotFound { id: 9 });
        let internal = AppError::from(DomainError::Internal("disk full".to_string()));

        assert_eq!(invalid.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
