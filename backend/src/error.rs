//! Request-level error type shared by every service.
//!
//! The taxonomy is deliberately small:
//! - `Validation`: the caller's input failed a field constraint. Surfaced
//!   before any persistence attempt, with the full list of violations so a
//!   client can redisplay a form. Never leaves partial writes.
//! - `NotFound`: a lookup by identifier matched nothing. An expected,
//!   recoverable condition, distinct from an error response body.
//! - `Storage`: the underlying store rejected an operation. Treated as fatal
//!   for the current request; the transaction (if any) has already rolled
//!   back, so no partial state is observable.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::violation::Violation;
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<Violation>),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation(violations) => {
                HttpResponse::UnprocessableEntity().json(violations)
            }
            Self::NotFound(what) => HttpResponse::NotFound().body(format!("{what} not found")),
            Self::Storage(e) => {
                // The cause goes to the log, not to the client.
                error!("storage failure: {e}");
                HttpResponse::InternalServerError().body("storage failure")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_are_distinct_per_taxonomy() {
        let validation = ApiError::Validation(vec![Violation::new("name", "required")]);
        let not_found = ApiError::NotFound("order");
        let storage = ApiError::Storage(rusqlite::Error::InvalidQuery);

        assert_eq!(validation.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
