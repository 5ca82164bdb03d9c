use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::{Display, From};
use tracing::error;

/// Failures raised by an [`HrStore`](crate::store::HrStore) implementation.
#[derive(Debug, Display, From)]
pub enum StoreError {
    #[display(fmt = "database error: {}", _0)]
    Database(sqlx::Error),

    #[from(ignore)]
    #[display(fmt = "employee {} does not exist", _0)]
    MissingEmployee(i64),
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Database(e) => Some(e),
            StoreError::MissingEmployee(_) => None,
        }
    }
}

/// Errors that escape a request handler. None of these are expected during
/// normal use, so they all surface as a bare 500.
#[derive(Debug, Display, From)]
pub enum AppError {
    #[display(fmt = "{}", _0)]
    Store(StoreError),

    #[display(fmt = "token error: {}", _0)]
    Token(jsonwebtoken::errors::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!(error = %self, "Request failed");
        HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body("Internal Server Error")
    }
}
