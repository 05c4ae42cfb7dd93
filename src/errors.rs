use actix_web::error::{BlockingError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors produced by the query layer and surfaced by the handlers.
///
/// The first four variants are caller mistakes and carry a message that is
/// safe to show to clients. Everything else is a store or runtime failure:
/// it is logged with its cause and reported as a generic 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Conflict(String),

    #[error("database connection error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("database migration failed: {0}")]
    Migration(String),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("blocking task was cancelled")]
    Blocking(#[from] BlockingError),
}

impl ServiceError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ServiceError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ServiceError::NotFound(msg.into())
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::BadRequest(_)
                | ServiceError::NotFound(_)
                | ServiceError::Unauthorized(_)
                | ServiceError::Conflict(_)
        )
    }

    /// Build the response for a failed endpoint. Store failures are replaced
    /// by the endpoint's static `context` message.
    pub fn respond(&self, context: &str) -> HttpResponse {
        if self.is_client_error() {
            return self.error_response();
        }
        log::error!("{context}: {self}");
        HttpResponse::build(self.status_code()).json(json!({ "error": context }))
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_client_error() {
            HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
        } else {
            log::error!("unhandled service error: {self}");
            HttpResponse::build(self.status_code()).json(json!({ "error": "Internal server error" }))
        }
    }
}

// Extractor failures go through the same JSON error shape as handler errors.

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::bad_request(format!("Invalid JSON body: {err}")).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::bad_request(format!("Invalid query string: {err}")).into()
}

pub fn path_error_handler(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::not_found("Resource not found").into()
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Endpoint not found" }))
}
