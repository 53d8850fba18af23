use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// HTTP-facing wrapper around the domain taxonomy. Error bodies carry the
/// stable machine code plus a message; internal faults get a generic body so
/// no detail leaks to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    fn domain(&self) -> &DomainError {
        let AppError::Domain(e) = self;
        e
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self.domain() {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::Unauthenticated => StatusCode::UNAUTHORIZED,
            DomainError::Forbidden => StatusCode::FORBIDDEN,
            DomainError::ProductNotFound
            | DomainError::NoActiveCart
            | DomainError::ItemNotInCart
            | DomainError::CouponNotFound => StatusCode::NOT_FOUND,
            DomainError::OutOfStock
            | DomainError::CouponExpired
            | DomainError::NotNthOrder => StatusCode::CONFLICT,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let e = self.domain();
        let message = match e {
            DomainError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "code": e.code(),
            "error": message,
        }))
    }
}
