use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::SolverError;
use crate::models::ErrorResponse;

/// Errors surfaced to HTTP clients. All of them are the caller's fault.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body has the wrong shape for a two-product problem
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The solver or sampler rejected the problem data
    #[error(transparent)]
    Solver(#[from] SolverError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
