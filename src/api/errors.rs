// src/api/errors.rs
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::errors::{ErrorKind, SolveError};
use crate::models::ErrorResult;

impl ResponseError for SolveError {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorKind::UpstreamUnavailable | ErrorKind::Upstream => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResult {
            error: self.public_message(),
        })
    }
}
