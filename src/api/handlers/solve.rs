// src/api/handlers/solve.rs
use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, web};
use log::warn;
use uuid::Uuid;

use crate::api::AppState;
use crate::api::body::{check_content_length, is_multipart_form, read_payload, read_solve_form};
use crate::errors::{Result, SolveError};
use crate::validation;

fn rejected(request_id: &str, err: SolveError) -> SolveError {
    warn!("[{}] Rejected submission: {}", request_id, err);
    err
}

/// POST /solve - multipart form with `file` and an optional `message`
pub async fn solve_image(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse> {
    let request_id = Uuid::new_v4().to_string();
    let limit = state.config.max_request_bytes;

    check_content_length(&req, limit).map_err(|e| rejected(&request_id, e))?;
    // A body that is not a form cannot hold a file part.
    if !is_multipart_form(&req) {
        return Err(rejected(&request_id, SolveError::MissingFile));
    }
    let form = read_solve_form(payload, limit)
        .await
        .map_err(|e| rejected(&request_id, e))?;

    let submission =
        validation::validate_image(form.file, form.message).map_err(|e| rejected(&request_id, e))?;

    let result = state.solver.solve(&request_id, submission).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// POST /solve_text - JSON body `{"message": "..."}`
pub async fn solve_text(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Payload,
) -> Result<HttpResponse> {
    let request_id = Uuid::new_v4().to_string();
    let limit = state.config.max_request_bytes;

    check_content_length(&req, limit).map_err(|e| rejected(&request_id, e))?;
    let body = read_payload(payload, limit)
        .await
        .map_err(|e| rejected(&request_id, e))?;

    let submission = validation::validate_text(&body).map_err(|e| rejected(&request_id, e))?;

    let result = state.solver.solve(&request_id, submission).await?;
    Ok(HttpResponse::Ok().json(result))
}
