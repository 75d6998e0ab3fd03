// src/api/body.rs
//! Size-capped readers for request bodies.
use actix_multipart::Multipart;
use actix_web::{HttpRequest, http::header, web};
use futures::StreamExt;

use crate::errors::{Result, SolveError};
use crate::validation::FileUpload;

/// Fields pulled out of a `/solve` form.
#[derive(Debug, Default)]
pub struct SolveForm {
    pub file: Option<FileUpload>,
    pub message: Option<String>,
}

/// Rejects the request up front when it announces a body over `limit`.
pub fn check_content_length(req: &HttpRequest, limit: usize) -> Result<()> {
    let declared = req
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());

    match declared {
        Some(len) if len > limit => Err(SolveError::PayloadTooLarge { limit }),
        _ => Ok(()),
    }
}

/// Whether the request declares a `multipart/form-data` body.
pub fn is_multipart_form(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

/// Reads a raw body, stopping as soon as it grows past `limit`.
pub async fn read_payload(mut payload: web::Payload, limit: usize) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| SolveError::Multipart(e.to_string()))?;
        if body.len() + chunk.len() > limit {
            return Err(SolveError::PayloadTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Collects the `file` and `message` fields, counting every byte against `limit`.
///
/// Only the first `file` part carrying a filename is kept; other fields are drained.
pub async fn read_solve_form(mut payload: Multipart, limit: usize) -> Result<SolveForm> {
    let mut form = SolveForm::default();
    let mut total = 0usize;

    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| SolveError::Multipart(e.to_string()))?;

        let name = field.name().unwrap_or_default().to_string();
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| SolveError::Multipart(e.to_string()))?;
            total += chunk.len();
            if total > limit {
                return Err(SolveError::PayloadTooLarge { limit });
            }
            data.extend_from_slice(&chunk);
        }

        match (name.as_str(), filename) {
            ("file", Some(filename)) if form.file.is_none() => {
                form.file = Some(FileUpload {
                    filename,
                    content_type,
                    data,
                });
            }
            ("message", None) if form.message.is_none() => {
                let text = String::from_utf8(data)
                    .map_err(|_| SolveError::Multipart("message is not valid UTF-8".to_string()))?;
                form.message = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}
