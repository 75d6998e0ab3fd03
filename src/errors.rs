// src/errors.rs
use thiserror::Error;

use crate::validation::{ALLOWED_EXTENSIONS, MAX_IMAGE_BYTES};

/// Coarse classification of a failure, used by the HTTP layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something we refuse to forward.
    BadRequest,
    /// The request body exceeded the transport ceiling.
    PayloadTooLarge,
    /// The model client could not be built.
    UpstreamUnavailable,
    /// The model call itself failed.
    Upstream,
}

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("File not found")]
    MissingFile,

    #[error("No file selected")]
    EmptyFilename,

    #[error("Allowed file formats: {}", ALLOWED_EXTENSIONS.join(", "))]
    UnsupportedExtension { filename: String },

    #[error("File size exceeds the maximum allowed ({} MB)", MAX_IMAGE_BYTES / (1024 * 1024))]
    FileTooLarge { size: usize },

    #[error("Request body exceeds the maximum allowed ({limit} bytes)")]
    PayloadTooLarge { limit: usize },

    #[error("Problem text was not provided")]
    MissingText,

    #[error("Problem text cannot be empty")]
    EmptyText,

    #[error("Malformed multipart payload: {0}")]
    Multipart(String),

    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("Received empty text response from model")]
    EmptyResponse,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolveError::MissingFile
            | SolveError::EmptyFilename
            | SolveError::UnsupportedExtension { .. }
            | SolveError::FileTooLarge { .. }
            | SolveError::MissingText
            | SolveError::EmptyText
            | SolveError::Multipart(_) => ErrorKind::BadRequest,
            SolveError::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            SolveError::ProviderUnavailable(_) | SolveError::Config(_) => {
                ErrorKind::UpstreamUnavailable
            }
            SolveError::Request(_)
            | SolveError::JsonParse(_)
            | SolveError::ApiError { .. }
            | SolveError::UnexpectedResponse(_)
            | SolveError::EmptyResponse => ErrorKind::Upstream,
        }
    }

    /// Text that is safe to hand back to the caller.
    ///
    /// Validation messages are returned verbatim. Upstream failures collapse to a
    /// generic sentence so credentials and provider responses never leave the process.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::BadRequest | ErrorKind::PayloadTooLarge => match self {
                SolveError::Multipart(_) => "Error processing the file".to_string(),
                other => other.to_string(),
            },
            ErrorKind::UpstreamUnavailable => "Could not connect to the Mistral API".to_string(),
            ErrorKind::Upstream => "An error occurred while processing the request".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_public() {
        let err = SolveError::UnsupportedExtension {
            filename: "diagram.bmp".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.public_message(), "Allowed file formats: png, jpg, jpeg, gif");

        let err = SolveError::FileTooLarge { size: 6 * 1024 * 1024 };
        assert_eq!(err.public_message(), "File size exceeds the maximum allowed (5 MB)");
    }

    #[test]
    fn test_upstream_detail_is_hidden() {
        let err = SolveError::ApiError {
            status: 401,
            body: "invalid api key sk-secret".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert!(!err.public_message().contains("sk-secret"));

        let err = SolveError::ProviderUnavailable("MISTRAL_API_KEY is not set".to_string());
        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
        assert!(!err.public_message().contains("MISTRAL_API_KEY"));
    }

    #[test]
    fn test_transport_ceiling_message_uses_limit() {
        let err = SolveError::PayloadTooLarge { limit: 8_388_608 };
        assert_eq!(err.kind(), ErrorKind::PayloadTooLarge);
        assert_eq!(
            err.public_message(),
            "Request body exceeds the maximum allowed (8388608 bytes)"
        );
    }

    #[test]
    fn test_multipart_detail_is_hidden() {
        let err = SolveError::Multipart("boundary missing".to_string());
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.public_message(), "Error processing the file");
    }
}
