// src/validation.rs
use crate::errors::{Result, SolveError};
use crate::models::{ImageSubmission, ProblemSubmission, TextSubmission};

/// Extensions accepted for uploaded images, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Largest image we forward to the model: 5 MiB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A file field as it came off the multipart stream.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Returns true when `filename` has an extension from [`ALLOWED_EXTENSIONS`].
///
/// Only the name is inspected; the bytes are never sniffed.
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Validates an image upload together with the optional `message` form field.
pub fn validate_image(
    upload: Option<FileUpload>,
    instruction: Option<String>,
) -> Result<ProblemSubmission> {
    let upload = upload.ok_or(SolveError::MissingFile)?;

    if upload.filename.is_empty() {
        return Err(SolveError::EmptyFilename);
    }

    if !allowed_file(&upload.filename) {
        return Err(SolveError::UnsupportedExtension {
            filename: upload.filename,
        });
    }

    if upload.data.len() > MAX_IMAGE_BYTES {
        return Err(SolveError::FileTooLarge {
            size: upload.data.len(),
        });
    }

    // Browsers occasionally omit the part's Content-Type; fall back to the name.
    let content_type = upload.content_type.unwrap_or_else(|| {
        mime_guess::from_path(&upload.filename)
            .first_or_octet_stream()
            .to_string()
    });

    let instruction = instruction.filter(|text| !text.trim().is_empty());

    Ok(ProblemSubmission::Image(ImageSubmission {
        content_type,
        data: upload.data,
        instruction,
    }))
}

/// Validates a raw `/solve_text` body of the form `{"message": "..."}`.
pub fn validate_text(body: &[u8]) -> Result<ProblemSubmission> {
    if body.is_empty() {
        return Err(SolveError::MissingText);
    }

    // Only a JSON object qualifies; arrays and scalars never carry a `message` key.
    let mut fields: serde_json::Map<String, serde_json::Value> =
        serde_json::from_slice(body).map_err(|_| SolveError::MissingText)?;

    let text = match fields.remove("message") {
        Some(serde_json::Value::String(text)) => text,
        _ => return Err(SolveError::MissingText),
    };

    if text.trim().is_empty() {
        return Err(SolveError::EmptyText);
    }

    Ok(ProblemSubmission::Text(TextSubmission { text }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(filename: &str, len: usize) -> FileUpload {
        FileUpload {
            filename: filename.to_string(),
            content_type: Some("image/png".to_string()),
            data: vec![0u8; len],
        }
    }

    #[test]
    fn test_allowed_file() {
        for name in ["a.png", "a.JPG", "scan.final.jpeg", "x.Gif"] {
            assert!(allowed_file(name), "{name} should be accepted");
        }
        for name in ["diagram.bmp", "png", "archive.png.zip", "noext", "trailing.", ".gif.txt"] {
            assert!(!allowed_file(name), "{name} should be rejected");
        }
    }

    #[test]
    fn test_missing_and_empty_file() {
        assert!(matches!(validate_image(None, None), Err(SolveError::MissingFile)));
        assert!(matches!(
            validate_image(Some(upload("", 10)), None),
            Err(SolveError::EmptyFilename)
        ));
    }

    #[test]
    fn test_size_ceiling() {
        assert!(validate_image(Some(upload("ok.png", MAX_IMAGE_BYTES)), None).is_ok());
        assert!(matches!(
            validate_image(Some(upload("big.png", MAX_IMAGE_BYTES + 1)), None),
            Err(SolveError::FileTooLarge { .. })
        ));
        // Extension is checked first, but an oversized payload never passes either way.
        assert!(validate_image(Some(upload("big.bmp", MAX_IMAGE_BYTES + 1)), None).is_err());
    }

    #[test]
    fn test_content_type_fallback_and_blank_instruction() {
        let mut file = upload("photo.jpg", 4);
        file.content_type = None;
        let submission = validate_image(Some(file), Some("   ".to_string())).unwrap();
        match submission {
            ProblemSubmission::Image(image) => {
                assert_eq!(image.content_type, "image/jpeg");
                assert_eq!(image.instruction, None);
            }
            ProblemSubmission::Text(_) => panic!("expected an image submission"),
        }
    }

    #[test]
    fn test_validate_text() {
        let submission = validate_text(br#"{"message": "Solve 2x+3=7"}"#).unwrap();
        assert!(matches!(submission, ProblemSubmission::Text(ref t) if t.text == "Solve 2x+3=7"));

        assert!(matches!(validate_text(b""), Err(SolveError::MissingText)));
        assert!(matches!(validate_text(b"{}"), Err(SolveError::MissingText)));
        assert!(matches!(validate_text(b"not json"), Err(SolveError::MissingText)));
        assert!(matches!(validate_text(b"[1, 2]"), Err(SolveError::MissingText)));
        assert!(matches!(
            validate_text(br#"["Solve 2x+3=7"]"#),
            Err(SolveError::MissingText)
        ));
        assert!(matches!(validate_text(b"\"Solve 2x+3=7\""), Err(SolveError::MissingText)));
        assert!(matches!(validate_text(br#"{"message": 42}"#), Err(SolveError::MissingText)));
        assert!(matches!(
            validate_text(br#"{"message": " \n\t "}"#),
            Err(SolveError::EmptyText)
        ));
    }
}
