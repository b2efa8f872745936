//! Document text extraction.
//!
//! `TextExtractor` is the seam for turning a resume file into plain text.
//! PDF goes through `pdf_extract`; `.txt` / `.md` resumes are read as-is.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the document's text, pages concatenated in order.
    /// Pages without text contribute nothing.
    async fn extract(&self, path: &Path) -> Result<String, AppError>;
}

fn unreadable(path: &Path, reason: impl ToString) -> AppError {
    AppError::DocumentUnreadable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String, AppError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| unreadable(path, e))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        // pdf_extract can panic on malformed input; run it where a panic
        // surfaces as a JoinError instead of unwinding through main.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| unreadable(path, format!("PDF parser aborted: {e}")))?
            .map_err(|e| unreadable(path, e))?;

        info!("Extracted {} characters from {}", text.len(), path.display());
        Ok(text)
    }
}

pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String, AppError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| unreadable(path, e))?;
        info!("Read {} characters from {}", text.len(), path.display());
        Ok(text)
    }
}

/// Picks an extractor from the file extension.
pub fn extractor_for(path: &Path) -> Result<Arc<dyn TextExtractor>, AppError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => Ok(Arc::new(PdfTextExtractor)),
        Some("txt") | Some("text") | Some("md") => Ok(Arc::new(PlainTextExtractor)),
        other => Err(AppError::DocumentUnreadable {
            path: PathBuf::from(path),
            reason: format!(
                "unsupported document type '{}' (expected .pdf, .txt or .md)",
                other.unwrap_or("")
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_plain_text_extraction() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"Skills: Python, SQL").unwrap();

        let extractor = extractor_for(file.path()).unwrap();
        let text = extractor.extract(file.path()).await.unwrap();
        assert_eq!(text, "Skills: Python, SQL");
    }

    #[tokio::test]
    async fn test_missing_pdf_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        let err = PdfTextExtractor.extract(&path).await.unwrap_err();
        assert!(matches!(err, AppError::DocumentUnreadable { .. }));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_unreadable() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"this is not a pdf").unwrap();
        let err = PdfTextExtractor.extract(file.path()).await.unwrap_err();
        assert!(matches!(err, AppError::DocumentUnreadable { .. }));
    }

    #[test]
    fn test_extension_selection_is_case_insensitive() {
        assert!(extractor_for(Path::new("resume.PDF")).is_ok());
        assert!(extractor_for(Path::new("resume.md")).is_ok());
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = match extractor_for(Path::new("resume.docx")) {
            Err(e) => e,
            Ok(_) => panic!("docx should be rejected"),
        };
        assert!(err.to_string().contains("docx"));
    }
}
