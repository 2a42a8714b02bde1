//! PDF text extraction for stored resumes.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to extract text from PDF: {0}")]
    Extraction(String),
}

/// Extracts the plain text of every page, with whitespace runs collapsed.
/// Parsing is CPU-bound, so it runs on the blocking pool.
pub async fn extract_text(bytes: Bytes) -> Result<String, PdfError> {
    let raw = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| PdfError::Extraction(format!("extraction task failed: {e}")))?
        .map_err(|e| {
            warn!("PDF extraction failed: {e}");
            PdfError::Extraction(e.to_string())
        })?;

    let text = collapse_whitespace(&raw);
    debug!("Extracted {} chars of PDF text", text.len());
    Ok(text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  Rust\n\nEngineer \t Kafka\u{c}  "),
            "Rust Engineer Kafka"
        );
    }

    #[tokio::test]
    async fn test_garbage_bytes_fail_extraction() {
        let result = extract_text(Bytes::from_static(b"this is not a pdf")).await;
        assert!(matches!(result, Err(PdfError::Extraction(_))));
    }
}
