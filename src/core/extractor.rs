use std::path::Path;
use std::time::Duration;

use anyhow::anyhow;
use once_cell::sync::Lazy;
use regex::Regex;
use tokio_util::sync::CancellationToken;

use super::errors::EngineError;
use super::models::{Document, DocumentId, EngineSettings};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Turns a resume path into a plain-text `Document`. One bounded file read,
/// no writes; everything downstream of the returned document is pure.
pub struct ResumeExtractor {
    settings: EngineSettings,
}

impl ResumeExtractor {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub async fn extract(&self, path: &str) -> Result<Document, EngineError> {
        self.extract_with_cancel(path, &CancellationToken::new())
            .await
    }

    /// Cancellation interrupts only this step; scoring itself is fast and
    /// pure and carries no cancellation points.
    pub async fn extract_with_cancel(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<Document, EngineError> {
        let extension = Path::new(path)
            .extension()
            .and_then(|v| v.to_str())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        if !matches!(extension.as_str(), "pdf" | "txt") {
            return Err(EngineError::UnsupportedFormat(path.to_string()));
        }

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|_| EngineError::FileNotFound(path.to_string()))?;
        if !metadata.is_file() {
            return Err(EngineError::FileNotFound(path.to_string()));
        }
        if metadata.len() > self.settings.max_resume_bytes {
            return Err(EngineError::ExtractionFailed(anyhow!(
                "resume file is {} bytes, limit is {}",
                metadata.len(),
                self.settings.max_resume_bytes
            )));
        }

        let read_timeout = Duration::from_secs(self.settings.extract_timeout_seconds);
        let bytes = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(EngineError::Cancelled),
            read = tokio::time::timeout(read_timeout, tokio::fs::read(path)) => match read {
                Ok(Ok(bytes)) => bytes,
                Ok(Err(_)) => return Err(EngineError::FileNotFound(path.to_string())),
                Err(_) => {
                    return Err(EngineError::ExtractionFailed(anyhow!(
                        "timed out reading resume after {}s",
                        self.settings.extract_timeout_seconds
                    )))
                }
            },
        };

        tracing::debug!(path, size = bytes.len(), %extension, "resume bytes loaded");

        if cancel.is_cancelled() {
            return Err(EngineError::Cancelled);
        }

        let raw_text = match extension.as_str() {
            "pdf" => extract_pdf_text(&bytes)?,
            // Verbatim beyond the encoding decode.
            _ => String::from_utf8_lossy(&bytes).into_owned(),
        };

        Ok(Document {
            id: DocumentId::Resume,
            raw_text,
            source_path: Some(path.to_string()),
        })
    }
}

/// Reading-order text only; page breaks and layout whitespace are collapsed
/// to single spaces since everything downstream is bag-of-words. An empty
/// extraction is valid, a corrupt or encrypted file is not.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, EngineError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|err| EngineError::ExtractionFailed(err.into()))?;

    Ok(WHITESPACE_RE.replace_all(text.trim(), " ").into_owned())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn extractor() -> ResumeExtractor {
        ResumeExtractor::new(EngineSettings::default())
    }

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> String {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn reads_txt_files_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "resume.txt", "Python developer\nSQL skills".as_bytes());

        let document = extractor().extract(&path).await.unwrap();
        assert_eq!(document.id, DocumentId::Resume);
        assert_eq!(document.raw_text, "Python developer\nSQL skills");
        assert_eq!(document.source_path.as_deref(), Some(path.as_str()));
    }

    #[tokio::test]
    async fn extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "resume.TXT", b"senior engineer");

        let document = extractor().extract(&path).await.unwrap();
        assert_eq!(document.raw_text, "senior engineer");
    }

    #[tokio::test]
    async fn empty_txt_is_a_valid_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "resume.txt", b"");

        let document = extractor().extract(&path).await.unwrap();
        assert_eq!(document.raw_text, "");
    }

    #[tokio::test]
    async fn missing_file_is_file_not_found() {
        let err = extractor().extract("/no/such/resume.txt").await.unwrap_err();
        assert!(matches!(err, EngineError::FileNotFound(_)), "{err:?}");
    }

    #[tokio::test]
    async fn unknown_extension_is_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "resume.docx", b"whatever");

        let err = extractor().extract(&path).await.unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedFormat(_)), "{err:?}");
    }

    #[tokio::test]
    async fn corrupt_pdf_is_extraction_failed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "resume.pdf", b"this is not a pdf at all");

        let err = extractor().extract(&path).await.unwrap_err();
        assert!(matches!(err, EngineError::ExtractionFailed(_)), "{err:?}");
    }

    #[tokio::test]
    async fn oversize_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "resume.txt", b"far too many bytes for the limit");

        let mut settings = EngineSettings::default();
        settings.max_resume_bytes = 8;
        let err = ResumeExtractor::new(settings).extract(&path).await.unwrap_err();
        assert!(matches!(err, EngineError::ExtractionFailed(_)), "{err:?}");
    }

    #[tokio::test]
    async fn expired_read_timeout_is_extraction_failed() {
        let dir = tempfile::tempdir().unwrap();
        // Large enough that the read cannot resolve before the deadline.
        let path = write_temp(&dir, "resume.txt", &vec![b'x'; 2 * 1024 * 1024]);

        let mut settings = EngineSettings::default();
        settings.extract_timeout_seconds = 0;
        let err = ResumeExtractor::new(settings).extract(&path).await.unwrap_err();
        assert!(matches!(err, EngineError::ExtractionFailed(_)), "{err:?}");
    }

    #[tokio::test]
    async fn cancelled_token_aborts_the_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "resume.txt", b"some resume text");

        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = extractor()
            .extract_with_cancel(&path, &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Cancelled), "{err:?}");
    }
}
