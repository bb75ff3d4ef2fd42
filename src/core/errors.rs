use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Resume file not found: {0}")]
    FileNotFound(String),
    #[error("Unsupported resume format: {0}. Expected .pdf or .txt")]
    UnsupportedFormat(String),
    #[error("Failed to extract resume text: {0}")]
    ExtractionFailed(#[source] anyhow::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Scoring request was cancelled")]
    Cancelled,
}

impl EngineError {
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            EngineError::FileNotFound(_)
                | EngineError::UnsupportedFormat(_)
                | EngineError::InvalidInput(_)
        )
    }
}
