pub mod core;

pub use crate::core::errors::EngineError;
pub use crate::core::models::{
    Document, DocumentId, EngineSettings, JobDescription, OverlapEntry, ScoreResult, TermVector,
};
pub use crate::core::scorer::{ResumeScorer, TfidfScorer};
pub use crate::core::service::ScreenerService;
