use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-document tf-idf weights, keyed by normalized term. Sorted keys keep
/// every downstream iteration deterministic. Invariant: stored weights are
/// strictly positive; an absent term means weight 0.
pub type TermVector = BTreeMap<String, f64>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentId {
    Resume,
    JobDescription,
}

/// Plain text extracted from one input, immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub raw_text: String,
    pub source_path: Option<String>,
}

/// The job posting side of a scoring request. `title` is carried through for
/// display only and never contributes to the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescription {
    pub title: String,
    pub text: String,
}

/// A term weighted above zero in both documents, reported so the caller can
/// show why the score came out the way it did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapEntry {
    pub term: String,
    pub resume_tf_idf: f64,
    pub jd_tf_idf: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: f64,
    pub top_overlap: Vec<OverlapEntry>,
    pub resume_preview: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSettings {
    pub min_token_chars: usize,
    pub filter_stop_words: bool,
    pub top_overlap_count: usize,
    pub preview_chars: usize,
    pub max_resume_bytes: u64,
    pub extract_timeout_seconds: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            min_token_chars: 2,
            filter_stop_words: true,
            top_overlap_count: 10,
            preview_chars: 500,
            max_resume_bytes: 10 * 1024 * 1024,
            extract_timeout_seconds: 30,
        }
    }
}
