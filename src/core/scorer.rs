use super::models::{Document, EngineSettings, JobDescription, ScoreResult, TermVector};
use super::overlap::top_overlap;
use super::tokenizer::tokenize;
use super::vectorizer::{build_vectors, count_terms};

/// Scoring strategy seam. The engine ships tf-idf cosine only, but an
/// alternative ranking function (BM25, say) can be dropped in here without
/// touching extraction or tokenization.
pub trait ResumeScorer: Send + Sync {
    fn score(&self, resume: &Document, jd: &JobDescription) -> ScoreResult;
}

pub struct TfidfScorer {
    settings: EngineSettings,
}

impl TfidfScorer {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }
}

impl ResumeScorer for TfidfScorer {
    /// Total function: degenerate inputs (empty or fully-filtered documents)
    /// produce score 0.0 and an empty overlap, never an error.
    fn score(&self, resume: &Document, jd: &JobDescription) -> ScoreResult {
        let resume_counts = count_terms(tokenize(&resume.raw_text, &self.settings));
        let jd_counts = count_terms(tokenize(&jd.text, &self.settings));

        let (resume_vector, jd_vector) = build_vectors(&resume_counts, &jd_counts);

        ScoreResult {
            score: cosine_similarity(&resume_vector, &jd_vector),
            top_overlap: top_overlap(&resume_vector, &jd_vector, self.settings.top_overlap_count),
            resume_preview: resume
                .raw_text
                .chars()
                .take(self.settings.preview_chars)
                .collect(),
        }
    }
}

/// Cosine of the angle between the two weight vectors, clamped to [0, 1] so
/// floating-point drift can never leak out of range. Zero magnitude on
/// either side is defined as 0.0.
fn cosine_similarity(resume_vector: &TermVector, jd_vector: &TermVector) -> f64 {
    let dot: f64 = resume_vector
        .iter()
        .filter_map(|(term, resume_weight)| {
            jd_vector.get(term).map(|jd_weight| resume_weight * jd_weight)
        })
        .sum();

    let resume_magnitude = magnitude(resume_vector);
    let jd_magnitude = magnitude(jd_vector);
    if resume_magnitude == 0.0 || jd_magnitude == 0.0 {
        return 0.0;
    }

    (dot / (resume_magnitude * jd_magnitude)).clamp(0.0, 1.0)
}

fn magnitude(vector: &TermVector) -> f64 {
    vector.values().map(|weight| weight * weight).sum::<f64>().sqrt()
}
