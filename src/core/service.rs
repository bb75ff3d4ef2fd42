use tokio_util::sync::CancellationToken;

use super::errors::EngineError;
use super::extractor::ResumeExtractor;
use super::models::{EngineSettings, JobDescription, ScoreResult};
use super::scorer::{ResumeScorer, TfidfScorer};

/// The engine boundary consumed by the presentation shell. Stateless:
/// every call extracts, vectorizes, scores and drops its intermediates, so
/// concurrent requests need no coordination.
pub struct ScreenerService {
    extractor: ResumeExtractor,
    scorer: Box<dyn ResumeScorer>,
}

impl ScreenerService {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            extractor: ResumeExtractor::new(settings.clone()),
            scorer: Box::new(TfidfScorer::new(settings)),
        }
    }

    pub async fn score_resume(
        &self,
        resume_path: &str,
        job_title: &str,
        jd_text: &str,
    ) -> Result<ScoreResult, EngineError> {
        self.score_resume_with_cancel(resume_path, job_title, jd_text, &CancellationToken::new())
            .await
    }

    pub async fn score_resume_with_cancel(
        &self,
        resume_path: &str,
        job_title: &str,
        jd_text: &str,
        cancel: &CancellationToken,
    ) -> Result<ScoreResult, EngineError> {
        if job_title.trim().is_empty() {
            return Err(EngineError::InvalidInput("job title is required".to_string()));
        }
        if jd_text.trim().is_empty() {
            return Err(EngineError::InvalidInput(
                "job description text is required".to_string(),
            ));
        }

        let resume = self
            .extractor
            .extract_with_cancel(resume_path, cancel)
            .await?;
        let jd = JobDescription {
            title: job_title.to_string(),
            text: jd_text.to_string(),
        };

        let result = self.scorer.score(&resume, &jd);
        tracing::info!(
            resume_path,
            job_title,
            score = result.score,
            overlap_terms = result.top_overlap.len(),
            "resume scored"
        );

        Ok(result)
    }
}
