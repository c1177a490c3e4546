//! Suggestion provider: pluggable, trait-based source of writing suggestions.
//!
//! Default: `MockSuggestionProvider` (canned text, deterministic, simulated latency).
//! A real backend implements the same trait and may fail with `GenerationFailed`.
//!
//! `AppState` holds an `Arc<dyn SuggestionProvider>`, chosen at startup.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::assistant::ats::{default_keywords, match_keywords};
use crate::assistant::bullets::{bullet_points_for, summary_suggestion, JobTrack};
use crate::assistant::cover_letter::{write_cover_letter, CoverLetterProfile};
use crate::assistant::AssistantError;
use crate::models::suggestion::{AiSuggestion, AtsAnalysis, CoverLetter, Tone};

pub const BULLET_POINTS_FAILED: &str = "Failed to generate bullet points. Please try again.";
pub const COVER_LETTER_FAILED: &str = "Failed to generate cover letter. Please try again.";
pub const ATS_ANALYSIS_FAILED: &str = "Failed to analyze resume. Please try again.";
pub const SUMMARY_FAILED: &str = "Failed to generate summary. Please try again.";
pub const MISSING_JOB_TITLE: &str = "Please enter a job title";

/// Default simulated round trip of the mock backend.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// One attempt per call: no retry, no timeout, no partial result.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Three bullet-point suggestions for an experience entry. The job description is
    /// accepted for future backends and currently ignored.
    async fn generate_bullet_points(
        &self,
        job_title: &str,
        company_name: &str,
        job_description: Option<&str>,
    ) -> Result<Vec<AiSuggestion>, AssistantError>;

    async fn generate_cover_letter(
        &self,
        profile: &CoverLetterProfile,
        job_description: &str,
        tone: Tone,
    ) -> Result<CoverLetter, AssistantError>;

    async fn analyze_resume_for_ats(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AtsAnalysis, AssistantError>;

    async fn suggest_summary(&self) -> Result<AiSuggestion, AssistantError>;
}

/// Canned-answer backend. Sleeps for `latency` before every answer, never fails.
#[derive(Debug, Clone)]
pub struct MockSuggestionProvider {
    latency: Duration,
    ats_keywords: Vec<String>,
}

impl Default for MockSuggestionProvider {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY, default_keywords())
    }
}

impl MockSuggestionProvider {
    pub fn new(latency: Duration, ats_keywords: Vec<String>) -> Self {
        Self {
            latency,
            ats_keywords,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn ats_keywords(&self) -> &[String] {
        &self.ats_keywords
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl SuggestionProvider for MockSuggestionProvider {
    async fn generate_bullet_points(
        &self,
        job_title: &str,
        company_name: &str,
        _job_description: Option<&str>,
    ) -> Result<Vec<AiSuggestion>, AssistantError> {
        if job_title.trim().is_empty() {
            return Err(AssistantError::InvalidInput(MISSING_JOB_TITLE.to_string()));
        }

        self.round_trip().await;

        let track = JobTrack::classify(job_title);
        info!("Generated bullet points for track {:?}", track);
        Ok(bullet_points_for(job_title, company_name))
    }

    async fn generate_cover_letter(
        &self,
        profile: &CoverLetterProfile,
        _job_description: &str,
        tone: Tone,
    ) -> Result<CoverLetter, AssistantError> {
        self.round_trip().await;

        debug!("Writing {} cover letter", tone);
        Ok(write_cover_letter(profile, tone))
    }

    async fn analyze_resume_for_ats(
        &self,
        resume_text: &str,
        _job_description: &str,
    ) -> Result<AtsAnalysis, AssistantError> {
        self.round_trip().await;

        let analysis = match_keywords(resume_text, &self.ats_keywords);
        info!(
            "ATS analysis: score={} matched={} missing={}",
            analysis.score,
            analysis.matched_keywords.len(),
            analysis.missing_keywords.len()
        );
        Ok(analysis)
    }

    async fn suggest_summary(&self) -> Result<AiSuggestion, AssistantError> {
        self.round_trip().await;
        Ok(summary_suggestion())
    }
}
