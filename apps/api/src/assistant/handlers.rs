//! Axum route handlers for the writing assistant.
//!
//! Provider failures stop here: details are logged and the caller gets a short,
//! retryable message.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::assistant::cover_letter::CoverLetterProfile;
use crate::assistant::provider::{
    ATS_ANALYSIS_FAILED, BULLET_POINTS_FAILED, COVER_LETTER_FAILED, SUMMARY_FAILED,
};
use crate::assistant::AssistantError;
use crate::errors::AppError;
use crate::export::text::record_to_text;
use crate::models::resume::ResumeRecord;
use crate::models::suggestion::{AiSuggestion, AtsAnalysis, CoverLetter, Tone};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BulletPointsRequest {
    pub job_title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BulletPointsResponse {
    pub suggestions: Vec<AiSuggestion>,
}

/// Either an explicit profile or a whole record to read the profile from.
#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub profile: Option<CoverLetterProfile>,
    #[serde(default)]
    pub record: Option<ResumeRecord>,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub tone: Tone,
}

/// Either raw resume text or a record, flattened to plain text before matching.
#[derive(Debug, Deserialize)]
pub struct AtsRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub record: Option<ResumeRecord>,
    #[serde(default)]
    pub job_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/bullet-points
pub async fn handle_bullet_points(
    State(state): State<AppState>,
    Json(request): Json<BulletPointsRequest>,
) -> Result<Json<BulletPointsResponse>, AppError> {
    let suggestions = state
        .assistant
        .generate_bullet_points(
            &request.job_title,
            &request.company_name,
            request.job_description.as_deref(),
        )
        .await
        .map_err(|e| at_boundary(e, BULLET_POINTS_FAILED))?;

    Ok(Json(BulletPointsResponse { suggestions }))
}

/// POST /api/v1/ai/summary
pub async fn handle_summary(State(state): State<AppState>) -> Result<Json<AiSuggestion>, AppError> {
    let suggestion = state
        .assistant
        .suggest_summary()
        .await
        .map_err(|e| at_boundary(e, SUMMARY_FAILED))?;
    Ok(Json(suggestion))
}

/// POST /api/v1/ai/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetter>, AppError> {
    let profile = match (request.profile, request.record) {
        (Some(profile), _) => profile,
        (None, Some(record)) => CoverLetterProfile::from_record(&record),
        (None, None) => CoverLetterProfile::default(),
    };

    let letter = state
        .assistant
        .generate_cover_letter(&profile, &request.job_description, request.tone)
        .await
        .map_err(|e| at_boundary(e, COVER_LETTER_FAILED))?;
    Ok(Json(letter))
}

/// POST /api/v1/ai/ats
pub async fn handle_ats(
    State(state): State<AppState>,
    Json(request): Json<AtsRequest>,
) -> Result<Json<AtsAnalysis>, AppError> {
    let resume_text = match (request.resume_text, request.record) {
        (Some(text), _) => text,
        (None, Some(record)) => record_to_text(&record.normalize()?),
        (None, None) => {
            return Err(AppError::InvalidInput(
                "Either resume_text or record is required".to_string(),
            ))
        }
    };

    let analysis = state
        .assistant
        .analyze_resume_for_ats(&resume_text, &request.job_description)
        .await
        .map_err(|e| at_boundary(e, ATS_ANALYSIS_FAILED))?;
    Ok(Json(analysis))
}

/// Invalid input passes through; backend failures become the generic `message`.
fn at_boundary(err: AssistantError, message: &str) -> AppError {
    match err {
        AssistantError::InvalidInput(msg) => AppError::InvalidInput(msg),
        AssistantError::GenerationFailed(detail) => {
            warn!("Assistant backend failed: {detail}");
            AppError::GenerationFailed(message.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_keeps_invalid_input_message() {
        let err = at_boundary(
            AssistantError::InvalidInput("Please enter a job title".to_string()),
            BULLET_POINTS_FAILED,
        );
        assert!(matches!(err, AppError::InvalidInput(msg) if msg == "Please enter a job title"));
    }

    #[test]
    fn test_boundary_replaces_backend_detail() {
        let err = at_boundary(
            AssistantError::GenerationFailed("connection reset by peer".to_string()),
            COVER_LETTER_FAILED,
        );
        assert!(matches!(err, AppError::GenerationFailed(msg) if msg == COVER_LETTER_FAILED));
    }

    #[test]
    fn test_cover_letter_request_defaults_tone() {
        let request: CoverLetterRequest =
            serde_json::from_str(r#"{ "job_description": "Rust role" }"#).unwrap();
        assert_eq!(request.tone, Tone::Professional);
        assert!(request.profile.is_none());
    }
}
