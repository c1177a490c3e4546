use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::editor::{apply_command, EditorCommand, EditorUpdate};
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::scoring::{compute_completeness_report, CompletenessReport};

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub record: ResumeRecord,
    pub command: EditorCommand,
}

#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub record: ResumeRecord,
    pub completeness: CompletenessReport,
}

impl From<ResumeRecord> for RecordResponse {
    fn from(record: ResumeRecord) -> Self {
        let completeness = compute_completeness_report(&record);
        Self {
            record,
            completeness,
        }
    }
}

/// GET /api/v1/resumes/sample
pub async fn handle_sample() -> Json<RecordResponse> {
    Json(ResumeRecord::sample().into())
}

/// GET /api/v1/resumes/blank
pub async fn handle_blank() -> Json<RecordResponse> {
    Json(ResumeRecord::blank().into())
}

/// POST /api/v1/resumes/completeness
pub async fn handle_completeness(
    Json(record): Json<ResumeRecord>,
) -> Result<Json<CompletenessReport>, AppError> {
    let record = record.normalize()?;
    Ok(Json(compute_completeness_report(&record)))
}

/// POST /api/v1/resumes/edit
///
/// Applies one command to the supplied record and returns the replacement record.
pub async fn handle_edit(Json(request): Json<EditRequest>) -> Result<Json<EditorUpdate>, AppError> {
    let record = request.record.normalize()?;
    let update = apply_command(record, request.command)?;
    if update.changed {
        info!(
            "Resume edited: {} sections, {}% complete",
            update.record.sections.len(),
            update.completeness.percentage
        );
    }
    Ok(Json(update))
}
