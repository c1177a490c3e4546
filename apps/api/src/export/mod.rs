// Resume rendering and export.
// Plain text and HTML are produced here; PDF and DOCX are acknowledged but not rendered.

pub mod handlers;
pub mod html;
pub mod templates;
pub mod text;

use bytes::Bytes;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;

pub use templates::{Customization, ResolvedStyle, TemplateId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Pdf,
    Docx,
    Txt,
    Html,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    pub record: ResumeRecord,
    #[serde(default)]
    pub template: TemplateId,
    #[serde(default)]
    pub customization: Customization,
    pub format: ExportFormat,
}

/// A rendered resume ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub body: Bytes,
    pub content_type: &'static str,
    pub filename: String,
}

pub fn export_resume(request: ExportRequest) -> Result<ExportArtifact, AppError> {
    export_resume_on(request, Utc::now().date_naive())
}

/// Renders `request` with `date` stamped into the file name.
pub fn export_resume_on(request: ExportRequest, date: NaiveDate) -> Result<ExportArtifact, AppError> {
    let style = request.customization.resolve()?;
    let record = request.record.normalize()?;
    let stamp = date.format("%Y-%m-%d");

    let artifact = match request.format {
        ExportFormat::Txt => ExportArtifact {
            body: Bytes::from(text::render_text(&record, request.template)),
            content_type: "text/plain; charset=utf-8",
            filename: format!("resume-{stamp}.txt"),
        },
        ExportFormat::Html => ExportArtifact {
            body: Bytes::from(html::render_html(&record, request.template, &style)),
            content_type: "text/html; charset=utf-8",
            filename: format!("resume-{stamp}.html"),
        },
        ExportFormat::Pdf => {
            return Err(AppError::NotImplemented("PDF export is not available yet".to_string()))
        }
        ExportFormat::Docx => {
            return Err(AppError::NotImplemented("DOCX export is not available yet".to_string()))
        }
    };

    info!(
        "Exported {} ({} bytes, template {:?})",
        artifact.filename,
        artifact.body.len(),
        request.template
    );
    Ok(artifact)
}
