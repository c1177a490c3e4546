use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::export::templates::{catalog, Catalog};
use crate::export::{export_resume, ExportRequest};

/// GET /api/v1/templates
pub async fn handle_templates() -> Json<Catalog> {
    Json(catalog())
}

/// POST /api/v1/export
///
/// Responds with the rendered file as an attachment.
pub async fn handle_export(Json(request): Json<ExportRequest>) -> Result<Response, AppError> {
    let artifact = export_resume(request)?;
    let disposition = format!("attachment; filename=\"{}\"", artifact.filename);

    Ok((
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.body,
    )
        .into_response())
}
