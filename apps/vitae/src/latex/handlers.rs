//! Axum route handler for LaTeX export.

use axum::{
    extract::rejection::JsonRejection,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::latex::{render_latex, serialize};
use crate::models::settings::SectionVisibility;
use crate::models::Document;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default)]
    pub document: Value,
    /// Absent: export everything, hidden custom sections included.
    pub visible_sections: Option<SectionVisibility>,
}

/// POST /api/v1/export/latex
pub async fn handle_export_latex(
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    let document = Document::from_value(req.document)?;
    let source = match &req.visible_sections {
        Some(visible) => render_latex(&document, visible),
        None => serialize(&document),
    };

    info!(bytes = source.len(), "Exported LaTeX source");

    Ok((
        [
            (header::CONTENT_TYPE, "text/x-tex; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"resume.tex\""),
        ],
        source,
    )
        .into_response())
}
