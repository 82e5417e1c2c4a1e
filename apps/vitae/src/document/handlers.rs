//! Axum route handlers for the Document API.

use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::document::DocumentPatch;
use crate::errors::AppError;
use crate::models::Document;

#[derive(Debug, Deserialize)]
pub struct PatchRequest {
    #[serde(default)]
    pub document: Value,
    pub patch: DocumentPatch,
}

/// GET /api/v1/documents/sample
pub async fn handle_sample() -> Json<Document> {
    Json(Document::sample())
}

/// POST /api/v1/documents/normalize
pub async fn handle_normalize(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Document>, AppError> {
    let Json(raw) = payload?;
    Ok(Json(Document::from_value(raw)?))
}

/// POST /api/v1/documents/patch
pub async fn handle_patch(
    payload: Result<Json<PatchRequest>, JsonRejection>,
) -> Result<Json<Document>, AppError> {
    let Json(req) = payload?;
    let document = Document::from_value(req.document)?;
    let next = document.apply(&req.patch)?;
    debug!(patch = ?req.patch, "Applied document patch");
    Ok(Json(next))
}
