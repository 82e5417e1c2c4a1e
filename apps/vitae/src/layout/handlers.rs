//! Axum route handlers for the Layout API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::layout::fitting::MeasurementProvider;
use crate::layout::{
    analyze_page_fill, recommend_fill_action, DensityProfile, FillAction, FitDecision, FitMode,
    FittingEngine, HeightEstimator, PageFillAnalysis,
};
use crate::models::{Document, LayoutSettings};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    #[serde(default)]
    pub density: DensityProfile,
    pub rendered_height_px: f64,
    #[serde(default)]
    pub mode: FitMode,
}

impl MeasurementProvider for EvaluateRequest {
    fn measure(&self) -> f64 {
        self.rendered_height_px
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    #[serde(flatten)]
    pub decision: FitDecision,
    pub threshold_px: f64,
}

/// POST /api/v1/layout/evaluate
///
/// One step of the fitting state machine for a height measured by the client.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let Json(req) = payload?;
    if !req.rendered_height_px.is_finite() || req.rendered_height_px < 0.0 {
        return Err(AppError::Validation(format!(
            "renderedHeightPx must be a finite, non-negative number (got {})",
            req.rendered_height_px
        )));
    }

    let mut engine = FittingEngine::new(state.geometry);
    engine.reset(req.density);
    let decision = engine.observe(&req, req.mode);
    debug!(?decision, "Evaluated layout measurement");

    Ok(Json(EvaluateResponse {
        decision,
        threshold_px: state.geometry.threshold_px(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct FitRequest {
    #[serde(default)]
    pub document: Value,
    #[serde(default)]
    pub settings: LayoutSettings,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitResponse {
    pub estimated_height_px: f64,
    pub decision: FitDecision,
    pub fill: PageFillAnalysis,
    pub recommendation: FillAction,
    pub settings: LayoutSettings,
}

/// POST /api/v1/layout/fit
///
/// Runs the fitting engine to a fixed point against the server-side height
/// estimate, starting from the caller's current density.
pub async fn handle_fit(
    State(state): State<AppState>,
    payload: Result<Json<FitRequest>, JsonRejection>,
) -> Result<Json<FitResponse>, AppError> {
    let Json(req) = payload?;
    let document = Document::from_value(req.document)?;
    let mut settings = req.settings.normalized();

    let mut engine = FittingEngine::new(state.geometry);
    engine.reset(settings.density);
    let mut estimator = HeightEstimator::new(&document, &settings);
    let decision = engine.settle(&mut estimator, FitMode::from(settings.view_mode));
    let estimated_height_px = estimator.estimate(decision.density);

    let fill = analyze_page_fill(estimated_height_px, &state.geometry);
    let recommendation = recommend_fill_action(&fill, decision.density);
    settings.density = engine.density();

    Ok(Json(FitResponse {
        estimated_height_px,
        decision,
        fill,
        recommendation,
        settings,
    }))
}
