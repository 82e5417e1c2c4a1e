//! Fitting Engine — escalates the density profile until content fits the page.
//!
//! # Transition rules
//! - `h > T`, not at the terminal profile → move to the next denser profile
//! - `h > T`, already dense              → stay, report overflow (no retry)
//! - `h <= T`                             → stay; never relaxes on its own
//! - readonly mode                        → evaluation skipped entirely
//!
//! `T` is the page height plus a tolerance buffer. The engine only sees
//! numbers: heights come from a [`MeasurementProvider`] or [`RenderSurface`]
//! implemented by whoever renders the document.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::layout::density::DensityProfile;
use crate::models::settings::ViewMode;

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// Page height the content must fit in, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    pub page_height_px: f64,
    /// Absorbs sub-pixel rounding in the measured height.
    pub tolerance_px: f64,
}

impl PageGeometry {
    /// A4 (297 mm) at 96 DPI.
    pub const A4: PageGeometry = PageGeometry {
        page_height_px: 1123.0,
        tolerance_px: 5.0,
    };

    pub fn threshold_px(&self) -> f64 {
        self.page_height_px + self.tolerance_px
    }

    /// Strictly greater-than: content exactly at the threshold fits.
    pub fn overflows(&self, height_px: f64) -> bool {
        height_px > self.threshold_px()
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::A4
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    #[default]
    Interactive,
    Readonly,
}

/// The preview pane is read-only; only the edit view auto-fits.
impl From<ViewMode> for FitMode {
    fn from(view: ViewMode) -> Self {
        match view {
            ViewMode::Edit => FitMode::Interactive,
            ViewMode::Preview => FitMode::Readonly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub rendered_height_px: f64,
    #[serde(default)]
    pub mode: FitMode,
}

impl Measurement {
    pub fn new(rendered_height_px: f64, mode: FitMode) -> Self {
        Measurement {
            rendered_height_px,
            mode,
        }
    }
}

/// Reports the current rendered height of the content.
pub trait MeasurementProvider {
    fn measure(&self) -> f64;
}

/// Renders the content at a density and reports the resulting height.
pub trait RenderSurface {
    fn render(&mut self, density: DensityProfile) -> f64;
}

// ────────────────────────────────────────────────────────────────────────────
// Outputs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FitOutcome {
    /// Not in interactive mode; nothing evaluated.
    Skipped,
    /// Content fits at the current profile.
    Fits,
    /// Content overflowed and the profile moved one step denser.
    Escalated {
        from: DensityProfile,
        to: DensityProfile,
    },
    /// Content overflows at the densest profile. The caller should warn.
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitDecision {
    pub density: DensityProfile,
    /// True whenever the measured height exceeded the threshold, whether or
    /// not the profile could still escalate.
    pub overflowing: bool,
    pub outcome: FitOutcome,
}

// ────────────────────────────────────────────────────────────────────────────
// Transition function
// ────────────────────────────────────────────────────────────────────────────

/// Pure transition: depends only on the current profile and one measurement.
pub fn transition(
    state: DensityProfile,
    measurement: &Measurement,
    geometry: &PageGeometry,
) -> FitDecision {
    if measurement.mode == FitMode::Readonly {
        return FitDecision {
            density: state,
            overflowing: false,
            outcome: FitOutcome::Skipped,
        };
    }

    if !geometry.overflows(measurement.rendered_height_px) {
        return FitDecision {
            density: state,
            overflowing: false,
            outcome: FitOutcome::Fits,
        };
    }

    match state.next() {
        Some(to) => FitDecision {
            density: to,
            overflowing: true,
            outcome: FitOutcome::Escalated { from: state, to },
        },
        None => FitDecision {
            density: state,
            overflowing: true,
            outcome: FitOutcome::Overflow,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

/// Holds the current profile between measurements.
#[derive(Debug, Clone)]
pub struct FittingEngine {
    geometry: PageGeometry,
    density: DensityProfile,
}

impl FittingEngine {
    pub fn new(geometry: PageGeometry) -> Self {
        Self::starting_at(geometry, DensityProfile::default())
    }

    pub fn starting_at(geometry: PageGeometry, density: DensityProfile) -> Self {
        FittingEngine { geometry, density }
    }

    pub fn density(&self) -> DensityProfile {
        self.density
    }

    /// Explicit override, e.g. the user picking a profile by hand. The only
    /// way the profile ever gets lighter.
    pub fn reset(&mut self, density: DensityProfile) {
        self.density = density;
    }

    pub fn evaluate(&mut self, measurement: Measurement) -> FitDecision {
        let decision = transition(self.density, &measurement, &self.geometry);
        match decision.outcome {
            FitOutcome::Escalated { from, to } => info!(
                %from,
                %to,
                height_px = measurement.rendered_height_px,
                threshold_px = self.geometry.threshold_px(),
                "Content overflows page, escalating density"
            ),
            FitOutcome::Overflow => warn!(
                height_px = measurement.rendered_height_px,
                threshold_px = self.geometry.threshold_px(),
                "Content overflows page at densest profile"
            ),
            FitOutcome::Fits | FitOutcome::Skipped => {}
        }
        self.density = decision.density;
        decision
    }

    /// Pulls the latest height from `provider` and evaluates it.
    pub fn observe<P: MeasurementProvider + ?Sized>(
        &mut self,
        provider: &P,
        mode: FitMode,
    ) -> FitDecision {
        self.evaluate(Measurement::new(provider.measure(), mode))
    }

    /// Re-renders and re-measures until the profile stops escalating.
    ///
    /// Terminates: every loop iteration moves strictly denser, and the
    /// profile order is finite.
    pub fn settle<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        mode: FitMode,
    ) -> FitDecision {
        loop {
            let height = surface.render(self.density);
            let decision = self.evaluate(Measurement::new(height, mode));
            if !matches!(decision.outcome, FitOutcome::Escalated { .. }) {
                return decision;
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
