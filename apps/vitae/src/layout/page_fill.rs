//! Page Fill Analysis — how well a measured height uses the page.
//!
//! The fitting engine only answers "does it fit". This reports by how much,
//! and suggests the next step for the editor to show the user.
//!
//! # Page fill rules
//! - Whitespace > 8%  → a lighter profile would still fit; suggest relaxing
//! - Overflow ≤ 5%    → escalate density, or tighten spacing when already dense
//! - Overflow > 5%    → escalate density, or trim content when already dense

use serde::{Deserialize, Serialize};

use crate::layout::density::DensityProfile;
use crate::layout::fitting::PageGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageFillVerdict {
    /// 92–100% fill.
    Acceptable,
    /// Under 92% fill.
    TooMuchWhitespace,
    /// 100–105% fill.
    MinorOverflow,
    /// Over 105% fill.
    MajorOverflow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFillAnalysis {
    pub used_px: f64,
    pub available_px: f64,
    pub fill_ratio: f64,
    pub whitespace_fraction: f64,
    pub overflow_fraction: f64,
    pub verdict: PageFillVerdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillAction {
    NoAction,
    /// Only a manual reset moves the profile lighter.
    RelaxDensity,
    EscalateDensity,
    /// Already dense; lower line height or section spacing.
    TightenSpacing,
    /// Already dense and well over; content has to go.
    TrimContent,
}

/// Compares `height_px` against the bare page height. The fitting tolerance is
/// not applied here, so a page inside the tolerance reads as a minor overflow.
pub fn analyze_page_fill(height_px: f64, geometry: &PageGeometry) -> PageFillAnalysis {
    let available_px = geometry.page_height_px;
    let fill_ratio = if available_px > 0.0 {
        height_px / available_px
    } else {
        f64::INFINITY
    };

    let whitespace_fraction = (1.0 - fill_ratio).max(0.0);
    let overflow_fraction = (fill_ratio - 1.0).max(0.0);

    let verdict = if fill_ratio > 1.05 {
        PageFillVerdict::MajorOverflow
    } else if fill_ratio > 1.00 {
        PageFillVerdict::MinorOverflow
    } else if whitespace_fraction > 0.08 {
        PageFillVerdict::TooMuchWhitespace
    } else {
        PageFillVerdict::Acceptable
    };

    PageFillAnalysis {
        used_px: height_px,
        available_px,
        fill_ratio,
        whitespace_fraction,
        overflow_fraction,
        verdict,
    }
}

pub fn recommend_fill_action(analysis: &PageFillAnalysis, density: DensityProfile) -> FillAction {
    match analysis.verdict {
        PageFillVerdict::Acceptable => FillAction::NoAction,
        PageFillVerdict::TooMuchWhitespace if density != DensityProfile::Comfortable => {
            FillAction::RelaxDensity
        }
        PageFillVerdict::TooMuchWhitespace => FillAction::NoAction,
        _ if !density.is_terminal() => FillAction::EscalateDensity,
        PageFillVerdict::MinorOverflow => FillAction::TightenSpacing,
        PageFillVerdict::MajorOverflow => FillAction::TrimContent,
    }
}
