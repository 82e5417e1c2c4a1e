//! Editor layout settings carried alongside the document.
//!
//! Ranges mirror the editor's sliders; anything outside them is clamped rather
//! than rejected, and absent fields take the editor's defaults.

use serde::{Deserialize, Serialize};

use crate::layout::DensityProfile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontChoice {
    #[default]
    Inter,
    Merriweather,
    Lora,
    Montserrat,
    OpenSans,
    Roboto,
    RobotoCondensed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Edit,
    Preview,
}

/// Which built-in sections are shown. Custom sections carry their own flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionVisibility {
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub projects: bool,
    pub skills: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        SectionVisibility {
            summary: true,
            experience: true,
            education: true,
            projects: true,
            skills: true,
        }
    }
}

/// Page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: 16.0,
            right: 16.0,
            bottom: 16.0,
            left: 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSettings {
    pub font: FontChoice,
    pub density: DensityProfile,
    /// Unitless multiplier of the font size.
    pub line_height: f32,
    /// In em.
    pub letter_spacing: f32,
    /// In rem.
    pub section_spacing: f32,
    pub visible_sections: SectionVisibility,
    pub view_mode: ViewMode,
    pub margins: Margins,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            font: FontChoice::Inter,
            density: DensityProfile::Comfortable,
            line_height: 1.5,
            letter_spacing: 0.0,
            section_spacing: 1.5,
            visible_sections: SectionVisibility::default(),
            view_mode: ViewMode::Edit,
            margins: Margins::default(),
        }
    }
}

const LINE_HEIGHT_RANGE: (f32, f32) = (1.0, 2.0);
const LETTER_SPACING_RANGE: (f32, f32) = (-0.05, 0.1);
const SECTION_SPACING_RANGE: (f32, f32) = (0.5, 3.0);
const MARGIN_RANGE: (f32, f32) = (0.0, 50.0);

impl LayoutSettings {
    /// Clamps every numeric setting into its slider range. Non-finite values
    /// fall back to the default.
    pub fn normalized(self) -> Self {
        let defaults = LayoutSettings::default();
        LayoutSettings {
            line_height: clamp_or(self.line_height, LINE_HEIGHT_RANGE, defaults.line_height),
            letter_spacing: clamp_or(
                self.letter_spacing,
                LETTER_SPACING_RANGE,
                defaults.letter_spacing,
            ),
            section_spacing: clamp_or(
                self.section_spacing,
                SECTION_SPACING_RANGE,
                defaults.section_spacing,
            ),
            margins: Margins {
                top: clamp_or(self.margins.top, MARGIN_RANGE, defaults.margins.top),
                right: clamp_or(self.margins.right, MARGIN_RANGE, defaults.margins.right),
                bottom: clamp_or(self.margins.bottom, MARGIN_RANGE, defaults.margins.bottom),
                left: clamp_or(self.margins.left, MARGIN_RANGE, defaults.margins.left),
            },
            ..self
        }
    }
}

fn clamp_or(value: f32, (min, max): (f32, f32), fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}
