//! Density profiles — the ordered compression levels the fitting engine walks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered from least to most compressed. `Ord` follows declaration order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DensityProfile {
    #[default]
    Comfortable,
    Compact,
    Dense,
}

/// Rendering parameters a surface applies for a profile, as multipliers of the
/// user's base typography settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityParams {
    pub font_scale: f32,
    pub line_height_scale: f32,
    pub gap_scale: f32,
}

impl DensityProfile {
    #[cfg(test)]
    pub const ALL: [DensityProfile; 3] = [
        DensityProfile::Comfortable,
        DensityProfile::Compact,
        DensityProfile::Dense,
    ];

    /// The next denser profile, or `None` at the terminal one.
    pub fn next(self) -> Option<DensityProfile> {
        match self {
            DensityProfile::Comfortable => Some(DensityProfile::Compact),
            DensityProfile::Compact => Some(DensityProfile::Dense),
            DensityProfile::Dense => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn params(self) -> DensityParams {
        match self {
            DensityProfile::Comfortable => DensityParams {
                font_scale: 1.0,
                line_height_scale: 1.0,
                gap_scale: 1.0,
            },
            DensityProfile::Compact => DensityParams {
                font_scale: 0.95,
                line_height_scale: 0.9,
                gap_scale: 0.7,
            },
            DensityProfile::Dense => DensityParams {
                font_scale: 0.9,
                line_height_scale: 0.82,
                gap_scale: 0.45,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DensityProfile::Comfortable => "comfortable",
            DensityProfile::Compact => "compact",
            DensityProfile::Dense => "dense",
        }
    }
}

impl fmt::Display for DensityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
