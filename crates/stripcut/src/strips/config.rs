//! Strip layout and manufacturing constraints.

use serde::{Deserialize, Serialize};

/// What to do with rows whose cut is narrower than `min_cut_spacing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinCutBehavior {
    /// Raise narrow cuts to the minimum halfwidth; one polygon per strip.
    #[default]
    Clamp,
    /// Drop narrow rows, splitting the strip into separate polygons.
    Cull,
}

/// Sampling and cutting parameters. Lengths are in image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Number of vertical strips across the image width.
    pub num_strips: usize,
    /// Row intervals per strip; each strip yields `strip_res + 1` rows.
    pub strip_res: usize,
    /// Minimum total width of a cut.
    pub min_cut_spacing: f64,
    /// Material that must remain between neighbouring strip cuts.
    pub min_material_width: f64,
    /// Kerf removed by the beam.
    pub beam_width: f64,
    pub min_cut_behavior: MinCutBehavior,
    /// Monte-Carlo points per unit area (square pixel).
    pub density: f64,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            num_strips: 1,
            strip_res: 1,
            min_cut_spacing: 0.0,
            min_material_width: 0.0,
            beam_width: 0.0,
            min_cut_behavior: MinCutBehavior::Clamp,
            density: 1.0,
        }
    }
}
