//! Discrete spanwise sections and their paneling metadata.

use std::fmt;
use std::str::FromStr;

use crate::SurfaceError;

/// Panel spacing law along one axis of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelDistribution {
    Uniform,
    Cosine,
    Sine,
    InverseSine,
}

impl PanelDistribution {
    /// Keyword used by the explane format.
    pub fn keyword(self) -> &'static str {
        match self {
            PanelDistribution::Uniform => "UNIFORM",
            PanelDistribution::Cosine => "COSINE",
            PanelDistribution::Sine => "SINE",
            PanelDistribution::InverseSine => "INVERSE SINE",
        }
    }
}

impl fmt::Display for PanelDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for PanelDistribution {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace(['_', '-'], " ").as_str() {
            "UNIFORM" => Ok(PanelDistribution::Uniform),
            "COSINE" => Ok(PanelDistribution::Cosine),
            "SINE" => Ok(PanelDistribution::Sine),
            "INVERSE SINE" | "INVSINE" => Ok(PanelDistribution::InverseSine),
            _ => Err(SurfaceError::UnknownDistribution(s.to_string())),
        }
    }
}

/// Panel counts and distributions for the chordwise (x) and spanwise (y) axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paneling {
    pub x_panels: u32,
    pub x_distribution: PanelDistribution,
    pub y_panels: u32,
    pub y_distribution: PanelDistribution,
}

impl Default for Paneling {
    fn default() -> Self {
        Self {
            x_panels: 6,
            x_distribution: PanelDistribution::Cosine,
            y_panels: 9,
            y_distribution: PanelDistribution::InverseSine,
        }
    }
}

/// One spanwise slice of a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub y_position_m: f64,
    pub chord_m: f64,
    /// Leading-edge x-offset (sweep); negative values sit ahead of the reference line.
    pub x_offset_m: f64,
    pub dihedral_deg: f64,
    pub twist_deg: f64,
    pub paneling: Paneling,
    pub left_foil: String,
    pub right_foil: String,
}
