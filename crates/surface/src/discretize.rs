//! Spanwise discretization of a planform into sections.
//!
//! The root section comes first and anchors the leading edge with the raw shape
//! parameters. Intermediate stations follow in increasing order and stop short of
//! the tip, whose elliptical chord is zero. Any chord that would be written as
//! zero at the export precision is replaced by [`CHORD_FLOOR_M`] (see
//! [`floor_chord`]); the analysis tool cannot mesh a zero-width section.

use std::f64::consts::FRAC_PI_2;
use std::str::FromStr;

use aerogeo_core::constants::{CHORD_FLOOR_M, DEFAULT_RESOLUTION, EXPORT_DECIMALS};
use aerogeo_core::rounding::round_to;
use aerogeo_planform::Planform;

use crate::section::{Paneling, Section};
use crate::SurfaceError;

/// Placement of the intermediate stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// `y_i = i · span/(2N)` for `0 < i < N`.
    #[default]
    Linear,
    /// `y_i = (span/2) · sin(i·π/(2N))` for `i < N`; clusters stations toward the tip.
    Cosine,
}

impl FromStr for Spacing {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "uniform" => Ok(Spacing::Linear),
            "cosine" => Ok(Spacing::Cosine),
            _ => Err(SurfaceError::UnknownSpacing(s.to_string())),
        }
    }
}

/// Sampling settings for one export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discretizer {
    resolution: usize,
    spacing: Spacing,
    paneling: Paneling,
}

impl Default for Discretizer {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            spacing: Spacing::Linear,
            paneling: Paneling::default(),
        }
    }
}

impl Discretizer {
    pub fn new(resolution: usize) -> Result<Self, SurfaceError> {
        if resolution == 0 {
            return Err(SurfaceError::ZeroResolution);
        }
        Ok(Self {
            resolution,
            ..Self::default()
        })
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_paneling(mut self, paneling: Paneling) -> Self {
        self.paneling = paneling;
        self
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    pub fn paneling(&self) -> Paneling {
        self.paneling
    }

    /// Linear step `span/(2N)`.
    pub fn step(&self, span: f64) -> f64 {
        span / (2.0 * self.resolution as f64)
    }

    /// Intermediate stations, excluding the root, strictly below the tip.
    pub fn stations(&self, span: f64) -> Vec<f64> {
        let half = 0.5 * span;
        let n = self.resolution as f64;
        match self.spacing {
            // Indexed, not accumulated: the tip is never emitted.
            Spacing::Linear => (1..self.resolution)
                .map(|i| half * i as f64 / n)
                .filter(|&y| y < half)
                .collect(),
            Spacing::Cosine => {
                (1..self.resolution)
                    .map(|i| half * (i as f64 * FRAC_PI_2 / n).sin())
                    .filter(|&y| y < half)
                    .collect()
            }
        }
    }

    /// Slice a planform into root-first sections.
    pub fn discretize(
        &self,
        planform: &Planform,
        span: f64,
        root_chord: f64,
        foil: &str,
    ) -> Vec<Section> {
        let stations = self.stations(span);
        let mut sections = Vec::with_capacity(stations.len() + 1);
        sections.push(self.section(
            0.0,
            floor_chord(0.0, root_chord),
            planform.root_offset(root_chord),
            foil,
        ));

        for y in stations {
            let chord = floor_chord(y, planform.chord(y, span, root_chord));
            let x_offset = -planform.leading_edge(y, span, root_chord);
            sections.push(self.section(y, chord, x_offset, foil));
        }
        sections
    }

    fn section(&self, y: f64, chord: f64, x_offset: f64, foil: &str) -> Section {
        Section {
            y_position_m: y,
            chord_m: chord,
            x_offset_m: x_offset,
            dihedral_deg: 0.0,
            twist_deg: 0.0,
            paneling: self.paneling,
            left_foil: foil.to_string(),
            right_foil: foil.to_string(),
        }
    }
}

/// Replace a chord that rounds to zero at the export precision with [`CHORD_FLOOR_M`].
pub fn floor_chord(y: f64, chord: f64) -> f64 {
    if round_to(chord, EXPORT_DECIMALS) <= 0.0 {
        log::debug!("chord {chord} m at y = {y} m exports as zero; using {CHORD_FLOOR_M} m");
        CHORD_FLOOR_M
    } else {
        chord
    }
}
