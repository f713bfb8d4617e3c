//! Planform families and their chord / leading-edge functions.
//!
//! Every function takes the spanwise station `y` measured from the root, the
//! total span (tip to tip) and the root chord. Stations are meaningful on
//! `[0, span/2]`; stations beyond the tip evaluate as the tip itself.

use std::fmt;
use std::str::FromStr;

use aerogeo_core::constants::DEFAULT_FSMF;

use crate::PlanformError;

/// Shape family without its parameters, as named in manifests and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Elliptical,
    Rectangular,
}

impl ShapeKind {
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Elliptical => "ellipse",
            ShapeKind::Rectangular => "rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ShapeKind {
    type Err = PlanformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ellipse" | "elliptical" | "elliptic" => Ok(ShapeKind::Elliptical),
            "rectangle" | "rectangular" | "rect" => Ok(ShapeKind::Rectangular),
            _ => Err(PlanformError::UnknownShape(s.to_string())),
        }
    }
}

/// Parameters of an elliptical planform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elliptical {
    fsmf: f64,
}

impl Elliptical {
    /// `fsmf` is the share of the root chord lying forward of the chord reference line.
    pub fn new(fsmf: f64) -> Result<Self, PlanformError> {
        if !fsmf.is_finite() || !(0.0..=1.0).contains(&fsmf) {
            return Err(PlanformError::FractionOutOfRange(fsmf));
        }
        Ok(Self { fsmf })
    }

    pub fn fsmf(&self) -> f64 {
        self.fsmf
    }
}

impl Default for Elliptical {
    fn default() -> Self {
        Self { fsmf: DEFAULT_FSMF }
    }
}

/// A planform shape bound to its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Planform {
    Elliptical(Elliptical),
    Rectangular,
}

impl Default for Planform {
    fn default() -> Self {
        Planform::Elliptical(Elliptical::default())
    }
}

impl Planform {
    pub fn elliptical(fsmf: f64) -> Result<Self, PlanformError> {
        Ok(Planform::Elliptical(Elliptical::new(fsmf)?))
    }

    /// Build a planform from a shape kind, taking `fsmf` (or its default) for ellipses.
    pub fn from_kind(kind: ShapeKind, fsmf: Option<f64>) -> Result<Self, PlanformError> {
        match kind {
            ShapeKind::Elliptical => Self::elliptical(fsmf.unwrap_or(DEFAULT_FSMF)),
            ShapeKind::Rectangular => Ok(Planform::Rectangular),
        }
    }

    /// Parse a textual shape tag. Unknown tags are rejected, never defaulted.
    pub fn from_tag(tag: &str, fsmf: Option<f64>) -> Result<Self, PlanformError> {
        Self::from_kind(tag.parse()?, fsmf)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Planform::Elliptical(_) => ShapeKind::Elliptical,
            Planform::Rectangular => ShapeKind::Rectangular,
        }
    }

    /// Forward semi-minor fraction, for shapes that carry one.
    pub fn fsmf(&self) -> Option<f64> {
        match self {
            Planform::Elliptical(params) => Some(params.fsmf),
            Planform::Rectangular => None,
        }
    }

    /// Chord length (m) at station `y`.
    pub fn chord(&self, y: f64, span: f64, root_chord: f64) -> f64 {
        match self {
            Planform::Elliptical(_) => root_chord * elliptic_factor(y, span),
            Planform::Rectangular => root_chord,
        }
    }

    /// Leading-edge position (m) forward of the chord reference line at station `y`.
    pub fn leading_edge(&self, y: f64, span: f64, root_chord: f64) -> f64 {
        match self {
            Planform::Elliptical(params) => params.fsmf * root_chord * elliptic_factor(y, span),
            Planform::Rectangular => 0.0,
        }
    }

    /// Trailing-edge position (m) relative to the chord reference line; never positive.
    pub fn trailing_edge(&self, y: f64, span: f64, root_chord: f64) -> f64 {
        self.leading_edge(y, span, root_chord) - self.chord(y, span, root_chord)
    }

    /// Leading-edge x-offset written for the root section, from the raw shape parameters.
    pub fn root_offset(&self, root_chord: f64) -> f64 {
        match self {
            Planform::Elliptical(params) => -(params.fsmf * root_chord),
            Planform::Rectangular => 0.0,
        }
    }
}

/// `sqrt(1 - (2y/span)^2)`, with the radicand clamped so stations past the tip read 0.
fn elliptic_factor(y: f64, span: f64) -> f64 {
    let eta = 2.0 * y / span;
    (1.0 - eta * eta).max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elliptical_chord_matches_closed_form() {
        let planform = Planform::elliptical(0.25).unwrap();
        assert_eq!(planform.chord(0.0, 8.0, 1.0), 1.0);
        let expected = (1.0_f64 - 0.25).sqrt();
        assert!((planform.chord(2.0, 8.0, 1.0) - expected).abs() < 1e-12);
        assert_eq!(planform.chord(4.0, 8.0, 1.0), 0.0);
        assert_eq!(planform.chord(5.0, 8.0, 1.0), 0.0);
    }

    #[test]
    fn leading_and_trailing_edges_split_the_chord() {
        let planform = Planform::elliptical(0.3).unwrap();
        for &y in &[0.0, 1.0, 2.5, 3.9] {
            let le = planform.leading_edge(y, 8.0, 2.0);
            let te = planform.trailing_edge(y, 8.0, 2.0);
            assert!((le - te - planform.chord(y, 8.0, 2.0)).abs() < 1e-12);
            assert!(te <= 0.0);
        }
    }

    #[test]
    fn rectangular_has_constant_chord_and_no_sweep() {
        let planform = Planform::Rectangular;
        for &y in &[0.0, 1.0, 3.99] {
            assert_eq!(planform.chord(y, 8.0, 1.5), 1.5);
            assert_eq!(planform.leading_edge(y, 8.0, 1.5), 0.0);
        }
        assert_eq!(planform.root_offset(1.5), 0.0);
    }

    #[test]
    fn root_offset_uses_raw_fraction() {
        let planform = Planform::elliptical(0.25).unwrap();
        assert_eq!(planform.root_offset(2.0), -0.5);
    }

    #[test]
    fn shape_tags_parse_case_insensitively() {
        assert_eq!("Ellipse".parse::<ShapeKind>().unwrap(), ShapeKind::Elliptical);
        assert_eq!(" rectangular ".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangular);
        assert!(matches!(
            "delta".parse::<ShapeKind>(),
            Err(PlanformError::UnknownShape(tag)) if tag == "delta"
        ));
    }

    #[test]
    fn fsmf_must_be_a_fraction() {
        assert!(Planform::elliptical(0.0).is_ok());
        assert!(Planform::elliptical(1.0).is_ok());
        assert!(matches!(
            Planform::elliptical(1.2),
            Err(PlanformError::FractionOutOfRange(_))
        ));
        assert!(Planform::elliptical(f64::NAN).is_err());
    }

    #[test]
    fn missing_fsmf_falls_back_to_default() {
        let planform = Planform::from_tag("ellipse", None).unwrap();
        assert_eq!(planform.fsmf(), Some(DEFAULT_FSMF));
        assert_eq!(Planform::from_tag("rectangle", Some(0.9)).unwrap().fsmf(), None);
    }
}
