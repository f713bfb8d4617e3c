//! Planform function library and surface integrator.
//!
//! A [`Planform`] maps a spanwise station to a chord length and a leading-edge
//! offset; [`area::derive`] turns span, root chord and shape into planform area
//! and aspect ratio.

pub mod area;
pub mod shape;

use aerogeo_core::error::ErrorKind;
use aerogeo_quadrature::QuadratureError;
use thiserror::Error;

pub use area::{Derived, aspect_ratio, derive, planform_area, validate_dimensions};
pub use shape::{Elliptical, Planform, ShapeKind};

/// Errors raised while binding a planform or deriving its area.
#[derive(Debug, Error, PartialEq)]
pub enum PlanformError {
    #[error("unrecognized planform shape '{0}'")]
    UnknownShape(String),
    #[error("forward semi-minor fraction must lie in [0, 1], got {0}")]
    FractionOutOfRange(f64),
    #[error("span must be positive, got {0} m")]
    NonPositiveSpan(f64),
    #[error("root chord must be positive, got {0} m")]
    NonPositiveRootChord(f64),
    #[error("aspect ratio undefined for planform area {0} m²")]
    DegenerateArea(f64),
    #[error("area integration failed: {0}")]
    Integration(#[from] QuadratureError),
}

impl PlanformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlanformError::DegenerateArea(_) => ErrorKind::Division,
            _ => ErrorKind::Configuration,
        }
    }
}
