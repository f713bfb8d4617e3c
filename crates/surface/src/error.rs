//! Error type shared by the surface entity, roles and the discretizer.

use aerogeo_core::error::ErrorKind;
use aerogeo_planform::PlanformError;
use thiserror::Error;

/// Errors raised while constructing, mutating or discretizing a surface.
#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error(transparent)]
    Planform(#[from] PlanformError),
    #[error("mass must be non-negative, got {0} kg")]
    NegativeMass(f64),
    #[error("{0} is not a finite angle")]
    NonFiniteAngle(f64),
    #[error("unrecognized surface role '{0}'")]
    UnknownRole(String),
    #[error("forward semi-minor fraction only applies to elliptical planforms")]
    NotElliptical,
    #[error("unrecognized station spacing '{0}'")]
    UnknownSpacing(String),
    #[error("unrecognized panel distribution '{0}'")]
    UnknownDistribution(String),
    #[error("section resolution must be at least 1")]
    ZeroResolution,
}

impl SurfaceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SurfaceError::Planform(inner) => inner.kind(),
            _ => ErrorKind::Configuration,
        }
    }
}
