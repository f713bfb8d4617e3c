//! Lifting-surface entity and spanwise discretizer.
//!
//! A [`Surface`] owns its dimensions and planform and keeps area and aspect
//! ratio consistent with them after every mutation. Export goes through the
//! [`GeometrySink`] seam so writers live in their own crate.

pub mod discretize;
pub mod role;
pub mod section;
pub mod surface;

mod error;

pub use discretize::{Discretizer, Spacing};
pub use error::SurfaceError;
pub use role::{FinMirroring, Rgba, SurfaceRole};
pub use section::{PanelDistribution, Paneling, Section};
pub use surface::{GeometrySink, Surface, SurfaceParams};

pub use aerogeo_core::ids::{IdGenerator, SequentialIds, global_ids};
pub use aerogeo_planform::{Planform, PlanformError, ShapeKind};
