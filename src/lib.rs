//! Parametric lifting-surface geometry for XFLR5.
//!
//! The workspace crates are re-exported here so front-ends (the CLI, tests,
//! notebooks driving the library) depend on a single crate. Manifest handling
//! and planform plotting live in this crate because they tie several of the
//! others together.

pub mod manifest;
pub mod plot;

pub use aerogeo_config as config;
pub use aerogeo_core::{constants, error, ids, rounding};
pub use aerogeo_export as export;
pub use aerogeo_planform as planform;
pub use aerogeo_quadrature as quadrature;
pub use aerogeo_surface as surface;
