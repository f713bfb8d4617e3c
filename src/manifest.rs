//! Turn manifest records into surfaces and export them.

use std::path::Path;

use aerogeo_config::{ConfigError, PanelingConfig, SurfaceConfig, load_surfaces};
use aerogeo_core::error::ErrorKind;
use aerogeo_core::ids::IdGenerator;
use aerogeo_export::{ExportError, ExportOptions, ExportReport, XflrExporter};
use aerogeo_surface::{
    Discretizer, FinMirroring, Paneling, Planform, Surface, SurfaceError, SurfaceParams,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest could not be loaded: {0}")]
    Config(#[from] ConfigError),
    #[error("surface #{index} is invalid: {source}")]
    Surface {
        index: usize,
        #[source]
        source: SurfaceError,
    },
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

impl ManifestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ManifestError::Config(ConfigError::Io(_)) => ErrorKind::Io,
            ManifestError::Config(_) => ErrorKind::Configuration,
            ManifestError::Surface { source, .. } => source.kind(),
            ManifestError::Export(err) => err.kind(),
        }
    }
}

/// Validate a manifest record into construction parameters.
pub fn params_from_config(config: &SurfaceConfig) -> Result<SurfaceParams, SurfaceError> {
    let planform = Planform::from_tag(&config.planform.shape, config.planform.fsmf)?;
    Ok(SurfaceParams {
        role: config.role.parse()?,
        foil: config.foil.clone(),
        angle_of_incidence_deg: config.angle_of_incidence_deg,
        span_m: config.span_m,
        root_chord_m: config.root_chord_m,
        mass_kg: config.mass_kg,
        planform,
        fins: FinMirroring {
            symmetric: config.symmetric_fin,
            double: config.double_fin,
        },
    })
}

/// Sampling settings for a manifest record, falling back to `fallback` for unset fields.
pub fn discretizer_from_config(
    config: &SurfaceConfig,
    fallback: &Discretizer,
) -> Result<Discretizer, SurfaceError> {
    let mut discretizer = match config.resolution {
        Some(resolution) => Discretizer::new(resolution)?
            .with_spacing(fallback.spacing())
            .with_paneling(fallback.paneling()),
        None => *fallback,
    };
    if let Some(spacing) = &config.spacing {
        discretizer = discretizer.with_spacing(spacing.parse()?);
    }
    if let Some(paneling) = &config.paneling {
        discretizer = discretizer.with_paneling(paneling_from_config(paneling)?);
    }
    Ok(discretizer)
}

fn paneling_from_config(config: &PanelingConfig) -> Result<Paneling, SurfaceError> {
    Ok(Paneling {
        x_panels: config.x_panels,
        x_distribution: config.x_distribution.parse()?,
        y_panels: config.y_panels,
        y_distribution: config.y_distribution.parse()?,
    })
}

/// Construct every record in order. The first invalid record aborts the batch.
pub fn build_surfaces(
    configs: &[SurfaceConfig],
    fallback: &Discretizer,
    ids: &dyn IdGenerator,
) -> Result<Vec<(Surface, Discretizer)>, ManifestError> {
    configs
        .iter()
        .enumerate()
        .map(|(index, config)| {
            let build = || -> Result<(Surface, Discretizer), SurfaceError> {
                let discretizer = discretizer_from_config(config, fallback)?;
                let surface = Surface::new(params_from_config(config)?, ids)?;
                Ok((surface, discretizer))
            };
            build().map_err(|source| ManifestError::Surface { index, source })
        })
        .collect()
}

/// Load a manifest, build its surfaces and export each one.
pub fn export_manifest<P: AsRef<Path>>(
    path: P,
    options: &ExportOptions,
    fallback: &Discretizer,
    ids: &dyn IdGenerator,
) -> Result<Vec<ExportReport>, ManifestError> {
    let configs = load_surfaces(path)?;
    let surfaces = build_surfaces(&configs, fallback, ids)?;
    let mut exporter = XflrExporter::new(options.clone());
    let mut reports = Vec::with_capacity(surfaces.len());
    for (surface, discretizer) in &surfaces {
        reports.push(surface.export(discretizer, &mut exporter)?);
    }
    Ok(reports)
}
