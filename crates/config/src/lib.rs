//! Surface manifest models and loaders.
//!
//! Shape tags and roles stay textual here; they are validated when a record is
//! turned into surface parameters, so an unknown tag surfaces as a configuration
//! error at construction rather than as a parse failure.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// One lifting surface as described in a manifest.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SurfaceConfig {
    /// `mainwing`, `horizontal_stabilizer` or `vertical_stabilizer` (legacy spellings accepted).
    pub role: String,
    #[serde(default = "default_foil")]
    pub foil: String,
    #[serde(default)]
    pub angle_of_incidence_deg: f64,
    #[serde(default = "default_span")]
    pub span_m: f64,
    #[serde(default = "default_root_chord")]
    pub root_chord_m: f64,
    #[serde(default = "default_mass")]
    pub mass_kg: f64,
    #[serde(default)]
    pub planform: PlanformConfig,
    #[serde(default)]
    pub symmetric_fin: bool,
    #[serde(default)]
    pub double_fin: bool,
    /// Spanwise resolution override for this surface.
    #[serde(default)]
    pub resolution: Option<usize>,
    #[serde(default)]
    pub spacing: Option<String>,
    #[serde(default)]
    pub paneling: Option<PanelingConfig>,
}

/// Planform shape tag plus its shape-specific parameters.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PlanformConfig {
    pub shape: String,
    /// Forward semi-minor fraction; elliptical shapes only.
    #[serde(default)]
    pub fsmf: Option<f64>,
}

impl Default for PlanformConfig {
    fn default() -> Self {
        Self {
            shape: "ellipse".to_string(),
            fsmf: None,
        }
    }
}

/// Paneling override applied to every section of a surface.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PanelingConfig {
    pub x_panels: u32,
    pub x_distribution: String,
    pub y_panels: u32,
    pub y_distribution: String,
}

/// A manifest file may hold a bare list or a `surfaces:` table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Manifest {
    List(Vec<SurfaceConfig>),
    Table { surfaces: Vec<SurfaceConfig> },
    Single(SurfaceConfig),
}

impl From<Manifest> for Vec<SurfaceConfig> {
    fn from(manifest: Manifest) -> Self {
        match manifest {
            Manifest::List(list) => list,
            Manifest::Table { surfaces } => surfaces,
            Manifest::Single(surface) => vec![surface],
        }
    }
}

fn default_foil() -> String {
    "NACA 1212".to_string()
}

fn default_span() -> f64 {
    8.0
}

fn default_root_chord() -> f64 {
    1.0
}

fn default_mass() -> f64 {
    50.0
}

/// Errors that can occur while loading manifests.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load surface records from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_surfaces<P: AsRef<Path>>(path: P) -> Result<Vec<SurfaceConfig>, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let manifest: Manifest = toml::from_str(&contents)?;
        Ok(manifest.into())
    } else {
        let reader = File::open(path)?;
        let manifest: Manifest = serde_yaml::from_reader(reader)?;
        Ok(manifest.into())
    }
}

/// Parse surface records from YAML text.
pub fn parse_yaml(contents: &str) -> Result<Vec<SurfaceConfig>, ConfigError> {
    let manifest: Manifest = serde_yaml::from_str(contents)?;
    Ok(manifest.into())
}

fn read_dir_records(dir: &Path) -> Result<Vec<SurfaceConfig>, ConfigError> {
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let manifest: Manifest = toml::from_str(&contents)?;
        records.extend(Vec::from(manifest));
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
