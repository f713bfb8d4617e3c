//! Geometry exporters: XFLR5 explane XML plus JSON and CSV sidecars.

pub mod sidecar;
pub mod xflr;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use aerogeo_core::constants::DEFAULT_OUTPUT_DIR;
use aerogeo_core::error::ErrorKind;
use aerogeo_surface::{GeometrySink, Section, Surface};
use thiserror::Error;

pub use xflr::{ParsedSection, ParsedSurface, parse_document, render_document, write_document};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("xml writer failed: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed explane document: {0}")]
    Malformed(String),
}

impl ExportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::Malformed(_) => ErrorKind::Configuration,
            _ => ErrorKind::Io,
        }
    }
}

/// Where and what to write for each exported surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    /// Write through a temporary sibling file and rename on success.
    pub atomic: bool,
    pub json_summary: bool,
    pub csv_sections: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            atomic: false,
            json_summary: false,
            csv_sections: false,
        }
    }
}

impl ExportOptions {
    pub fn in_dir<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

/// Paths written for one surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub name: String,
    pub xml_path: PathBuf,
    pub json_path: Option<PathBuf>,
    pub csv_path: Option<PathBuf>,
    pub section_count: usize,
}

/// Writes explane documents (and optional sidecars) into a directory.
#[derive(Debug, Clone, Default)]
pub struct XflrExporter {
    options: ExportOptions,
}

impl XflrExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }
}

impl GeometrySink for XflrExporter {
    type Output = ExportReport;
    type Error = ExportError;

    fn write(&mut self, surface: &Surface, sections: &[Section]) -> Result<ExportReport, ExportError> {
        let dir = &self.options.output_dir;
        fs::create_dir_all(dir)?;
        let name = surface.name();

        let xml_path = dir.join(format!("{name}.xml"));
        write_file(&xml_path, self.options.atomic, |w| {
            write_document(w, surface, sections).map(|_| ())
        })?;
        log::info!("wrote {}", xml_path.display());

        let json_path = if self.options.json_summary {
            let path = dir.join(format!("{name}.json"));
            write_file(&path, self.options.atomic, |w| {
                sidecar::write_summary(w, surface, sections)
            })?;
            log::info!("wrote {}", path.display());
            Some(path)
        } else {
            None
        };

        let csv_path = if self.options.csv_sections {
            let path = dir.join(format!("{name}_sections.csv"));
            write_file(&path, self.options.atomic, |w| {
                sidecar::write_section_table(w, sections)
            })?;
            log::info!("wrote {}", path.display());
            Some(path)
        } else {
            None
        };

        Ok(ExportReport {
            name,
            xml_path,
            json_path,
            csv_path,
            section_count: sections.len(),
        })
    }
}

/// Create `path` (and its parent directories) and hand a buffered writer to `body`.
///
/// In atomic mode the content lands in `<path>.tmp` first and is renamed over
/// `path` only after `body` and the flush succeed; otherwise a failure can leave
/// a partial file behind.
pub fn write_file<F>(path: &Path, atomic: bool, body: F) -> Result<(), ExportError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), ExportError>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let target = if atomic {
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    } else {
        path.to_path_buf()
    };

    let result = (|| {
        let mut writer = BufWriter::new(File::create(&target)?);
        body(&mut writer)?;
        writer.flush()?;
        Ok::<(), ExportError>(())
    })();

    match result {
        Ok(()) if atomic => fs::rename(&target, path).map_err(|err| {
            let _ = fs::remove_file(&target);
            ExportError::from(err)
        }),
        Ok(()) => Ok(()),
        Err(err) => {
            if atomic {
                let _ = fs::remove_file(&target);
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerogeo_surface::{Discretizer, SequentialIds, SurfaceParams, SurfaceRole};

    #[test]
    fn exporter_writes_named_files() {
        let dir = tempfile::tempdir().unwrap();
        let params = SurfaceParams {
            role: SurfaceRole::HorizontalStabilizer,
            span_m: 3.0,
            root_chord_m: 0.6,
            ..SurfaceParams::default()
        };
        let surface = Surface::new(params, &SequentialIds::starting_at(1)).unwrap();
        let mut exporter = XflrExporter::new(ExportOptions {
            output_dir: dir.path().join("geometry"),
            atomic: true,
            json_summary: true,
            csv_sections: true,
        });
        let report = surface
            .export(&Discretizer::new(10).unwrap(), &mut exporter)
            .unwrap();

        assert_eq!(report.name, "horiz1");
        assert!(report.xml_path.ends_with("geometry/horiz1.xml"));
        assert!(report.xml_path.exists());
        assert!(report.json_path.unwrap().exists());
        assert!(report.csv_path.unwrap().exists());
        assert!(!dir.path().join("geometry/horiz1.xml.tmp").exists());
        assert_eq!(report.section_count, 10);
    }

    #[test]
    fn failed_atomic_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xml");
        let err = write_file(&path, true, |w| {
            w.write_all(b"partial")?;
            Err(ExportError::Malformed("boom".to_string()))
        })
        .unwrap_err();
        assert!(matches!(err, ExportError::Malformed(_)));
        assert!(!path.exists());
        assert!(!dir.path().join("broken.xml.tmp").exists());
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory cannot be replaced by a file.
        let path = dir.path().join("occupied.xml");
        fs::create_dir(&path).unwrap();
        File::create(path.join("keep")).unwrap();

        let err = write_file(&path, true, |w| {
            w.write_all(b"<explane/>")?;
            Ok(())
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!dir.path().join("occupied.xml.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn unwritable_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        File::create(&blocker).unwrap();
        let err = write_file(&blocker.join("child.xml"), false, |_| Ok(())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
