use std::path::PathBuf;

use aerogeo::constants::{DEFAULT_FSMF, DEFAULT_OUTPUT_DIR, DEFAULT_RESOLUTION};
use aerogeo::export::{ExportOptions, ExportReport, XflrExporter};
use aerogeo::ids::global_ids;
use aerogeo::manifest::export_manifest;
use aerogeo::plot::{PlotOptions, render_planform};
use aerogeo::surface::{
    Discretizer, FinMirroring, Planform, ShapeKind, Spacing, Surface, SurfaceParams, SurfaceRole,
};
use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate XFLR5 explane geometry for a lifting surface"
)]
struct Cli {
    /// mainwing, horizontal_stabilizer or vertical_stabilizer
    #[arg(long, default_value = "mainwing")]
    role: SurfaceRole,

    /// Airfoil name as loaded in XFLR5
    #[arg(long, default_value = "NACA 1212")]
    foil: String,

    /// Tip-to-tip span in metres
    #[arg(long, default_value_t = 8.0)]
    span: f64,

    /// Root chord in metres
    #[arg(long, default_value_t = 1.0)]
    root_chord: f64,

    /// Surface mass in kilograms
    #[arg(long, default_value_t = 50.0)]
    mass: f64,

    /// Planform shape (ellipse or rectangle)
    #[arg(long, default_value = "ellipse")]
    shape: ShapeKind,

    /// Forward semi-minor fraction for elliptical planforms
    #[arg(long, default_value_t = DEFAULT_FSMF)]
    fsmf: f64,

    /// Angle of incidence in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    incidence: f64,

    /// Mirror the fin about the symmetry plane (vertical stabilizers only)
    #[arg(long, default_value_t = false)]
    symmetric_fin: bool,

    /// Twin-fin arrangement (vertical stabilizers only)
    #[arg(long, default_value_t = false)]
    double_fin: bool,

    /// Number of spanwise sections per half-span
    #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
    resolution: usize,

    /// Station spacing (linear or cosine)
    #[arg(long, default_value = "linear")]
    spacing: Spacing,

    /// Directory receiving the generated files
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Export every surface of a YAML/TOML manifest instead of the flags above
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Also write a JSON summary next to each document
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Also write a CSV section table next to each document
    #[arg(long, default_value_t = false)]
    csv: bool,

    /// Write through temporary files and rename on success
    #[arg(long, default_value_t = false)]
    atomic: bool,

    /// Render a planform PNG next to the document (single-surface mode)
    #[arg(long, default_value_t = false)]
    plot: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    let cli = Cli::parse();

    let discretizer = Discretizer::new(cli.resolution)?.with_spacing(cli.spacing);
    let options = ExportOptions {
        output_dir: cli.output_dir.clone(),
        atomic: cli.atomic,
        json_summary: cli.json,
        csv_sections: cli.csv,
    };

    if let Some(manifest) = &cli.manifest {
        let reports = export_manifest(manifest, &options, &discretizer, global_ids())
            .with_context(|| format!("exporting manifest {}", manifest.display()))?;
        for report in &reports {
            print_report(report);
        }
        println!("Exported {} surface(s)", reports.len());
        return Ok(());
    }

    let params = SurfaceParams {
        role: cli.role,
        foil: cli.foil.clone(),
        angle_of_incidence_deg: cli.incidence,
        span_m: cli.span,
        root_chord_m: cli.root_chord,
        mass_kg: cli.mass,
        planform: Planform::from_kind(cli.shape, Some(cli.fsmf))?,
        fins: FinMirroring {
            symmetric: cli.symmetric_fin,
            double: cli.double_fin,
        },
    };
    let surface = Surface::with_global_id(params)?;

    println!("Surface {} ({})", surface.name(), surface.role());
    println!("  Area: {:.4} m²", surface.area_m2());
    println!("  Aspect ratio: {:.4}", surface.aspect_ratio());

    let mut exporter = XflrExporter::new(options);
    let report = surface.export(&discretizer, &mut exporter)?;
    print_report(&report);

    if cli.plot {
        let path = cli.output_dir.join(format!("{}.png", surface.name()));
        render_planform(&surface, &path, &PlotOptions::default())
            .with_context(|| format!("rendering {}", path.display()))?;
        println!("  Plot: {}", path.display());
    }
    Ok(())
}

fn print_report(report: &ExportReport) {
    println!(
        "  {} -> {} ({} sections)",
        report.name,
        report.xml_path.display(),
        report.section_count
    );
    if let Some(path) = &report.json_path {
        println!("  Summary: {}", path.display());
    }
    if let Some(path) = &report.csv_path {
        println!("  Sections: {}", path.display());
    }
}
