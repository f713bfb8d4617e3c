//! Diagnostic planform plots.
//!
//! The leading and trailing edges are drawn across the full span on square
//! axes so the outline is not distorted. Plots have no effect on exported data.

use std::fs;
use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::surface::Surface;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to prepare plot output: {0}")]
    Io(#[from] std::io::Error),
    #[error("plot rendering failed: {0}")]
    Render(String),
    #[error("an outline needs at least two samples")]
    TooFewSamples,
}

/// Leading- and trailing-edge contours sampled over `[-span/2, span/2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub y: Vec<f64>,
    pub leading_edge: Vec<f64>,
    pub trailing_edge: Vec<f64>,
}

impl Outline {
    /// Half-width of the square plotting window: the larger of half-span and root chord.
    pub fn axis_limit(surface: &Surface) -> f64 {
        (0.5 * surface.span_m()).max(surface.root_chord_m())
    }
}

/// Sample the planform outline at `samples` evenly spaced stations, tip to tip.
pub fn outline(surface: &Surface, samples: usize) -> Result<Outline, PlotError> {
    if samples < 2 {
        return Err(PlotError::TooFewSamples);
    }
    let span = surface.span_m();
    let root_chord = surface.root_chord_m();
    let planform = surface.planform();
    let step = span / (samples - 1) as f64;

    let y: Vec<f64> = (0..samples).map(|i| -0.5 * span + i as f64 * step).collect();
    let leading_edge = y
        .iter()
        .map(|&y| planform.leading_edge(y, span, root_chord))
        .collect();
    let trailing_edge = y
        .iter()
        .map(|&y| planform.trailing_edge(y, span, root_chord))
        .collect();
    Ok(Outline {
        y,
        leading_edge,
        trailing_edge,
    })
}

/// Pixel size of a rendered plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    pub samples: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            samples: 200,
        }
    }
}

fn render_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

/// Render the outline of `surface` to a PNG at `path`, titled `<role> <id>`.
pub fn render_planform(
    surface: &Surface,
    path: &Path,
    options: &PlotOptions,
) -> Result<(), PlotError> {
    let outline = outline(surface, options.samples)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);
    let lim = Outline::axis_limit(surface);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(format!("{} {}", surface.role(), surface.id()), caption_font)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-lim..lim, -lim..lim)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("y, span position (m)")
        .y_desc("x, longitudinal position (m)")
        .label_style(label_font.clone())
        .draw()
        .map_err(render_err)?;

    let leading: Vec<(f64, f64)> = outline
        .y
        .iter()
        .copied()
        .zip(outline.leading_edge.iter().copied())
        .collect();
    let trailing: Vec<(f64, f64)> = outline
        .y
        .iter()
        .copied()
        .zip(outline.trailing_edge.iter().copied())
        .collect();
    chart
        .draw_series(std::iter::once(PathElement::new(
            leading,
            ShapeStyle::from(&BLUE).stroke_width(2),
        )))
        .map_err(render_err)?
        .label("LE")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(std::iter::once(PathElement::new(
            trailing,
            ShapeStyle::from(&RED).stroke_width(2),
        )))
        .map_err(render_err)?
        .label("TE")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .label_font(label_font)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    log::info!("rendered planform plot {}", path.display());
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}
