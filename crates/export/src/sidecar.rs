//! JSON summary and CSV section table written next to the explane document.

use std::io::Write;

use aerogeo_surface::{Section, Surface};
use serde::Serialize;

use crate::ExportError;

const CSV_HEADER: [&str; 11] = [
    "y_position_m",
    "chord_m",
    "x_offset_m",
    "dihedral_deg",
    "twist_deg",
    "x_panels",
    "x_distribution",
    "y_panels",
    "y_distribution",
    "left_foil",
    "right_foil",
];

/// Section row shared by the JSON summary and the CSV table.
#[derive(Debug, Clone, Serialize)]
pub struct SectionRecord<'a> {
    pub y_position_m: f64,
    pub chord_m: f64,
    pub x_offset_m: f64,
    pub dihedral_deg: f64,
    pub twist_deg: f64,
    pub x_panels: u32,
    pub x_distribution: &'a str,
    pub y_panels: u32,
    pub y_distribution: &'a str,
    pub left_foil: &'a str,
    pub right_foil: &'a str,
}

impl<'a> From<&'a Section> for SectionRecord<'a> {
    fn from(section: &'a Section) -> Self {
        Self {
            y_position_m: section.y_position_m,
            chord_m: section.chord_m,
            x_offset_m: section.x_offset_m,
            dihedral_deg: section.dihedral_deg,
            twist_deg: section.twist_deg,
            x_panels: section.paneling.x_panels,
            x_distribution: section.paneling.x_distribution.keyword(),
            y_panels: section.paneling.y_panels,
            y_distribution: section.paneling.y_distribution.keyword(),
            left_foil: &section.left_foil,
            right_foil: &section.right_foil,
        }
    }
}

#[derive(Serialize)]
struct Summary<'a> {
    name: String,
    role: &'a str,
    foil: &'a str,
    shape: &'a str,
    fsmf: Option<f64>,
    span_m: f64,
    root_chord_m: f64,
    angle_of_incidence_deg: f64,
    mass_kg: f64,
    area_m2: f64,
    aspect_ratio: f64,
    sections: Vec<SectionRecord<'a>>,
}

/// Pretty-printed JSON summary of a surface and its sections.
pub fn write_summary<W: Write>(
    writer: W,
    surface: &Surface,
    sections: &[Section],
) -> Result<(), ExportError> {
    let summary = Summary {
        name: surface.name(),
        role: surface.role().label(),
        foil: surface.foil(),
        shape: surface.shape().tag(),
        fsmf: surface.fsmf(),
        span_m: surface.span_m(),
        root_chord_m: surface.root_chord_m(),
        angle_of_incidence_deg: surface.angle_of_incidence_deg(),
        mass_kg: surface.mass_kg(),
        area_m2: surface.area_m2(),
        aspect_ratio: surface.aspect_ratio(),
        sections: sections.iter().map(SectionRecord::from).collect(),
    };
    serde_json::to_writer_pretty(writer, &summary)?;
    Ok(())
}

/// One CSV row per section under a fixed header.
pub fn write_section_table<W: Write>(writer: W, sections: &[Section]) -> Result<(), ExportError> {
    let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for section in sections {
        csv.serialize(SectionRecord::from(section))?;
    }
    csv.flush()?;
    Ok(())
}
