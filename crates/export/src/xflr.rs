//! XFLR5 `explane` documents.
//!
//! The document is written without indentation, preceded by the fixed preamble
//! XFLR5 writes itself. The preamble pairs an XML declaration with a bare
//! `<!DOCTYPE explane>` and is reproduced byte-for-byte.

use std::io::Write;

use aerogeo_core::rounding::format_fixed;
use aerogeo_surface::{Section, Surface};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::ExportError;

pub const PREAMBLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?><!DOCTYPE explane>"#;
pub const FORMAT_VERSION: &str = "1.0";
/// Surface position text as XFLR5 writes it for the origin.
const ORIGIN_POSITION: &str = "\t\t  0,\t\t   0,\t\t   0";

fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

struct Document<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> Document<W> {
    fn open(&mut self, tag: &str) -> Result<(), ExportError> {
        self.writer.write_event(Event::Start(BytesStart::new(tag)))?;
        Ok(())
    }

    fn open_with(&mut self, tag: &str, attr: (&str, &str)) -> Result<(), ExportError> {
        let mut start = BytesStart::new(tag);
        start.push_attribute(attr);
        self.writer.write_event(Event::Start(start))?;
        Ok(())
    }

    fn close(&mut self, tag: &str) -> Result<(), ExportError> {
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    fn leaf(&mut self, tag: &str, text: &str) -> Result<(), ExportError> {
        self.open(tag)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.close(tag)
    }

    fn section(&mut self, section: &Section) -> Result<(), ExportError> {
        let paneling = section.paneling;
        self.open("Section")?;
        self.leaf("y_position", &format_fixed(section.y_position_m))?;
        self.leaf("Chord", &format_fixed(section.chord_m))?;
        self.leaf("xOffset", &format_fixed(section.x_offset_m))?;
        self.leaf("Dihedral", &format_fixed(section.dihedral_deg))?;
        self.leaf("Twist", &format_fixed(section.twist_deg))?;
        self.leaf("x_number_of_panels", &paneling.x_panels.to_string())?;
        self.leaf("x_panel_distribution", paneling.x_distribution.keyword())?;
        self.leaf("y_number_of_panels", &paneling.y_panels.to_string())?;
        self.leaf("y_panel_distribution", paneling.y_distribution.keyword())?;
        self.leaf("Left_Side_FoilName", &section.left_foil)?;
        self.leaf("Right_Side_FoilName", &section.right_foil)?;
        self.close("Section")
    }
}

/// Write the preamble and the explane tree for `surface` to `out`.
pub fn write_document<W: Write>(
    mut out: W,
    surface: &Surface,
    sections: &[Section],
) -> Result<W, ExportError> {
    out.write_all(PREAMBLE.as_bytes())?;
    let mut doc = Document {
        writer: Writer::new(out),
    };
    let role = surface.role();
    let color = role.color();
    let fins = surface.effective_fins();

    doc.open_with("explane", ("version", FORMAT_VERSION))?;

    doc.open("Units")?;
    doc.leaf("length_unit_to_meter", "1")?;
    doc.leaf("mass_unit_to_kg", "1")?;
    doc.close("Units")?;

    doc.open("wing")?;
    doc.leaf("Name", &surface.name())?;
    doc.leaf("Type", role.xflr_type())?;
    doc.open("Color")?;
    doc.leaf("red", &color.red.to_string())?;
    doc.leaf("green", &color.green.to_string())?;
    doc.leaf("blue", &color.blue.to_string())?;
    doc.leaf("alpha", &color.alpha.to_string())?;
    doc.close("Color")?;
    doc.leaf("Position", ORIGIN_POSITION)?;
    doc.leaf("Tilt_angle", &format_fixed(0.0))?;
    doc.leaf("Symetric", bool_text(true))?;
    doc.leaf("isFin", bool_text(role.is_fin()))?;
    doc.leaf("isDoubleFin", bool_text(fins.double))?;
    doc.leaf("isSymFin", bool_text(fins.symmetric))?;
    doc.open("Inertia")?;
    doc.leaf("Volume_Mass", &format_fixed(surface.mass_kg()))?;
    doc.close("Inertia")?;
    doc.open("Sections")?;
    for section in sections {
        doc.section(section)?;
    }
    doc.close("Sections")?;
    doc.close("wing")?;

    doc.close("explane")?;
    Ok(doc.writer.into_inner())
}

/// Render the complete document into memory.
pub fn render_document(surface: &Surface, sections: &[Section]) -> Result<Vec<u8>, ExportError> {
    write_document(Vec::new(), surface, sections)
}

/// Fields recovered from an explane document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSection {
    pub y_position: f64,
    pub chord: f64,
    pub x_offset: f64,
    pub foil: String,
}

/// Summary of an explane document read back from disk or memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSurface {
    pub version: Option<String>,
    pub name: String,
    pub wing_type: String,
    pub color: [u8; 4],
    pub is_fin: bool,
    pub is_double_fin: bool,
    pub is_sym_fin: bool,
    pub mass_kg: f64,
    pub sections: Vec<ParsedSection>,
}

/// Read the identifying fields and sections back out of an explane document.
pub fn parse_document(xml: &str) -> Result<ParsedSurface, ExportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();
    let mut parsed = ParsedSurface::default();
    let mut current_tag: Option<String> = None;
    let mut current_section: Option<ParsedSection> = None;

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if tag == "explane" {
                    for attr in e.attributes().with_checks(false) {
                        let attr = attr.map_err(|err| ExportError::Malformed(err.to_string()))?;
                        if attr.key.as_ref() == b"version" {
                            let value = attr
                                .unescape_value()
                                .map_err(|err| ExportError::Malformed(err.to_string()))?;
                            parsed.version = Some(value.into_owned());
                        }
                    }
                } else if tag == "Section" {
                    current_section = Some(ParsedSection::default());
                }
                current_tag = Some(tag);
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .xml_content()
                    .map_err(|err| ExportError::Malformed(err.to_string()))?
                    .into_owned();
                match (current_tag.as_deref(), current_section.as_mut()) {
                    (Some("y_position"), Some(section)) => section.y_position = number(&text)?,
                    (Some("Chord"), Some(section)) => section.chord = number(&text)?,
                    (Some("xOffset"), Some(section)) => section.x_offset = number(&text)?,
                    (Some("Left_Side_FoilName"), Some(section)) => section.foil = text,
                    (Some("Name"), None) => parsed.name = text,
                    (Some("Type"), None) => parsed.wing_type = text,
                    (Some("red"), None) => parsed.color[0] = channel(&text)?,
                    (Some("green"), None) => parsed.color[1] = channel(&text)?,
                    (Some("blue"), None) => parsed.color[2] = channel(&text)?,
                    (Some("alpha"), None) => parsed.color[3] = channel(&text)?,
                    (Some("isFin"), None) => parsed.is_fin = flag(&text),
                    (Some("isDoubleFin"), None) => parsed.is_double_fin = flag(&text),
                    (Some("isSymFin"), None) => parsed.is_sym_fin = flag(&text),
                    (Some("Volume_Mass"), None) => parsed.mass_kg = number(&text)?,
                    _ => {}
                }
            }
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == b"Section" {
                    if let Some(section) = current_section.take() {
                        parsed.sections.push(section);
                    }
                }
                current_tag = None;
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(ExportError::Malformed(err.to_string())),
            _ => {}
        }
        buffer.clear();
    }

    if parsed.name.is_empty() {
        return Err(ExportError::Malformed("document has no <Name>".to_string()));
    }
    Ok(parsed)
}

fn number(text: &str) -> Result<f64, ExportError> {
    text.trim()
        .parse()
        .map_err(|_| ExportError::Malformed(format!("expected a number, found '{text}'")))
}

fn channel(text: &str) -> Result<u8, ExportError> {
    text.trim()
        .parse()
        .map_err(|_| ExportError::Malformed(format!("expected a colour channel, found '{text}'")))
}

fn flag(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("true")
}
