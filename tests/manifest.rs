use std::fs;

use aerogeo::config::parse_yaml;
use aerogeo::error::ErrorKind;
use aerogeo::export::{ExportOptions, parse_document};
use aerogeo::ids::SequentialIds;
use aerogeo::manifest::{ManifestError, build_surfaces, export_manifest, params_from_config};
use aerogeo::planform::ShapeKind;
use aerogeo::surface::{Discretizer, PanelDistribution, Spacing, SurfaceRole};

const AIRCRAFT: &str = r#"
surfaces:
  - role: mainwing
    foil: "SD7037"
    span_m: 3.2
    root_chord_m: 0.35
    mass_kg: 2.1
    planform: { shape: ellipse, fsmf: 0.3 }
  - role: horizontal_stabilizer
    span_m: 0.9
    root_chord_m: 0.18
    planform: { shape: rectangle }
    resolution: 10
    spacing: cosine
  - role: vertical_stabilizer
    span_m: 0.4
    root_chord_m: 0.2
    symmetric_fin: true
    paneling:
      x_panels: 8
      x_distribution: uniform
      y_panels: 4
      y_distribution: inverse_sine
"#;

#[test]
fn records_become_surfaces_in_order() {
    let configs = parse_yaml(AIRCRAFT).unwrap();
    let ids = SequentialIds::new();
    let surfaces = build_surfaces(&configs, &Discretizer::default(), &ids).unwrap();
    assert_eq!(surfaces.len(), 3);

    let (wing, wing_disc) = &surfaces[0];
    assert_eq!(wing.name(), "wing0");
    assert_eq!(wing.foil(), "SD7037");
    assert_eq!(wing.fsmf(), Some(0.3));
    assert_eq!(wing_disc.resolution(), 50);

    let (tail, tail_disc) = &surfaces[1];
    assert_eq!(tail.name(), "horiz1");
    assert_eq!(tail.shape(), ShapeKind::Rectangular);
    assert_eq!(tail_disc.resolution(), 10);
    assert_eq!(tail_disc.spacing(), Spacing::Cosine);

    let (fin, fin_disc) = &surfaces[2];
    assert_eq!(fin.role(), SurfaceRole::VerticalStabilizer);
    assert!(fin.effective_fins().symmetric);
    assert_eq!(fin_disc.paneling().x_panels, 8);
    assert_eq!(fin_disc.paneling().x_distribution, PanelDistribution::Uniform);
    assert_eq!(fin_disc.paneling().y_distribution, PanelDistribution::InverseSine);
}

#[test]
fn manifest_export_writes_one_document_per_surface() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aircraft.yaml");
    fs::write(&path, AIRCRAFT).unwrap();
    let out = dir.path().join("geometry");

    let reports = export_manifest(
        &path,
        &ExportOptions::in_dir(&out),
        &Discretizer::default(),
        &SequentialIds::starting_at(10),
    )
    .unwrap();

    let names: Vec<_> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["wing10", "horiz11", "vert12"]);
    assert_eq!(reports[1].section_count, 10);

    let fin = parse_document(&fs::read_to_string(out.join("vert12.xml")).unwrap()).unwrap();
    assert!(fin.is_fin && fin.is_sym_fin && !fin.is_double_fin);
    assert_eq!(fin.sections.len(), 50);
    let xml = fs::read_to_string(out.join("vert12.xml")).unwrap();
    assert!(xml.contains("<x_panel_distribution>UNIFORM</x_panel_distribution>"));
    assert!(xml.contains("<y_panel_distribution>INVERSE SINE</y_panel_distribution>"));
}

#[test]
fn unknown_shape_is_a_configuration_error() {
    let configs = parse_yaml("- role: mainwing\n  planform: { shape: delta }\n").unwrap();
    let err = params_from_config(&configs[0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("delta"));

    let ids = SequentialIds::new();
    let err = build_surfaces(&configs, &Discretizer::default(), &ids).unwrap_err();
    assert!(matches!(err, ManifestError::Surface { index: 0, .. }));
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(ids.peek(), 0);
}

#[test]
fn invalid_record_aborts_before_any_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "- role: mainwing\n- role: canard\n").unwrap();
    let out = dir.path().join("geometry");

    let err = export_manifest(
        &path,
        &ExportOptions::in_dir(&out),
        &Discretizer::default(),
        &SequentialIds::new(),
    )
    .unwrap_err();
    assert!(matches!(err, ManifestError::Surface { index: 1, .. }));
    assert!(!out.exists());
}

#[test]
fn missing_manifest_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = export_manifest(
        dir.path().join("absent.yaml"),
        &ExportOptions::in_dir(dir.path()),
        &Discretizer::default(),
        &SequentialIds::new(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}
