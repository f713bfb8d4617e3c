use std::f64::consts::PI;

use aerogeo::error::ErrorKind;
use aerogeo::ids::SequentialIds;
use aerogeo::planform::{PlanformError, ShapeKind};
use aerogeo::surface::{
    Discretizer, Planform, Surface, SurfaceError, SurfaceParams, SurfaceRole,
};

fn default_wing(ids: &SequentialIds) -> Surface {
    Surface::new(SurfaceParams::default(), ids).expect("default wing")
}

#[test]
fn default_wing_matches_elliptic_area() {
    let ids = SequentialIds::new();
    let wing = default_wing(&ids);

    assert_eq!(wing.name(), "wing0");
    assert_eq!(wing.role(), SurfaceRole::MainWing);
    assert_eq!(wing.foil(), "NACA 1212");
    assert_eq!(wing.shape(), ShapeKind::Elliptical);
    assert_eq!(wing.fsmf(), Some(0.25));

    let expected = PI / 4.0 * 1.0 * 8.0;
    assert!((wing.area_m2() - expected).abs() < 1e-6);
    assert!((wing.aspect_ratio() - 64.0 / expected).abs() < 1e-6);
}

#[test]
fn identities_are_sequential_per_generator() {
    let ids = SequentialIds::starting_at(7);
    let first = default_wing(&ids);
    let tail = Surface::new(
        SurfaceParams {
            role: SurfaceRole::HorizontalStabilizer,
            ..SurfaceParams::default()
        },
        &ids,
    )
    .unwrap();
    assert_eq!(first.name(), "wing7");
    assert_eq!(tail.name(), "horiz8");
}

#[test]
fn failed_construction_does_not_consume_an_identity() {
    let ids = SequentialIds::new();
    let err = Surface::new(
        SurfaceParams {
            span_m: -1.0,
            ..SurfaceParams::default()
        },
        &ids,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(ids.peek(), 0);

    let err = Surface::new(
        SurfaceParams {
            mass_kg: -2.0,
            ..SurfaceParams::default()
        },
        &ids,
    )
    .unwrap_err();
    assert_eq!(err, SurfaceError::NegativeMass(-2.0));
    assert_eq!(default_wing(&ids).id(), 0);
}

#[test]
fn setters_keep_derived_quantities_current() {
    let ids = SequentialIds::new();
    let mut wing = default_wing(&ids);

    wing.set_span(10.0).unwrap();
    assert!((wing.area_m2() - PI / 4.0 * 10.0).abs() < 1e-6);
    assert!((wing.aspect_ratio() - 100.0 / wing.area_m2()).abs() < 1e-12);

    wing.set_root_chord(2.0).unwrap();
    assert!((wing.area_m2() - PI / 4.0 * 20.0).abs() < 1e-6);

    wing.set_shape(ShapeKind::Rectangular).unwrap();
    assert!((wing.area_m2() - 20.0).abs() < 1e-9);
    assert!((wing.aspect_ratio() - 5.0).abs() < 1e-9);
    assert_eq!(wing.fsmf(), None);

    wing.set_shape_tag("ellipse").unwrap();
    assert_eq!(wing.fsmf(), Some(0.25));
    assert!((wing.area_m2() - PI / 4.0 * 20.0).abs() < 1e-6);
}

#[test]
fn rejected_setter_leaves_surface_unchanged() {
    let ids = SequentialIds::new();
    let mut wing = default_wing(&ids);
    let before = wing.clone();

    let err = wing.set_span(0.0).unwrap_err();
    assert_eq!(err, SurfaceError::Planform(PlanformError::NonPositiveSpan(0.0)));
    assert_eq!(wing, before);

    assert!(wing.set_root_chord(-0.5).is_err());
    assert!(wing.set_shape_tag("delta").is_err());
    assert!(wing.set_fsmf(1.5).is_err());
    assert!(wing.set_mass(f64::NAN).is_err());
    assert!(wing.set_angle_of_incidence(f64::INFINITY).is_err());
    assert_eq!(wing, before);
}

#[test]
fn fsmf_shifts_sections_but_not_area() {
    let ids = SequentialIds::new();
    let mut wing = default_wing(&ids);
    let area = wing.area_m2();

    wing.set_fsmf(0.5).unwrap();
    assert_eq!(wing.area_m2(), area);
    let sections = wing.sections(&Discretizer::new(4).unwrap());
    assert!((sections[0].x_offset_m + 0.5).abs() < 1e-12);

    wing.set_shape(ShapeKind::Rectangular).unwrap();
    assert_eq!(wing.set_fsmf(0.3), Err(SurfaceError::NotElliptical));
}

#[test]
fn fin_flags_only_apply_to_vertical_stabilizers() {
    let ids = SequentialIds::new();
    let mut wing = default_wing(&ids);
    wing.set_symmetric_fin(true);
    wing.set_double_fin(true);
    assert!(wing.is_symmetric_fin());
    assert!(!wing.effective_fins().symmetric);
    assert!(!wing.effective_fins().double);

    let mut fin = Surface::new(
        SurfaceParams {
            role: SurfaceRole::VerticalStabilizer,
            span_m: 1.5,
            ..SurfaceParams::default()
        },
        &ids,
    )
    .unwrap();
    fin.set_symmetric_fin(true);
    assert!(fin.effective_fins().symmetric);
    assert!(!fin.effective_fins().double);
}

#[test]
fn sections_follow_the_planform() {
    let ids = SequentialIds::new();
    let wing = Surface::new(
        SurfaceParams {
            span_m: 4.0,
            root_chord_m: 0.8,
            planform: Planform::elliptical(0.25).unwrap(),
            ..SurfaceParams::default()
        },
        &ids,
    )
    .unwrap();
    let sections = wing.sections(&Discretizer::default());

    assert_eq!(sections.len(), 50);
    assert_eq!(sections[0].y_position_m, 0.0);
    assert!((sections[0].chord_m - 0.8).abs() < 1e-12);
    assert!((sections[0].x_offset_m + 0.2).abs() < 1e-12);
    for pair in sections.windows(2) {
        assert!(pair[1].y_position_m > pair[0].y_position_m);
        assert!(pair[1].chord_m <= pair[0].chord_m);
        assert!(pair[1].y_position_m < 2.0);
    }
    for section in &sections {
        assert!((section.chord_m - wing.chord_at(section.y_position_m)).abs() < 1e-12);
        assert_eq!(section.left_foil, "NACA 1212");
        assert_eq!(section.right_foil, "NACA 1212");
    }
}
