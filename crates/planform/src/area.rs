//! Planform area and aspect ratio.
//!
//! The area integrates the chord over one semi-span and doubles it, assuming
//! reflective symmetry about the root for every family.

use aerogeo_quadrature::{Tolerance, adaptive_simpson};

use crate::{Planform, PlanformError};

/// Quantities that follow from span, root chord and shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    pub area_m2: f64,
    pub aspect_ratio: f64,
}

/// Reject spans and root chords that cannot describe a surface.
pub fn validate_dimensions(span: f64, root_chord: f64) -> Result<(), PlanformError> {
    if !span.is_finite() || span <= 0.0 {
        return Err(PlanformError::NonPositiveSpan(span));
    }
    if !root_chord.is_finite() || root_chord <= 0.0 {
        return Err(PlanformError::NonPositiveRootChord(root_chord));
    }
    Ok(())
}

/// Full-span planform area (m²) by adaptive quadrature over `[0, span/2]`.
///
/// The chord is integrated in normalized form, `c(η·span/2) / root_chord` over
/// `η ∈ [0, 1]`, and scaled back by `span · root_chord / 2` per half, so the
/// tolerance stays relative to the surface size.
pub fn planform_area(
    planform: &Planform,
    span: f64,
    root_chord: f64,
) -> Result<f64, PlanformError> {
    validate_dimensions(span, root_chord)?;
    let half_span = 0.5 * span;
    let unit = adaptive_simpson(
        |eta| planform.chord(eta * half_span, span, root_chord) / root_chord,
        0.0,
        1.0,
        &Tolerance::default(),
    )?;
    Ok(span * root_chord * unit.value)
}

/// `span² / area`; a non-positive area has no aspect ratio.
pub fn aspect_ratio(span: f64, area: f64) -> Result<f64, PlanformError> {
    if !area.is_finite() || area <= 0.0 {
        return Err(PlanformError::DegenerateArea(area));
    }
    Ok(span * span / area)
}

/// Area and aspect ratio together, as recomputed after every dimensional change.
pub fn derive(planform: &Planform, span: f64, root_chord: f64) -> Result<Derived, PlanformError> {
    let area_m2 = planform_area(planform, span, root_chord)?;
    let aspect_ratio = aspect_ratio(span, area_m2)?;
    log::debug!(
        "{} planform: span {span} m, root chord {root_chord} m -> area {area_m2:.6} m², AR {aspect_ratio:.4}",
        planform.kind()
    );
    Ok(Derived {
        area_m2,
        aspect_ratio,
    })
}
