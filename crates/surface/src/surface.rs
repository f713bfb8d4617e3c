//! The lifting-surface entity.

use aerogeo_core::ids::{IdGenerator, global_ids};
use aerogeo_planform::{self as planform, Derived, Planform, ShapeKind};

use crate::discretize::Discretizer;
use crate::role::{FinMirroring, SurfaceRole};
use crate::section::Section;
use crate::SurfaceError;

/// Construction parameters for a [`Surface`].
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceParams {
    pub role: SurfaceRole,
    /// Airfoil name already loaded in the analysis tool; not validated here.
    pub foil: String,
    pub angle_of_incidence_deg: f64,
    /// Tip-to-tip span (m).
    pub span_m: f64,
    pub root_chord_m: f64,
    pub mass_kg: f64,
    pub planform: Planform,
    /// Only meaningful for [`SurfaceRole::VerticalStabilizer`].
    pub fins: FinMirroring,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            role: SurfaceRole::MainWing,
            foil: "NACA 1212".to_string(),
            angle_of_incidence_deg: 0.0,
            span_m: 8.0,
            root_chord_m: 1.0,
            mass_kg: 50.0,
            planform: Planform::default(),
            fins: FinMirroring::default(),
        }
    }
}

/// The inputs area and aspect ratio depend on.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Dimensions {
    span_m: f64,
    root_chord_m: f64,
    planform: Planform,
}

impl Dimensions {
    fn derive(&self) -> Result<Derived, SurfaceError> {
        Ok(planform::derive(
            &self.planform,
            self.span_m,
            self.root_chord_m,
        )?)
    }
}

/// Receives a surface and its sections at export time.
pub trait GeometrySink {
    type Output;
    type Error;

    fn write(&mut self, surface: &Surface, sections: &[Section]) -> Result<Self::Output, Self::Error>;
}

/// A wing, horizontal stabilizer or vertical fin.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    id: u64,
    role: SurfaceRole,
    foil: String,
    angle_of_incidence_deg: f64,
    mass_kg: f64,
    fins: FinMirroring,
    dims: Dimensions,
    derived: Derived,
}

impl Surface {
    /// Validate `params`, derive area and aspect ratio, then draw an identity from `ids`.
    ///
    /// No identity is consumed when validation fails.
    pub fn new(params: SurfaceParams, ids: &dyn IdGenerator) -> Result<Self, SurfaceError> {
        check_mass(params.mass_kg)?;
        check_angle(params.angle_of_incidence_deg)?;
        let dims = Dimensions {
            span_m: params.span_m,
            root_chord_m: params.root_chord_m,
            planform: params.planform,
        };
        let derived = dims.derive()?;
        let id = ids.next_id();
        log::debug!(
            "created {}{id}: area {:.4} m², AR {:.4}",
            params.role.name_prefix(),
            derived.area_m2,
            derived.aspect_ratio
        );

        Ok(Self {
            id,
            role: params.role,
            foil: params.foil,
            angle_of_incidence_deg: params.angle_of_incidence_deg,
            mass_kg: params.mass_kg,
            fins: params.fins,
            dims,
            derived,
        })
    }

    /// Construct with an identity from the process-wide generator.
    pub fn with_global_id(params: SurfaceParams) -> Result<Self, SurfaceError> {
        Self::new(params, global_ids())
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// `wing<id>`, `horiz<id>` or `vert<id>`.
    pub fn name(&self) -> String {
        format!("{}{}", self.role.name_prefix(), self.id)
    }

    pub fn role(&self) -> SurfaceRole {
        self.role
    }

    pub fn foil(&self) -> &str {
        &self.foil
    }

    pub fn angle_of_incidence_deg(&self) -> f64 {
        self.angle_of_incidence_deg
    }

    pub fn span_m(&self) -> f64 {
        self.dims.span_m
    }

    pub fn root_chord_m(&self) -> f64 {
        self.dims.root_chord_m
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn planform(&self) -> &Planform {
        &self.dims.planform
    }

    pub fn shape(&self) -> ShapeKind {
        self.dims.planform.kind()
    }

    pub fn fsmf(&self) -> Option<f64> {
        self.dims.planform.fsmf()
    }

    pub fn area_m2(&self) -> f64 {
        self.derived.area_m2
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.derived.aspect_ratio
    }

    /// Fin mirroring as stored, regardless of role.
    pub fn fins(&self) -> FinMirroring {
        self.fins
    }

    /// Fin mirroring as it applies: both flags read false unless this is a vertical fin.
    pub fn effective_fins(&self) -> FinMirroring {
        if self.role.is_fin() {
            self.fins
        } else {
            FinMirroring::default()
        }
    }

    pub fn is_symmetric_fin(&self) -> bool {
        self.fins.symmetric
    }

    pub fn is_double_fin(&self) -> bool {
        self.fins.double
    }

    /// Chord at station `y` (m).
    pub fn chord_at(&self, y: f64) -> f64 {
        self.dims
            .planform
            .chord(y, self.dims.span_m, self.dims.root_chord_m)
    }

    pub fn set_span(&mut self, span_m: f64) -> Result<(), SurfaceError> {
        self.update_dimensions(|dims| dims.span_m = span_m)
    }

    pub fn set_root_chord(&mut self, root_chord_m: f64) -> Result<(), SurfaceError> {
        self.update_dimensions(|dims| dims.root_chord_m = root_chord_m)
    }

    pub fn set_planform(&mut self, planform: Planform) -> Result<(), SurfaceError> {
        self.update_dimensions(|dims| dims.planform = planform)
    }

    /// Switch shape family, keeping the current fsmf (or the default) for ellipses.
    pub fn set_shape(&mut self, kind: ShapeKind) -> Result<(), SurfaceError> {
        let planform = Planform::from_kind(kind, self.fsmf())?;
        self.set_planform(planform)
    }

    /// Switch shape family from a textual tag such as `"ellipse"` or `"rectangle"`.
    pub fn set_shape_tag(&mut self, tag: &str) -> Result<(), SurfaceError> {
        let kind: ShapeKind = tag.parse()?;
        self.set_shape(kind)
    }

    /// Rebind the elliptical fraction. Area does not depend on it, so nothing is recomputed.
    pub fn set_fsmf(&mut self, fsmf: f64) -> Result<(), SurfaceError> {
        match self.dims.planform {
            Planform::Elliptical(_) => {
                self.dims.planform = Planform::elliptical(fsmf)?;
                Ok(())
            }
            Planform::Rectangular => Err(SurfaceError::NotElliptical),
        }
    }

    pub fn set_mass(&mut self, mass_kg: f64) -> Result<(), SurfaceError> {
        check_mass(mass_kg)?;
        self.mass_kg = mass_kg;
        Ok(())
    }

    pub fn set_foil(&mut self, foil: impl Into<String>) {
        self.foil = foil.into();
    }

    pub fn set_angle_of_incidence(&mut self, angle_deg: f64) -> Result<(), SurfaceError> {
        check_angle(angle_deg)?;
        self.angle_of_incidence_deg = angle_deg;
        Ok(())
    }

    pub fn set_symmetric_fin(&mut self, symmetric: bool) {
        self.fins.symmetric = symmetric;
    }

    pub fn set_double_fin(&mut self, double: bool) {
        self.fins.double = double;
    }

    /// Sections for this surface, root first.
    pub fn sections(&self, discretizer: &Discretizer) -> Vec<Section> {
        discretizer.discretize(
            &self.dims.planform,
            self.dims.span_m,
            self.dims.root_chord_m,
            &self.foil,
        )
    }

    /// Discretize and hand the result to `sink`.
    pub fn export<S: GeometrySink>(
        &self,
        discretizer: &Discretizer,
        sink: &mut S,
    ) -> Result<S::Output, S::Error> {
        let sections = self.sections(discretizer);
        sink.write(self, &sections)
    }

    /// Apply a dimensional change and recompute area and aspect ratio as one step.
    ///
    /// The change is staged on a copy and committed only when derivation succeeds.
    fn update_dimensions<F>(&mut self, change: F) -> Result<(), SurfaceError>
    where
        F: FnOnce(&mut Dimensions),
    {
        let mut staged = self.dims;
        change(&mut staged);
        let derived = staged.derive()?;
        self.dims = staged;
        self.derived = derived;
        Ok(())
    }
}

fn check_mass(mass_kg: f64) -> Result<(), SurfaceError> {
    if !mass_kg.is_finite() || mass_kg < 0.0 {
        return Err(SurfaceError::NegativeMass(mass_kg));
    }
    Ok(())
}

fn check_angle(angle_deg: f64) -> Result<(), SurfaceError> {
    if !angle_deg.is_finite() {
        return Err(SurfaceError::NonFiniteAngle(angle_deg));
    }
    Ok(())
}
