//! Adaptive Simpson quadrature.
//!
//! Each panel is compared against its two halves; panels whose Richardson error
//! estimate exceeds the local tolerance are bisected, with the tolerance split
//! between the halves. The default tolerances mirror the customary
//! `1.49e-8` absolute/relative targets of general-purpose adaptive integrators.

use thiserror::Error;

/// Convergence targets for [`adaptive_simpson`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub absolute: f64,
    pub relative: f64,
    /// Maximum bisection depth for any panel.
    pub max_depth: u32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: 1.49e-8,
            relative: 1.49e-8,
            max_depth: 50,
        }
    }
}

/// Integral estimate with diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integral {
    pub value: f64,
    pub error_estimate: f64,
    pub evaluations: usize,
    /// False when at least one panel hit `max_depth` before meeting its tolerance.
    pub converged: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum QuadratureError {
    #[error("integration bounds must be finite (got [{lower}, {upper}])")]
    NonFiniteBounds { lower: f64, upper: f64 },
    #[error("integrand is not finite at x = {x}")]
    NonFiniteIntegrand { x: f64 },
}

struct Panel {
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
}

struct State<F> {
    f: F,
    evaluations: usize,
    error_estimate: f64,
    converged: bool,
}

impl<F: Fn(f64) -> f64> State<F> {
    fn eval(&mut self, x: f64) -> Result<f64, QuadratureError> {
        self.evaluations += 1;
        let value = (self.f)(x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(QuadratureError::NonFiniteIntegrand { x })
        }
    }

    fn refine(&mut self, panel: Panel, eps: f64, depth: u32) -> Result<f64, QuadratureError> {
        let Panel {
            a,
            b,
            fa,
            fm,
            fb,
            whole,
        } = panel;
        let m = 0.5 * (a + b);
        let flm = self.eval(0.5 * (a + m))?;
        let frm = self.eval(0.5 * (m + b))?;
        let left = simpson(a, m, fa, flm, fm);
        let right = simpson(m, b, fm, frm, fb);
        let delta = left + right - whole;

        let width_exhausted = (b - a).abs() <= f64::EPSILON * a.abs().max(b.abs()).max(1.0);
        if delta.abs() <= 15.0 * eps || width_exhausted {
            self.error_estimate += delta.abs() / 15.0;
            return Ok(left + right + delta / 15.0);
        }
        if depth == 0 {
            self.converged = false;
            self.error_estimate += delta.abs() / 15.0;
            return Ok(left + right + delta / 15.0);
        }

        let lhs = self.refine(
            Panel {
                a,
                b: m,
                fa,
                fm: flm,
                fb: fm,
                whole: left,
            },
            0.5 * eps,
            depth - 1,
        )?;
        let rhs = self.refine(
            Panel {
                a: m,
                b,
                fa: fm,
                fm: frm,
                fb,
                whole: right,
            },
            0.5 * eps,
            depth - 1,
        )?;
        Ok(lhs + rhs)
    }
}

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

/// Integrate `f` over `[lower, upper]` to the requested tolerance.
///
/// Reversed bounds yield the negated integral; equal bounds yield zero.
pub fn adaptive_simpson<F>(
    f: F,
    lower: f64,
    upper: f64,
    tolerance: &Tolerance,
) -> Result<Integral, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if !lower.is_finite() || !upper.is_finite() {
        return Err(QuadratureError::NonFiniteBounds { lower, upper });
    }
    if lower == upper {
        return Ok(Integral {
            value: 0.0,
            error_estimate: 0.0,
            evaluations: 0,
            converged: true,
        });
    }
    if upper < lower {
        let flipped = adaptive_simpson(f, upper, lower, tolerance)?;
        return Ok(Integral {
            value: -flipped.value,
            ..flipped
        });
    }

    let mut state = State {
        f,
        evaluations: 0,
        error_estimate: 0.0,
        converged: true,
    };
    let fa = state.eval(lower)?;
    let fm = state.eval(0.5 * (lower + upper))?;
    let fb = state.eval(upper)?;
    let whole = simpson(lower, upper, fa, fm, fb);
    let eps = tolerance.absolute.max(tolerance.relative * whole.abs());

    let value = state.refine(
        Panel {
            a: lower,
            b: upper,
            fa,
            fm,
            fb,
            whole,
        },
        eps,
        tolerance.max_depth,
    )?;

    if !state.converged {
        log::warn!(
            "adaptive quadrature on [{lower}, {upper}] hit the depth limit; error estimate {:.3e}",
            state.error_estimate
        );
    }

    Ok(Integral {
        value,
        error_estimate: state.error_estimate,
        evaluations: state.evaluations,
        converged: state.converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn cubic_is_exact() {
        let result = adaptive_simpson(|x| x * x * x - 2.0 * x, 0.0, 2.0, &Tolerance::default())
            .expect("finite integrand");
        assert!((result.value - 0.0).abs() < 1e-12, "value = {}", result.value);
        assert!(result.converged);
    }

    #[test]
    fn quarter_circle_with_endpoint_singularity() {
        // d/dx sqrt(1 - x^2) is unbounded at x = 1
        let result = adaptive_simpson(
            |x: f64| (1.0 - x * x).max(0.0).sqrt(),
            0.0,
            1.0,
            &Tolerance::default(),
        )
        .expect("finite integrand");
        let exact = PI / 4.0;
        assert!(
            ((result.value - exact) / exact).abs() < 1e-7,
            "value = {}",
            result.value
        );
        assert!(result.converged);
    }

    #[test]
    fn reversed_bounds_negate() {
        let tol = Tolerance::default();
        let forward = adaptive_simpson(f64::exp, 0.0, 1.0, &tol).unwrap();
        let backward = adaptive_simpson(f64::exp, 1.0, 0.0, &tol).unwrap();
        assert!((forward.value + backward.value).abs() < 1e-12);
        assert!((forward.value - (1.0_f64.exp() - 1.0)).abs() < 1e-8);
    }

    #[test]
    fn rejects_nan_integrand() {
        let err = adaptive_simpson(|x: f64| (x - 0.5).sqrt(), 0.0, 1.0, &Tolerance::default())
            .unwrap_err();
        assert_eq!(err, QuadratureError::NonFiniteIntegrand { x: 0.0 });
    }

    #[test]
    fn rejects_infinite_bounds() {
        let err = adaptive_simpson(|x| x, 0.0, f64::INFINITY, &Tolerance::default()).unwrap_err();
        assert!(matches!(err, QuadratureError::NonFiniteBounds { .. }));
    }
}
