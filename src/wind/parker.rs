//! Isothermal Parker wind velocity, after Cranmer (2004).
//!
//! The momentum equation of a steady isothermal wind integrates to
//!
//! ```text
//! (v/vs)² · exp(-(v/vs)²) = -(rs/r)⁴ · exp(f(r)),   f(r) = -C - 4·rs/r
//! ```
//!
//! which is solved in closed form with the Lambert-W function. `C = -3` is the
//! critical (transonic) solution. Inside the sonic radius the principal branch
//! gives the subsonic root, outside it the lower branch gives the supersonic
//! one.
//!
//! The plain `solve*` functions follow the usual numerical convention of
//! keeping only the real part of `W`, even when the argument falls outside the
//! real domain of the branch. [`evaluate`] reports what was discarded, and the
//! `try_*` functions turn invalid input and non-real solutions into errors.

use crate::constants::{CRITICAL_CONSTANT, DOMAIN_TOLERANCE};
use crate::errors::{require_positive, WindError};
use crate::special::lambert_w::{lambert_w, Branch};

/// Which member of the isothermal wind family to evaluate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution {
    Critical,
    /// Non-critical solution with the given offset constant.
    Offset(f64),
}

impl Solution {
    pub fn constant(&self) -> f64 {
        match self {
            Solution::Critical => CRITICAL_CONSTANT,
            Solution::Offset(constant) => *constant,
        }
    }

    pub fn exponent(&self, r: f64, rs: f64) -> f64 {
        match self {
            Solution::Critical => 3.0 - 4.0 * rs / r,
            Solution::Offset(constant) => -constant - 4.0 * rs / r,
        }
    }
}

/// Velocity at one radius, with the imaginary part of `W` that the real-part
/// truncation dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindPoint {
    pub radius: f64,
    pub velocity: f64,
    pub imaginary: f64,
}

impl WindPoint {
    pub fn is_physical(&self, tolerance: f64) -> bool {
        self.velocity.is_finite() && self.imaginary.abs() <= tolerance
    }
}

pub fn branch_for(r: f64, rs: f64) -> Branch {
    if r <= rs {
        Branch::Principal
    } else {
        Branch::Lower
    }
}

pub fn evaluate(r: f64, vs: f64, rs: f64, solution: Solution) -> WindPoint {
    let f_r = solution.exponent(r, rs);
    let brackets = -(rs / r).powi(4) * f_r.exp();
    let w = lambert_w(brackets, branch_for(r, rs));

    WindPoint {
        radius: r,
        velocity: (-w.re).sqrt() * vs,
        imaginary: w.im,
    }
}

pub fn evaluate_all(r: &[f64], vs: f64, rs: f64, solution: Solution) -> Vec<WindPoint> {
    r.iter()
        .map(|&radius| evaluate(radius, vs, rs, solution))
        .collect()
}

pub fn solve(r: &[f64], vs: f64, rs: f64) -> Vec<f64> {
    velocities(r, vs, rs, Solution::Critical)
}

pub fn solve_with_offset(r: &[f64], vs: f64, rs: f64, constant: f64) -> Vec<f64> {
    velocities(r, vs, rs, Solution::Offset(constant))
}

pub fn solve_single(r: f64, vs: f64, rs: f64) -> f64 {
    evaluate(r, vs, rs, Solution::Critical).velocity
}

pub fn solve_single_with_offset(r: f64, vs: f64, rs: f64, constant: f64) -> f64 {
    evaluate(r, vs, rs, Solution::Offset(constant)).velocity
}

fn velocities(r: &[f64], vs: f64, rs: f64, solution: Solution) -> Vec<f64> {
    r.iter()
        .map(|&radius| evaluate(radius, vs, rs, solution).velocity)
        .collect()
}

/// Strict scalar solve: rejects invalid parameters and non-real solutions.
pub fn try_solve_single(r: f64, vs: f64, rs: f64, solution: Solution) -> Result<f64, WindError> {
    validate_parameters(vs, rs, solution)?;
    strict_point(r, vs, rs, solution)
}

/// Strict vectorized solve. Fails on the first offending radius.
pub fn try_solve(r: &[f64], vs: f64, rs: f64, solution: Solution) -> Result<Vec<f64>, WindError> {
    let mut out = vec![0.0; r.len()];
    solve_into(r, vs, rs, solution, &mut out)?;
    Ok(out)
}

/// Strict vectorized solve into a caller-provided buffer of the same length.
pub fn solve_into(
    r: &[f64],
    vs: f64,
    rs: f64,
    solution: Solution,
    out: &mut [f64],
) -> Result<(), WindError> {
    if out.len() != r.len() {
        return Err(WindError::ShapeMismatch(format!(
            "{} radii but output holds {} values",
            r.len(),
            out.len()
        )));
    }
    validate_parameters(vs, rs, solution)?;

    for (slot, &radius) in out.iter_mut().zip(r) {
        *slot = strict_point(radius, vs, rs, solution)?;
    }
    Ok(())
}

pub(crate) fn validate_parameters(vs: f64, rs: f64, solution: Solution) -> Result<(), WindError> {
    require_positive("sound speed", vs)?;
    require_positive("sonic radius", rs)?;
    if !solution.constant().is_finite() {
        return Err(WindError::InvalidInput(format!(
            "offset constant must be finite, got {}",
            solution.constant()
        )));
    }
    Ok(())
}

fn strict_point(r: f64, vs: f64, rs: f64, solution: Solution) -> Result<f64, WindError> {
    require_positive("radius", r)?;
    let point = evaluate(r, vs, rs, solution);
    if !point.is_physical(DOMAIN_TOLERANCE) {
        return Err(WindError::DomainError(format!(
            "no real {:?} branch solution at r = {:e} m (Im W = {:e}, v = {})",
            branch_for(r, rs),
            r,
            point.imaginary,
            point.velocity
        )));
    }
    Ok(point.velocity)
}
