//! Lambert-W function for real arguments.
//!
//! `W` is the multivalued inverse of `z = w·exp(w)`. Only the principal branch
//! (index 0) and the lower real branch (index -1) are provided. Arguments are
//! real, but the value is complex whenever `z` lies outside the real domain of
//! the requested branch; on the cut `z < -1/e` the argument is taken as
//! approached from above, so `W_{-1}(z)` is the conjugate of `W_0(z)` there.

use num_complex::Complex64;
use std::f64::consts::{E, PI};

use crate::constants::{BRANCH_POINT_TOLERANCE, LAMBERT_W_MAX_ITERATIONS, LAMBERT_W_TOLERANCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Branch 0, real on `[-1/e, ∞)` with `W >= -1`.
    Principal,
    /// Branch -1, real on `[-1/e, 0)` with `W <= -1`.
    Lower,
}

impl Branch {
    pub fn index(&self) -> i32 {
        match self {
            Branch::Principal => 0,
            Branch::Lower => -1,
        }
    }
}

pub fn lambert_w(z: f64, branch: Branch) -> Complex64 {
    if z.is_nan() {
        return Complex64::new(f64::NAN, f64::NAN);
    }
    if z.is_infinite() {
        return match branch {
            Branch::Principal if z > 0.0 => Complex64::new(f64::INFINITY, 0.0),
            _ => Complex64::new(f64::NAN, f64::NAN),
        };
    }

    // q = 0 at the branch point z = -1/e
    let q = 1.0 + E * z;
    if q.abs() <= BRANCH_POINT_TOLERANCE {
        return Complex64::new(-1.0, 0.0);
    }

    match branch {
        Branch::Principal if q > 0.0 => Complex64::new(principal_real(z, q), 0.0),
        Branch::Principal => below_branch_point(z, q),
        Branch::Lower if z == 0.0 => Complex64::new(f64::NEG_INFINITY, 0.0),
        Branch::Lower if q > 0.0 && z < 0.0 => Complex64::new(lower_real(z, q), 0.0),
        Branch::Lower if q < 0.0 => below_branch_point(z, q).conj(),
        Branch::Lower => lower_positive(z),
    }
}

/// Series about the branch point in `p = sqrt(2(e·z + 1))`; `sign` picks the branch.
fn branch_point_series(p: f64, sign: f64) -> f64 {
    let p = sign * p;
    -1.0 + p * (1.0 + p * (-1.0 / 3.0 + p * 11.0 / 72.0))
}

fn principal_real(z: f64, q: f64) -> f64 {
    let guess = if q < 0.5 {
        branch_point_series((2.0 * q).sqrt(), 1.0)
    } else if z < 3.0 {
        z.ln_1p()
    } else {
        let l1 = z.ln();
        let l2 = l1.ln();
        l1 - l2 + l2 / l1
    };
    halley_real(z, guess)
}

fn lower_real(z: f64, q: f64) -> f64 {
    let guess = if q < 0.5 {
        branch_point_series((2.0 * q).sqrt(), -1.0)
    } else {
        let l1 = (-z).ln();
        let l2 = (-l1).ln();
        l1 - l2 + l2 / l1
    };
    halley_real(z, guess)
}

fn below_branch_point(z: f64, q: f64) -> Complex64 {
    let guess = if q > -0.5 {
        let p = Complex64::new(0.0, (-2.0 * q).sqrt());
        -1.0 + p * (1.0 + p * (-1.0 / 3.0 + p * 11.0 / 72.0))
    } else {
        let l1 = Complex64::new((-z).ln(), PI);
        l1 - l1.ln()
    };
    halley_complex(Complex64::new(z, 0.0), guess)
}

fn lower_positive(z: f64) -> Complex64 {
    let l1 = Complex64::new(z.ln(), -2.0 * PI);
    halley_complex(Complex64::new(z, 0.0), l1 - l1.ln())
}

// Stops once the step is below tolerance or no longer shrinking, which near
// the branch point means the residual has hit rounding noise.
fn halley_real(z: f64, mut w: f64) -> f64 {
    let mut last_step = f64::INFINITY;
    for _ in 0..LAMBERT_W_MAX_ITERATIONS {
        let ew = w.exp();
        let f = w * ew - z;
        let wp1 = w + 1.0;
        let step = f / (ew * wp1 - (w + 2.0) * f / (2.0 * wp1));
        if !step.is_finite() || step.abs() >= last_step {
            break;
        }
        w -= step;
        if step.abs() <= LAMBERT_W_TOLERANCE * (1.0 + w.abs()) {
            break;
        }
        last_step = step.abs();
    }
    w
}

fn halley_complex(z: Complex64, mut w: Complex64) -> Complex64 {
    let mut last_step = f64::INFINITY;
    for _ in 0..LAMBERT_W_MAX_ITERATIONS {
        let ew = w.exp();
        let f = w * ew - z;
        let wp1 = w + 1.0;
        let step = f / (ew * wp1 - (w + 2.0) * f / (wp1 * 2.0));
        if !step.is_finite() || step.norm() >= last_step {
            break;
        }
        w -= step;
        if step.norm() <= LAMBERT_W_TOLERANCE * (1.0 + w.norm()) {
            break;
        }
        last_step = step.norm();
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_principal_branch_known_values() {
        let cases = [
            (-0.1, -0.11183255915896297),
            (-0.367, -0.9323991847479282),
            (1.0, 0.5671432904097838),
            (10.0, 1.7455280027406994),
        ];
        for (z, expected) in cases {
            let w = lambert_w(z, Branch::Principal);
            assert_relative_eq!(w.re, expected, max_relative = EPSILON);
            assert_eq!(w.im, 0.0);
        }
    }

    #[test]
    fn test_lower_branch_known_values() {
        let cases = [(-0.1, -3.577152063957297), (-0.367, -1.0707918867680522)];
        for (z, expected) in cases {
            let w = lambert_w(z, Branch::Lower);
            assert_relative_eq!(w.re, expected, max_relative = EPSILON);
            assert_eq!(w.im, 0.0);
        }
    }

    #[test]
    fn test_branch_point() {
        let z = -(-1.0f64).exp();
        assert_abs_diff_eq!(lambert_w(z, Branch::Principal).re, -1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(lambert_w(z, Branch::Lower).re, -1.0, epsilon = 1e-7);
        assert_eq!(lambert_w(-1.0 / E, Branch::Principal), Complex64::new(-1.0, 0.0));
    }

    #[test]
    fn test_below_branch_point_is_complex() {
        let w0 = lambert_w(-1.0, Branch::Principal);
        assert_relative_eq!(w0.re, -0.31813150520476413, max_relative = EPSILON);
        assert_relative_eq!(w0.im, 1.3372357014306894, max_relative = EPSILON);

        let wm1 = lambert_w(-1.0, Branch::Lower);
        assert_relative_eq!(wm1.re, w0.re, max_relative = EPSILON);
        assert_relative_eq!(wm1.im, -w0.im, max_relative = EPSILON);

        let far = lambert_w(-5.0, Branch::Principal);
        assert_relative_eq!(far.re, 0.8448446054321697, max_relative = EPSILON);
        assert_relative_eq!(far.im, 1.975008754889035, max_relative = EPSILON);
    }

    #[test]
    fn test_lower_branch_positive_argument() {
        let w = lambert_w(1.0, Branch::Lower);
        assert_relative_eq!(w.re, -1.5339133197935745, max_relative = 1e-10);
        assert_relative_eq!(w.im, -4.375185153061898, max_relative = 1e-10);
    }

    #[test]
    fn test_special_values() {
        assert_eq!(lambert_w(0.0, Branch::Principal), Complex64::new(0.0, 0.0));
        assert_eq!(lambert_w(-0.0, Branch::Lower).re, f64::NEG_INFINITY);
        assert!(lambert_w(f64::NAN, Branch::Principal).re.is_nan());
        assert_eq!(lambert_w(f64::INFINITY, Branch::Principal).re, f64::INFINITY);
        assert_eq!(Branch::Principal.index(), 0);
        assert_eq!(Branch::Lower.index(), -1);
    }

    #[test]
    fn test_inverse_identity_on_real_domain() {
        let mut rng = StdRng::seed_from_u64(2004);
        for _ in 0..500 {
            let z: f64 = rng.gen_range(-1.0 / E + 1e-9..0.0);
            for branch in [Branch::Principal, Branch::Lower] {
                let w = lambert_w(z, branch).re;
                assert_relative_eq!(w * w.exp(), z, max_relative = 1e-9);
                match branch {
                    Branch::Principal => assert!(w >= -1.0),
                    Branch::Lower => assert!(w <= -1.0),
                }
            }
        }
    }

    #[test]
    fn test_inverse_identity_off_real_domain() {
        for z in [-0.4, -0.5, -2.0, -50.0, -1e6] {
            for branch in [Branch::Principal, Branch::Lower] {
                let w = lambert_w(z, branch);
                let back = w * w.exp();
                assert_relative_eq!(back.re, z, max_relative = 1e-9);
                assert_abs_diff_eq!(back.im, 0.0, epsilon = 1e-9 * z.abs());
                assert!(w.im != 0.0);
            }
        }
    }
}
