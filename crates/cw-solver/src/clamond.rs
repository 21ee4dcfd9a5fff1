//! Clamond's quartic iteration for the Colebrook equation.
//!
//! With `X1 = K R ln(10)/18.574` and `X2 = ln(R ln(10)/5.02)`, the Colebrook
//! equation becomes `ln(X1 + F) + F - X2 = 0` for the transformed variable
//! `F`, and the friction factor is recovered as `f = (ln(10) / (2 F))^2`.
//!
//! Reference: D. Clamond, "Efficient resolution of the Colebrook equation",
//! Ind. Eng. Chem. Res. 48 (2009), arXiv:0810.5564.
//!
//! The scalar and array paths share the per-element functions below, so both
//! produce bit-identical results.

use crate::error::{SolverError, SolverResult};
use crate::iterations::Iterations;
use ndarray::{ArrayD, ArrayViewD, Zip};
use std::f64::consts::LN_10;

/// `ln(10) / 18.574`
pub const C1: f64 = LN_10 / 18.574;
/// `ln(ln(10) / 5.02)`
///
/// `ln` is not `const`; pinned against the identity in `constants_match_log_identities`.
pub const C2: f64 = -0.779_397_488_455_681_8;
/// `ln(10) / 2`, used in the final mapping.
pub const A: f64 = 0.5 * LN_10;

/// Offset of the explicit initial guess `F0 = X2 - 0.2`.
const INITIAL_OFFSET: f64 = 0.2;

#[inline]
pub(crate) fn x1(reynolds: f64, roughness: f64) -> f64 {
    roughness * reynolds * C1
}

#[inline]
pub(crate) fn x2(reynolds: f64) -> f64 {
    reynolds.ln() + C2
}

#[inline]
pub(crate) fn initial_guess(x2: f64) -> f64 {
    x2 - INITIAL_OFFSET
}

#[inline]
pub(crate) fn log_argument_ok(x1: f64, f: f64) -> bool {
    x1 + f > 0.0
}

/// One quartic correction of `F`.
#[inline]
pub(crate) fn quartic_step(f: f64, x1: f64, x2: f64) -> f64 {
    let e = ((x1 + f).ln() + f - x2) / (1.0 + x1 + f);
    f - (1.0 + x1 + f + 0.5 * e) * e * (x1 + f) / (1.0 + x1 + f + e * (1.0 + e / 3.0))
}

#[inline]
pub(crate) fn to_friction_factor(f: f64) -> f64 {
    (A / f).powi(2)
}

fn domain_error(step: usize, violations: usize, total: usize) -> SolverError {
    SolverError::Domain {
        what: format!(
            "X1 + F <= 0 before iteration {} ({violations} of {total} elements); \
             check R and K (R > 3 recommended) or reduce iters",
            step + 1
        ),
    }
}

fn non_finite_error(what: &str, count: usize, total: usize, cause: &str) -> SolverError {
    SolverError::Domain {
        what: format!("{what} is not finite ({count} of {total} elements); {cause}"),
    }
}

const X1_OVERFLOW: &str = "K * R overflows double precision";
const F_DEGENERATE: &str = "transformed variable F reached zero or overflowed";

/// Resolve a single (validated) pair.
pub(crate) fn refine_scalar(reynolds: f64, roughness: f64, iters: Iterations) -> SolverResult<f64> {
    let x1 = x1(reynolds, roughness);
    let x2 = x2(reynolds);
    let mut f = initial_guess(x2);

    if iters.get() > 0 && !x1.is_finite() {
        return Err(non_finite_error("X1 = K * R * C1", 1, 1, X1_OVERFLOW));
    }
    for step in 0..iters.get() {
        if !log_argument_ok(x1, f) {
            return Err(domain_error(step, 1, 1));
        }
        f = quartic_step(f, x1, x2);
    }

    let friction = to_friction_factor(f);
    if friction.is_finite() {
        Ok(friction)
    } else {
        Err(non_finite_error("friction factor", 1, 1, F_DEGENERATE))
    }
}

/// Resolve (validated) arrays of identical shape.
///
/// The log-domain check runs over the whole array before every step, so a
/// single bad element fails the call without returning partial results.
pub(crate) fn refine_array(
    reynolds: &ArrayViewD<'_, f64>,
    roughness: &ArrayViewD<'_, f64>,
    iters: Iterations,
) -> SolverResult<ArrayD<f64>> {
    let x1 = Zip::from(reynolds)
        .and(roughness)
        .map_collect(|&r, &k| x1(r, k));
    let x2 = reynolds.mapv(x2);
    let mut f = x2.mapv(initial_guess);

    if iters.get() > 0 {
        let overflowed = x1.iter().filter(|v| !v.is_finite()).count();
        if overflowed > 0 {
            return Err(non_finite_error("X1 = K * R * C1", overflowed, x1.len(), X1_OVERFLOW));
        }
    }
    for step in 0..iters.get() {
        let violations = Zip::from(&x1).and(&f).fold(0usize, |n, &x1, &f| {
            if log_argument_ok(x1, f) { n } else { n + 1 }
        });
        if violations > 0 {
            return Err(domain_error(step, violations, f.len()));
        }
        Zip::from(&mut f)
            .and(&x1)
            .and(&x2)
            .for_each(|f, &x1, &x2| *f = quartic_step(*f, x1, x2));
    }

    let friction = f.mapv_into(to_friction_factor);
    let non_finite = friction.iter().filter(|v| !v.is_finite()).count();
    if non_finite > 0 {
        return Err(non_finite_error(
            "friction factor",
            non_finite,
            friction.len(),
            F_DEGENERATE,
        ));
    }
    Ok(friction)
}
