//! Residual of the implicit Colebrook-White equation.

use std::f64::consts::LN_10;

/// `1/sqrt(f) + 2 log10(K/3.7 + 2.51/(R sqrt(f)))`
///
/// Zero at the exact Colebrook friction factor. Useful to check the accuracy
/// of a result independently of how it was computed.
pub fn colebrook_residual(friction: f64, reynolds: f64, roughness: f64) -> f64 {
    let sqrt_f = friction.sqrt();
    1.0 / sqrt_f + 2.0 * (roughness / 3.7 + 2.51 / (reynolds * sqrt_f)).ln() / LN_10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_vanishes_at_known_root() {
        let r = colebrook_residual(0.037_990_824_071_722_63, 7e5, 0.01);
        assert!(r.abs() < 1e-12, "residual = {r}");
    }

    #[test]
    fn residual_changes_sign_across_root() {
        assert!(colebrook_residual(0.03, 7e5, 0.01) > 0.0);
        assert!(colebrook_residual(0.05, 7e5, 0.01) < 0.0);
    }
}
