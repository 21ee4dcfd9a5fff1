use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// Relative difference `|value - reference| / |reference|`.
///
/// NaN when the reference is zero.
pub fn relative_difference(value: Real, reference: Real) -> Real {
    if reference == 0.0 {
        Real::NAN
    } else {
        (value - reference).abs() / reference.abs()
    }
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}
