//! Elementary pipe-flow relations.

use crate::error::{PipeError, PipeResult};
use cw_core::numeric::ensure_finite;
use cw_core::units::{Density, DynVisc, Length, Velocity};

fn check_positive(value: f64, what: &'static str) -> PipeResult<f64> {
    ensure_finite(value, what).map_err(|_| PipeError::NonPhysical { what })?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PipeError::NonPhysical { what })
    }
}

/// `R = rho V D / mu`
pub fn reynolds_number(
    density: Density,
    velocity: Velocity,
    diameter: Length,
    viscosity: DynVisc,
) -> PipeResult<f64> {
    let d = check_positive(diameter.value, "diameter")?;
    let mu = check_positive(viscosity.value, "dynamic viscosity")?;
    let r = density.value * velocity.value * d / mu;
    ensure_finite(r, "Reynolds number").map_err(|_| PipeError::NonPhysical {
        what: "Reynolds number",
    })
}

/// `K = eps / D`
pub fn relative_roughness(roughness: Length, diameter: Length) -> PipeResult<f64> {
    let d = check_positive(diameter.value, "diameter")?;
    Ok(roughness.value / d)
}

/// Darcy-Weisbach pressure gradient `dp/dx = f rho V^2 / (2 D)` in Pa/m.
pub fn pressure_gradient(
    friction_factor: f64,
    density: Density,
    velocity: Velocity,
    diameter: Length,
) -> PipeResult<f64> {
    let d = check_positive(diameter.value, "diameter")?;
    Ok(friction_factor * density.value * velocity.value * velocity.value / (2.0 * d))
}
