//! Fluid and pipe presets for district heating networks.

use cw_core::units::{Density, DynVisc, Length, kg_per_m3, mm, pa_s};

/// Constant fluid properties at a given operating temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FluidProperties {
    /// Density
    pub density: Density,
    /// Dynamic viscosity
    pub viscosity: DynVisc,
}

impl FluidProperties {
    pub fn new(density: Density, viscosity: DynVisc) -> Self {
        Self { density, viscosity }
    }

    /// Water at 20 °C (rounded table values).
    pub fn water_20c() -> Self {
        Self::new(kg_per_m3(998.0), pa_s(1.002e-3))
    }

    /// Water at 60 °C.
    pub fn water_60c() -> Self {
        Self::new(kg_per_m3(983.0), pa_s(0.467e-3))
    }

    /// Water at 80 °C.
    pub fn water_80c() -> Self {
        Self::new(kg_per_m3(971.0), pa_s(0.355e-3))
    }
}

/// Inner diameter of a 50 mm service connection.
pub fn service_diameter() -> Length {
    mm(50.0)
}

/// Inner diameter of a 100 mm feeder.
pub fn feeder_diameter() -> Length {
    mm(100.0)
}

/// Inner diameter of a 200 mm main.
pub fn main_diameter() -> Length {
    mm(200.0)
}

/// Absolute roughness of new commercial steel (0.05 mm).
pub fn new_steel_roughness() -> Length {
    mm(0.05)
}

/// Absolute roughness of older, roughened steel (0.20 mm).
pub fn old_steel_roughness() -> Length {
    mm(0.20)
}
