//! District heating pipe scenarios.
//!
//! A scenario fixes pipe geometry, roughness, mean velocity and fluid
//! properties. Evaluating it gives the Reynolds number, relative roughness,
//! friction factor and pressure gradient.

use crate::error::PipeResult;
use crate::flow::{pressure_gradient, relative_roughness, reynolds_number};
use crate::presets::{self, FluidProperties};
use cw_core::numeric::relative_difference;
use cw_core::units::{Length, Velocity, mps};
use cw_solver::{Iterations, diagnose, friction_factor, friction_factor_array};
use ndarray::{Array1, aview0};
use tracing::warn;

/// Pipe flow case.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub name: String,
    /// Inner diameter
    pub diameter: Length,
    /// Absolute roughness
    pub roughness: Length,
    /// Mean velocity
    pub velocity: Velocity,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub fluid: FluidProperties,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        diameter: Length,
        roughness: Length,
        velocity: Velocity,
        fluid: FluidProperties,
    ) -> Self {
        Self {
            name: name.into(),
            diameter,
            roughness,
            velocity,
            fluid,
        }
    }

    pub fn reynolds_number(&self) -> PipeResult<f64> {
        reynolds_number(
            self.fluid.density,
            self.velocity,
            self.diameter,
            self.fluid.viscosity,
        )
    }

    pub fn relative_roughness(&self) -> PipeResult<f64> {
        relative_roughness(self.roughness, self.diameter)
    }

    pub fn pressure_gradient(&self, friction_factor: f64) -> PipeResult<f64> {
        pressure_gradient(
            friction_factor,
            self.fluid.density,
            self.velocity,
            self.diameter,
        )
    }
}

/// Evaluated scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub reynolds: f64,
    pub relative_roughness: f64,
    /// Darcy-Weisbach friction factor
    pub friction_factor: f64,
    /// Pressure gradient (Pa/m)
    pub pressure_gradient: f64,
}

/// Contrasting DH cases: effects of diameter, roughness, velocity and
/// temperature on the friction factor and pressure gradient.
pub fn district_heating_scenarios() -> Vec<Scenario> {
    use presets::{
        feeder_diameter, main_diameter, new_steel_roughness, old_steel_roughness,
        service_diameter,
    };

    vec![
        Scenario::new(
            "S1: Service pipe, new steel, moderate V, 60°C",
            service_diameter(),
            new_steel_roughness(),
            mps(1.0),
            FluidProperties::water_60c(),
        ),
        Scenario::new(
            "S2: Feeder pipe, new steel, higher V, 60°C",
            feeder_diameter(),
            new_steel_roughness(),
            mps(1.5),
            FluidProperties::water_60c(),
        ),
        Scenario::new(
            "S3: Main pipe, new steel, typical V, 60°C",
            main_diameter(),
            new_steel_roughness(),
            mps(1.5),
            FluidProperties::water_60c(),
        ),
        Scenario::new(
            "S4: Service pipe, OLD steel (rough), moderate V, 60°C",
            service_diameter(),
            old_steel_roughness(),
            mps(1.0),
            FluidProperties::water_60c(),
        ),
        Scenario::new(
            "S5: Feeder pipe, new steel, same V as S2 but 20°C (higher viscosity)",
            feeder_diameter(),
            new_steel_roughness(),
            mps(1.5),
            FluidProperties::water_20c(),
        ),
        Scenario::new(
            "S6: Feeder pipe, new steel, same V as S2 but 80°C (lower viscosity)",
            feeder_diameter(),
            new_steel_roughness(),
            mps(1.5),
            FluidProperties::water_80c(),
        ),
    ]
}

/// Evaluate one scenario.
pub fn evaluate(scenario: &Scenario, iters: Iterations) -> PipeResult<ScenarioResult> {
    let reynolds = scenario.reynolds_number()?;
    let k = scenario.relative_roughness()?;

    for advisory in diagnose(&aview0(&reynolds)) {
        warn!(scenario = %scenario.name, %advisory, "turbulent flow assumption violated");
    }

    let f = friction_factor(reynolds, k, iters)?;
    Ok(ScenarioResult {
        scenario: scenario.clone(),
        reynolds,
        relative_roughness: k,
        friction_factor: f,
        pressure_gradient: scenario.pressure_gradient(f)?,
    })
}

/// Evaluate a batch of scenarios with one array call to the solver.
pub fn evaluate_all(scenarios: &[Scenario], iters: Iterations) -> PipeResult<Vec<ScenarioResult>> {
    let reynolds = scenarios
        .iter()
        .map(Scenario::reynolds_number)
        .collect::<PipeResult<Array1<f64>>>()?;
    let roughness = scenarios
        .iter()
        .map(Scenario::relative_roughness)
        .collect::<PipeResult<Array1<f64>>>()?;

    for advisory in diagnose(&reynolds) {
        warn!(%advisory, "turbulent flow assumption violated");
    }

    let f = friction_factor_array(&reynolds, &roughness, iters)?;

    scenarios
        .iter()
        .zip(reynolds.iter().zip(roughness.iter()).zip(f.iter()))
        .map(|(scenario, ((&r, &k), &f))| {
            Ok(ScenarioResult {
                scenario: scenario.clone(),
                reynolds: r,
                relative_roughness: k,
                friction_factor: f,
                pressure_gradient: scenario.pressure_gradient(f)?,
            })
        })
        .collect()
}

/// Friction factor and pressure gradient at one iteration count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationSample {
    pub iters: Iterations,
    pub friction_factor: f64,
    /// Pressure gradient (Pa/m)
    pub pressure_gradient: f64,
}

/// How much a scenario's result moves between two iteration counts.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationComparison {
    pub reynolds: f64,
    pub relative_roughness: f64,
    pub coarse: IterationSample,
    pub fine: IterationSample,
    /// `|f_fine - f_coarse| / f_fine`
    pub relative_difference: f64,
}

pub fn compare_iterations(
    scenario: &Scenario,
    coarse: Iterations,
    fine: Iterations,
) -> PipeResult<IterationComparison> {
    let sample = |iters: Iterations| -> PipeResult<IterationSample> {
        let result = evaluate(scenario, iters)?;
        Ok(IterationSample {
            iters,
            friction_factor: result.friction_factor,
            pressure_gradient: result.pressure_gradient,
        })
    };
    let coarse = sample(coarse)?;
    let fine = sample(fine)?;

    Ok(IterationComparison {
        reynolds: scenario.reynolds_number()?,
        relative_roughness: scenario.relative_roughness()?,
        relative_difference: relative_difference(coarse.friction_factor, fine.friction_factor),
        coarse,
        fine,
    })
}
