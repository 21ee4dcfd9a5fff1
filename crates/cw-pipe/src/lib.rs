//! cw-pipe: pipe-flow helpers around the Colebrook friction factor solver.
//!
//! Provides:
//! - Reynolds number, relative roughness and Darcy-Weisbach pressure gradient
//! - Water property and pipe presets for district heating (DH) networks
//! - Scenario evaluation and iteration sensitivity comparison
//!
//! # Example
//!
//! ```
//! use cw_pipe::{district_heating_scenarios, evaluate};
//! use cw_solver::Iterations;
//!
//! let scenarios = district_heating_scenarios();
//! let result = evaluate(&scenarios[0], Iterations::DEFAULT).unwrap();
//! assert!(result.friction_factor > 0.0);
//! println!("dp/dx = {:.1} Pa/m", result.pressure_gradient);
//! ```

pub mod error;
pub mod flow;
pub mod presets;
pub mod scenario;

// Re-exports
pub use error::{PipeError, PipeResult};
pub use flow::{pressure_gradient, relative_roughness, reynolds_number};
pub use presets::FluidProperties;
pub use scenario::{
    IterationComparison, IterationSample, Scenario, ScenarioResult, compare_iterations,
    district_heating_scenarios, evaluate, evaluate_all,
};
