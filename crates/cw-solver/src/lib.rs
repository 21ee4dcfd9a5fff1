//! Darcy-Weisbach friction factor from the Colebrook-White equation.
//!
//! The implicit Colebrook equation is resolved with Clamond's scheme: an
//! explicit initial guess on a transformed variable followed by a fixed number
//! of quartic corrections. Two corrections reach double precision over the
//! turbulent range, so there is no convergence test and no early exit.
//!
//! Inputs are scalars or n-dimensional `ndarray` arrays broadcast against each
//! other with the usual trailing-dimension rules.
//!
//! # Example
//!
//! ```
//! use cw_solver::solve;
//!
//! let f = solve(7e5, 0.01, 2).unwrap();
//! assert!((f.as_scalar().unwrap() - 0.037_990_824_071_722_6).abs() < 1e-12);
//!
//! let batch = solve(vec![3e3, 7e5, 1e7], 0.01, 2).unwrap();
//! assert_eq!(batch.shape(), &[3]);
//! ```

pub mod clamond;
pub mod colebrook;
pub mod diagnostics;
pub mod error;
pub mod iterations;
pub mod operand;
pub mod solve;
pub mod validate;

pub use clamond::{A, C1, C2};
pub use colebrook::colebrook_residual;
pub use diagnostics::{Advisory, TURBULENT_REYNOLDS, diagnose};
pub use error::{SolverError, SolverResult};
pub use iterations::{DEFAULT_ITERATIONS, Iterations};
pub use operand::{Operand, broadcast_pair, broadcast_shape};
pub use solve::{friction_factor, friction_factor_array, solve, solve_with_diagnostics};
pub use validate::validate;
