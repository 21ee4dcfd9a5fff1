//! Error types for pipe-flow calculations.

use cw_core::error::CoreError;
use cw_solver::SolverError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PipeError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Friction factor error: {0}")]
    Solver(#[from] SolverError),
}

pub type PipeResult<T> = Result<T, PipeError>;

impl From<PipeError> for CoreError {
    fn from(e: PipeError) -> Self {
        match e {
            PipeError::NonPhysical { what } => CoreError::InvalidArg { what },
            PipeError::Solver(inner) => inner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PipeError::NonPhysical { what: "diameter" };
        assert!(err.to_string().contains("diameter"));
    }

    #[test]
    fn error_conversion() {
        let err: PipeError = SolverError::InvalidArgument {
            what: "test".into(),
        }
        .into();
        let core: CoreError = err.into();
        assert!(matches!(core, CoreError::InvalidArg { .. }));
    }
}
