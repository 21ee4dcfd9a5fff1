//! Error types for friction factor evaluation.

use cw_core::error::CoreError;
use thiserror::Error;

/// Errors that can occur while resolving the Colebrook equation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Rejected before any computation: non-positive Reynolds number,
    /// negative roughness or negative iteration count.
    #[error("Invalid argument: {what}")]
    InvalidArgument { what: String },

    /// The log argument `X1 + F` left the positive half-line during refinement.
    #[error("Domain error: {what}")]
    Domain { what: String },

    #[error("Shape mismatch: cannot broadcast {left:?} with {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SolverError::InvalidArgument { .. })
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, SolverError::Domain { .. })
    }
}

impl From<SolverError> for CoreError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::InvalidArgument { what: _ } => CoreError::InvalidArg {
                what: "friction factor input",
            },
            SolverError::Domain { what: _ } => CoreError::Domain {
                what: "log argument in quartic iteration",
            },
            SolverError::ShapeMismatch { .. } => CoreError::Shape {
                what: "reynolds/roughness broadcast",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SolverError::ShapeMismatch {
            left: vec![2],
            right: vec![3],
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch: cannot broadcast [2] with [3]"
        );
    }

    #[test]
    fn error_conversion() {
        let err = SolverError::Domain {
            what: "test".into(),
        };
        assert!(err.is_domain());
        let core: CoreError = err.into();
        assert!(matches!(core, CoreError::Domain { .. }));
    }
}
