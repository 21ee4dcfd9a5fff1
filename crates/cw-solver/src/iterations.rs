//! Validated iteration count for the quartic refinement loop.

use crate::error::{SolverError, SolverResult};
use std::fmt;

/// Recommended number of quartic iterations (double precision for turbulent flow).
pub const DEFAULT_ITERATIONS: usize = 2;

/// Number of quartic corrections applied after the initial guess.
///
/// Zero is allowed and yields the raw initial-guess mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iterations(usize);

impl Iterations {
    pub const DEFAULT: Self = Self(DEFAULT_ITERATIONS);

    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Validate a signed count, rejecting negatives.
    pub fn from_signed(count: i64) -> SolverResult<Self> {
        if count < 0 {
            return Err(SolverError::InvalidArgument {
                what: format!("iteration count must be >= 0, got {count}"),
            });
        }
        usize::try_from(count)
            .map(Self)
            .map_err(|_| SolverError::InvalidArgument {
                what: format!(
                    "iteration count {count} exceeds the platform limit of {}",
                    usize::MAX
                ),
            })
    }
}

impl Default for Iterations {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for Iterations {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl TryFrom<i64> for Iterations {
    type Error = SolverError;

    fn try_from(count: i64) -> SolverResult<Self> {
        Self::from_signed(count)
    }
}

impl fmt::Display for Iterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
