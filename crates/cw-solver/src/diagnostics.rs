//! Advisory (non-fatal) conditions on solver inputs.
//!
//! The Colebrook equation describes turbulent flow only. Inputs below the
//! transition Reynolds number are still evaluated; callers decide whether to
//! log, surface or ignore the advisory.

use ndarray::{ArrayBase, Data, Dimension};
use std::fmt;

/// Reynolds number below which flow is not considered turbulent.
pub const TURBULENT_REYNOLDS: f64 = 2300.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// Some Reynolds numbers are below [`TURBULENT_REYNOLDS`].
    NonTurbulent { count: usize, min_reynolds: f64 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NonTurbulent {
                count,
                min_reynolds,
            } => write!(
                f,
                "Colebrook equation is for turbulent flow (R >= {TURBULENT_REYNOLDS}); \
                 {count} value(s) below, min R = {min_reynolds}"
            ),
        }
    }
}

/// Advisory conditions for a batch of Reynolds numbers.
pub fn diagnose<S, D>(reynolds: &ArrayBase<S, D>) -> Vec<Advisory>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let (count, min_reynolds) = reynolds
        .iter()
        .filter(|&&r| r < TURBULENT_REYNOLDS)
        .fold((0usize, f64::INFINITY), |(n, min), &r| (n + 1, min.min(r)));

    if count == 0 {
        Vec::new()
    } else {
        vec![Advisory::NonTurbulent {
            count,
            min_reynolds,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, aview0};

    #[test]
    fn transition_value_is_turbulent() {
        assert!(diagnose(&aview0(&2300.0)).is_empty());
    }

    #[test]
    fn just_below_transition_is_flagged() {
        let advisories = diagnose(&aview0(&2299.0));
        assert_eq!(
            advisories,
            vec![Advisory::NonTurbulent {
                count: 1,
                min_reynolds: 2299.0,
            }]
        );
    }

    #[test]
    fn counts_and_minimum_over_batch() {
        let advisories = diagnose(&array![[500.0, 1e5], [2000.0, 3e3]]);
        assert_eq!(
            advisories,
            vec![Advisory::NonTurbulent {
                count: 2,
                min_reynolds: 500.0,
            }]
        );
        assert!(advisories[0].to_string().contains("turbulent"));
    }
}
