//! Public entry points.

use crate::clamond::{refine_array, refine_scalar};
use crate::diagnostics::{Advisory, diagnose};
use crate::error::{SolverError, SolverResult};
use crate::iterations::Iterations;
use crate::operand::{Operand, broadcast_pair};
use crate::validate::{collect_problems, into_result, validate, validate_scalars};
use ndarray::{ArrayBase, ArrayD, Data, Dimension};
use tracing::{debug, warn};

/// Darcy-Weisbach friction factor for scalar or array inputs.
///
/// `reynolds` and `roughness` are broadcast against each other. Two scalars
/// give a scalar, anything else an array of the broadcast shape. Reynolds
/// numbers below the turbulent transition are evaluated anyway and reported
/// through `tracing::warn!`.
///
/// # Errors
///
/// - `InvalidArgument` for R <= 0, K < 0, non-finite inputs or `iters < 0`
/// - `ShapeMismatch` when the shapes cannot be broadcast
/// - `Domain` when the log argument becomes non-positive during refinement
pub fn solve(
    reynolds: impl Into<Operand>,
    roughness: impl Into<Operand>,
    iters: i64,
) -> SolverResult<Operand> {
    run(reynolds.into(), roughness.into(), iters, |advisory| {
        warn!(%advisory, "turbulent flow assumption violated");
    })
}

/// Like [`solve`], but returns advisories to the caller instead of logging them.
pub fn solve_with_diagnostics(
    reynolds: impl Into<Operand>,
    roughness: impl Into<Operand>,
    iters: i64,
) -> SolverResult<(Operand, Vec<Advisory>)> {
    let mut advisories = Vec::new();
    let f = run(reynolds.into(), roughness.into(), iters, |advisory| {
        advisories.push(advisory)
    })?;
    Ok((f, advisories))
}

/// Scalar friction factor. Does not report advisories; see [`diagnose`].
pub fn friction_factor(reynolds: f64, roughness: f64, iters: Iterations) -> SolverResult<f64> {
    validate_scalars(reynolds, roughness)?;
    refine_scalar(reynolds, roughness, iters)
}

/// Array friction factor over any `ndarray` inputs, with broadcasting.
/// Does not report advisories; see [`diagnose`].
pub fn friction_factor_array<S1, D1, S2, D2>(
    reynolds: &ArrayBase<S1, D1>,
    roughness: &ArrayBase<S2, D2>,
    iters: Iterations,
) -> SolverResult<ArrayD<f64>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
{
    validate(reynolds, roughness)?;
    let (r, k) = broadcast_pair(reynolds, roughness)?;
    refine_array(&r, &k, iters)
}

fn run(
    reynolds: Operand,
    roughness: Operand,
    iters: i64,
    mut on_advisory: impl FnMut(Advisory),
) -> SolverResult<Operand> {
    let r_view = reynolds.view();
    let k_view = roughness.view();

    let mut problems = collect_problems(r_view.iter(), k_view.iter());
    let iters = Iterations::from_signed(iters);
    if let Err(SolverError::InvalidArgument { what }) = &iters {
        problems.push(what.clone());
    }
    into_result(problems)?;
    let iters = iters?;

    diagnose(&r_view).into_iter().for_each(&mut on_advisory);

    if let (Operand::Scalar(r), Operand::Scalar(k)) = (&reynolds, &roughness) {
        return refine_scalar(*r, *k, iters).map(Operand::Scalar);
    }

    let (r, k) = broadcast_pair(&r_view, &k_view)?;
    debug!(shape = ?r.shape(), %iters, "resolving Colebrook batch");
    refine_array(&r, &k, iters).map(Operand::Array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    #[test]
    fn scalar_inputs_give_scalar() {
        let f = solve(7e5, 0.01, 2).unwrap();
        assert_relative_eq!(
            f.as_scalar().unwrap(),
            0.037_990_824_071_722_63,
            max_relative = 1e-12
        );
    }

    #[test]
    fn scalar_reynolds_with_array_roughness() {
        let f = solve(1e5, vec![0.0, 1e-3, 1e-2], 2).unwrap();
        assert_eq!(f.shape(), &[3]);
        let f = f.into_array();
        assert!(f[[0]] < f[[1]] && f[[1]] < f[[2]]);
    }

    #[test]
    fn two_dimensional_broadcast() {
        let r = Array2::from_shape_vec((2, 1), vec![1e4, 1e6]).unwrap().into_dyn();
        let k = array![0.0, 1e-4, 1e-2].into_dyn();
        let f = solve(r, k, 2).unwrap();
        assert_eq!(f.shape(), &[2, 3]);
    }

    #[test]
    fn mismatched_shapes_rejected() {
        let err = solve(vec![1e4, 1e5], vec![0.0, 0.01, 0.02], 2).unwrap_err();
        assert!(matches!(err, SolverError::ShapeMismatch { .. }));
    }

    #[test]
    fn invalid_arguments_rejected() {
        assert!(solve(0.0, 0.0, 2).unwrap_err().is_invalid_argument());
        assert!(solve(-1.0, 0.0, 2).unwrap_err().is_invalid_argument());
        assert!(solve(1e5, -0.001, 2).unwrap_err().is_invalid_argument());
        assert!(solve(1e5, 0.0, -1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn invalid_arguments_reported_together() {
        let msg = solve(-1.0, -0.001, -1).unwrap_err().to_string();
        assert!(msg.contains("Reynolds"), "{msg}");
        assert!(msg.contains("roughness"), "{msg}");
        assert!(msg.contains("iteration"), "{msg}");
    }

    #[test]
    fn validation_precedes_broadcasting() {
        let err = solve(vec![-1.0, 1e5], vec![0.0, 0.01, 0.02], 2).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn advisory_returned_below_transition() {
        let (_, advisories) = solve_with_diagnostics(2299.0, 0.0, 2).unwrap();
        assert_eq!(advisories.len(), 1);
        let (_, advisories) = solve_with_diagnostics(2300.0, 0.0, 2).unwrap();
        assert!(advisories.is_empty());
    }

    #[test]
    fn laminar_inputs_still_evaluated() {
        let (f, advisories) = solve_with_diagnostics(vec![1000.0, 5e4], 0.0, 2).unwrap();
        assert!(!advisories.is_empty());
        assert!(f.into_array().iter().all(|v| v.is_finite() && *v > 0.0));
    }

    #[test]
    fn typed_paths_agree_with_dynamic_path() {
        let r = array![3e3, 7e5, 1e7];
        let typed = friction_factor_array(&r, &ndarray::aview0(&0.01), Iterations::DEFAULT)
            .unwrap();
        let dynamic = solve(r.clone(), 0.01, 2).unwrap().into_array();
        assert_eq!(typed, dynamic);
        let single = friction_factor(7e5, 0.01, Iterations::DEFAULT).unwrap();
        assert_eq!(single.to_bits(), typed[[1]].to_bits());
    }

    #[test]
    fn overflow_is_reported_not_returned_as_nan() {
        assert!(solve(1e300, 1e10, 1).unwrap_err().is_domain());
        let err = solve(vec![1e5, 1e300], vec![0.0, 1e10], 1).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn solve_logs_advisory_as_warning() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl Write for Captured {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            solve(2300.0, 0.0, 2).unwrap();
            assert!(captured.0.lock().unwrap().is_empty());

            let f = solve(2299.0, 0.0, 2).unwrap();
            assert!(f.as_scalar().unwrap() > 0.0);
        });

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("WARN"), "{text}");
        assert!(text.contains("turbulent flow assumption violated"), "{text}");
        assert!(text.contains("min R = 2299"), "{text}");
    }

    #[test]
    fn zero_dimensional_array_stays_array() {
        let f = solve(ndarray::arr0(7e5).into_dyn(), 0.01, 2).unwrap();
        assert!(!f.is_scalar());
        assert_eq!(f.shape(), &[] as &[usize]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn friction_factor_positive_and_finite(
            r in 2300.0_f64..1e8,
            k in 0.0_f64..0.05,
            iters in 1usize..5,
        ) {
            let f = friction_factor(r, k, Iterations::new(iters)).unwrap();
            prop_assert!(f.is_finite() && f > 0.0);
        }

        #[test]
        fn repeated_calls_are_bit_identical(
            r in prop::collection::vec(2300.0_f64..1e8, 1..16),
            k in 0.0_f64..0.05,
        ) {
            let first = solve(r.clone(), k, 2).unwrap();
            let second = solve(r, k, 2).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
