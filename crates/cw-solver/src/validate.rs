//! Up-front input validation.
//!
//! Every element is checked before any arithmetic runs, and all problems are
//! reported together in a single `InvalidArgument`.

use crate::error::{SolverError, SolverResult};
use ndarray::{ArrayBase, Data, Dimension};

/// Check Reynolds numbers (finite, > 0) and relative roughness (finite, >= 0).
pub fn validate<S1, D1, S2, D2>(
    reynolds: &ArrayBase<S1, D1>,
    roughness: &ArrayBase<S2, D2>,
) -> SolverResult<()>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
{
    into_result(collect_problems(reynolds.iter(), roughness.iter()))
}

pub(crate) fn validate_scalars(reynolds: f64, roughness: f64) -> SolverResult<()> {
    into_result(collect_problems(
        std::iter::once(&reynolds),
        std::iter::once(&roughness),
    ))
}

pub(crate) fn collect_problems<'a, 'b>(
    reynolds: impl Iterator<Item = &'a f64>,
    roughness: impl Iterator<Item = &'b f64>,
) -> Vec<String> {
    let mut problems = Vec::new();
    if let Some(p) = describe(reynolds, "Reynolds number must be finite and > 0", |r| {
        r.is_finite() && r > 0.0
    }) {
        problems.push(p);
    }
    if let Some(p) = describe(roughness, "relative roughness must be finite and >= 0", |k| {
        k.is_finite() && k >= 0.0
    }) {
        problems.push(p);
    }
    problems
}

pub(crate) fn into_result(problems: Vec<String>) -> SolverResult<()> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(SolverError::InvalidArgument {
            what: problems.join("; "),
        })
    }
}

fn describe<'a>(
    values: impl Iterator<Item = &'a f64>,
    rule: &str,
    ok: impl Fn(f64) -> bool,
) -> Option<String> {
    let mut total = 0usize;
    let mut bad = 0usize;
    let mut first = None;
    for &v in values {
        total += 1;
        if !ok(v) {
            bad += 1;
            first.get_or_insert(v);
        }
    }
    first.map(|v| format!("{rule} ({bad} of {total} invalid, first: {v})"))
}
