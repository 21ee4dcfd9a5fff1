//! Scalar-or-array operands and broadcasting.

use crate::error::{SolverError, SolverResult};
use ndarray::{Array1, ArrayBase, ArrayD, ArrayViewD, Data, Dimension, arr0, aview0};

/// A solver input or output: a plain scalar or an n-dimensional array.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Array(ArrayD<f64>),
}

impl Operand {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Operand::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Operand::Scalar(v) => Some(*v),
            Operand::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayD<f64>> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Array(a) => Some(a),
        }
    }

    /// Shape of the operand; empty for scalars.
    pub fn shape(&self) -> &[usize] {
        match self {
            Operand::Scalar(_) => &[],
            Operand::Array(a) => a.shape(),
        }
    }

    /// Borrow as a dynamic-dimension view (0-d for scalars).
    pub fn view(&self) -> ArrayViewD<'_, f64> {
        match self {
            Operand::Scalar(v) => aview0(v).into_dyn(),
            Operand::Array(a) => a.view(),
        }
    }

    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            Operand::Scalar(v) => arr0(v).into_dyn(),
            Operand::Array(a) => a,
        }
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Scalar(v)
    }
}

impl From<ArrayD<f64>> for Operand {
    fn from(a: ArrayD<f64>) -> Self {
        Operand::Array(a)
    }
}

impl From<Array1<f64>> for Operand {
    fn from(a: Array1<f64>) -> Self {
        Operand::Array(a.into_dyn())
    }
}

impl From<Vec<f64>> for Operand {
    fn from(v: Vec<f64>) -> Self {
        Operand::Array(Array1::from(v).into_dyn())
    }
}

impl From<&[f64]> for Operand {
    fn from(v: &[f64]) -> Self {
        Operand::from(v.to_vec())
    }
}

/// Broadcast shape of two array shapes.
///
/// Shapes are aligned on their trailing dimensions; a dimension of size 1
/// stretches to match the other, any other mismatch is an error.
pub fn broadcast_shape(left: &[usize], right: &[usize]) -> SolverResult<Vec<usize>> {
    let ndim = left.len().max(right.len());
    let pad_left = ndim - left.len();
    let pad_right = ndim - right.len();

    (0..ndim)
        .map(|axis| {
            let a = if axis < pad_left { 1 } else { left[axis - pad_left] };
            let b = if axis < pad_right {
                1
            } else {
                right[axis - pad_right]
            };
            match (a, b) {
                (a, b) if a == b => Ok(a),
                (1, b) => Ok(b),
                (a, 1) => Ok(a),
                _ => Err(SolverError::ShapeMismatch {
                    left: left.to_vec(),
                    right: right.to_vec(),
                }),
            }
        })
        .collect()
}

/// Broadcast two arrays to their common shape, returning views.
pub fn broadcast_pair<'a, 'b, S1, D1, S2, D2>(
    left: &'a ArrayBase<S1, D1>,
    right: &'b ArrayBase<S2, D2>,
) -> SolverResult<(ArrayViewD<'a, f64>, ArrayViewD<'b, f64>)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
{
    let mismatch = || SolverError::ShapeMismatch {
        left: left.shape().to_vec(),
        right: right.shape().to_vec(),
    };
    let shape = broadcast_shape(left.shape(), right.shape())?;
    let left_view = left.broadcast(shape.as_slice()).ok_or_else(mismatch)?;
    let right_view = right.broadcast(shape.as_slice()).ok_or_else(mismatch)?;
    Ok((left_view, right_view))
}
