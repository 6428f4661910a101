use thiserror::Error;

use crate::index::Axis;

/// Errors reported by [`FlatMatrix`](crate::FlatMatrix) construction and access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row or column count was zero or negative.
    #[error("{axis} count must be positive, got {value}")]
    InvalidDimension { axis: Axis, value: i64 },

    /// A coordinate fell outside `[0, bound)`.
    #[error("{axis} index {index} out of range [0, {bound})")]
    IndexOutOfRange { axis: Axis, index: i64, bound: usize },

    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    #[error("{rows}x{cols} elements do not fit in the address space")]
    TooLarge { rows: usize, cols: usize },

    /// Negating the element at `index` has no representation in its type.
    #[error("negation of element {index} overflows")]
    NegationOverflow { index: usize },

    #[error("unknown element type: {0:?}")]
    UnknownElementType(String),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
