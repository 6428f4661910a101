//! Coordinate checking shared by the matrix and its views.
//!
//! The matrix API takes `usize` coordinates, so a negative index can only
//! arrive through user input. [`dimension`] and [`coordinate`] convert such
//! signed values and report them with the same error kinds the matrix uses.
use std::fmt;

use crate::error::{MatrixError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Validate a signed row or column count.
pub fn dimension(value: i64, axis: Axis) -> Result<usize> {
    if value <= 0 {
        return Err(MatrixError::InvalidDimension { axis, value });
    }
    usize::try_from(value).map_err(|_| MatrixError::InvalidDimension { axis, value })
}

/// Validate a signed coordinate against `[0, bound)`.
pub fn coordinate(value: i64, bound: usize, axis: Axis) -> Result<usize> {
    match usize::try_from(value) {
        Ok(index) if index < bound => Ok(index),
        _ => Err(MatrixError::IndexOutOfRange {
            axis,
            index: value,
            bound,
        }),
    }
}

#[inline]
pub(crate) fn check(index: usize, bound: usize, axis: Axis) -> Result<usize> {
    if index < bound {
        Ok(index)
    } else {
        log::debug!("rejected {} index {} (bound {})", axis, index, bound);
        Err(MatrixError::IndexOutOfRange {
            axis,
            index: i64::try_from(index).unwrap_or(i64::MAX),
            bound,
        })
    }
}

pub(crate) fn nonzero(value: usize, axis: Axis) -> Result<usize> {
    if value == 0 {
        Err(MatrixError::InvalidDimension { axis, value: 0 })
    } else {
        Ok(value)
    }
}
