//! Zero-copy helpers over borrowed buffers.
use std::mem;

use num_traits::CheckedNeg;

use crate::error::{MatrixError, Result};

/// Sum of the bytes at even offsets, read in place.
pub fn sum_even_bytes(buf: &[u8]) -> u64 {
    buf.iter().step_by(2).map(|&b| u64::from(b)).sum()
}

/// Negate every integer in `buf`.
///
/// Fails without touching the buffer when any element has no negation in its
/// type (`i32::MIN`, or any non-zero unsigned value).
pub fn negate_in_place<T: CheckedNeg + Copy>(buf: &mut [T]) -> Result<()> {
    if let Some(index) = buf.iter().position(|v| v.checked_neg().is_none()) {
        return Err(MatrixError::NegationOverflow { index });
    }
    for value in buf.iter_mut() {
        if let Some(negated) = value.checked_neg() {
            *value = negated;
        }
    }
    Ok(())
}

/// Reverse `buf` in place; no second buffer is allocated.
pub fn reverse_in_place<T>(buf: &mut [T]) {
    buf.reverse();
}

/// Whether the memory spanned by `a` and `b` overlaps.
///
/// Empty views and views of zero-sized elements cover no memory and never
/// alias anything.
pub fn aliases<T, U>(a: &[T], b: &[U]) -> bool {
    let a_bytes = mem::size_of_val(a);
    let b_bytes = mem::size_of_val(b);
    if a_bytes == 0 || b_bytes == 0 {
        return false;
    }
    let a_start = a.as_ptr() as usize;
    let b_start = b.as_ptr() as usize;
    a_start < b_start + b_bytes && b_start < a_start + a_bytes
}
