//! Row iteration.
//!
//! [`Rows`] borrows the matrix for the whole walk. [`RowCursor`] only keeps
//! the index of the next row, so the matrix may be mutated between steps and
//! rows not yet visited reflect those writes.
use std::iter::FusedIterator;

use crate::element::Element;
use crate::matrix::FlatMatrix;

/// Iterator over the rows of a [`FlatMatrix`], each as a slice into its buffer.
#[derive(Debug, Clone)]
pub struct Rows<'a, T> {
    matrix: &'a FlatMatrix<T>,
    front: usize,
    back: usize,
}

impl<'a, T: Element> Rows<'a, T> {
    pub(crate) fn new(matrix: &'a FlatMatrix<T>) -> Self {
        Self {
            matrix,
            front: 0,
            back: matrix.nrows(),
        }
    }
}

impl<'a, T: Element> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let row = self.matrix.row_slice(self.front);
        self.front += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Element> DoubleEndedIterator for Rows<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.matrix.row_slice(self.back))
    }
}

impl<T: Element> ExactSizeIterator for Rows<'_, T> {}
impl<T: Element> FusedIterator for Rows<'_, T> {}

/// Detached row position that is advanced against a matrix on each step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCursor {
    next: usize,
}

impl RowCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the row the next step will yield.
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }

    pub fn next_row<'m, T: Element>(&mut self, matrix: &'m FlatMatrix<T>) -> Option<&'m [T]> {
        if self.next >= matrix.nrows() {
            return None;
        }
        let row = matrix.row_slice(self.next);
        self.next += 1;
        Some(row)
    }

    pub fn next_row_mut<'m, T: Element>(
        &mut self,
        matrix: &'m mut FlatMatrix<T>,
    ) -> Option<&'m mut [T]> {
        if self.next >= matrix.nrows() {
            return None;
        }
        let row = matrix.row_mut(self.next).ok();
        self.next += 1;
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_from_both_ends() {
        let m = FlatMatrix::from_shape_vec((3, 2), vec![1, 2, 3, 4, 5, 6]).unwrap();
        let mut rows = m.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.next_back(), Some(&[5, 6][..]));
        assert_eq!(rows.next(), Some(&[1, 2][..]));
        assert_eq!(rows.next(), Some(&[3, 4][..]));
        assert_eq!(rows.next(), None);
        assert_eq!(rows.next_back(), None);
    }

    #[test]
    fn cursor_stops_after_last_row() {
        let m = FlatMatrix::<u8>::zeros(2, 2).unwrap();
        let mut cursor = RowCursor::new();
        assert!(cursor.next_row(&m).is_some());
        assert!(cursor.next_row(&m).is_some());
        assert!(cursor.next_row(&m).is_none());
        assert_eq!(cursor.position(), 2);
        cursor.reset();
        assert_eq!(cursor.position(), 0);
    }
}
