//! Column views over a row-major buffer.
//!
//! A column is not contiguous: consecutive elements sit `cols` slots apart.
//! Views borrow the matrix buffer, so reads see every earlier write and writes
//! land directly in the matrix.
use std::iter::FusedIterator;

use crate::error::Result;
use crate::index::{check, Axis};

/// Read-only strided view of one matrix column.
#[derive(Debug, Clone, Copy)]
pub struct ColView<'a, T> {
    data: &'a [T],
    start: usize,
    stride: usize,
    len: usize,
}

impl<'a, T: Copy> ColView<'a, T> {
    pub(crate) fn new(data: &'a [T], start: usize, stride: usize, len: usize) -> Self {
        Self {
            data,
            start,
            stride,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical distance between consecutive elements.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Element at position `index`, i.e. the value in row `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        let index = check(index, self.len, Axis::Row)?;
        Ok(self.data[self.start + index * self.stride])
    }

    pub fn iter(&self) -> StridedIter<'a, T> {
        StridedIter::new(self.data, self.start, self.stride, self.len)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }
}

impl<'a, T: Copy> IntoIterator for ColView<'a, T> {
    type Item = &'a T;
    type IntoIter = StridedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mutable strided view of one matrix column.
#[derive(Debug)]
pub struct ColViewMut<'a, T> {
    data: &'a mut [T],
    start: usize,
    stride: usize,
    len: usize,
}

impl<'a, T: Copy> ColViewMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], start: usize, stride: usize, len: usize) -> Self {
        Self {
            data,
            start,
            stride,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn get(&self, index: usize) -> Result<T> {
        let index = check(index, self.len, Axis::Row)?;
        Ok(self.data[self.start + index * self.stride])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let index = check(index, self.len, Axis::Row)?;
        Ok(&mut self.data[self.start + index * self.stride])
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    pub fn fill(&mut self, value: T) {
        for slot in self.iter_mut() {
            *slot = value;
        }
    }

    pub fn iter(&self) -> StridedIter<'_, T> {
        StridedIter::new(&*self.data, self.start, self.stride, self.len)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.data[self.start..]
            .iter_mut()
            .step_by(self.stride)
            .take(self.len)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> ColView<'_, T> {
        ColView::new(&*self.data, self.start, self.stride, self.len)
    }
}

/// Iterator over elements with a fixed stride.
#[derive(Debug, Clone)]
pub struct StridedIter<'a, T> {
    data: &'a [T],
    pos: usize,
    stride: usize,
    remaining: usize,
}

impl<'a, T> StridedIter<'a, T> {
    #[inline]
    fn new(data: &'a [T], start: usize, stride: usize, count: usize) -> Self {
        Self {
            data,
            pos: start,
            stride,
            remaining: count,
        }
    }
}

impl<'a, T> Iterator for StridedIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = &self.data[self.pos];
        self.remaining -= 1;
        if self.remaining > 0 {
            self.pos += self.stride;
        }
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for StridedIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(&self.data[self.pos + self.remaining * self.stride])
    }
}

impl<T> ExactSizeIterator for StridedIter<'_, T> {}
impl<T> FusedIterator for StridedIter<'_, T> {}
