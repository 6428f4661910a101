use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::buffer;
use crate::element::{Element, ElementKind};
use crate::error::{MatrixError, Result};
use crate::index::{check, nonzero, Axis};
use crate::rows::Rows;
use crate::view::{ColView, ColViewMut};

/// Fixed-size 2-D matrix stored row-major in one contiguous buffer.
///
/// Element `(r, c)` lives at `buffer[r * cols + c]`. Rows are contiguous
/// slices; columns are strided views with a stride of `cols`, so walking a
/// column touches a different cache line far more often than walking a row.
///
/// The buffer is allocated once by the constructor and never resized. Row and
/// column views borrow it, so they cannot outlive the matrix, and `&mut`
/// views exclude any other access while they are alive. The matrix has no
/// internal locking: share it across threads only behind the caller's own
/// synchronisation.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatMatrix<T> {
    data: Box<[T]>,
    rows: usize,
    cols: usize,
}

/// Element count for a `rows x cols` buffer of `T`. The byte size must stay
/// within `isize::MAX`, the allocator's limit.
fn checked_len<T>(rows: usize, cols: usize) -> Result<usize> {
    nonzero(rows, Axis::Row)?;
    nonzero(cols, Axis::Column)?;
    rows.checked_mul(cols)
        .filter(|len| {
            len.checked_mul(mem::size_of::<T>())
                .map_or(false, |bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(MatrixError::TooLarge { rows, cols })
}

impl<T: Element> FlatMatrix<T> {
    /// Allocate a `rows x cols` matrix with every element set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Result<Self> {
        let len = checked_len::<T>(rows, cols)?;
        log::trace!(
            "allocating {}x{} {} matrix ({} bytes)",
            rows,
            cols,
            T::KIND,
            len.saturating_mul(T::KIND.item_size())
        );
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::TooLarge { rows, cols })?;
        data.resize(len, fill);
        Ok(Self {
            data: data.into_boxed_slice(),
            rows,
            cols,
        })
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols, T::zero())
    }

    /// Adopt an existing row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        let len = checked_len::<T>(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self {
            data: data.into_boxed_slice(),
            rows,
            cols,
        })
    }

    /// Rebuild a matrix from a nested snapshot such as the one returned by
    /// [`to_nested`](Self::to_nested). All rows must have the same length.
    pub fn from_nested<R: AsRef<[T]>>(nested: &[R]) -> Result<Self> {
        let rows = nonzero(nested.len(), Axis::Row)?;
        let cols = nonzero(nested[0].as_ref().len(), Axis::Column)?;
        let mut data = Vec::with_capacity(checked_len::<T>(rows, cols)?);
        for row in nested {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::ShapeMismatch {
                    rows,
                    cols,
                    len: data.len() + row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_shape_vec((rows, cols), data)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements, always `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn element_kind(&self) -> ElementKind {
        T::KIND
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_offset(&self, row: usize, col: usize) -> Result<usize> {
        let row = check(row, self.rows, Axis::Row)?;
        let col = check(col, self.cols, Axis::Column)?;
        Ok(self.offset(row, col))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let offset = self.checked_offset(row, col)?;
        Ok(self.data[offset])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let offset = self.checked_offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let offset = self.checked_offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Row `row` as a contiguous slice of length `cols`, aliasing the buffer.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        let row = check(row, self.rows, Axis::Row)?;
        Ok(self.row_slice(row))
    }

    pub fn row_mut(&mut self, row: usize) -> Result<&mut [T]> {
        let row = check(row, self.rows, Axis::Row)?;
        let start = self.offset(row, 0);
        Ok(&mut self.data[start..start + self.cols])
    }

    /// Column `col` as a strided view of length `rows`.
    ///
    /// Consecutive elements are `cols` slots apart in the buffer. Column
    /// access is inherently slower than row access for this layout.
    pub fn col(&self, col: usize) -> Result<ColView<'_, T>> {
        let col = check(col, self.cols, Axis::Column)?;
        log::trace!("column view {} (stride {})", col, self.cols);
        Ok(ColView::new(&self.data, col, self.cols, self.rows))
    }

    pub fn col_mut(&mut self, col: usize) -> Result<ColViewMut<'_, T>> {
        let col = check(col, self.cols, Axis::Column)?;
        let (stride, len) = (self.cols, self.rows);
        Ok(ColViewMut::new(&mut self.data, col, stride, len))
    }

    /// Iterate over the rows from the first one. Each call starts afresh.
    pub fn rows(&self) -> Rows<'_, T> {
        Rows::new(self)
    }

    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, T> {
        self.data.chunks_exact_mut(self.cols)
    }

    /// Independent copy of the contents as one `Vec` per row.
    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.data.chunks_exact(self.cols).map(<[T]>::to_vec).collect()
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Whether `view` points into this matrix's buffer.
    pub fn shares_buffer<U>(&self, view: &[U]) -> bool {
        buffer::aliases(&self.data[..], view)
    }

    pub fn summary(&self) -> String {
        format!("FlatMatrix({}x{}, type={})", self.rows, self.cols, T::KIND)
    }

    #[inline]
    pub(crate) fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }
}

impl<T: Element> Index<(usize, usize)> for FlatMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match self.checked_offset(index.0, index.1) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Element> IndexMut<(usize, usize)> for FlatMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match self.checked_offset(index.0, index.1) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T: Element> IntoIterator for &'a FlatMatrix<T> {
    type Item = &'a [T];
    type IntoIter = Rows<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}

impl<T: Element> TryFrom<Vec<Vec<T>>> for FlatMatrix<T> {
    type Error = MatrixError;

    fn try_from(nested: Vec<Vec<T>>) -> Result<Self> {
        FlatMatrix::from_nested(&nested)
    }
}

impl<T: Element> fmt::Display for FlatMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl<T: Element + Serialize> Serialize for FlatMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FlatMatrix", 3)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("cols", &self.cols)?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

impl<'de, T: Element + Deserialize<'de>> Deserialize<'de> for FlatMatrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawMatrix<T> {
            rows: usize,
            cols: usize,
            data: Vec<T>,
        }

        let raw = RawMatrix::<T>::deserialize(deserializer)?;
        FlatMatrix::from_shape_vec((raw.rows, raw.cols), raw.data)
            .map_err(serde::de::Error::custom)
    }
}
