//! flatmat: a fixed-size 2-D numeric matrix backed by one contiguous buffer.
//!
//! [`FlatMatrix`] stores its elements row-major in a single allocation and
//! hands out views that alias that allocation: rows as plain slices, columns
//! as strided [`ColView`]s. Nested `Vec`s are produced only on request through
//! [`FlatMatrix::to_nested`], which copies.
//!
//! The [`buffer`] module carries a few zero-copy helpers over raw slices.
//!
//! ```
//! use flatmat::FlatMatrix;
//!
//! let mut m = FlatMatrix::<u32>::new(3, 4, 0).unwrap();
//! m.set(1, 2, 99).unwrap();
//! assert_eq!(m.row(1).unwrap(), &[0, 0, 99, 0]);
//! assert_eq!(m.col(2).unwrap().to_vec(), vec![0, 99, 0]);
//! ```
pub mod buffer;
pub mod element;
pub mod error;
pub mod index;
pub mod matrix;
pub mod rows;
pub mod view;

pub use element::{Element, ElementKind};
pub use error::{MatrixError, Result};
pub use index::{coordinate, dimension, Axis};
pub use matrix::FlatMatrix;
pub use rows::{RowCursor, Rows};
pub use view::{ColView, ColViewMut, StridedIter};
