//! rowmat - Row-major in-memory matrices
//!
//! This library provides a dense matrix backed by one flat row-major
//! buffer, a single-pass row iterator for in-place transforms, and a
//! coordinate-addressed sparse matrix for mostly-empty data.
//!
//! ## Architecture
//!
//! - **rowmat-core**: error type, element trait and bounds validation (no allocation)
//! - **rowmat**: dense and sparse matrix implementations
//!
//! ## Quick Start
//!
//! ```rust
//! use rowmat::{DenseMatrix, Sparse};
//!
//! fn example() -> rowmat::Result<()> {
//!     let mut matrix = DenseMatrix::<f64>::new(3)?;
//!     matrix.add_row(&[1.0, 2.0, 3.0])?;
//!     matrix.append_column(0.0);
//!     assert_eq!(matrix.get_row(0)?, &[1.0, 2.0, 3.0, 0.0]);
//!
//!     // Square every element in place
//!     matrix.iterator().apply_to_matrix(|v| v * v);
//!     assert_eq!(matrix.get_value(0, 2)?, 9.0);
//!
//!     let mut sparse = Sparse::new();
//!     sparse.set(0, 5, 2.0);
//!     sparse.increment(0, 1);
//!     assert_eq!(sparse.get_row(0)?.sum(), 3.0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **serde** (default): serialization of [`Sparse`] and its extracted values
//! - **ndarray**: export of [`DenseMatrix`] to `ndarray::Array2`

// Re-export core abstractions
pub use rowmat_core::{
    // Core traits
    ElementType, Matrix, MatrixElement,
    // Error handling
    ErrorCategory, MatrixError, Result,
};

pub mod config;
pub mod dense;
#[cfg(feature = "ndarray")]
pub mod export;
pub mod iterator;
pub mod sparse;

pub use config::SampleConfig;
pub use dense::DenseMatrix;
pub use iterator::RowIterator;
pub use sparse::{ColumnValue, ColumnValues, RowValue, RowValues, Sparse, SparseEntry, SparseValues};
