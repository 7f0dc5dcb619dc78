//! Conversion into `ndarray` arrays
//!
//! The dense buffer is already row-major, which is ndarray's standard
//! layout, so the conversion is a shape check plus a move or copy.

use ndarray::{Array2, ShapeError};
use rowmat_core::MatrixElement;

use crate::dense::DenseMatrix;

impl<T: MatrixElement> DenseMatrix<T> {
    /// Copy the matrix into a `rows x columns` array
    pub fn to_array2(&self) -> Result<Array2<T>, ShapeError> {
        Array2::from_shape_vec(self.dimensions(), self.as_slice().to_vec())
    }

    /// Move the buffer into a `rows x columns` array without copying
    pub fn into_array2(self) -> Result<Array2<T>, ShapeError> {
        let (rows, columns, data) = self.into_raw_parts();
        log::trace!("Exporting {rows}x{columns} matrix to ndarray");
        Array2::from_shape_vec((rows, columns), data)
    }
}
