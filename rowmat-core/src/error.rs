//! Error types for matrix operations

/// Errors that can occur during matrix operations
///
/// Every variant is recoverable: bounds and size violations are reported to
/// the caller and the matrix is left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Row (or backing buffer) length does not fit the column count
    RowSize { expected: usize, actual: usize },
    /// Row index outside `[0, rows)`
    RowIndex { index: usize, rows: usize },
    /// Column index outside `[0, columns)`
    ColumnIndex { index: usize, columns: usize },
    /// Dense matrices need at least one column
    ZeroColumns,
}

/// Coarse grouping of [`MatrixError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Length of supplied data does not match the matrix shape
    Size,
    /// Index addresses a row or column that does not exist
    Bounds,
    /// Matrix could not be constructed with the given shape
    Construction,
}

impl MatrixError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::RowSize { .. } => ErrorCategory::Size,
            MatrixError::RowIndex { .. } | MatrixError::ColumnIndex { .. } => ErrorCategory::Bounds,
            MatrixError::ZeroColumns => ErrorCategory::Construction,
        }
    }

    /// Returns true for row or column index errors
    pub const fn is_bounds_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Bounds)
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::RowSize { expected, actual } => {
                write!(f, "Row size {actual} does not match column count {expected}")
            }
            MatrixError::RowIndex { index, rows } => {
                write!(f, "Row index {index} out of bounds for {rows} rows")
            }
            MatrixError::ColumnIndex { index, columns } => {
                write!(f, "Column index {index} out of bounds for {columns} columns")
            }
            MatrixError::ZeroColumns => write!(f, "Matrix must have at least one column"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
