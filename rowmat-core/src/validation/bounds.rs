//! Row-size and index bounds validation
//!
//! Pure arithmetic checks over a row-major layout: element `(row, col)`
//! of a matrix with `columns` columns lives at `row * columns + col`.
//! All index contracts are half-open, `[0, bound)`.

use core::ops::Range;

use crate::MatrixError;

/// Validate that a column count can back a dense matrix
pub const fn validate_columns(columns: usize) -> Result<(), MatrixError> {
    if columns == 0 {
        return Err(MatrixError::ZeroColumns);
    }
    Ok(())
}

/// Validate that a row of `len` values fits a matrix with `columns` columns
pub const fn validate_row_size(len: usize, columns: usize) -> Result<(), MatrixError> {
    if len != columns {
        return Err(MatrixError::RowSize {
            expected: columns,
            actual: len,
        });
    }
    Ok(())
}

/// Validate that `row` addresses an existing row
pub const fn validate_row_index(row: usize, rows: usize) -> Result<(), MatrixError> {
    if row >= rows {
        return Err(MatrixError::RowIndex { index: row, rows });
    }
    Ok(())
}

/// Validate that `column` addresses an existing column
pub const fn validate_column_index(column: usize, columns: usize) -> Result<(), MatrixError> {
    if column >= columns {
        return Err(MatrixError::ColumnIndex {
            index: column,
            columns,
        });
    }
    Ok(())
}

/// Validate a cell position and return its offset in the row-major buffer
///
/// The row is checked before the column, so a position that is out of
/// bounds on both axes reports [`MatrixError::RowIndex`].
pub const fn validate_position(
    row: usize,
    column: usize,
    rows: usize,
    columns: usize,
) -> Result<usize, MatrixError> {
    if let Err(err) = validate_row_index(row, rows) {
        return Err(err);
    }
    if let Err(err) = validate_column_index(column, columns) {
        return Err(err);
    }
    Ok(row * columns + column)
}

/// Validate a wholesale buffer length and return the row count it implies
pub const fn validate_backing_len(len: usize, columns: usize) -> Result<usize, MatrixError> {
    if let Err(err) = validate_columns(columns) {
        return Err(err);
    }
    if len % columns != 0 {
        // Report the length of the trailing partial row
        return Err(MatrixError::RowSize {
            expected: columns,
            actual: len % columns,
        });
    }
    Ok(len / columns)
}

/// Buffer indices spanned by `row`
pub const fn row_span(row: usize, columns: usize) -> Range<usize> {
    let start = row * columns;
    start..start + columns
}
