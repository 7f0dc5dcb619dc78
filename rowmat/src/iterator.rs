//! Single-pass row cursor over a dense matrix
//!
//! A [`RowIterator`] mutably borrows its matrix, so it cannot outlive the
//! matrix and no other reader or writer can touch the buffer while a pass
//! is in progress. Create a fresh iterator for every traversal.

use std::ops::Range;

use rowmat_core::{row_span, MatrixElement};

use crate::dense::DenseMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    BeforeFirst,
    OnRow(usize),
    Exhausted,
}

/// Forward-only cursor over the rows of a [`DenseMatrix`]
#[derive(Debug)]
pub struct RowIterator<'a, T: MatrixElement> {
    matrix: &'a mut DenseMatrix<T>,
    cursor: Cursor,
}

impl<'a, T: MatrixElement> RowIterator<'a, T> {
    /// Create an iterator positioned before the first row
    pub fn new(matrix: &'a mut DenseMatrix<T>) -> Self {
        Self {
            matrix,
            cursor: Cursor::BeforeFirst,
        }
    }

    /// Move to the next row
    ///
    /// Returns false once every row has been visited, and on every call
    /// after that.
    pub fn advance(&mut self) -> bool {
        let next = match self.cursor {
            Cursor::BeforeFirst => 0,
            Cursor::OnRow(row) => row + 1,
            Cursor::Exhausted => return false,
        };

        if next < self.matrix.rows() {
            self.cursor = Cursor::OnRow(next);
            true
        } else {
            self.cursor = Cursor::Exhausted;
            false
        }
    }

    /// Index of the row the cursor is on
    pub fn index(&self) -> Option<usize> {
        match self.cursor {
            Cursor::OnRow(row) => Some(row),
            _ => None,
        }
    }

    /// Returns true once the pass is complete
    pub fn is_exhausted(&self) -> bool {
        self.cursor == Cursor::Exhausted
    }

    /// Number of columns in the underlying matrix
    pub fn columns(&self) -> usize {
        self.matrix.columns()
    }

    /// Buffer indices spanned by the current row
    ///
    /// Before the first [`advance`](Self::advance) this is row 0.
    pub fn row_indices(&self) -> Option<Range<usize>> {
        let row = match self.cursor {
            Cursor::BeforeFirst if !self.matrix.is_empty() => 0,
            Cursor::OnRow(row) => row,
            _ => return None,
        };
        Some(row_span(row, self.matrix.columns()))
    }

    /// The current row
    pub fn row(&self) -> Option<&[T]> {
        let span = self.row_indices()?;
        Some(&self.matrix.as_slice()[span])
    }

    /// The current row, writable in place
    pub fn row_mut(&mut self) -> Option<&mut [T]> {
        let span = self.row_indices()?;
        Some(&mut self.matrix.data_mut()[span])
    }

    /// Replace every element `x` of the remaining rows with `f(x)`
    ///
    /// Drives the iterator to completion; rows are visited in order.
    pub fn apply_to_matrix<F>(&mut self, mut f: F)
    where
        F: FnMut(T) -> T,
    {
        while self.advance() {
            if let Some(row) = self.row_mut() {
                for value in row.iter_mut() {
                    *value = f(*value);
                }
            }
        }
    }

    /// Replace `x` with `f(x)` for elements in the listed columns only
    ///
    /// Column indices are relative to the row. Each matching element is
    /// transformed once even if its column is listed more than once;
    /// indices past the last column are ignored.
    pub fn apply_to_columns<F>(&mut self, mut f: F, columns: &[usize])
    where
        F: FnMut(T) -> T,
    {
        while self.advance() {
            if let Some(row) = self.row_mut() {
                for (column, value) in row.iter_mut().enumerate() {
                    if columns.contains(&column) {
                        *value = f(*value);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_iterator() {
        let columns = 3;
        let mut matrix = DenseMatrix::<f64>::new(columns).unwrap();
        matrix.add_row(&[1.0, 2.0, 3.0]).unwrap();

        let mut iter = matrix.iterator();
        let mut visited = 0;
        while iter.advance() {
            assert_eq!(iter.index(), Some(0));
            assert_eq!(iter.row().unwrap().len(), columns);
            assert_eq!(iter.row_indices(), Some(0..3));
            visited += 1;
        }
        assert_eq!(visited, 1);

        matrix.add_row(&[4.0, 5.0, 6.0]).unwrap();

        let mut iter = matrix.iterator();
        let mut visited = Vec::new();
        while iter.advance() {
            let index = iter.index().unwrap();
            let start = index * iter.columns();
            assert_eq!(iter.row_indices(), Some(start..start + columns));
            visited.push(index);
        }
        assert_eq!(visited, vec![0, 1]);

        // square
        matrix.iterator().apply_to_matrix(|v| v * v);
        assert_eq!(matrix.get_row(0).unwrap(), &[1.0, 4.0, 9.0]);
        assert_eq!(matrix.get_row(1).unwrap(), &[16.0, 25.0, 36.0]);

        // column 0 -> add 1
        matrix.iterator().apply_to_columns(|v| v + 1.0, &[0]);
        assert_eq!(matrix.get_row(0).unwrap(), &[2.0, 4.0, 9.0]);
        assert_eq!(matrix.get_row(1).unwrap(), &[17.0, 25.0, 36.0]);
    }

    #[test]
    fn test_bool_iterator() {
        let mut matrix = DenseMatrix::new(3).unwrap();
        matrix.add_row(&[true, true, true]).unwrap();
        matrix.add_row(&[false, false, false]).unwrap();

        // invert
        matrix.iterator().apply_to_matrix(|v: bool| !v);
        assert_eq!(matrix.get_row(0).unwrap(), &[false, false, false]);
        assert_eq!(matrix.get_row(1).unwrap(), &[true, true, true]);

        // column 0 -> all true
        matrix.iterator().apply_to_columns(|_| true, &[0]);
        assert_eq!(matrix.get_row(0).unwrap(), &[true, false, false]);
        assert_eq!(matrix.get_row(1).unwrap(), &[true, true, true]);
    }

    #[test]
    fn test_state_transitions() {
        let mut matrix = DenseMatrix::<f64>::new(2).unwrap();
        matrix.add_row(&[1.0, 2.0]).unwrap();
        matrix.add_row(&[3.0, 4.0]).unwrap();

        let mut iter = matrix.iterator();
        assert_eq!(iter.index(), None);
        // Before the first advance the view clamps to row 0
        assert_eq!(iter.row(), Some(&[1.0, 2.0][..]));

        assert!(iter.advance());
        assert!(iter.advance());
        assert_eq!(iter.row(), Some(&[3.0, 4.0][..]));
        assert!(!iter.advance());
        assert!(iter.is_exhausted());
        assert!(!iter.advance());
        assert_eq!(iter.row(), None);
        assert_eq!(iter.row_indices(), None);
    }

    #[test]
    fn test_empty_matrix_iterator() {
        let mut matrix = DenseMatrix::<bool>::new(4).unwrap();
        let mut iter = matrix.iterator();
        assert_eq!(iter.row(), None);
        assert!(!iter.advance());

        let mut calls = 0;
        matrix.iterator().apply_to_matrix(|v| {
            calls += 1;
            v
        });
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_row_mut_writes_through() {
        let mut matrix = DenseMatrix::<f64>::new(2).unwrap();
        matrix.add_row(&[1.0, 2.0]).unwrap();
        matrix.add_row(&[3.0, 4.0]).unwrap();

        let mut iter = matrix.iterator();
        while iter.advance() {
            if let Some(row) = iter.row_mut() {
                row.reverse();
            }
        }
        assert_eq!(matrix.as_slice(), &[2.0, 1.0, 4.0, 3.0]);
    }

    #[test]
    fn test_apply_to_matrix_calls_once_per_element() {
        let mut matrix = DenseMatrix::<f64>::from_rows(3, [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let before = matrix.clone();

        let mut calls = 0;
        matrix.iterator().apply_to_matrix(|v| {
            calls += 1;
            v * 10.0 - 1.0
        });

        assert_eq!(calls, 6);
        for (after, original) in matrix.as_slice().iter().zip(before.as_slice()) {
            assert_eq!(*after, original * 10.0 - 1.0);
        }
    }

    #[test]
    fn test_apply_to_columns_leaves_other_columns() {
        let mut matrix = DenseMatrix::<f64>::from_rows(
            3,
            [[1.5, -2.0, f64::MAX], [0.1, 0.2, 0.3], [-0.0, 7.0, 8.0]],
        )
        .unwrap();
        let before = matrix.clone();

        matrix.iterator().apply_to_columns(|v| v * 2.0, &[1, 1, 9]);

        for row in 0..matrix.rows() {
            for column in [0, 2] {
                let after = matrix.get_value(row, column).unwrap();
                let original = before.get_value(row, column).unwrap();
                assert_eq!(after.to_bits(), original.to_bits());
            }
            assert_eq!(
                matrix.get_value(row, 1).unwrap(),
                before.get_value(row, 1).unwrap() * 2.0
            );
        }
    }

    #[test]
    fn test_apply_after_partial_pass() {
        let mut matrix = DenseMatrix::<f64>::from_rows(1, [[1.0], [2.0], [3.0]]).unwrap();

        let mut iter = matrix.iterator();
        assert!(iter.advance());
        // Remaining rows only
        iter.apply_to_matrix(|v| -v);
        assert!(iter.is_exhausted());

        assert_eq!(matrix.as_slice(), &[1.0, -2.0, -3.0]);
    }
}
