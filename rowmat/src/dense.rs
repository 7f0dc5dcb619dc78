//! Row-major dense matrix backed by a single flat buffer
//!
//! Element `(row, col)` lives at `row * columns + col`. Every mutator
//! appends, removes or rebuilds whole rows, so the buffer length is a
//! multiple of the column count at every observable point.

use std::borrow::Cow;
use std::slice::ChunksExact;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rowmat_core::{
    row_span, validate_backing_len, validate_column_index, validate_columns, validate_position,
    validate_row_index, validate_row_size, ElementType, Matrix, MatrixElement, Result,
};

use crate::config::SampleConfig;
use crate::iterator::RowIterator;

/// Dense matrix of `f64` or `bool` values stored row after row
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T: MatrixElement> {
    data: Vec<T>,
    columns: usize,
}

impl<T: MatrixElement> DenseMatrix<T> {
    /// Create an empty matrix with the given column count
    ///
    /// Fails with [`MatrixError::ZeroColumns`](rowmat_core::MatrixError::ZeroColumns)
    /// when `columns == 0`.
    pub fn new(columns: usize) -> Result<Self> {
        validate_columns(columns)?;
        Ok(Self {
            data: Vec::new(),
            columns,
        })
    }

    /// Build a matrix from an iterator of rows
    pub fn from_rows<I, R>(columns: usize, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        let mut matrix = Self::new(columns)?;
        for row in rows {
            matrix.add_row(row.as_ref())?;
        }
        Ok(matrix)
    }

    /// Append `row` as the new last row
    ///
    /// The matrix is unchanged if the row length does not match the
    /// column count.
    pub fn add_row(&mut self, row: &[T]) -> Result<()> {
        validate_row_size(row.len(), self.columns)?;
        self.data.extend_from_slice(row);
        Ok(())
    }

    /// Add a column holding `default_value` in every existing row
    pub fn append_column(&mut self, default_value: T) {
        let rows = self.rows();
        let mut data = Vec::with_capacity(rows * (self.columns + 1));
        for row in self.data.chunks_exact(self.columns) {
            data.extend_from_slice(row);
            data.push(default_value);
        }

        self.columns += 1;
        self.data = data;
        log::debug!(
            "Appended column {} to {} rows ({} elements)",
            self.columns - 1,
            rows,
            self.data.len()
        );
    }

    /// Delete `row`, shifting every later row up by one
    pub fn remove_row(&mut self, row: usize) -> Result<()> {
        validate_row_index(row, self.rows())?;
        self.data.drain(row_span(row, self.columns));
        log::trace!("Removed row {row}, {} rows remain", self.rows());
        Ok(())
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of complete rows
    pub fn rows(&self) -> usize {
        self.data.len() / self.columns
    }

    /// Matrix dimensions as (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.columns)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows()
    }

    /// Returns true if the matrix holds no rows
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element type tag of this matrix
    pub fn element_type(&self) -> ElementType {
        T::element_type()
    }

    /// Borrow `row` as a window into the backing buffer
    pub fn get_row(&self, row: usize) -> Result<&[T]> {
        validate_row_index(row, self.rows())?;
        Ok(&self.data[row_span(row, self.columns)])
    }

    /// Mutably borrow `row`; writes land directly in the backing buffer
    pub fn get_row_mut(&mut self, row: usize) -> Result<&mut [T]> {
        validate_row_index(row, self.rows())?;
        Ok(&mut self.data[row_span(row, self.columns)])
    }

    /// Get the value at `(row, column)`
    pub fn get_value(&self, row: usize, column: usize) -> Result<T> {
        let offset = validate_position(row, column, self.rows(), self.columns)?;
        Ok(self.data[offset])
    }

    /// Overwrite the value at `(row, column)`
    pub fn update_value(&mut self, value: T, row: usize, column: usize) -> Result<()> {
        let offset = validate_position(row, column, self.rows(), self.columns)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Copy out the values of `column` across all rows, in row order
    pub fn get_column_data(&self, column: usize) -> Result<Vec<T>> {
        validate_column_index(column, self.columns)?;
        Ok(self.iter_rows().map(|row| row[column]).collect())
    }

    /// Read-only traversal of the rows in order
    pub fn iter_rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.columns)
    }

    /// Create a single-pass cursor over the rows
    pub fn iterator(&mut self) -> RowIterator<'_, T> {
        RowIterator::new(self)
    }

    /// Representative of the largest group of identical rows
    ///
    /// Ties go to the group whose first member appears earliest.
    pub fn mode(&self) -> Option<&[T]> {
        let mut groups: Vec<(&[T], usize)> = Vec::new();
        for row in self.iter_rows() {
            match groups.iter_mut().find(|(representative, _)| *representative == row) {
                Some((_, count)) => *count += 1,
                None => groups.push((row, 1)),
            }
        }

        let mut best: Option<(&[T], usize)> = None;
        for (representative, count) in groups {
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((representative, count));
            }
        }
        best.map(|(representative, _)| representative)
    }

    /// New matrix holding only the rows that contain a non-zero value
    pub fn non_zero_rows(&self) -> Self {
        let mut data = Vec::new();
        for row in self.iter_rows() {
            if !row.iter().all(|value| value.is_zero()) {
                data.extend_from_slice(row);
            }
        }
        Self {
            data,
            columns: self.columns,
        }
    }

    /// Randomly sample rows using the thread-local RNG
    ///
    /// See [`sample_with`](Self::sample_with).
    pub fn sample(&self, amount: usize) -> Cow<'_, Self> {
        self.sample_with(amount, &mut rand::thread_rng())
    }

    /// Randomly sample rows, seeding the RNG from `config` when set
    pub fn sample_with_config(&self, amount: usize, config: &SampleConfig) -> Cow<'_, Self> {
        match config.seed() {
            Some(seed) => self.sample_with(amount, &mut StdRng::seed_from_u64(seed)),
            None => self.sample(amount),
        }
    }

    /// Randomly sample rows with the given RNG
    ///
    /// `amount` is compared against the total element count, not the row
    /// count. When it is at least that large the matrix itself is returned,
    /// borrowed rather than copied. Otherwise every row is kept independently
    /// with probability `amount / elements`, so the resulting row count is
    /// only approximately proportional to `amount`.
    pub fn sample_with<R: Rng + ?Sized>(&self, amount: usize, rng: &mut R) -> Cow<'_, Self> {
        let total = self.data.len();
        if amount >= total {
            return Cow::Borrowed(self);
        }

        let percentage = amount as f64 / total as f64 * 100.0;
        let mut data = Vec::new();
        for row in self.iter_rows() {
            if f64::from(rng.gen_range(0..100u32)) < percentage {
                data.extend_from_slice(row);
            }
        }

        let sample = Self {
            data,
            columns: self.columns,
        };
        log::debug!(
            "Sampled {} of {} rows (inclusion {percentage:.2}%)",
            sample.rows(),
            self.rows()
        );
        Cow::Owned(sample)
    }

    /// Replace the backing buffer outright
    ///
    /// The buffer must hold a whole number of rows; otherwise the matrix is
    /// left untouched and a row size error is returned.
    pub fn set_backing_data(&mut self, data: Vec<T>) -> Result<()> {
        match validate_backing_len(data.len(), self.columns) {
            Ok(rows) => {
                log::debug!("Replaced backing data with {rows} rows");
                self.data = data;
                Ok(())
            }
            Err(err) => {
                log::warn!("Rejected backing data of length {}: {err}", data.len());
                Err(err)
            }
        }
    }

    /// The row-major backing buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Decompose into `(rows, columns, row-major buffer)`
    pub fn into_raw_parts(self) -> (usize, usize, Vec<T>) {
        let rows = self.rows();
        (rows, self.columns, self.data)
    }

    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl DenseMatrix<f64> {
    /// Row with the greatest element sum; the earliest row wins ties
    pub fn max_sum(&self) -> Option<&[f64]> {
        self.select_row_by_sum(|sum, best| sum > best)
    }

    /// Row with the smallest element sum; the earliest row wins ties
    pub fn min_sum(&self) -> Option<&[f64]> {
        self.select_row_by_sum(|sum, best| sum < best)
    }

    fn select_row_by_sum<F>(&self, replaces: F) -> Option<&[f64]>
    where
        F: Fn(f64, f64) -> bool,
    {
        let mut best: Option<(&[f64], f64)> = None;
        for row in self.iter_rows() {
            let sum: f64 = row.iter().sum();
            if best.map_or(true, |(_, best_sum)| replaces(sum, best_sum)) {
                best = Some((row, sum));
            }
        }
        best.map(|(row, _)| row)
    }
}

impl<T: MatrixElement> Matrix for DenseMatrix<T> {
    type Element = T;

    fn value_at(&self, row: usize, col: usize) -> Option<T> {
        self.get_value(row, col).ok()
    }

    fn dimensions(&self) -> (usize, usize) {
        DenseMatrix::dimensions(self)
    }

    fn element_type(&self) -> ElementType {
        T::element_type()
    }
}
