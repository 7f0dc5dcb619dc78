//! Coordinate-addressed sparse matrix
//!
//! Values are kept in a map of rows, each holding a map of columns.
//! Rows are created lazily on first write and never removed.

use hashbrown::HashMap;
use rowmat_core::{ElementType, Matrix, MatrixError, Result};

/// Sparse matrix of `f64` values for mostly-unset data
///
/// Unset coordinates read as `0.0`. Both fields are public so that a
/// generic serializer can walk them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sparse {
    /// Largest column index ever written (a high-water mark, not a bound)
    pub columns: usize,
    /// Row index -> column index -> value
    pub data: HashMap<usize, HashMap<usize, f64>>,
}

impl Sparse {
    /// Create an empty sparse matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows that hold at least one set coordinate
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    /// Largest column index ever written
    ///
    /// Not a strict upper bound: a matrix with a value in column 5 reports
    /// 5, and one with values only in column 0 reports 0.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of stored coordinates
    pub fn nnz(&self) -> usize {
        self.data.values().map(HashMap::len).sum()
    }

    /// Sparse matrices always hold `f64` values
    pub fn element_type(&self) -> ElementType {
        ElementType::Float64
    }

    /// Set the value at `(row, col)`, overwriting any previous value
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.columns = self.columns.max(col);
        self.data.entry(row).or_default().insert(col, value);
    }

    /// Get the value at `(row, col)`, or `0.0` if it was never set
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data
            .get(&row)
            .and_then(|columns| columns.get(&col))
            .copied()
            .unwrap_or(0.0)
    }

    /// Add `1.0` to the value at `(row, col)`
    pub fn increment(&mut self, row: usize, col: usize) {
        self.columns = self.columns.max(col);
        *self.data.entry(row).or_default().entry(col).or_insert(0.0) += 1.0;
    }

    /// All `(column, value)` pairs of `row`, in no particular order
    ///
    /// Fails with a row index error if nothing was ever set in `row`.
    pub fn get_row(&self, row: usize) -> Result<ColumnValues> {
        let columns = self.data.get(&row).ok_or(MatrixError::RowIndex {
            index: row,
            rows: self.rows(),
        })?;

        Ok(columns
            .iter()
            .map(|(&column, &value)| ColumnValue { column, value })
            .collect())
    }

    /// All `(row, value)` pairs of `col`, in no particular order
    ///
    /// Scans every row; there is no column index.
    pub fn get_column(&self, col: usize) -> RowValues {
        self.data
            .iter()
            .filter_map(|(&row, columns)| {
                columns.get(&col).map(|&value| RowValue { row, value })
            })
            .collect()
    }
}

impl Matrix for Sparse {
    type Element = f64;

    fn value_at(&self, row: usize, col: usize) -> Option<f64> {
        Some(self.get(row, col))
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.columns)
    }

    fn element_type(&self) -> ElementType {
        ElementType::Float64
    }
}

/// A stored entry of a sparse row or column
pub trait SparseEntry {
    /// The stored value
    fn value(&self) -> f64;
}

/// One value of a sparse row, tagged with its column
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnValue {
    pub column: usize,
    pub value: f64,
}

/// One value of a sparse column, tagged with its row
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowValue {
    pub row: usize,
    pub value: f64,
}

impl SparseEntry for ColumnValue {
    fn value(&self) -> f64 {
        self.value
    }
}

impl SparseEntry for RowValue {
    fn value(&self) -> f64 {
        self.value
    }
}

/// Materialized values extracted from a [`Sparse`] matrix
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SparseValues<E> {
    entries: Vec<E>,
}

/// Values of one sparse row
pub type ColumnValues = SparseValues<ColumnValue>;

/// Values of one sparse column
pub type RowValues = SparseValues<RowValue>;

impl<E: SparseEntry> SparseValues<E> {
    /// Sum of all values
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(SparseEntry::value).sum()
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no values
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    /// Consume into the underlying entries
    pub fn into_vec(self) -> Vec<E> {
        self.entries
    }
}

impl<E> Default for SparseValues<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E> FromIterator<E> for SparseValues<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<E> IntoIterator for SparseValues<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a SparseValues<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
