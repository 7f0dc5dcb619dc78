//! Core matrix abstraction trait
//!
//! Shared read-only interface for the dense and sparse matrix
//! implementations. This is a pure interface with no concrete
//! implementations.

use super::element::ElementType;

/// Format-agnostic read access to a matrix
pub trait Matrix {
    /// The element type stored in this matrix
    type Element: Copy;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the position does not address a stored cell.
    /// Sparse implementations return the implicit zero for unset cells.
    fn value_at(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get the element type tag
    fn element_type(&self) -> ElementType;
}
