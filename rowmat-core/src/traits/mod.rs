//! Abstract interfaces for row-major matrices
//!
//! This module defines the element constraint and the shared matrix trait.

pub mod element;
pub mod matrix;

pub use element::{ElementType, MatrixElement};
pub use matrix::Matrix;
