//! Bounds and row-size validation utilities
//!
//! This module contains pure validation functions over row-major index
//! arithmetic. Nothing here touches a buffer.

pub mod bounds;

pub use bounds::{
    row_span, validate_backing_len, validate_column_index, validate_columns, validate_position,
    validate_row_index, validate_row_size,
};
