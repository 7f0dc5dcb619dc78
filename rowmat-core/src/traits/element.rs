//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored in a dense matrix. The set is closed: only `f64` and `bool`
//! implement [`MatrixElement`].

mod sealed {
    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for bool {}
}

/// Tag describing the element type held by a matrix
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElementType {
    /// 64-bit floating point
    Float64 = 0,
    /// Boolean
    Bool = 1,
}

impl ElementType {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ElementType::Float64),
            1 => Some(ElementType::Bool),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Name of the element type
    pub const fn name(self) -> &'static str {
        match self {
            ElementType::Float64 => "float64",
            ElementType::Bool => "bool",
        }
    }
}

impl core::fmt::Display for ElementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Trait for types that can be stored as dense matrix elements
///
/// All element types must be:
/// - Copy: cells are read out by value
/// - PartialEq: rows can be compared for equality
/// - Debug: matrices can be printed
///
/// The trait is sealed, so the element set cannot be extended downstream.
pub trait MatrixElement: sealed::Sealed + Copy + PartialEq + core::fmt::Debug + Sized {
    /// Get the [`ElementType`] tag for this element type
    fn element_type() -> ElementType;

    /// The zero value (`0.0` / `false`)
    fn zero() -> Self;

    /// Returns true if this value equals the type's zero value
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl MatrixElement for f64 {
    fn element_type() -> ElementType {
        ElementType::Float64
    }

    fn zero() -> Self {
        0.0
    }
}

impl MatrixElement for bool {
    fn element_type() -> ElementType {
        ElementType::Bool
    }

    fn zero() -> Self {
        false
    }
}
