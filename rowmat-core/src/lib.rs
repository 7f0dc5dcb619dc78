#![no_std]

//! rowmat core - Row-major matrix definitions
//!
//! This crate provides the error type, element trait and bounds
//! validation shared by the dense and sparse matrix implementations.
//! It performs no allocation.

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod traits;
pub mod validation;

pub use error::*;
pub use traits::*;
pub use validation::*;
