//! Diagnostics and error handling for the CQL splice engine
//!
//! This crate provides the error handling infrastructure shared by the
//! declaration scanner and the splice engine: error codes, source positions,
//! and the `SpliceError` type.

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for splice operations
pub type Result<T> = std::result::Result<T, SpliceError>;
