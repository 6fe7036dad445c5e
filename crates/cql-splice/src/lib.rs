//! Terminology declaration splicing for CQL documents
//!
//! This crate keeps the terminology header of a CQL (Clinical Quality
//! Language) document in sync with artifacts picked from a terminology
//! search: given a code or a value set, it ensures the matching
//! `codesystem`/`code`/`valueset` declaration exists, splicing one into the
//! right position, rewriting it in place, or reporting that it is already
//! there. Everything else in the document — formatting, comments, the
//! statement section — is left byte-for-byte intact.
//!
//! # Example
//!
//! ```ignore
//! use cql_splice::{apply_code, Code};
//!
//! let result = apply_code(&cql, &code)?;
//! println!("{}: {}", result.status, result.message);
//! ```

// Re-export all public APIs from internal crates
pub use cql_splice_diagnostics as diagnostics;
pub use cql_splice_engine as engine;
pub use cql_splice_parser as parser;

// Convenience re-exports
pub use cql_splice_diagnostics::{Result, SpliceError};
pub use cql_splice_engine::{
    ChangeResult, ChangeStatus, Code, ValueSetForSearch, apply_code, apply_valueset,
};
pub use cql_splice_parser::{Declarations, scan};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
