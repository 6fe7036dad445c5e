//! Idempotent terminology declaration splicing for CQL documents
//!
//! Given a CQL document and a terminology artifact (a code or a value set),
//! the appliers in this crate ensure a matching declaration exists:
//! inserting one at the correct position, updating one in place, or leaving
//! the document untouched when the declaration is already present. Mutation
//! is targeted line-array surgery guided by the declaration spans reported
//! by the scanner; the rest of the document is never reformatted.
//!
//! Both appliers are pure functions of `(cql, artifact)`: the inventory is
//! recomputed on every call and no state is held between calls. Applying the
//! same artifact twice yields an `info` result with unchanged text.
//!
//! # Example
//!
//! ```ignore
//! use cql_splice_engine::{apply_code, Code};
//!
//! let result = apply_code(&cql, &code)?;
//! assert_eq!(result.status, ChangeStatus::Success);
//! ```

mod apply_code;
mod apply_valueset;
mod artifact;
mod buffer;
mod declaration_text;
mod insertion;
mod matching;
mod normalize;
mod ordering;

pub use apply_code::apply_code;
pub use apply_valueset::apply_valueset;
pub use artifact::{Code, ValueSetForSearch};
pub use buffer::LineBuffer;
pub use normalize::{VsKey, extract_value_set_name_and_suffix};

use serde::Serialize;
use std::fmt;

/// Outcome category of an apply operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    /// A textual change was made (insert, update, or sort-rewrite)
    Success,
    /// Already present; no change was needed
    Info,
    /// Unclassified state; should be treated as a bug if observed
    Danger,
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeStatus::Success => write!(f, "success"),
            ChangeStatus::Info => write!(f, "info"),
            ChangeStatus::Danger => write!(f, "danger"),
        }
    }
}

/// Result of an apply operation
#[derive(Debug, Clone, Serialize)]
pub struct ChangeResult {
    /// The (possibly mutated) CQL text
    pub cql: String,
    /// Outcome category
    pub status: ChangeStatus,
    /// Human-readable message for the editor UI
    pub message: String,
}

impl ChangeResult {
    /// Check whether the operation changed the document
    pub fn is_change(&self) -> bool {
        self.status == ChangeStatus::Success
    }
}
