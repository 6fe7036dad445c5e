//! Declaration scanner for CQL terminology splicing
//!
//! The splice engine only needs to know *where* the terminology declarations
//! of a CQL document sit, not what its expressions mean. This crate provides
//! that view: a line-oriented scanner built with Winnow that recognizes the
//! six declaration kinds (`library`, `using`, `include`, `codesystem`,
//! `valueset`, `code`) and reports each with its raw identifier, its
//! kind-specific fields, a 1-indexed line/column span, and the verbatim
//! declaration text.
//!
//! Scanning stops at the statement section (`define`/`context`/`parameter`),
//! which in CQL follows all terminology declarations; expressions are never
//! parsed.

mod combinators;
mod declarations;

pub use declarations::{
    CodeDecl, CodeSystemDecl, Declarations, IncludeDecl, LibraryDecl, UsingDecl, ValuesetDecl,
    scan,
};
