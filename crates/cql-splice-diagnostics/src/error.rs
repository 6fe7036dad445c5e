//! Splice engine error types

use crate::{ErrorCode, Position};
use thiserror::Error;

/// Main error type for the splice engine
///
/// The appliers themselves classify every state into a `ChangeResult`; the
/// only failure that surfaces as an error is the declaration scanner
/// rejecting the document.
#[derive(Debug, Clone, Error)]
pub enum SpliceError {
    /// Declaration scanning failed
    #[error("{code}: {message}")]
    Parse {
        code: ErrorCode,
        message: String,
        location: Option<Position>,
    },
}

impl SpliceError {
    /// Create a parse error
    pub fn parse(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Parse {
            code,
            message: message.into(),
            location: None,
        }
    }

    /// Create a parse error with a source location
    pub fn parse_at(code: ErrorCode, message: impl Into<String>, location: Position) -> Self {
        Self::Parse {
            code,
            message: message.into(),
            location: Some(location),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Parse { code, .. } => *code,
        }
    }

    /// Get the source location if available
    pub fn location(&self) -> Option<Position> {
        match self {
            Self::Parse { location, .. } => *location,
        }
    }
}
