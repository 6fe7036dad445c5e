//! Error codes for declaration scanning
//!
//! Error code ranges:
//! - CQL0001-CQL0099: Parse errors (syntax)
//! - CQL0400-CQL0499: System errors (I/O, configuration)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get the short description for this code
    pub fn description(&self) -> &'static str {
        match self.0 {
            1 => "Unexpected token",
            2 => "Unexpected end of input",
            17 => "Invalid library declaration",
            18 => "Invalid using declaration",
            19 => "Invalid include declaration",
            21 => "Invalid codesystem declaration",
            22 => "Invalid valueset declaration",
            23 => "Invalid code declaration",
            401 => "I/O error",
            _ => "Unknown error",
        }
    }

    /// Check if this is a parse error (0001-0099)
    pub const fn is_parse_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CQL{:04}", self.0)
    }
}

// Convenient error code constants

pub const CQL0001: ErrorCode = ErrorCode::new(1);
pub const CQL0002: ErrorCode = ErrorCode::new(2);
pub const CQL0017: ErrorCode = ErrorCode::new(17);
pub const CQL0018: ErrorCode = ErrorCode::new(18);
pub const CQL0019: ErrorCode = ErrorCode::new(19);
pub const CQL0021: ErrorCode = ErrorCode::new(21);
pub const CQL0022: ErrorCode = ErrorCode::new(22);
pub const CQL0023: ErrorCode = ErrorCode::new(23);
pub const CQL0401: ErrorCode = ErrorCode::new(401);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(CQL0001.to_string(), "CQL0001");
        assert_eq!(CQL0401.to_string(), "CQL0401");
    }

    #[test]
    fn test_error_categories() {
        assert!(CQL0021.is_parse_error());
        assert!(!CQL0021.is_system_error());

        assert!(CQL0401.is_system_error());
        assert!(!CQL0401.is_parse_error());
    }

    #[test]
    fn test_description() {
        assert_eq!(CQL0021.description(), "Invalid codesystem declaration");
        assert_eq!(ErrorCode::new(999).description(), "Unknown error");
    }
}
