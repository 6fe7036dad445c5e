//! Input artifacts
//!
//! The descriptors arrive from the surrounding application (a terminology
//! search dialog) as JSON with camelCase fields.

use serde::Deserialize;

/// A code to be declared in the CQL document
///
/// Identity for matching is `(name, codeSystem base name)`;
/// `version_included` widens codesystem identity to include the SVS version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Code {
    /// The code value (e.g., `24353-5`)
    pub name: String,
    /// Human-readable display text
    pub display: String,
    /// Code system name (e.g., `LOINC`)
    pub code_system: String,
    /// Code system OID, with or without the `urn:oid:` prefix
    pub code_system_oid: String,
    /// Code system version as reported by the terminology service
    #[serde(default)]
    pub svs_version: Option<String>,
    /// Whether the declaration should pin the codesystem version
    #[serde(default)]
    pub version_included: bool,
    /// Disambiguating suffix for duplicate display names
    #[serde(default)]
    pub suffix: Option<String>,
}

impl Code {
    /// The SVS version, only when the declaration should carry it
    pub(crate) fn versioned(&self) -> Option<&str> {
        if self.version_included {
            self.svs_version.as_deref()
        } else {
            None
        }
    }

    /// The declared code name: display text plus optional suffix
    pub(crate) fn declared_name(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{} ({})", self.display, suffix),
            None => self.display.clone(),
        }
    }
}

/// A value set to be declared in the CQL document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSetForSearch {
    /// Human title of the value set
    pub title: String,
    /// Value set OID, with or without the `urn:oid:` prefix
    pub oid: String,
    /// Disambiguating numeric suffix for duplicate titles
    #[serde(default)]
    pub suffix: Option<u32>,
}

impl ValueSetForSearch {
    /// The declared title: `"{title}"` or `"{title} ({suffix})"`
    pub fn declared_title(&self) -> String {
        match self.suffix {
            Some(suffix) => format!("{} ({})", self.title, suffix),
            None => self.title.clone(),
        }
    }
}
