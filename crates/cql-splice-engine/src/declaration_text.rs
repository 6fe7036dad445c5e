//! Declaration builders
//!
//! Render the exact declaration line for an artifact. The rendered text is
//! also what the appliers compare against existing declarations, so the
//! formatting here is the single source of truth.

use crate::artifact::{Code, ValueSetForSearch};

/// Render a `code` declaration line
pub fn code_declaration(code: &Code) -> String {
    let system = match code.versioned() {
        Some(version) => format!("{}:{}", code.code_system, version),
        None => code.code_system.clone(),
    };
    format!(
        "code \"{}\": '{}' from \"{}\" display '{}'",
        code.declared_name(),
        code.name,
        system,
        code.display,
    )
}

/// Render a `codesystem` declaration line
pub fn code_system_declaration(code: &Code) -> String {
    match code.versioned() {
        Some(version) => format!(
            "codesystem \"{}:{version}\": 'urn:oid:{}' version 'urn:hl7:version:{version}'",
            code.code_system, code.code_system_oid,
        ),
        None => format!(
            "codesystem \"{}\": 'urn:oid:{}'",
            code.code_system, code.code_system_oid,
        ),
    }
}

/// Render a `valueset` declaration line
pub fn valueset_declaration(vs: &ValueSetForSearch) -> String {
    format!("valueset \"{}\": '{}'", vs.declared_title(), vs.oid)
}
