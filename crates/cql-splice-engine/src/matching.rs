//! Match classification
//!
//! Decides whether an incoming artifact already has a corresponding
//! declaration. Codesystem matching is version-sensitive when the code pins
//! a version; code matching deliberately ignores the version in the
//! codesystem reference, so a code survives a codesystem version bump. That
//! asymmetry is load-bearing and must not be "fixed".

use crate::artifact::{Code, ValueSetForSearch};
use crate::normalize::{
    extract_value_set_name_and_suffix, oid_eq, strip_quotes, strip_version_prefix,
};
use cql_splice_parser::{CodeDecl, CodeSystemDecl, ValuesetDecl};

/// Find the codesystem declaration matching the code's codesystem, if any
pub fn find_code_system<'a>(
    code: &Code,
    code_systems: &'a [CodeSystemDecl],
) -> Option<&'a CodeSystemDecl> {
    code_systems.iter().find(|decl| {
        let name = strip_quotes(&decl.name);
        match code.versioned() {
            Some(svs) => {
                let version = decl
                    .version
                    .as_deref()
                    .map(|v| strip_version_prefix(strip_quotes(v)));
                name == format!("{}:{}", code.code_system, svs)
                    && oid_eq(&decl.oid, &code.code_system_oid)
                    && version == Some(svs)
            }
            None => name == code.code_system && oid_eq(&decl.oid, &code.code_system_oid),
        }
    })
}

/// Find the code declaration matching the code's value and codesystem base
/// name, if any
pub fn find_code<'a>(code: &Code, codes: &'a [CodeDecl]) -> Option<&'a CodeDecl> {
    codes.iter().find(|decl| {
        let code_id = strip_quotes(&decl.code_id);
        let system = strip_quotes(&decl.code_system);
        let base = system.split(':').next().unwrap_or(system);
        code_id == code.name && base == code.code_system
    })
}

/// True when a declaration carries the candidate's full title and oid
pub fn vs_exact_exists(vs: &ValueSetForSearch, value_sets: &[ValuesetDecl]) -> bool {
    let declared_title = vs.declared_title();
    value_sets
        .iter()
        .any(|decl| strip_quotes(&decl.name) == declared_title && oid_eq(&decl.url, &vs.oid))
}

/// True when a declaration shares the candidate's base identity
///
/// Matches on base name plus oid, or on the oid of a caller-supplied prior
/// entry (the rename/re-suffix path).
pub fn vs_same_title_exists(
    vs: &ValueSetForSearch,
    previous: Option<&ValueSetForSearch>,
    value_sets: &[ValuesetDecl],
) -> bool {
    let candidate_base = extract_value_set_name_and_suffix(&vs.title).base;
    value_sets.iter().any(|decl| {
        let declared = extract_value_set_name_and_suffix(&decl.name);
        (declared.base == candidate_base && oid_eq(&decl.url, &vs.oid))
            || previous.is_some_and(|prev| oid_eq(&decl.url, &prev.oid))
    })
}
