//! Code applier

use crate::artifact::Code;
use crate::buffer::LineBuffer;
use crate::declaration_text::{code_declaration, code_system_declaration};
use crate::insertion::{code_insert_point, code_system_insert_point};
use crate::matching::{find_code, find_code_system};
use crate::{ChangeResult, ChangeStatus};
use cql_splice_diagnostics::Result;
use cql_splice_parser::scan;

/// Ensure the code and its codesystem are declared in the document
///
/// The codesystem and the code are classified independently: either may be
/// inserted, the code may additionally be updated in place when its
/// declaration text drifted (display, suffix, or codesystem version). When
/// the codesystem is inserted in the same call, every code position derived
/// from the pre-insertion parse is shifted by the one line just added;
/// `inserted_lines` carries that shift explicitly.
///
/// Parse failures from the scanner propagate; the caller is expected to
/// hold a document that already parses.
pub fn apply_code(cql: &str, code: &Code) -> Result<ChangeResult> {
    let decls = scan(cql)?;
    let mut buffer = LineBuffer::split(cql);

    let mut inserted_lines = 0;
    if find_code_system(code, &decls.code_systems).is_none() {
        let at = code_system_insert_point(&decls);
        log::debug!("inserting codesystem for {} at index {at}", code.code_system);
        buffer.insert(at, code_system_declaration(code));
        inserted_lines = 1;
    }

    let candidate = code_declaration(code);
    let (status, message) = match find_code(code, &decls.codes) {
        Some(existing) if existing.text == candidate => (
            ChangeStatus::Info,
            "This code is already defined in the CQL.".to_string(),
        ),
        Some(existing) => {
            log::debug!("updating code {} on line {}", code.name, existing.span.stop.line);
            buffer.replace(existing.span.stop.line - 1 + inserted_lines, candidate);
            (
                ChangeStatus::Success,
                format!("Code {} has been updated successfully.", code.name),
            )
        }
        None => {
            let at = code_insert_point(&decls) + inserted_lines;
            log::debug!("inserting code {} at index {at}", code.name);
            buffer.insert(at, candidate);
            (
                ChangeStatus::Success,
                format!("Code {} has been successfully added to the CQL.", code.name),
            )
        }
    };

    Ok(ChangeResult {
        cql: buffer.join(),
        status,
        message,
    })
}
