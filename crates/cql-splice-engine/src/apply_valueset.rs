//! Valueset applier

use crate::artifact::ValueSetForSearch;
use crate::buffer::LineBuffer;
use crate::declaration_text::valueset_declaration;
use crate::insertion::valueset_insert_point_when_none;
use crate::matching::{vs_exact_exists, vs_same_title_exists};
use crate::normalize::extract_value_set_name_and_suffix;
use crate::ordering::{
    find_insertion_index, find_replacement_index, rewrite_sorted, transformed_valuesets,
};
use crate::{ChangeResult, ChangeStatus};
use cql_splice_diagnostics::Result;
use cql_splice_parser::scan;

/// Ensure exactly one declaration with the candidate's oid exists under its
/// canonical title
///
/// Addition and update both rewrite the existing valueset region into sorted
/// order first, so the declaration block stays sorted by base name and
/// suffix. `previous` carries the artifact's prior identity when the caller
/// is renaming or re-suffixing a known entry.
///
/// Parse failures from the scanner propagate; the caller is expected to
/// hold a document that already parses.
pub fn apply_valueset(
    cql: &str,
    vs: &ValueSetForSearch,
    previous: Option<&ValueSetForSearch>,
) -> Result<ChangeResult> {
    let decls = scan(cql)?;
    let mut buffer = LineBuffer::split(cql);
    let declaration = valueset_declaration(vs);

    if decls.value_sets.is_empty() {
        let at = valueset_insert_point_when_none(&decls);
        log::debug!("inserting first valueset at index {at}");
        buffer.insert(at, declaration);
        return Ok(ChangeResult {
            cql: buffer.join(),
            status: ChangeStatus::Success,
            message: added_message(vs),
        });
    }

    let exact = vs_exact_exists(vs, &decls.value_sets);
    let same_title = vs_same_title_exists(vs, previous, &decls.value_sets);

    let (status, message) = match (exact, same_title) {
        (true, _) => (
            ChangeStatus::Info,
            "This valueset is already defined in the CQL.".to_string(),
        ),
        (false, true) => {
            let sorted = transformed_valuesets(&decls.value_sets);
            rewrite_sorted(&sorted, &mut buffer);

            let key = extract_value_set_name_and_suffix(&vs.declared_title());
            match find_replacement_index(&sorted, &key) {
                Some(index) => {
                    buffer.replace(sorted[index].line - 1, declaration);
                    (
                        ChangeStatus::Success,
                        format!(
                            "Valueset {} has been successfully updated in the CQL.",
                            vs.declared_title(),
                        ),
                    )
                }
                None => (
                    ChangeStatus::Danger,
                    "The requested operation was unsuccessful".to_string(),
                ),
            }
        }
        (false, false) => {
            let sorted = transformed_valuesets(&decls.value_sets);
            rewrite_sorted(&sorted, &mut buffer);

            let key = extract_value_set_name_and_suffix(&vs.declared_title());
            let index = find_insertion_index(&sorted, &key);
            let at = match sorted.get(index) {
                Some(neighbor) => neighbor.line - 1,
                // past the end: right after the last valueset line
                None => sorted.last().map_or(0, |last| last.line),
            };
            buffer.insert(at, declaration);
            (ChangeStatus::Success, added_message(vs))
        }
    };

    Ok(ChangeResult {
        cql: buffer.join(),
        status,
        message,
    })
}

fn added_message(vs: &ValueSetForSearch) -> String {
    format!(
        "Valueset {} has been successfully added to the CQL.",
        vs.declared_title(),
    )
}
