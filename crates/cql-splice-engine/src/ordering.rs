//! Valueset order calculation
//!
//! Valuesets keep a total order: base name (case-insensitive) then numeric
//! suffix. Rather than moving lines around, the engine treats the lines
//! valuesets already occupy as fixed slots: the declarations are sorted as
//! data and mapped back onto the ascending sequence of original line
//! numbers, then each slot is overwritten with its new occupant's text.

use crate::buffer::LineBuffer;
use crate::normalize::{VsKey, extract_value_set_name_and_suffix};
use cql_splice_parser::ValuesetDecl;

/// A valueset mapped onto its post-sort line slot
#[derive(Debug, Clone)]
pub struct TransformedValueset {
    pub key: VsKey,
    /// Target line slot, 1-indexed
    pub line: usize,
    /// Verbatim declaration text
    pub text: String,
}

/// Sort the valuesets and map them onto the original line slots
pub fn transformed_valuesets(value_sets: &[ValuesetDecl]) -> Vec<TransformedValueset> {
    let mut slots: Vec<usize> = value_sets.iter().map(|vs| vs.span.start.line).collect();
    slots.sort_unstable();

    let mut sorted: Vec<&ValuesetDecl> = value_sets.iter().collect();
    sorted.sort_by_cached_key(|vs| extract_value_set_name_and_suffix(&vs.name));

    sorted
        .into_iter()
        .zip(slots)
        .map(|(vs, line)| TransformedValueset {
            key: extract_value_set_name_and_suffix(&vs.name),
            line,
            text: vs.text.clone(),
        })
        .collect()
}

/// Overwrite each slot with its sorted occupant's text
///
/// Only lines that already held valuesets are touched; the buffer's line
/// count never changes.
pub fn rewrite_sorted(sorted: &[TransformedValueset], buffer: &mut LineBuffer) {
    for vs in sorted {
        buffer.replace(vs.line - 1, vs.text.clone());
    }
}

/// Index in the sorted list where a new title belongs
pub fn find_insertion_index(sorted: &[TransformedValueset], key: &VsKey) -> usize {
    sorted
        .iter()
        .position(|vs| vs.key > *key)
        .unwrap_or(sorted.len())
}

/// Index in the sorted list of the entry an updated title replaces
///
/// Compares base names only, since the suffix may change across an update.
pub fn find_replacement_index(sorted: &[TransformedValueset], key: &VsKey) -> Option<usize> {
    sorted.iter().position(|vs| vs.key.base >= key.base)
}
