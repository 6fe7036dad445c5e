//! Insertion-point calculation
//!
//! Returns 0-indexed buffer positions computed from 1-indexed declaration
//! spans. Declaration kinds keep their canonical CQL order: codesystems
//! after includes, valuesets after codesystems, codes after valuesets. A
//! position one past a section's stop line skips the blank line that
//! conventionally separates sections.

use cql_splice_parser::Declarations;

/// Where a new `codesystem` declaration goes
pub fn code_system_insert_point(decls: &Declarations) -> usize {
    if decls.is_empty() {
        return 0;
    }
    if let Some(cs) = decls.code_systems.last() {
        return cs.span.stop.line;
    }
    if let Some(include) = decls.includes.last() {
        return include.span.stop.line + 1;
    }
    if let Some(using) = &decls.using {
        return using.span.start.line + 1;
    }
    if decls.library.is_some() {
        return 1;
    }
    0
}

/// Where a new `code` declaration goes
pub fn code_insert_point(decls: &Declarations) -> usize {
    if decls.is_empty() {
        return 1;
    }
    if let Some(code) = decls.codes.last() {
        return code.span.stop.line;
    }
    if let Some(vs) = decls.value_sets.last() {
        return vs.span.stop.line + 1;
    }
    if let Some(cs) = decls.code_systems.last() {
        return cs.span.stop.line + 1;
    }
    if let Some(include) = decls.includes.last() {
        return include.span.stop.line + 1;
    }
    if let Some(using) = &decls.using {
        return using.span.stop.line + 1;
    }
    if decls.library.is_some() {
        return 2;
    }
    1
}

/// Where a new `valueset` declaration goes when none are declared yet
pub fn valueset_insert_point_when_none(decls: &Declarations) -> usize {
    if let Some(cs) = decls.code_systems.last() {
        return cs.span.stop.line;
    }
    if let Some(include) = decls.includes.last() {
        return include.span.stop.line + 1;
    }
    if let Some(using) = &decls.using {
        return using.span.start.line + 1;
    }
    2
}
