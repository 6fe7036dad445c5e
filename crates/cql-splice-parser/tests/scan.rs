//! Tests for scanning complete CQL headers
//!
//! Covers:
//! - Declaration inventories of realistic measure headers
//! - Span fidelity across blank lines and comments
//! - Error positions for malformed declarations

use cql_splice_parser::{Declarations, scan};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn scan_header(input: &str) -> Declarations {
    scan(input).unwrap_or_else(|e| panic!("Failed to scan header: {e}"))
}

const MEASURE: &str = "\
library EXM124 version '9.0.000'
using QDM version '5.5'

include MATGlobalCommonFunctions version '7.0.000' called Global

codesystem \"LOINC\": 'urn:oid:2.16.840.1.113883.6.1'
codesystem \"SNOMEDCT:2023-09\": 'urn:oid:2.16.840.1.113883.6.96' version 'urn:hl7:version:2023-09'

valueset \"Ethnicity\": 'urn:oid:2.16.840.1.114222.4.11.837'
valueset \"Race\": 'urn:oid:2.16.840.1.114222.4.11.836'

code \"Abdominal pain\": '24353-5' from \"LOINC\" display 'Abdominal pain'

define InDemographic: true
define Numerator: InDemographic";

#[test]
fn test_measure_header_inventory() {
    let decls = scan_header(MEASURE);

    assert_eq!(decls.library.as_ref().unwrap().name, "EXM124");
    assert_eq!(
        decls.library.as_ref().unwrap().version.as_deref(),
        Some("'9.0.000'")
    );
    assert_eq!(decls.using.as_ref().unwrap().model, "QDM");
    assert_eq!(decls.includes[0].alias.as_deref(), Some("Global"));
    assert_eq!(decls.code_systems.len(), 2);
    assert_eq!(decls.value_sets.len(), 2);
    assert_eq!(decls.codes.len(), 1);
}

#[test]
fn test_measure_header_spans() {
    let decls = scan_header(MEASURE);

    assert_eq!(decls.includes[0].span.start.line, 4);
    assert_eq!(decls.code_systems[0].span.start.line, 6);
    assert_eq!(decls.code_systems[1].span.start.line, 7);
    assert_eq!(decls.value_sets[0].span.start.line, 9);
    assert_eq!(decls.value_sets[1].span.start.line, 10);
    assert_eq!(decls.codes[0].span.start.line, 12);

    // spans are single-line and start at column 1
    for vs in &decls.value_sets {
        assert!(vs.span.is_single_line());
        assert_eq!(vs.span.start.column, 1);
    }
}

#[test]
fn test_versioned_codesystem_fields() {
    let decls = scan_header(MEASURE);

    let pinned = &decls.code_systems[1];
    assert_eq!(pinned.name, "\"SNOMEDCT:2023-09\"");
    assert_eq!(pinned.version.as_deref(), Some("'urn:hl7:version:2023-09'"));
}

#[rstest]
#[case::codesystem("codesystem \"X\" 'urn:oid:1'", 1)]
#[case::valueset("library T\nvalueset \"X\": missing", 2)]
#[case::code("library T\n\ncode \"X\": '1' display 'X'", 3)]
fn test_malformed_declaration_positions(#[case] source: &str, #[case] line: usize) {
    let err = scan(source).unwrap_err();
    assert_eq!(err.location().map(|p| p.line), Some(line));
}

#[test]
fn test_statement_section_is_not_scanned() {
    // 'code' opening a line inside a define body must not be parsed
    let source = "\
library Test
codesystem \"LOINC\": 'urn:oid:1'
define HasPain:
  code in \"Some Valueset\"";

    let decls = scan_header(source);
    assert_eq!(decls.code_systems.len(), 1);
    assert!(decls.codes.is_empty());
}

#[test]
fn test_declaration_text_and_span_agree() {
    let source = "library Test\ncodesystem \"LOINC\": 'urn:oid:2.16.840.1.113883.6.1'";
    let decls = scan_header(source);

    let cs = &decls.code_systems[0];
    assert_eq!(cs.text, "codesystem \"LOINC\": 'urn:oid:2.16.840.1.113883.6.1'");
    assert_eq!(cs.span.start.column, 1);
    assert_eq!(cs.span.stop.column, cs.text.chars().count());
}
