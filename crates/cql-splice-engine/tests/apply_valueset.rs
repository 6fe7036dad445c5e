//! Valueset applier behavior
//!
//! Covers:
//! - First insertion and sorted insertion among existing declarations
//! - The sort-rewrite of the valueset region
//! - Suffix/rename updates, including the prior-identity path
//! - Idempotence and the defensive fallback

use cql_splice_engine::{ChangeStatus, ValueSetForSearch, apply_valueset};
use pretty_assertions::assert_eq;
use rstest::rstest;

const BASE: &str = "library EXM124 version '9.0.000'\n\
using QDM version '5.5'\n\
\n\
codesystem \"LOINC\": 'urn:oid:2.16.840.1.113883.6.1'";

fn vs(title: &str, oid: &str) -> ValueSetForSearch {
    ValueSetForSearch {
        title: title.to_string(),
        oid: oid.to_string(),
        suffix: None,
    }
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

#[test]
fn test_adds_first_valueset() {
    let ed = vs(
        "Emergency Department Evaluation",
        "urn:oid:2.16.840.1.113883.3.464.1003.101.12.1010",
    );
    let result = apply_valueset(BASE, &ed, None).unwrap();

    assert_eq!(result.status, ChangeStatus::Success);
    assert_eq!(
        result.message,
        "Valueset Emergency Department Evaluation has been successfully added to the CQL."
    );
    assert!(result.cql.contains(
        "valueset \"Emergency Department Evaluation\": 'urn:oid:2.16.840.1.113883.3.464.1003.101.12.1010'"
    ));
    assert_eq!(line_count(&result.cql), line_count(BASE) + 1);
}

#[test]
fn test_already_defined_is_a_noop() {
    let cql = "library Test\n\
valueset \"Ethnicity\": 'urn:oid:2.16.840.1.114222.4.11.837'";
    let ethnicity = vs("Ethnicity", "2.16.840.1.114222.4.11.837");

    let first = apply_valueset(cql, &ethnicity, None).unwrap();
    let second = apply_valueset(&first.cql, &ethnicity, None).unwrap();

    assert_eq!(second.status, ChangeStatus::Info);
    assert_eq!(second.message, "This valueset is already defined in the CQL.");
    assert_eq!(second.cql, cql);
}

#[test]
fn test_adds_in_sorted_position() {
    let cql = "library Test\n\
codesystem \"LOINC\": 'urn:oid:1'\n\
valueset \"Ethnicity\": 'urn:oid:2'\n\
valueset \"Race\": 'urn:oid:3'";

    let result = apply_valueset(cql, &vs("Fall", "urn:oid:4"), None).unwrap();

    assert_eq!(result.status, ChangeStatus::Success);
    assert_eq!(
        result.cql,
        "library Test\n\
codesystem \"LOINC\": 'urn:oid:1'\n\
valueset \"Ethnicity\": 'urn:oid:2'\n\
valueset \"Fall\": 'urn:oid:4'\n\
valueset \"Race\": 'urn:oid:3'"
    );
}

#[test]
fn test_insertion_rewrites_region_into_sorted_order() {
    let cql = "library Test\n\
valueset \"Race\": 'urn:oid:3'\n\
valueset \"Ethnicity (1)\": 'urn:oid:2'\n\
valueset \"Ethnicity\": 'urn:oid:1'";

    let result = apply_valueset(cql, &vs("Tobacco", "urn:oid:4"), None).unwrap();

    assert_eq!(
        result.cql,
        "library Test\n\
valueset \"Ethnicity\": 'urn:oid:1'\n\
valueset \"Ethnicity (1)\": 'urn:oid:2'\n\
valueset \"Race\": 'urn:oid:3'\n\
valueset \"Tobacco\": 'urn:oid:4'"
    );
}

#[test]
fn test_duplicate_title_different_oid_gets_suffix() {
    let cql = "library Test\n\
valueset \"Ethnicity\": 'urn:oid:1'";

    let mut duplicate = vs("Ethnicity", "urn:oid:2");
    duplicate.suffix = Some(1);

    let result = apply_valueset(cql, &duplicate, None).unwrap();

    assert_eq!(result.status, ChangeStatus::Success);
    assert_eq!(
        result.cql,
        "library Test\n\
valueset \"Ethnicity\": 'urn:oid:1'\n\
valueset \"Ethnicity (1)\": 'urn:oid:2'"
    );
}

#[test]
fn test_update_adds_suffix_in_place() {
    let cql = "library Test\n\
valueset \"Ethnicity\": 'urn:oid:1'";

    let mut renamed = vs("Ethnicity", "urn:oid:1");
    renamed.suffix = Some(1);

    let result = apply_valueset(cql, &renamed, None).unwrap();

    assert_eq!(result.status, ChangeStatus::Success);
    assert_eq!(
        result.message,
        "Valueset Ethnicity (1) has been successfully updated in the CQL."
    );
    assert_eq!(
        result.cql,
        "library Test\n\
valueset \"Ethnicity (1)\": 'urn:oid:1'"
    );
    assert_eq!(line_count(&result.cql), line_count(cql));
}

#[test]
fn test_update_via_previous_identity() {
    let cql = "library Test\n\
valueset \"Ethnicity\": 'urn:oid:1'";

    let replacement = vs("Ethnicity", "urn:oid:9");
    let previous = vs("Ethnicity", "urn:oid:1");

    let result = apply_valueset(cql, &replacement, Some(&previous)).unwrap();

    assert_eq!(result.status, ChangeStatus::Success);
    assert_eq!(
        result.cql,
        "library Test\n\
valueset \"Ethnicity\": 'urn:oid:9'"
    );
}

#[test]
fn test_unlocatable_replacement_is_danger() {
    let cql = "library Test\n\
valueset \"Ethnicity\": 'urn:oid:1'";

    // prior identity matches, but the new base name sorts past every entry
    let replacement = vs("Zoster", "urn:oid:9");
    let previous = vs("Ethnicity", "urn:oid:1");

    let result = apply_valueset(cql, &replacement, Some(&previous)).unwrap();

    assert_eq!(result.status, ChangeStatus::Danger);
    assert_eq!(result.message, "The requested operation was unsuccessful");
    assert_eq!(result.cql, cql);
}

#[test]
fn test_idempotence_after_add() {
    let ed = vs("Emergency Department Evaluation", "urn:oid:5");

    let first = apply_valueset(BASE, &ed, None).unwrap();
    let second = apply_valueset(&first.cql, &ed, None).unwrap();

    assert_eq!(second.status, ChangeStatus::Info);
    assert_eq!(second.cql, first.cql);
    assert_eq!(second.cql.matches("urn:oid:5").count(), 1);
}

#[rstest]
#[case::sorts_first("Age", 2)]
#[case::sorts_between("Fall", 3)]
#[case::sorts_last("Tobacco", 4)]
fn test_new_valueset_line_position(#[case] title: &str, #[case] line: usize) {
    let cql = "library Test\n\
valueset \"Ethnicity\": 'urn:oid:1'\n\
valueset \"Race\": 'urn:oid:2'";

    let result = apply_valueset(cql, &vs(title, "urn:oid:9"), None).unwrap();

    let decls = cql_splice_parser::scan(&result.cql).unwrap();
    let added = decls
        .value_sets
        .iter()
        .find(|v| v.url == "'urn:oid:9'")
        .unwrap();
    assert_eq!(added.span.start.line, line);
}

#[test]
fn test_insert_before_first_sorted_entry() {
    let cql = "library Test\n\
valueset \"Race\": 'urn:oid:3'";

    let result = apply_valueset(cql, &vs("Age", "urn:oid:1"), None).unwrap();

    assert_eq!(
        result.cql,
        "library Test\n\
valueset \"Age\": 'urn:oid:1'\n\
valueset \"Race\": 'urn:oid:3'"
    );
}
