//! Identifier and oid normalization
//!
//! Declarations carry raw tokens: identifiers may be quoted, uris carry
//! their single quotes and `urn:` prefixes. All comparisons in the engine go
//! through these helpers.

const URN_OID_PREFIX: &str = "urn:oid:";
const URN_VERSION_PREFIX: &str = "urn:hl7:version:";

/// Strip surrounding quote characters (double or single)
pub fn strip_quotes(s: &str) -> &str {
    s.trim_matches(|c| c == '"' || c == '\'')
}

/// Strip a leading `urn:oid:` prefix
pub fn strip_oid_prefix(s: &str) -> &str {
    s.strip_prefix(URN_OID_PREFIX).unwrap_or(s)
}

/// Strip a leading `urn:hl7:version:` prefix
pub fn strip_version_prefix(s: &str) -> &str {
    s.strip_prefix(URN_VERSION_PREFIX).unwrap_or(s)
}

/// Normalize a raw oid/url token for comparison
pub fn normalize_oid(raw: &str) -> &str {
    strip_oid_prefix(strip_quotes(raw))
}

/// Compare two oid/url tokens, ignoring quotes and the `urn:oid:` prefix
pub fn oid_eq(a: &str, b: &str) -> bool {
    normalize_oid(a) == normalize_oid(b)
}

/// Sort key of a declared valueset title
///
/// The total order over valuesets is `base` (case-insensitive lexicographic)
/// then `suffix` (ascending, absent first) — `Option`'s derived ordering
/// puts `None` before any `Some`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VsKey {
    /// Title without suffix, lowercased and trimmed
    pub base: String,
    /// Trailing `(<digits>)` suffix, if present
    pub suffix: Option<u32>,
}

/// Split a declared valueset title into its base name and numeric suffix
pub fn extract_value_set_name_and_suffix(title: &str) -> VsKey {
    let title = strip_quotes(title).trim();

    if let Some(open) = title.rfind('(') {
        if let Some(digits) = title[open + 1..].strip_suffix(')') {
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(suffix) = digits.parse::<u32>() {
                    return VsKey {
                        base: title[..open].trim().to_lowercase(),
                        suffix: Some(suffix),
                    };
                }
            }
        }
    }

    VsKey {
        base: title.to_lowercase(),
        suffix: None,
    }
}
