//! Line-oriented declaration scanning
//!
//! The scanner walks the document one line at a time, blanks comments in a
//! column-preserving way, and hands lines that open with a declaration
//! keyword to the matching Winnow line parser. Everything after the first
//! statement-section keyword (`define`, `context`, `parameter`) is ignored:
//! the CQL grammar places all terminology declarations before it.

use crate::combinators::{
    code_line, code_system_line, include_line, library_line, using_line, valueset_line,
};
use cql_splice_diagnostics::{
    CQL0017, CQL0018, CQL0019, CQL0021, CQL0022, CQL0023, ErrorCode, Position, Result, Span,
    SpliceError,
};
use serde::Serialize;

/// `library` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryDecl {
    /// Raw declared identifier, possibly quoted
    pub name: String,
    /// Raw version literal, including quotes
    pub version: Option<String>,
    pub span: Span,
    /// Verbatim declaration text
    pub text: String,
}

/// `using` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsingDecl {
    pub model: String,
    pub version: Option<String>,
    pub span: Span,
    pub text: String,
}

/// `include` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludeDecl {
    pub library: String,
    pub version: Option<String>,
    pub alias: Option<String>,
    pub span: Span,
    pub text: String,
}

/// `codesystem` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeSystemDecl {
    /// Raw declared identifier, possibly quoted
    pub name: String,
    /// Raw uri literal, including quotes (e.g., `'urn:oid:...'`)
    pub oid: String,
    /// Raw version literal, including quotes
    pub version: Option<String>,
    pub span: Span,
    pub text: String,
}

/// `code` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeDecl {
    /// Raw declared identifier, possibly quoted
    pub name: String,
    /// Raw code value literal, including quotes
    pub code_id: String,
    /// Raw codesystem reference, possibly quoted and version-suffixed
    pub code_system: String,
    /// Raw display literal, including quotes
    pub display: Option<String>,
    pub span: Span,
    pub text: String,
}

/// `valueset` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValuesetDecl {
    /// Raw declared identifier, possibly quoted
    pub name: String,
    /// Raw url literal, including quotes
    pub url: String,
    /// Raw version literal, including quotes
    pub version: Option<String>,
    pub span: Span,
    pub text: String,
}

/// Declaration inventory of a CQL document
///
/// All vectors are in source order (ascending line number).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Declarations {
    pub library: Option<LibraryDecl>,
    pub using: Option<UsingDecl>,
    pub includes: Vec<IncludeDecl>,
    pub code_systems: Vec<CodeSystemDecl>,
    pub codes: Vec<CodeDecl>,
    pub value_sets: Vec<ValuesetDecl>,
}

impl Declarations {
    /// True when the document declared nothing at all
    pub fn is_empty(&self) -> bool {
        self.library.is_none()
            && self.using.is_none()
            && self.includes.is_empty()
            && self.code_systems.is_empty()
            && self.codes.is_empty()
            && self.value_sets.is_empty()
    }
}

/// Scan CQL source into a declaration inventory
///
/// A line opening with a declaration keyword that fails to parse as that
/// declaration is an error; anything else outside the declaration grammar is
/// skipped.
pub fn scan(source: &str) -> Result<Declarations> {
    let mut decls = Declarations::default();
    let mut in_block_comment = false;

    for (idx, raw_line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let cleaned = blank_comments(raw_line, &mut in_block_comment);
        let trimmed = cleaned.trim();
        if trimmed.is_empty() {
            continue;
        }

        let keyword = trimmed.split_whitespace().next().unwrap_or("");
        if matches!(keyword, "define" | "context" | "parameter") {
            // statement section: no terminology declarations past this point
            break;
        }

        let start_column = cleaned.chars().take_while(|c| c.is_whitespace()).count() + 1;
        let stop_column = cleaned.trim_end().chars().count();
        let span = Span::single_line(line_no, start_column, stop_column);
        let text: String = raw_line
            .chars()
            .skip(start_column - 1)
            .take(stop_column + 1 - start_column)
            .collect();

        match keyword {
            "library" => {
                let mut rest = trimmed;
                let head = library_line(&mut rest)
                    .map_err(|_| malformed("library", CQL0017, span.start))?;
                if decls.library.is_none() {
                    decls.library = Some(LibraryDecl {
                        name: head.name.to_string(),
                        version: head.version.map(str::to_string),
                        span,
                        text,
                    });
                }
            }
            "using" => {
                let mut rest = trimmed;
                let head =
                    using_line(&mut rest).map_err(|_| malformed("using", CQL0018, span.start))?;
                if decls.using.is_none() {
                    decls.using = Some(UsingDecl {
                        model: head.model.to_string(),
                        version: head.version.map(str::to_string),
                        span,
                        text,
                    });
                }
            }
            "include" => {
                let mut rest = trimmed;
                let head = include_line(&mut rest)
                    .map_err(|_| malformed("include", CQL0019, span.start))?;
                decls.includes.push(IncludeDecl {
                    library: head.library.to_string(),
                    version: head.version.map(str::to_string),
                    alias: head.alias.map(str::to_string),
                    span,
                    text,
                });
            }
            "codesystem" => {
                let mut rest = trimmed;
                let head = code_system_line(&mut rest)
                    .map_err(|_| malformed("codesystem", CQL0021, span.start))?;
                decls.code_systems.push(CodeSystemDecl {
                    name: head.name.to_string(),
                    oid: head.oid.to_string(),
                    version: head.version.map(str::to_string),
                    span,
                    text,
                });
            }
            "valueset" => {
                let mut rest = trimmed;
                let head = valueset_line(&mut rest)
                    .map_err(|_| malformed("valueset", CQL0022, span.start))?;
                decls.value_sets.push(ValuesetDecl {
                    name: head.name.to_string(),
                    url: head.url.to_string(),
                    version: head.version.map(str::to_string),
                    span,
                    text,
                });
            }
            "code" => {
                let mut rest = trimmed;
                let head =
                    code_line(&mut rest).map_err(|_| malformed("code", CQL0023, span.start))?;
                decls.codes.push(CodeDecl {
                    name: head.name.to_string(),
                    code_id: head.code_id.to_string(),
                    code_system: head.code_system.to_string(),
                    display: head.display.map(str::to_string),
                    span,
                    text,
                });
            }
            _ => {}
        }
    }

    Ok(decls)
}

fn malformed(kind: &str, code: ErrorCode, position: Position) -> SpliceError {
    SpliceError::parse_at(code, format!("malformed {kind} declaration"), position)
}

/// Replace comments with spaces, keeping every other character column intact
///
/// Single-quoted strings (with `''` escapes) are respected so that `//` or
/// `/*` inside a literal is not treated as a comment opener.
fn blank_comments(line: &str, in_block: &mut bool) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if *in_block {
            if ch == '*' && chars.peek() == Some(&'/') {
                chars.next();
                out.push_str("  ");
                *in_block = false;
            } else {
                out.push(' ');
            }
        } else if in_string {
            if ch == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push_str("''");
                } else {
                    in_string = false;
                    out.push('\'');
                }
            } else {
                out.push(ch);
            }
        } else {
            match ch {
                '\'' => {
                    in_string = true;
                    out.push(ch);
                }
                '/' if chars.peek() == Some(&'/') => {
                    out.push(' ');
                    for _ in chars.by_ref() {
                        out.push(' ');
                    }
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push_str("  ");
                    *in_block = true;
                }
                _ => out.push(ch),
            }
        }
    }

    out
}
