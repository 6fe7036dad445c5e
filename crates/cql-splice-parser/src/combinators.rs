//! Common parser combinators for declaration lines
//!
//! All parsers here operate on a single, comment-stripped source line and
//! return raw slices: quoted identifiers keep their double quotes and string
//! literals keep their single quotes, so the engine can decide how to
//! normalize them.

use winnow::ascii::{space0, space1};
use winnow::combinator::{alt, eof, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_till, take_while};

/// Input type for line parsers
pub type Input<'i> = &'i str;

/// Result type for line parsers
pub type PResult<O> = winnow::ModalResult<O>;

/// Parse a quoted identifier, returning the raw slice including quotes
pub fn quoted_identifier<'i>(input: &mut Input<'i>) -> PResult<&'i str> {
    ('"', take_till(0.., '"'), '"').take().parse_next(input)
}

/// Parse a regular identifier: letter or `_`, then alphanumerics or `_`
pub fn plain_identifier<'i>(input: &mut Input<'i>) -> PResult<&'i str> {
    (
        one_of(|c: char| c.is_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

/// Parse an identifier, quoted or plain
pub fn identifier<'i>(input: &mut Input<'i>) -> PResult<&'i str> {
    alt((quoted_identifier, plain_identifier)).parse_next(input)
}

/// Parse a dotted identifier path (e.g., `Common.Demographics`)
pub fn qualified_identifier<'i>(input: &mut Input<'i>) -> PResult<&'i str> {
    (
        identifier,
        repeat::<_, _, (), _, _>(0.., preceded('.', identifier)),
    )
        .take()
        .parse_next(input)
}

/// Parse a single-quoted string literal (with `''` escapes), returning the
/// raw slice including quotes
pub fn string_literal<'i>(input: &mut Input<'i>) -> PResult<&'i str> {
    (
        '\'',
        repeat::<_, _, (), _, _>(0.., alt(("''".void(), none_of('\'').void()))),
        '\'',
    )
        .take()
        .parse_next(input)
}

/// Parse a trailing `version '...'` clause
pub fn version_clause<'i>(input: &mut Input<'i>) -> PResult<&'i str> {
    preceded((space1, "version", space1), string_literal).parse_next(input)
}

/// Require only trailing whitespace up to the end of the line
pub fn line_end(input: &mut Input<'_>) -> PResult<()> {
    (space0, eof).void().parse_next(input)
}

/// Parsed `library` declaration line
pub struct LibraryLine<'i> {
    pub name: &'i str,
    pub version: Option<&'i str>,
}

/// `library Name [version 'v']`
pub fn library_line<'i>(input: &mut Input<'i>) -> PResult<LibraryLine<'i>> {
    ("library", space1).parse_next(input)?;
    let name = qualified_identifier(input)?;
    let version = opt(version_clause).parse_next(input)?;
    line_end(input)?;

    Ok(LibraryLine { name, version })
}

/// Parsed `using` declaration line
pub struct UsingLine<'i> {
    pub model: &'i str,
    pub version: Option<&'i str>,
}

/// `using Model [version 'v']`
pub fn using_line<'i>(input: &mut Input<'i>) -> PResult<UsingLine<'i>> {
    ("using", space1).parse_next(input)?;
    let model = identifier(input)?;
    let version = opt(version_clause).parse_next(input)?;
    line_end(input)?;

    Ok(UsingLine { model, version })
}

/// Parsed `include` declaration line
pub struct IncludeLine<'i> {
    pub library: &'i str,
    pub version: Option<&'i str>,
    pub alias: Option<&'i str>,
}

/// `include Library [version 'v'] [called Alias]`
pub fn include_line<'i>(input: &mut Input<'i>) -> PResult<IncludeLine<'i>> {
    ("include", space1).parse_next(input)?;
    let library = qualified_identifier(input)?;
    let version = opt(version_clause).parse_next(input)?;
    let alias = opt(preceded((space1, "called", space1), identifier)).parse_next(input)?;
    line_end(input)?;

    Ok(IncludeLine {
        library,
        version,
        alias,
    })
}

/// Parsed `codesystem` declaration line
pub struct CodeSystemLine<'i> {
    pub name: &'i str,
    pub oid: &'i str,
    pub version: Option<&'i str>,
}

/// `codesystem "Name": 'uri' [version 'v']`
pub fn code_system_line<'i>(input: &mut Input<'i>) -> PResult<CodeSystemLine<'i>> {
    ("codesystem", space1).parse_next(input)?;
    let name = identifier(input)?;
    (space0, ':', space0).parse_next(input)?;
    let oid = string_literal(input)?;
    let version = opt(version_clause).parse_next(input)?;
    line_end(input)?;

    Ok(CodeSystemLine { name, oid, version })
}

/// Parsed `valueset` declaration line
pub struct ValuesetLine<'i> {
    pub name: &'i str,
    pub url: &'i str,
    pub version: Option<&'i str>,
}

/// `valueset "Name": 'url' [version 'v']`
pub fn valueset_line<'i>(input: &mut Input<'i>) -> PResult<ValuesetLine<'i>> {
    ("valueset", space1).parse_next(input)?;
    let name = identifier(input)?;
    (space0, ':', space0).parse_next(input)?;
    let url = string_literal(input)?;
    let version = opt(version_clause).parse_next(input)?;
    line_end(input)?;

    Ok(ValuesetLine { name, url, version })
}

/// Parsed `code` declaration line
pub struct CodeLine<'i> {
    pub name: &'i str,
    pub code_id: &'i str,
    pub code_system: &'i str,
    pub display: Option<&'i str>,
}

/// `code "Name": 'id' from "CodeSystem" [display 'text']`
pub fn code_line<'i>(input: &mut Input<'i>) -> PResult<CodeLine<'i>> {
    ("code", space1).parse_next(input)?;
    let name = identifier(input)?;
    (space0, ':', space0).parse_next(input)?;
    let code_id = string_literal(input)?;
    (space1, "from", space1).parse_next(input)?;
    let code_system = qualified_identifier(input)?;
    let display = opt(preceded((space1, "display", space1), string_literal)).parse_next(input)?;
    line_end(input)?;

    Ok(CodeLine {
        name,
        code_id,
        code_system,
        display,
    })
}
