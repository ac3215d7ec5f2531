use unicode_general_category::{get_general_category, GeneralCategory};
use winnow::ascii::Caseless;
use winnow::combinator::{alt, delimited, eof, opt, terminated, trace};
use winnow::error::ModalResult;
use winnow::token::{literal, take_till, take_while};
use winnow::Parser;

use crate::lines::{is_blank, strip_terminator, trim_blank_tail, LinesWithTerminator};
use crate::ErrorKind;

pub(crate) const BREAKING_PHRASE: &str = "BREAKING CHANGE";
pub(crate) const BREAKING_ARROW: &str = "BREAKING-CHANGE";

/// The pieces of a header line, borrowed from the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Summary<'a> {
    pub(crate) type_: &'a str,
    pub(crate) scope: Option<&'a str>,
    pub(crate) breaking: bool,
    pub(crate) description: &'a str,
}

/// `(token, separator, value)`
pub(crate) type FooterParts<'a> = (&'a str, &'a str, &'a str);

// <CR>              ::= "0x000D"
// <LF>              ::= "0x000A"
// <newline>         ::= [<CR>], <LF>
fn is_line_ending(c: char) -> bool {
    c == '\n' || c == '\r'
}

// <parens>          ::= "(" | ")"
fn is_parens(c: char) -> bool {
    c == '(' || c == ')'
}

// <symbol>          ::= "Any Unicode 'Symbol' (Sm, Sc, Sk, So) code point"
fn is_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// Split off the header line, returning it without its terminator plus the
/// remainder after the terminator.
pub(crate) fn split_header(i: &str) -> (&str, &str) {
    let line = LinesWithTerminator::new(i).next().unwrap_or("");
    (strip_terminator(line), &i[line.len()..])
}

// <summary>         ::= <type>, ["(", <scope>, ")"], ["!"], ": ", <text>
pub(crate) fn summary(
    mut line: &str,
    allow_empty_description: bool,
) -> Result<Summary<'_>, ErrorKind> {
    let i = &mut line;

    let type_ = type_(i).map_err(|_| ErrorKind::EmptyType)?;
    let scope = if i.starts_with('(') {
        Some(scope_block(i).map_err(|_| ErrorKind::InvalidScope)?)
    } else {
        None
    };
    let breaking = exclamation_mark(i).map_err(|_| ErrorKind::MissingSeparator)?;
    summary_separator(i).map_err(|_| ErrorKind::MissingSeparator)?;

    // The header line has no terminator left, so the rest is the description.
    let description = std::mem::take(i);
    if !allow_empty_description && is_blank(description) {
        return Err(ErrorKind::EmptyDescription);
    }

    Ok(Summary {
        type_,
        scope,
        breaking,
        description,
    })
}

// <type>            ::= <letter>+
pub(crate) fn type_<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    trace("type", take_while(1.., |c: char| c.is_alphabetic())).parse_next(i)
}

// <scope>           ::= <any UTF8-octets except newline or parens>+
pub(crate) fn scope<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    trace(
        "scope",
        take_while(1.., |c: char| !is_line_ending(c) && !is_parens(c)),
    )
    .parse_next(i)
}

fn scope_block<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    trace("scope_block", delimited('(', scope, ')')).parse_next(i)
}

fn exclamation_mark(i: &mut &str) -> ModalResult<bool> {
    trace("exclamation_mark", opt('!'))
        .map(|bang: Option<char>| bang.is_some())
        .parse_next(i)
}

// A `:` ending the line still counts so that `fix!:` is reported as a missing
// description rather than a missing separator.
fn summary_separator<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    trace("separator", alt((": ", terminated(":", eof)))).parse_next(i)
}

// <footer>          ::= <token>, <separator>, <value>
pub(crate) fn footer<'a>(i: &mut &'a str) -> Result<FooterParts<'a>, ErrorKind> {
    if let Some(parts) = breaking_footer(i).map_err(|_| ErrorKind::EmptyToken)? {
        return Ok(parts);
    }

    let token = token(i).map_err(|_| ErrorKind::EmptyToken)?;
    let (sep, value) = (separator, value)
        .parse_next(i)
        .map_err(|_| ErrorKind::MissingSeparator)?;
    Ok((token, sep, value))
}

// The breaking literals contain a space, so they only win when a separator
// follows; `BREAKING-CHANGES: x` falls back to a plain token.
fn breaking_footer<'i>(i: &mut &'i str) -> ModalResult<Option<FooterParts<'i>>> {
    trace(
        "breaking_footer",
        opt((alt((BREAKING_PHRASE, BREAKING_ARROW)), separator, value)),
    )
    .parse_next(i)
}

// <token>           ::= (<letter> | <digit> | <symbol> | "-")+
pub(crate) fn token<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    trace(
        "token",
        take_while(1.., |c: char| {
            c.is_alphabetic() || c.is_numeric() || c == '-' || is_symbol(c)
        }),
    )
    .parse_next(i)
}

// <separator>       ::= ": " | " #"
fn separator<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    trace("separator", alt((": ", " #"))).parse_next(i)
}

// <value>           ::= <any UTF8-octets except newline>*
fn value<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    trace("value", take_till(0.., is_line_ending)).parse_next(i)
}

// Case-insensitive lookahead for the first line of the footer block.
fn footer_start(i: &mut &str) -> ModalResult<()> {
    trace(
        "footer_start",
        alt((
            literal(Caseless(BREAKING_PHRASE)).void(),
            literal(Caseless(BREAKING_ARROW)).void(),
            (
                take_while(1.., |c: char| c.is_alphabetic() || c == '\'' || c == '-'),
                alt((": ", " #")),
            )
                .void(),
        )),
    )
    .parse_next(i)
}

fn is_footer_start(line: &str) -> bool {
    let mut probe = line;
    footer_start(&mut probe).is_ok()
}

/// Decide where the body ends and the footer block begins.
///
/// Returns `(body, footer_block)`. Leading blank lines are skipped, then the
/// first line that looks like a footer wins; everything from it onward is the
/// footer block. The scan touches every line at most once.
pub(crate) fn split_body(remainder: &str) -> (Option<&str>, Option<&str>) {
    let mut start = None;
    let mut boundary = None;
    let mut offset = 0;
    for line in LinesWithTerminator::new(remainder) {
        if start.is_none() {
            if is_blank(line) {
                offset += line.len();
                continue;
            }
            start = Some(offset);
        }
        if is_footer_start(line) {
            boundary = Some(offset);
            break;
        }
        offset += line.len();
    }

    let Some(start) = start else {
        return (None, None);
    };
    let end = boundary.unwrap_or(remainder.len());
    let body = trim_blank_tail(&remainder[start..end]);
    let body = (!body.is_empty()).then_some(body);
    let footer_block = boundary.map(|boundary| trim_blank_tail(&remainder[boundary..]));
    tracing::trace!(
        body_len = body.map_or(0, str::len),
        footer_offset = ?boundary,
        "split commit remainder"
    );
    (body, footer_block)
}

/// Parse every footer of `block`, in order, until a line fails to parse.
pub(crate) fn footers(block: &str) -> Vec<FooterParts<'_>> {
    let mut footers = Vec::new();
    for line in LinesWithTerminator::new(block) {
        if is_blank(line) {
            continue;
        }
        let mut i = strip_terminator(line);
        match footer(&mut i) {
            Ok(parts) => footers.push(parts),
            Err(kind) => {
                tracing::debug!(
                    line = strip_terminator(line),
                    %kind,
                    parsed = footers.len(),
                    "footer block truncated at malformed line"
                );
                break;
            }
        }
    }
    footers
}
