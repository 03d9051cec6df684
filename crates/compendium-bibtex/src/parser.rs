//! BibTeX parser
//!
//! Hand-rolled scanner over the document with nom combinators at the token
//! level. Field values keep inner `{ }` groups verbatim: downstream
//! extraction reads them as case-protection and author-grouping markers.
//!
//! The first malformed construct aborts the parse with its line number.
//! The consuming tools regenerate every output from scratch per run, so
//! there is nothing to salvage from a broken file.

use std::collections::HashMap;

use nom::{bytes::complete::take_while1, character::complete::multispace0, IResult};

use crate::month_macros::expand_month_macro;
use crate::record::Record;

/// Parse failure, carrying the 1-based source line where parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed BibTeX at line {line}: {message}")]
pub struct ParseError {
    pub line: u32,
    pub message: String,
}

/// Parse a BibTeX document into its records, in file order.
///
/// `@string` definitions and builtin month macros are resolved into field
/// values. `@comment`/`@preamble` blocks and free text between entries are
/// ignored.
pub fn parse(input: &str) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();
    let mut strings: HashMap<String, String> = HashMap::new();
    let mut remaining = input;

    while let Some(pos) = next_at(remaining) {
        remaining = &remaining[pos + 1..];
        let (rest, name) = ident(remaining)
            .map_err(|_| error_at(input, remaining, "expected an entry type after '@'"))?;
        let kind = name.to_ascii_lowercase();
        remaining = match kind.as_str() {
            "comment" | "preamble" => skip_block(input, rest)?,
            "string" => parse_string_def(input, rest, &mut strings)?,
            _ => {
                let (rest, record) = parse_record(input, rest, kind, &strings)?;
                records.push(record);
                rest
            }
        };
    }

    Ok(records)
}

/// Find the next `@` that starts a construct.
///
/// Only an `@` preceded by nothing but whitespace on its line counts;
/// anything else is commentary (stray email addresses and the like).
fn next_at(remaining: &str) -> Option<usize> {
    let mut search = 0;
    while let Some(rel) = remaining[search..].find('@') {
        let pos = search + rel;
        let line_start = remaining[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
        if remaining[line_start..pos].chars().all(char::is_whitespace) {
            return Some(pos);
        }
        search = pos + 1;
    }
    None
}

fn ws(input: &str) -> &str {
    let result: IResult<&str, &str> = multispace0(input);
    match result {
        Ok((rest, _)) => rest,
        Err(_) => input,
    }
}

/// Names: entry types, field names, `@string` macro names, bare tokens.
fn ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':' | '+' | '/')
    })(input)
}

/// Cite keys are freer than idents: anything up to a delimiter.
fn cite_key(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && !matches!(c, ',' | '{' | '}' | '(' | ')'))(input)
}

/// Consume `{` or `(` and return the matching closer.
fn open_delim<'a>(doc: &str, input: &'a str) -> Result<(char, &'a str), ParseError> {
    let input = ws(input);
    if let Some(rest) = input.strip_prefix('{') {
        Ok(('}', rest))
    } else if let Some(rest) = input.strip_prefix('(') {
        Ok((')', rest))
    } else {
        Err(error_at(doc, input, "expected '{' to open the body"))
    }
}

fn skip_block<'a>(doc: &str, input: &'a str) -> Result<&'a str, ParseError> {
    let input = ws(input);
    if input.starts_with('{') {
        braced_group(input)
            .map(|(rest, _)| rest)
            .map_err(|()| error_at(doc, input, "unbalanced braces in block"))
    } else if input.starts_with('(') {
        paren_group(input).map_err(|()| error_at(doc, input, "unbalanced parentheses in block"))
    } else {
        Err(error_at(doc, input, "expected '{' after block keyword"))
    }
}

fn parse_string_def<'a>(
    doc: &str,
    input: &'a str,
    strings: &mut HashMap<String, String>,
) -> Result<&'a str, ParseError> {
    let (close, rest) = open_delim(doc, input)?;
    let rest = ws(rest);
    let (rest, name) =
        ident(rest).map_err(|_| error_at(doc, rest, "expected a name in @string definition"))?;
    let rest = ws(rest);
    let rest = match rest.strip_prefix('=') {
        Some(r) => r,
        None => return Err(error_at(doc, rest, "expected '=' in @string definition")),
    };
    let (rest, val) = value(doc, rest, strings)?;
    let rest = match ws(rest).strip_prefix(',') {
        Some(r) => ws(r),
        None => ws(rest),
    };
    let rest = match rest.strip_prefix(close) {
        Some(r) => r,
        None => return Err(error_at(doc, rest, "unterminated @string definition")),
    };
    strings.insert(name.to_ascii_lowercase(), val);
    Ok(rest)
}

fn parse_record<'a>(
    doc: &str,
    input: &'a str,
    entry_type: String,
    strings: &HashMap<String, String>,
) -> Result<(&'a str, Record), ParseError> {
    let (close, rest) = open_delim(doc, input)?;
    let rest = ws(rest);
    let (mut rest, key) = cite_key(rest).map_err(|_| error_at(doc, rest, "expected a cite key"))?;
    let mut record = Record::new(key, entry_type);

    loop {
        rest = ws(rest);
        if let Some(r) = rest.strip_prefix(close) {
            rest = r;
            break;
        }
        rest = match rest.strip_prefix(',') {
            Some(r) => ws(r),
            None => return Err(error_at(doc, rest, "expected ',' or the end of the entry")),
        };
        // Trailing comma before the closing delimiter.
        if let Some(r) = rest.strip_prefix(close) {
            rest = r;
            break;
        }
        let (r, name) = ident(rest).map_err(|_| error_at(doc, rest, "expected a field name"))?;
        rest = ws(r);
        rest = match rest.strip_prefix('=') {
            Some(r) => r,
            None => return Err(error_at(doc, rest, "expected '=' after field name")),
        };
        let (r, val) = value(doc, rest, strings)?;
        record.push_field(name, val);
        rest = r;
    }

    Ok((rest, record))
}

/// Parse one field value: `#`-separated parts, each braced, quoted, or bare.
fn value<'a>(
    doc: &str,
    input: &'a str,
    strings: &HashMap<String, String>,
) -> Result<(&'a str, String), ParseError> {
    let mut out = String::new();
    let mut rest = input;
    loop {
        rest = ws(rest);
        if rest.starts_with('{') {
            let (r, inner) = braced_group(rest)
                .map_err(|()| error_at(doc, rest, "unbalanced braces in field value"))?;
            out.push_str(inner);
            rest = r;
        } else if rest.starts_with('"') {
            let (r, inner) = quoted_value(rest)
                .map_err(|()| error_at(doc, rest, "unterminated quoted value"))?;
            out.push_str(inner);
            rest = r;
        } else if let Ok((r, token)) = ident(rest) {
            out.push_str(&resolve_token(token, strings));
            rest = r;
        } else {
            return Err(error_at(doc, rest, "expected a field value"));
        }
        rest = ws(rest);
        match rest.strip_prefix('#') {
            Some(r) => rest = r,
            None => break,
        }
    }
    Ok((rest, out))
}

/// A bare token: a literal number, a defined `@string`, a builtin month
/// macro, or (undefined) its own literal text.
fn resolve_token(token: &str, strings: &HashMap<String, String>) -> String {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        return token.to_string();
    }
    let lower = token.to_ascii_lowercase();
    if let Some(v) = strings.get(&lower) {
        return v.clone();
    }
    if let Some(v) = expand_month_macro(&lower) {
        return v.to_string();
    }
    token.to_string()
}

/// Scan `{ ... }` tracking nested braces; returns (rest, inner text).
///
/// Backslash-escaped braces do not count toward nesting. Slicing only
/// happens at ASCII brace positions, so multibyte content passes through
/// untouched.
fn braced_group(input: &str) -> Result<(&str, &str), ()> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'{') {
        return Err(());
    }
    let mut depth = 0usize;
    let mut pos = 0usize;
    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[pos + 1..], &input[1..pos]));
                }
            }
            b'\\' => pos += 1,
            _ => {}
        }
        pos += 1;
    }
    Err(())
}

fn paren_group(input: &str) -> Result<&str, ()> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'(') {
        return Err(());
    }
    let mut depth = 0usize;
    let mut pos = 0usize;
    while pos < bytes.len() {
        match bytes[pos] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&input[pos + 1..]);
                }
            }
            b'\\' => pos += 1,
            _ => {}
        }
        pos += 1;
    }
    Err(())
}

/// Scan `"..."`; quotes inside a `{ }` group do not terminate the value.
fn quoted_value(input: &str) -> Result<(&str, &str), ()> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'"') {
        return Err(());
    }
    let mut depth = 0usize;
    let mut pos = 1usize;
    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b'"' if depth == 0 => return Ok((&input[pos + 1..], &input[1..pos])),
            b'\\' => pos += 1,
            _ => {}
        }
        pos += 1;
    }
    Err(())
}

fn error_at(doc: &str, at: &str, message: &str) -> ParseError {
    let consumed = doc.len() - at.len();
    let line = doc[..consumed].matches('\n').count() as u32 + 1;
    ParseError {
        line,
        message: message.to_string(),
    }
}
