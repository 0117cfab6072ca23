//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Handles line unfolding and tokenization of content lines.

use std::iter::Peekable;
use std::str::{CharIndices, Chars};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::ical::core::{ContentLine, Parameter};

/// Unfolds content lines by removing line breaks followed by whitespace.
///
/// Per RFC 5545 §3.1:
/// - Lines are folded by inserting CRLF followed by whitespace (SPACE or HTAB)
/// - Unfolding removes the CRLF and the single whitespace character
///
/// Bare LF is accepted as a line break and normalized to CRLF.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                push_break_unless_fold(&mut result, &mut chars);
            }
            '\n' => push_break_unless_fold(&mut result, &mut chars),
            _ => result.push(c),
        }
    }

    result
}

/// Drops the break and one whitespace character for a fold, otherwise keeps
/// the break.
fn push_break_unless_fold(result: &mut String, chars: &mut Peekable<Chars<'_>>) {
    if matches!(chars.peek(), Some(' ' | '\t')) {
        chars.next();
    } else {
        result.push_str("\r\n");
    }
}

/// Splits input into logical content lines, merging folded continuations.
///
/// Handles both CRLF and bare LF line endings. Lines starting with SP/HTAB are
/// continuations of the previous line; the whitespace character is removed
/// and nothing is inserted. Blank lines are discarded.
///
/// A leading UTF-8 byte order mark is skipped.
///
/// Returns `(line_number, line)` pairs where the number is the 1-based
/// physical line the logical line started on.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let mut lines: Vec<(usize, String)> = Vec::new();

    // `lines()` already removes the CR of a CRLF ending; any other CR is
    // part of the value.
    for (i, line) in input.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            if let Some((_, prev)) = lines.last_mut() {
                prev.push_str(continuation);
            } else {
                lines.push((i + 1, continuation.to_string()));
            }
        } else {
            lines.push((i + 1, line.to_string()));
        }
    }

    lines
}

/// Parses a single content line.
///
/// Format: `name *(";" param) ":" value`
///
/// ## Errors
/// Returns an error if the line is malformed or contains invalid characters.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let mut chars = line.char_indices().peekable();
    let mut name_end = None;

    // Find the property name (ends at ';' or ':')
    while let Some(&(i, c)) = chars.peek() {
        if c == ';' || c == ':' {
            name_end = Some(i);
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(ParseErrorKind::InvalidPropertyName, line_num)
                .with_context(format!("unexpected character '{c}'")));
        }
        chars.next();
    }

    let name_end = name_end.ok_or_else(|| ParseError::new(ParseErrorKind::MissingColon, line_num))?;
    if name_end == 0 {
        return Err(ParseError::new(
            ParseErrorKind::MissingPropertyName,
            line_num,
        ));
    }

    let name = line[..name_end].to_ascii_uppercase();

    let mut params = Vec::new();
    let colon_pos = if line[name_end..].starts_with(':') {
        name_end
    } else {
        chars.next(); // consume the ';'
        loop {
            let (param, colon) = parse_parameter(&mut chars, line, line_num)?;
            params.push(param);
            if let Some(pos) = colon {
                break pos;
            }
        }
    };

    Ok(ContentLine {
        name,
        params,
        raw_value: line[colon_pos + 1..].to_string(),
    })
}

/// Parses a single parameter from the character stream.
///
/// Returns the parameter and, if the parameter list ended, the byte position
/// of the ':' that separates it from the value.
fn parse_parameter(
    chars: &mut Peekable<CharIndices<'_>>,
    line: &str,
    line_num: usize,
) -> ParseResult<(Parameter, Option<usize>)> {
    let start = chars.peek().map_or(line.len(), |&(i, _)| i);

    // Parse parameter name (up to '=')
    let mut name_end = start;
    while let Some(&(i, c)) = chars.peek() {
        if c == '=' {
            name_end = i;
            chars.next(); // consume '='
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(ParseErrorKind::InvalidParameter, line_num)
                .with_context(format!("unexpected character '{c}' in parameter name")));
        }
        chars.next();
    }

    if name_end == start {
        return Err(ParseError::new(ParseErrorKind::InvalidParameter, line_num));
    }

    let param_name = line[start..name_end].to_ascii_uppercase();

    // Parse parameter values (comma-separated, may be quoted)
    let mut values = Vec::new();
    loop {
        let value = parse_param_value(chars, line, line_num)?;
        values.push(value);

        match chars.next() {
            Some((_, ',')) => {}
            Some((_, ';')) => return Ok((Parameter::with_values(param_name, values), None)),
            Some((i, ':')) => {
                return Ok((Parameter::with_values(param_name, values), Some(i)));
            }
            Some((_, c)) => {
                return Err(ParseError::new(ParseErrorKind::InvalidParameter, line_num)
                    .with_context(format!("unexpected character '{c}'")));
            }
            None => return Err(ParseError::new(ParseErrorKind::MissingColon, line_num)),
        }
    }
}

/// Parses a parameter value (possibly quoted).
fn parse_param_value(
    chars: &mut Peekable<CharIndices<'_>>,
    line: &str,
    line_num: usize,
) -> ParseResult<String> {
    let Some(&(start, first)) = chars.peek() else {
        return Err(ParseError::new(ParseErrorKind::InvalidParameter, line_num));
    };

    if first != '"' {
        // Unquoted value (ends at ',' ';' or ':')
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if c == ',' || c == ';' || c == ':' {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        return Ok(line[start..end].to_string());
    }

    chars.next(); // consume opening quote
    let mut value = String::new();

    while let Some((_, c)) = chars.next() {
        match c {
            '"' => return Ok(value),
            // Caret encoding (RFC 6868)
            '^' => match chars.peek() {
                Some(&(_, '^')) => {
                    value.push('^');
                    chars.next();
                }
                Some(&(_, 'n')) => {
                    value.push('\n');
                    chars.next();
                }
                Some(&(_, '\'')) => {
                    value.push('"');
                    chars.next();
                }
                _ => value.push('^'),
            },
            _ => value.push(c),
        }
    }

    Err(ParseError::new(ParseErrorKind::UnclosedQuote, line_num))
}
