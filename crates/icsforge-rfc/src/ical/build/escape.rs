//! Escaping for TEXT values and parameter values.

/// Escapes a TEXT value (RFC 5545 §3.3.11).
///
/// Backslash, comma, semicolon and newline are escaped. A CRLF pair is one
/// line break and becomes a single escaped LF; a lone CR is kept as is.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 8);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' if chars.peek() == Some(&'\n') => {}
            _ => result.push(c),
        }
    }
    result
}

/// Renders a parameter value, quoting it when it contains a character that
/// would otherwise end the value.
///
/// Inside quotes, `^`, newline and `"` use RFC 6868 caret encoding.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    if !s.contains([':', ';', ',', '"', '\n']) {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => result.push_str("^'"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ical::parse::unescape_text;

    #[test]
    fn escape_text_specials() {
        assert_eq!(escape_text("Lunch, then; code"), "Lunch\\, then\\; code");
        assert_eq!(escape_text("line1\r\nline2"), "line1\\nline2");
        assert_eq!(escape_text("C:\\temp"), "C:\\\\temp");
    }

    #[test]
    fn escape_then_unescape_is_identity() {
        for text in [
            "plain",
            "a,b;c\\d\ne",
            "\\n is not a newline",
            "trailing backslash\\",
            "Grüße, 日本",
            "lone\rcarriage return\r",
        ] {
            assert_eq!(unescape_text(&escape_text(text)), text);
        }
    }

    #[test]
    fn crlf_becomes_one_escaped_newline() {
        assert_eq!(escape_text("a\rb"), "a\rb");
        assert_eq!(escape_text("a\r\nb\r"), "a\\nb\r");
        assert_eq!(unescape_text(&escape_text("a\r\nb")), "a\nb");
    }

    #[test]
    fn param_values_quoted_only_when_needed() {
        assert_eq!(escape_param_value("Jane"), "Jane");
        assert_eq!(escape_param_value("Doe, Jane"), "\"Doe, Jane\"");
        assert_eq!(escape_param_value("mailto:x"), "\"mailto:x\"");
    }

    #[test]
    fn param_values_caret_encoded_inside_quotes() {
        assert_eq!(escape_param_value("Say \"hi\""), "\"Say ^'hi^'\"");
        assert_eq!(escape_param_value("1^2\n3"), "\"1^^2^n3\"");
    }
}
