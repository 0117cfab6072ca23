//! Content line folding (RFC 5545 §3.1).

/// Maximum line length in octets, excluding the CRLF.
pub const MAX_LINE_OCTETS: usize = 75;

/// Folds one logical line and terminates every physical line with CRLF.
///
/// The first physical line holds up to 75 octets; each continuation starts
/// with a single space followed by up to 74 octets. Multi-byte UTF-8
/// sequences are never split.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut result = String::with_capacity(line.len() + (line.len() / (MAX_LINE_OCTETS - 1)) * 3);
    let mut rest = line;
    let mut budget = MAX_LINE_OCTETS;

    while !rest.is_empty() {
        let end = split_point(rest, budget);
        let (segment, tail) = rest.split_at(end);

        if budget < MAX_LINE_OCTETS {
            result.push(' ');
        }
        result.push_str(segment);
        result.push_str("\r\n");

        rest = tail;
        // Continuations lose one octet to the leading space
        budget = MAX_LINE_OCTETS - 1;
    }

    result
}

/// Largest char boundary at or below `budget`, but at least one character.
fn split_point(s: &str, budget: usize) -> usize {
    if s.len() <= budget {
        return s.len();
    }

    let mut end = budget;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    if end == 0 {
        end = s.chars().next().map_or(s.len(), char::len_utf8);
    }
    end
}
