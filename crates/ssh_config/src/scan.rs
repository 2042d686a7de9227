//! Quote-aware line scanning for config files.
//!
//! A two-state scanner (inside single quotes / inside double quotes) is all
//! the `Include` grammar needs: `#` starts a comment only outside quoted
//! spans, and whitespace splits fields only outside quoted spans.

/// Remove an unquoted `#` and everything after it, then trim.
pub(crate) fn strip_inline_comment(line: &str) -> &str {
    let mut in_single = false;
    let mut in_double = false;
    for (idx, ch) in line.char_indices() {
        match ch {
            '\'' => {
                if !in_double {
                    in_single = !in_single;
                }
            }
            '"' => {
                if !in_single {
                    in_double = !in_double;
                }
            }
            '#' => {
                if !in_single && !in_double {
                    return line[..idx].trim();
                }
            }
            _ => {}
        }
    }
    line.trim()
}

/// Split a line into whitespace-separated fields, preserving whitespace
/// inside quoted spans. Quote characters stay in the field; they are
/// stripped later by [`unquote`] when the field is consumed as a pattern.
pub(crate) fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_single = false;
    let mut in_double = false;

    for ch in line.chars() {
        match ch {
            ' ' | '\t' => {
                if in_single || in_double {
                    current.push(ch);
                } else if !current.is_empty() {
                    fields.push(std::mem::take(&mut current));
                }
            }
            '\'' => {
                if !in_double {
                    in_single = !in_single;
                }
                current.push(ch);
            }
            '"' => {
                if !in_single {
                    in_double = !in_double;
                }
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        fields.push(current);
    }
    fields
}

/// Strip one pair of matching surrounding quotes, if present.
pub(crate) fn unquote(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}
