//! Keeps player-typed text on one log line.
//!
//! Answers go into records as `input="..."`, so quotes and line breaks in
//! them must not end the field or the record.

use std::fmt::Write;

/// Longest answer preview kept in a log record, in characters.
pub const MAX_PREVIEW: usize = 120;

/// Render `s` as the body of a quoted log field.
///
/// Line breaks and tabs use their usual backslash escapes. Backslash and `"`
/// are prefixed with a backslash, and remaining control characters print as
/// `\xNN`. Input longer than [`MAX_PREVIEW`] is cut and marked with `…`.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    let mut chars = s.chars();
    for ch in chars.by_ref().take(MAX_PREVIEW) {
        push_escaped(&mut out, ch);
    }
    if chars.next().is_some() {
        out.push('…');
    }
    out
}

fn push_escaped(out: &mut String, ch: char) {
    let escaped = match ch {
        '\n' => "\\n",
        '\r' => "\\r",
        '\t' => "\\t",
        '\\' => "\\\\",
        '"' => "\\\"",
        c if c.is_control() => {
            let _ = write!(out, "\\x{:02X}", c as u32);
            return;
        }
        c => {
            out.push(c);
            return;
        }
    };
    out.push_str(escaped);
}
