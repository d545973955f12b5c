//! Answer normalization.
//!
//! Reduces free text to a comparable form before any similarity scoring:
//!
//! 1. Lower-case the input.
//! 2. Drop every character that is not `[a-z0-9]` or whitespace. Underscore
//!    counts as punctuation. Dropping a character never inserts a space, so
//!    `"rock-n-roll"` becomes `"rocknroll"`.
//! 3. Collapse whitespace runs to a single space and trim the ends.
//! 4. Strip one leading article (`a`, `an`, `the` by default).
//!
//! Only the first article is removed. `"the the end"` normalizes to
//! `"the end"`, so repeated normalization of stacked articles keeps peeling.

/// Articles stripped from the front of an answer when no list is configured.
pub const DEFAULT_ARTICLES: [&str; 3] = ["a", "an", "the"];

/// Normalize with the default article list.
pub fn normalize(input: &str) -> String {
    let collapsed = collapse(input);
    strip_article(collapsed, DEFAULT_ARTICLES.iter().copied())
}

/// Normalize with a caller-supplied article list.
///
/// Articles are compared against the already-collapsed text, so an article
/// given as `"The"` never matches; configure them in lower case.
pub fn normalize_with_articles<S: AsRef<str>>(input: &str, articles: &[S]) -> String {
    let collapsed = collapse(input);
    strip_article(collapsed, articles.iter().map(|a| a.as_ref()))
}

fn collapse(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;
    for ch in input.chars().flat_map(char::to_lowercase) {
        if is_separator(ch) {
            pending_space = !out.is_empty();
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}

/// Characters that separate words: ASCII whitespace, the Unicode space
/// separators, the line and paragraph separators and the byte order mark.
/// U+0085 is not one of them and is dropped like punctuation.
pub(crate) fn is_separator(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn strip_article<'a, I>(text: String, articles: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    for article in articles {
        if article.is_empty() {
            continue;
        }
        if let Some(rest) = text.strip_prefix(article) {
            if let Some(rest) = rest.strip_prefix(' ') {
                return rest.to_string();
            }
        }
    }
    text
}

/// True when `s` only holds `[a-z0-9 ]` with single interior spaces.
pub fn is_normalized_form(s: &str) -> bool {
    !s.starts_with(' ')
        && !s.ends_with(' ')
        && !s.contains("  ")
        && s
            .chars()
            .all(|c| c == ' ' || c.is_ascii_lowercase() || c.is_ascii_digit())
}
