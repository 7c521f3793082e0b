//! Position-anchored pattern matchers.
//!
//! Each function here matches only *at* the given byte offset — never
//! scanning ahead to find a later match — and returns `None` on
//! failure without consuming anything. This is the "chunker" layer
//! the tokenizer's state machine is built on.
//!
//! Every delimiter byte these scanners look for (`<`, `>`, `/`, `=`,
//! `"`, `'`, ASCII whitespace, `-`, `:`) is a single-byte ASCII
//! character, so indexing `src` at the byte offsets these functions
//! return never lands inside a multi-byte UTF-8 sequence.

/// The literal terminator a tag ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagEnd {
    /// `>`
    Close,
    /// `/>`
    SelfClose,
}

fn is_html_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0C')
}

fn is_name_char(b: u8, allow_underscore: bool) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || (allow_underscore && b == b'_')
}

/// Matches `([a-z0-9-]+:)?[a-z0-9-]+` (optionally with `_` allowed) at
/// `pos`, case-insensitively, preserving captured case. Mirrors how a
/// regex engine backtracks out of the optional `prefix:` group if no
/// second segment follows the colon.
fn scan_qualified_name(src: &str, pos: usize, allow_underscore: bool) -> Option<(usize, String)> {
    let bytes = src.as_bytes();
    let mut i = pos;
    while i < bytes.len() && is_name_char(bytes[i], allow_underscore) {
        i += 1;
    }
    if i == pos {
        return None;
    }
    if i < bytes.len() && bytes[i] == b':' {
        let mut j = i + 1;
        while j < bytes.len() && is_name_char(bytes[j], allow_underscore) {
            j += 1;
        }
        if j > i + 1 {
            return Some((j - pos, src[pos..j].to_string()));
        }
    }
    Some((i - pos, src[pos..i].to_string()))
}

/// `OpeningTagStart`: `<` followed by a tag name. Does **not** consume
/// the closing `>` — returns the length of `<name`, i.e. not including
/// any tag-end terminator.
pub fn match_opening_tag_start(src: &str, pos: usize) -> Option<(usize, String)> {
    if src.as_bytes().get(pos) != Some(&b'<') {
        return None;
    }
    let (name_len, name) = scan_qualified_name(src, pos + 1, false)?;
    Some((1 + name_len, name))
}

/// `ClosingTag`: `</name>`, with no tolerance for whitespace between
/// the name and the `>`.
pub fn match_closing_tag(src: &str, pos: usize) -> Option<(usize, String)> {
    let bytes = src.as_bytes();
    if bytes.get(pos) != Some(&b'<') || bytes.get(pos + 1) != Some(&b'/') {
        return None;
    }
    let (name_len, name) = scan_qualified_name(src, pos + 2, false)?;
    let end = pos + 2 + name_len;
    if bytes.get(end) == Some(&b'>') {
        Some((end + 1 - pos, name))
    } else {
        None
    }
}

/// `CommentOpen`: the literal `<!--`.
pub fn match_comment_open(src: &str, pos: usize) -> Option<usize> {
    if src[pos..].starts_with("<!--") {
        Some(4)
    } else {
        None
    }
}

/// `CommentBody`: everything up to and including the first `-->`,
/// capturing the body without the terminator. `None` if `-->` never
/// appears in the remainder of the input.
pub fn match_comment_body(src: &str, pos: usize) -> Option<(usize, String)> {
    let rest = &src[pos..];
    let idx = rest.find("-->")?;
    Some((idx + 3, rest[..idx].to_string()))
}

/// `ScriptBody`: everything up to and including the first `</script>`
/// (case-sensitive), capturing the body without the closing tag.
pub fn match_script_body(src: &str, pos: usize) -> Option<(usize, String)> {
    let rest = &src[pos..];
    let idx = rest.find("</script>")?;
    Some((idx + "</script>".len(), rest[..idx].to_string()))
}

/// `Text`: one or more characters that are not `<`.
pub fn match_text(src: &str, pos: usize) -> Option<(usize, String)> {
    let rest = &src[pos..];
    let len = rest.find('<').unwrap_or(rest.len());
    if len == 0 {
        None
    } else {
        Some((len, rest[..len].to_string()))
    }
}

/// `TagEnd`: optional whitespace followed by `>` or `/>`.
pub fn match_tag_end(src: &str, pos: usize) -> Option<(usize, TagEnd)> {
    let bytes = src.as_bytes();
    let mut i = pos;
    while i < bytes.len() && is_html_whitespace(bytes[i]) {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'>') => Some((i + 1 - pos, TagEnd::Close)),
        Some(b'/') if bytes.get(i + 1) == Some(&b'>') => Some((i + 2 - pos, TagEnd::SelfClose)),
        _ => None,
    }
}

/// `AttributeName`: mandatory leading whitespace, then a qualified
/// name, optionally followed by `ws* '=' ws*`. Returns the consumed
/// length, the captured name, and whether a trailing `=` was present.
/// If the optional `=` part doesn't pan out, none of the trailing
/// whitespace scanned while looking for it is consumed (regex-style
/// backtracking out of the optional group).
pub fn match_attribute_name(src: &str, pos: usize) -> Option<(usize, String, bool)> {
    let bytes = src.as_bytes();
    let mut i = pos;
    while i < bytes.len() && is_html_whitespace(bytes[i]) {
        i += 1;
    }
    if i == pos {
        return None;
    }
    let (name_len, name) = scan_qualified_name(src, i, true)?;
    let after_name = i + name_len;

    let mut j = after_name;
    while j < bytes.len() && is_html_whitespace(bytes[j]) {
        j += 1;
    }
    if bytes.get(j) == Some(&b'=') {
        let mut k = j + 1;
        while k < bytes.len() && is_html_whitespace(bytes[k]) {
            k += 1;
        }
        Some((k - pos, name, true))
    } else {
        Some((after_name - pos, name, false))
    }
}
