//! Attribute-value reader (spec §4.2): consumes the value half of a
//! `name=value` attribute pair once the chunker layer has confirmed an
//! `=` was present.

/// Reads an attribute value starting at `pos`, which is assumed to sit
/// just past the `=` (and any whitespace following it).
///
/// A quoted value (`"` or `'`) reads to the matching quote, consuming
/// both quote characters; if the input ends before the closing quote
/// appears, it reads to end of input instead (no error, no truncation
/// of what was there). An unquoted value reads a run of non-whitespace,
/// non-`>` characters — possibly empty.
///
/// Returns the decoded value and the number of bytes consumed from
/// `pos`.
pub fn read_attribute_value(src: &str, pos: usize) -> (String, usize) {
    let bytes = src.as_bytes();
    match bytes.get(pos) {
        Some(&quote @ (b'"' | b'\'')) => {
            let rest = &src[pos + 1..];
            match rest.find(quote as char) {
                Some(idx) => (rest[..idx].to_string(), idx + 2),
                None => (rest.to_string(), rest.len() + 1),
            }
        }
        _ => {
            let rest = &src[pos..];
            let len = rest
                .find(|c: char| c == '>' || c.is_ascii_whitespace())
                .unwrap_or(rest.len());
            (rest[..len].to_string(), len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_quoted_value() {
        assert_eq!(
            read_attribute_value("\"hello\" rest", 0),
            ("hello".to_string(), 7)
        );
    }

    #[test]
    fn single_quoted_value_with_embedded_double_quote() {
        assert_eq!(
            read_attribute_value("'say \"hi\"'>", 0),
            ("say \"hi\"".to_string(), 10)
        );
    }

    #[test]
    fn unterminated_quoted_value_reads_to_eof() {
        assert_eq!(read_attribute_value("\"abc", 0), ("abc".to_string(), 4));
    }

    #[test]
    fn unquoted_value_stops_at_whitespace_or_gt() {
        assert_eq!(
            read_attribute_value("bar baz", 0),
            ("bar".to_string(), 3)
        );
        assert_eq!(read_attribute_value("bar>", 0), ("bar".to_string(), 3));
    }

    #[test]
    fn empty_unquoted_value() {
        assert_eq!(read_attribute_value(">", 0), (String::new(), 0));
    }
}
