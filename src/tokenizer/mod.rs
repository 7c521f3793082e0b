//! HTML tokenizer.
//!
//! Turns an input `&str` into a lazy stream of [`Token`]s through a
//! four-state automaton (`InText`, `InTag`, `InComment`, `InScript`)
//! layered on the hand-written [`chunkers`] and [`attribute_value`]
//! scanners, then coalesces adjacent character data into single
//! [`Token::Text`] runs.

mod attribute_value;
mod chunkers;
mod raw;
mod token;

use raw::RawTokenizer;
pub use token::Token;

pub use chunkers::TagEnd;

/// Tokenizes `html`, returning a lazy iterator of [`Token`]s.
///
/// Begins work on the first call to `.next()`; the stream ends when
/// `.next()` returns `None`.
pub fn tokenize(html: &str) -> Tokenizer<'_> {
    Tokenizer::new(html)
}

/// Iterator over the [`Token`] stream of an HTML source string.
///
/// Wraps the private raw automaton and coalesces consecutive text runs
/// that the raw layer emits in pieces (e.g. around an absorbed comment
/// or an abandoned tag) into a single `Token::Text`.
pub struct Tokenizer<'a> {
    raw: RawTokenizer<'a>,
    text_buf: String,
    queued: Option<Token>,
    raw_done: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `html`. Equivalent to [`tokenize`].
    pub fn new(html: &'a str) -> Self {
        Tokenizer {
            raw: RawTokenizer::new(html),
            text_buf: String::new(),
            queued: None,
            raw_done: false,
        }
    }

    fn flush_text(&mut self) -> Option<Token> {
        if self.text_buf.is_empty() {
            None
        } else {
            Some(Token::Text(std::mem::take(&mut self.text_buf)))
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(queued) = self.queued.take() {
                if let Some(text) = self.flush_text() {
                    self.queued = Some(queued);
                    return Some(text);
                }
                return Some(queued);
            }
            if self.raw_done {
                return self.flush_text();
            }
            match self.raw.next_raw() {
                Some(Token::Text(t)) => {
                    self.text_buf.push_str(&t);
                }
                Some(other) => {
                    if let Some(text) = self.flush_text() {
                        self.queued = Some(other);
                        return Some(text);
                    }
                    return Some(other);
                }
                None => {
                    self.raw_done = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn toks(html: &str) -> Vec<Token> {
        tokenize(html).collect()
    }

    #[test]
    fn simple_void_element() {
        assert_eq!(
            toks("<br>"),
            vec![
                Token::OpeningTag { name: "br".into() },
                Token::OpeningTagEnd {
                    name: "br".into(),
                    end: TagEnd::Close,
                },
            ]
        );
    }

    #[test]
    fn attribute_with_quoted_value() {
        assert_eq!(
            toks("<a href=\"/x\">"),
            vec![
                Token::OpeningTag { name: "a".into() },
                Token::Attribute {
                    name: "href".into(),
                    value: "/x".into(),
                },
                Token::OpeningTagEnd {
                    name: "a".into(),
                    end: TagEnd::Close,
                },
            ]
        );
    }

    #[test]
    fn text_runs_coalesce_across_an_absorbed_comment() {
        assert_eq!(toks("a<!--x-->b"), vec![Token::Text("ab".into())]);
    }

    #[test]
    fn script_body_is_not_tag_scanned() {
        assert_eq!(
            toks("<script>a<b>c</script>"),
            vec![
                Token::OpeningTag {
                    name: "script".into(),
                },
                Token::OpeningTagEnd {
                    name: "script".into(),
                    end: TagEnd::Close,
                },
                Token::Text("a<b>c".into()),
                Token::ClosingTag {
                    name: "script".into(),
                },
            ]
        );
    }

    #[test]
    fn unterminated_comment_absorbs_rest_of_input() {
        assert_eq!(
            toks("x<!--oops"),
            vec![Token::Text("x".into()), Token::Comment("oops".into())]
        );
    }

    #[test]
    fn comment_opener_with_nothing_after_it_still_emits_an_empty_comment() {
        // Input ends exactly at "<!--": the unterminated-comment rule
        // is unconditional, so a Comment token is emitted even though
        // there are zero bytes of body left to consume.
        assert_eq!(toks("<!--"), vec![Token::Comment(String::new())]);
    }

    #[test]
    fn stray_angle_bracket_falls_back_to_text() {
        // '<' followed by something that isn't a valid tag name, a
        // closing tag, or a comment open falls back to a literal '<'
        // character of text; the rest is then matched as an ordinary
        // text run, and the two coalesce.
        assert_eq!(toks("<!x"), vec![Token::Text("<!x".into())]);
    }

    #[test]
    fn abandoned_tag_recovers_into_text() {
        // "< " has a valid '<' start but no name follows, so it falls
        // back one byte at a time and never hangs.
        assert_eq!(toks("< oops"), vec![Token::Text("< oops".into())]);
    }

    #[test]
    fn unrecognizable_tag_interior_abandons_the_tag() {
        // Once inside a tag, a byte that starts neither a new attribute
        // nor a tag-end sequence abandons the tag: no token is emitted
        // for it, and scanning resumes in InText without consuming it.
        assert_eq!(
            toks("<div @bad>"),
            vec![
                Token::OpeningTag { name: "div".into() },
                Token::Text(" @bad>".into()),
            ]
        );
    }

    #[test]
    fn closing_tag_is_emitted_standalone() {
        assert_eq!(
            toks("</div>"),
            vec![Token::ClosingTag { name: "div".into() }]
        );
    }
}
