use super::attribute_value::read_attribute_value;
use super::chunkers::{
    match_attribute_name, match_closing_tag, match_comment_body, match_comment_open,
    match_opening_tag_start, match_script_body, match_tag_end, match_text,
};
use super::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawState {
    InText,
    InTag,
    InComment,
    InScript,
}

/// The four-state automaton underlying [`super::Tokenizer`] (spec
/// §4.3), before text-run coalescing is applied. Not exposed outside
/// the crate: callers only ever see the coalescing wrapper.
pub(super) struct RawTokenizer<'a> {
    src: &'a str,
    pos: usize,
    state: RawState,
    current_tag: String,
    pending: Option<Token>,
}

impl<'a> RawTokenizer<'a> {
    pub(super) fn new(src: &'a str) -> Self {
        RawTokenizer {
            src,
            pos: 0,
            state: RawState::InText,
            current_tag: String::new(),
            pending: None,
        }
    }

    pub(super) fn next_raw(&mut self) -> Option<Token> {
        if let Some(tok) = self.pending.take() {
            return Some(tok);
        }
        loop {
            match self.state {
                RawState::InText => {
                    // Unlike InComment/InScript, InText never has an
                    // unconditional token to emit once input is
                    // exhausted, so it's the only state this guard can
                    // apply to.
                    if self.pos >= self.src.len() {
                        return None;
                    }
                    if let Some(tok) = self.step_in_text() {
                        return Some(tok);
                    }
                }
                RawState::InTag => {
                    if let Some(tok) = self.step_in_tag() {
                        return Some(tok);
                    }
                }
                RawState::InComment => return self.step_in_comment(),
                RawState::InScript => return self.step_in_script(),
            }
        }
    }

    fn step_in_text(&mut self) -> Option<Token> {
        if let Some((len, name)) = match_opening_tag_start(self.src, self.pos) {
            self.pos += len;
            self.current_tag = name.clone();
            self.state = RawState::InTag;
            return Some(Token::OpeningTag { name });
        }
        if let Some((len, name)) = match_closing_tag(self.src, self.pos) {
            self.pos += len;
            return Some(Token::ClosingTag { name });
        }
        if let Some(len) = match_comment_open(self.src, self.pos) {
            self.pos += len;
            self.state = RawState::InComment;
            return None;
        }
        if let Some((len, text)) = match_text(self.src, self.pos) {
            self.pos += len;
            return Some(Token::Text(text));
        }
        // Guaranteed forward progress: a lone '<' that matches nothing
        // else is emitted as one character of text.
        let ch = self.src[self.pos..].chars().next().expect("pos < src.len()");
        let len = ch.len_utf8();
        let text = self.src[self.pos..self.pos + len].to_string();
        self.pos += len;
        Some(Token::Text(text))
    }

    fn step_in_tag(&mut self) -> Option<Token> {
        if let Some((len, name, has_eq)) = match_attribute_name(self.src, self.pos) {
            self.pos += len;
            let value = if has_eq {
                let (value, vlen) = read_attribute_value(self.src, self.pos);
                self.pos += vlen;
                value
            } else {
                String::new()
            };
            return Some(Token::Attribute { name, value });
        }
        if let Some((len, end)) = match_tag_end(self.src, self.pos) {
            self.pos += len;
            let name = std::mem::take(&mut self.current_tag);
            self.state = if name.eq_ignore_ascii_case("script") {
                RawState::InScript
            } else {
                RawState::InText
            };
            return Some(Token::OpeningTagEnd { name, end });
        }
        // Nothing recognizable inside the tag: abandon it. No token is
        // emitted, no byte is consumed; the next InText step is
        // guaranteed to consume at least one byte (text run or the
        // single-char fallback), so this can't loop forever.
        self.state = RawState::InText;
        None
    }

    fn step_in_comment(&mut self) -> Option<Token> {
        match match_comment_body(self.src, self.pos) {
            Some((len, body)) => {
                self.pos += len;
                self.state = RawState::InText;
                Some(Token::Comment(body))
            }
            None => {
                let body = self.src[self.pos..].to_string();
                self.pos = self.src.len();
                self.state = RawState::InText;
                Some(Token::Comment(body))
            }
        }
    }

    fn step_in_script(&mut self) -> Option<Token> {
        match match_script_body(self.src, self.pos) {
            Some((len, body)) => {
                self.pos += len;
                self.state = RawState::InText;
                self.pending = Some(Token::ClosingTag {
                    name: "script".to_string(),
                });
                Some(Token::Text(body))
            }
            None => {
                let body = self.src[self.pos..].to_string();
                self.pos = self.src.len();
                self.state = RawState::InText;
                Some(Token::Text(body))
            }
        }
    }
}
