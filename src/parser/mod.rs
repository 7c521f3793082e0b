//! HTML parser.
//!
//! Consumes a [`crate::tokenizer::Token`] stream and emits a balanced
//! sequence of [`ParseEvent`]s, applying HTML5's optional-tag rules
//! (void elements, implied end tags, sibling-closing) as a stack
//! machine rather than the full WHATWG insertion-mode automaton.

mod attributes;
mod tables;

use std::collections::VecDeque;

use crate::tokenizer::{TagEnd, Token, Tokenizer};

pub use attributes::Attributes;

/// A balanced, high-level parsing event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    /// An element's start, with its attributes as captured at the
    /// point the opening tag closed.
    Open {
        /// Element name, original case preserved.
        name: String,
        /// Attributes in insertion order, duplicates resolved.
        attributes: Attributes,
        /// Whether this element has no matching `Close` (`/>` or a
        /// void element like `<br>`).
        self_closing: bool,
    },
    /// A run of character data.
    Text {
        /// The text content.
        text: String,
    },
    /// An HTML comment.
    Comment {
        /// The comment body, not including `<!--`/`-->`.
        text: String,
    },
    /// An element's end, explicit or synthesized.
    Close {
        /// Element name, original case preserved, matching the
        /// `Open` this closes.
        name: String,
        /// Always `false` today: self-closing elements never get a
        /// matching `Close`. Kept on the event for symmetry with
        /// `Open` and in case a future caller wants to distinguish a
        /// synthesized close from one sourced from `</name>`.
        self_closing: bool,
    },
}

#[derive(Debug, Clone)]
struct PendingTag {
    name: String,
    attributes: Attributes,
}

/// Parses `html`, returning a lazy iterator of [`ParseEvent`]s.
pub fn parse(html: &str) -> Parser<'_> {
    Parser::new(html)
}

/// Iterator over the [`ParseEvent`] stream of an HTML source string.
///
/// Wraps a [`Tokenizer`] internally: each call to `.next()` may pull
/// zero or more raw tokens before it has an event ready to yield.
pub struct Parser<'a> {
    tokens: Tokenizer<'a>,
    stack: Vec<PendingTag>,
    building: Option<PendingTag>,
    queue: VecDeque<ParseEvent>,
    tokens_done: bool,
    drained: bool,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `html`. Equivalent to [`parse`].
    pub fn new(html: &'a str) -> Self {
        Parser {
            tokens: Tokenizer::new(html),
            stack: Vec::new(),
            building: None,
            queue: VecDeque::new(),
            tokens_done: false,
            drained: false,
        }
    }

    fn handle_token(&mut self, token: Token) {
        match token {
            Token::OpeningTag { name } => {
                self.building = Some(PendingTag {
                    name,
                    attributes: Attributes::new(),
                });
            }
            Token::Attribute { name, value } => {
                if let Some(building) = self.building.as_mut() {
                    building.attributes.insert(name, value);
                }
            }
            Token::OpeningTagEnd { name, end } => self.handle_opening_tag_end(name, end),
            Token::Text(text) => {
                if !text.is_empty() {
                    self.queue.push_back(ParseEvent::Text { text });
                }
            }
            Token::Comment(text) => {
                self.queue.push_back(ParseEvent::Comment { text });
            }
            Token::ClosingTag { name } => self.handle_closing_tag(&name),
        }
    }

    fn handle_opening_tag_end(&mut self, name: String, end: TagEnd) {
        let lname = name.to_ascii_lowercase();
        let matches_building = matches!(&self.building, Some(b) if b.name == name);
        if !matches_building {
            // A tag-end terminator with no matching opening tag under
            // construction: the building frame was abandoned or never
            // started. Recover by treating the terminator as literal
            // text rather than dropping it silently.
            let literal = match end {
                TagEnd::Close => ">".to_string(),
                TagEnd::SelfClose => "/>".to_string(),
            };
            self.queue.push_back(ParseEvent::Text { text: literal });
            return;
        }
        let pending = self.building.take().expect("checked above");
        let is_self_close = matches!(end, TagEnd::SelfClose) || tables::is_void_element(&lname);

        if let Some(top) = self.stack.last() {
            if tables::closed_by_sibling(&top.name.to_ascii_lowercase(), &lname) {
                let closed = self.stack.pop().expect("just checked last()");
                self.queue.push_back(ParseEvent::Close {
                    name: closed.name,
                    self_closing: false,
                });
            }
        }

        self.queue.push_back(ParseEvent::Open {
            name: pending.name.clone(),
            attributes: pending.attributes.clone(),
            self_closing: is_self_close,
        });
        if !is_self_close {
            self.stack.push(pending);
        }
    }

    fn handle_closing_tag(&mut self, name: &str) {
        let lname = name.to_ascii_lowercase();

        if let Some(top) = self.stack.last() {
            if top.name.to_ascii_lowercase() == lname {
                let popped = self.stack.pop().expect("just checked last()");
                self.queue.push_back(ParseEvent::Close {
                    name: popped.name,
                    self_closing: false,
                });
                return;
            }
        }

        if self.stack.len() >= 2 {
            let under_top = &self.stack[self.stack.len() - 2];
            let top = &self.stack[self.stack.len() - 1];
            if under_top.name.to_ascii_lowercase() == lname
                && tables::is_closed_by_parent(&top.name.to_ascii_lowercase())
            {
                let implied = self.stack.pop().expect("len >= 2");
                let matched = self.stack.pop().expect("len >= 2");
                self.queue.push_back(ParseEvent::Close {
                    name: implied.name,
                    self_closing: false,
                });
                self.queue.push_back(ParseEvent::Close {
                    name: matched.name,
                    self_closing: false,
                });
                return;
            }
        }

        // No matching open element anywhere usable: an unmatched
        // closing tag is dropped silently (spec recovery rule).
    }

    fn drain(&mut self) {
        while let Some(frame) = self.stack.pop() {
            self.queue.push_back(ParseEvent::Close {
                name: frame.name,
                self_closing: false,
            });
        }
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = ParseEvent;

    fn next(&mut self) -> Option<ParseEvent> {
        loop {
            if let Some(event) = self.queue.pop_front() {
                return Some(event);
            }
            if self.drained {
                return None;
            }
            if self.tokens_done {
                self.drain();
                self.drained = true;
                continue;
            }
            match self.tokens.next() {
                Some(token) => self.handle_token(token),
                None => self.tokens_done = true,
            }
        }
    }
}
