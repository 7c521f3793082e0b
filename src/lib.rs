//! A streaming, permissive HTML tokenizer and parser.
//!
//! # Scope
//!
//! This crate implements two tightly coupled subsystems:
//!
//! - [`tokenizer`] — a chunker-driven state machine that turns raw HTML
//!   into a low-level [`Token`] stream (opening tag, attribute, tag end,
//!   text, comment, closing tag).
//! - [`parser`] — a stack machine that consumes the token stream and
//!   emits a balanced, well-nested sequence of [`ParseEvent`]s, inserting
//!   synthetic close events wherever HTML allows tags to be closed
//!   implicitly.
//!
//! Both halves are total: no input string causes either to fail, panic,
//! or loop without making forward progress. The tokenizer does not
//! implement the full WHATWG insertion-mode automaton, foreign-content
//! handling, `<template>` semantics, or encoding detection — it
//! emulates only the parts of HTML5 error recovery that govern void
//! elements, `<script>` raw-text content, and implied end tags.
//!
//! # Not in scope
//!
//! HTML entity decoding, DOM tree construction, serialization, and any
//! form of I/O are left to callers; this crate operates purely on an
//! in-memory `&str` and returns lazy iterators.

/// HTML parser: consumes a token stream and emits balanced parse events.
pub mod parser;
/// HTML tokenizer: turns raw HTML into a low-level token stream.
pub mod tokenizer;

pub use parser::{parse, Attributes, ParseEvent, Parser};
pub use tokenizer::{tokenize, TagEnd, Token, Tokenizer};
