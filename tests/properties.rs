//! Property tests for the invariants this crate's tokenizer and parser
//! are built to uphold on *any* input, not just the handful of
//! scenarios exercised by the in-module unit tests.

use lenient_html::{parse, tokenize, ParseEvent, Token};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn tokenizer_never_panics(input: String) -> bool {
    let _: Vec<Token> = tokenize(&input).collect();
    true
}

#[quickcheck]
fn parser_never_panics(input: String) -> bool {
    let _: Vec<ParseEvent> = parse(&input).collect();
    true
}

#[quickcheck]
fn text_tokens_never_appear_back_to_back(input: String) -> bool {
    let tokens: Vec<Token> = tokenize(&input).collect();
    tokens
        .windows(2)
        .all(|w| !matches!((&w[0], &w[1]), (Token::Text(_), Token::Text(_))))
}

#[quickcheck]
fn no_text_token_is_empty(input: String) -> bool {
    tokenize(&input).all(|tok| !matches!(tok, Token::Text(t) if t.is_empty()))
}

#[quickcheck]
fn token_count_is_bounded_by_input_length(input: String) -> bool {
    // No chunker can emit more tokens than there are bytes available to
    // consume (the "abandon tag" step emits no token and always
    // advances the state machine toward one that must consume a byte
    // next), so a halting proof reduces to bounding this count.
    tokenize(&input).count() <= input.len() + 1
}

#[quickcheck]
fn events_form_a_properly_nested_sequence(input: String) -> bool {
    let mut stack: Vec<String> = Vec::new();
    for event in parse(&input) {
        match event {
            ParseEvent::Open {
                name,
                self_closing: false,
                ..
            } => stack.push(name),
            ParseEvent::Open {
                self_closing: true, ..
            } => {}
            ParseEvent::Close { name, .. } => match stack.pop() {
                Some(top) if top == name => {}
                _ => return false,
            },
            ParseEvent::Text { .. } | ParseEvent::Comment { .. } => {}
        }
    }
    stack.is_empty()
}

#[quickcheck]
fn self_closing_open_events_have_no_matching_close(input: String) -> bool {
    // A self-closing Open must never be the thing a later Close pairs
    // with: it was never pushed onto the stack in the first place, so
    // `events_form_a_properly_nested_sequence` already guards this
    // indirectly. Here we additionally check that void elements like
    // `<br>` specifically always come back self-closing.
    parse(&input).all(|event| match event {
        ParseEvent::Open {
            name,
            self_closing,
            ..
        } if name.eq_ignore_ascii_case("br") || name.eq_ignore_ascii_case("img") => self_closing,
        _ => true,
    })
}
