use super::chunkers::TagEnd;

/// A single low-level event produced by [`super::Tokenizer`].
///
/// There is no `Start`/`Done` pair here: the first call to
/// [`Iterator::next`] begins tokenization, and a returned `None` is the
/// end of the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name` — the tag name is captured as written, including any
    /// namespace-prefix colon.
    OpeningTag {
        /// The tag name, original case preserved.
        name: String,
    },
    /// One attribute belonging to the opening tag currently under
    /// construction. Emitted zero or more times between an
    /// `OpeningTag` and its `OpeningTagEnd`.
    Attribute {
        /// The attribute name, original case preserved.
        name: String,
        /// The attribute value. Empty when the attribute had no `=`
        /// part, or when its unquoted/quoted value was itself empty.
        value: String,
    },
    /// The terminator of an opening tag: `>` or `/>`.
    OpeningTagEnd {
        /// The name carried over from the `OpeningTag` this closes.
        name: String,
        /// Which literal terminator was seen.
        end: TagEnd,
    },
    /// A run of coalesced character data with no embedded `<`.
    Text(String),
    /// The body of an HTML comment, not including `<!--`/`-->`.
    Comment(String),
    /// `</name>`.
    ClosingTag {
        /// The tag name, original case preserved.
        name: String,
    },
}
