//! Static tables driving the parser's implicit-close rules (spec
//! §4.4, §4.5). All lookups here take already-lowercased names — the
//! parser is responsible for normalizing before calling in.

/// Elements that never have separate content and are always treated
/// as self-closing regardless of how they were written.
pub fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
            | "command"
    )
}

/// Elements that are implicitly closed when their parent is closed
/// (i.e. they are allowed to still be open on the parser's stack when
/// an ancestor's closing tag arrives, and are popped along with it).
pub fn is_closed_by_parent(name: &str) -> bool {
    matches!(
        name,
        "p" | "li"
            | "dd"
            | "rb"
            | "rt"
            | "rtc"
            | "rp"
            | "optgroup"
            | "option"
            | "tbody"
            | "tfoot"
            | "tr"
            | "td"
            | "th"
    )
}

/// The block-level elements that implicitly close an open `<p>`.
const P_CLOSING_SIBLINGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "div",
    "dl",
    "fieldset",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "ul",
];

/// Whether opening an element named `opening` should implicitly close
/// the element named `stack_top` currently on top of the parser's
/// stack, under HTML5's sibling-closing rules (e.g. a new `<li>`
/// closes an open `<li>`; a new `<td>` closes an open `<td>` or
/// `<th>`).
pub fn closed_by_sibling(stack_top: &str, opening: &str) -> bool {
    let candidates: &[&str] = match stack_top {
        "p" => P_CLOSING_SIBLINGS,
        "li" => &["li"],
        "dt" | "dd" => &["dt", "dd"],
        "rb" | "rt" | "rp" => &["rb", "rt", "rtc", "rp"],
        "rtc" => &["rb", "rtc", "rp"],
        "optgroup" => &["optgroup"],
        "option" => &["option", "optgroup"],
        "thead" | "tbody" => &["tbody", "tfoot"],
        "tfoot" => &["tbody"],
        "tr" => &["tr"],
        "td" | "th" => &["td", "th"],
        _ => return false,
    };
    candidates.contains(&opening)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn br_and_img_are_void() {
        assert!(is_void_element("br"));
        assert!(is_void_element("img"));
        assert!(!is_void_element("div"));
    }

    #[test]
    fn closed_by_parent_matches_the_optional_tag_list() {
        assert!(is_closed_by_parent("li"));
        assert!(is_closed_by_parent("td"));
        assert!(!is_closed_by_parent("dt"));
        assert!(!is_closed_by_parent("thead"));
        assert!(!is_closed_by_parent("div"));
    }

    #[test]
    fn second_li_closes_the_first() {
        assert!(closed_by_sibling("li", "li"));
        assert!(!closed_by_sibling("li", "p"));
    }

    #[test]
    fn div_closes_an_open_p() {
        assert!(closed_by_sibling("p", "div"));
        assert!(closed_by_sibling("p", "p"));
        assert!(!closed_by_sibling("p", "span"));
    }

    #[test]
    fn table_section_sibling_rules() {
        assert!(closed_by_sibling("thead", "tbody"));
        assert!(closed_by_sibling("tbody", "tfoot"));
        assert!(closed_by_sibling("td", "th"));
        assert!(!closed_by_sibling("td", "tr"));
    }
}
