//! Display rendering and selection synchronization.
//!
//! Both functions are pure: the HTML view and the char-offset selection
//! range are derived from (token list, current component) alone, so the
//! two host representations of the current word (the highlight span in
//! the rendered markup and the real widget selection) can never drift
//! apart.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tokenize::Token;

/// Marked spans inside an (already escaped) token become strong emphasis.
/// `[^_]+` keeps nested underscores out of the bold body.
static BOLD_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__([^_]+)__").expect("bold span pattern is valid"));

/// Escape the HTML-reserved characters that can occur in sentence text
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the token list to display markup.
///
/// Every token is HTML-escaped and its `__…__` spans are replaced with
/// `<b>…</b>`. The token at `current_component` (if any) is additionally
/// wrapped in a background-color span, exactly that token and no other.
pub fn render_html(tokens: &[Token], current_component: Option<usize>, highlight: &str) -> String {
    let mut html = String::new();
    for (i, token) in tokens.iter().enumerate() {
        let escaped = escape_html(&token.text);
        let processed = BOLD_SPAN_RE.replace_all(&escaped, "<b>$1</b>");
        if current_component == Some(i) {
            html.push_str(&format!(
                r#"<span style="background-color: {};">{}</span>"#,
                highlight, processed
            ));
        } else {
            html.push_str(&processed);
        }
    }
    html
}

/// Char-offset range of the token at `current_component`, or `None` when
/// there is no current word (meaning: clear the host selection).
pub fn selection_range(tokens: &[Token], current_component: Option<usize>) -> Option<Range<usize>> {
    let target = current_component?;
    let mut offset = 0;
    for (i, token) in tokens.iter().enumerate() {
        let len = token.len_chars();
        if i == target {
            return Some(offset..offset + len);
        }
        offset += len;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    const YELLOW: &str = "yellow";

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_no_highlight() {
        let tokens = tokenize("the __cat__ sat");
        assert_eq!(render_html(&tokens, None, YELLOW), "the <b>cat</b> sat");
    }

    #[test]
    fn test_render_highlights_exactly_current_component() {
        let tokens = tokenize("a b c");
        let html = render_html(&tokens, Some(2), YELLOW);
        assert_eq!(
            html,
            r#"a <span style="background-color: yellow;">b</span> c"#
        );
        assert_eq!(html.matches("<span").count(), 1);
    }

    #[test]
    fn test_render_highlight_wraps_bolded_word() {
        let tokens = tokenize("the __cat__ sat");
        let html = render_html(&tokens, Some(2), YELLOW);
        assert!(html.contains(r#"<span style="background-color: yellow;"><b>cat</b></span>"#));
    }

    #[test]
    fn test_render_escapes_before_bolding() {
        let tokens = tokenize("x < __y__");
        let html = render_html(&tokens, None, YELLOW);
        assert_eq!(html, "x &lt; <b>y</b>");
    }

    #[test]
    fn test_render_custom_highlight_color() {
        let tokens = tokenize("a");
        let html = render_html(&tokens, Some(0), "lightblue");
        assert!(html.contains("background-color: lightblue;"));
    }

    #[test]
    fn test_selection_range_none_without_current() {
        let tokens = tokenize("a b");
        assert_eq!(selection_range(&tokens, None), None);
    }

    #[test]
    fn test_selection_range_sums_preceding_lengths() {
        let tokens = tokenize("the __cat__ sat");
        // "the" = 0..3, " " = 3..4, "__cat__" = 4..11
        assert_eq!(selection_range(&tokens, Some(2)), Some(4..11));
        assert_eq!(selection_range(&tokens, Some(4)), Some(12..15));
    }

    #[test]
    fn test_selection_range_is_char_based() {
        let tokens = tokenize("ученье свет");
        assert_eq!(selection_range(&tokens, Some(2)), Some(7..11));
    }

    #[test]
    fn test_selection_range_out_of_bounds() {
        let tokens = tokenize("a");
        assert_eq!(selection_range(&tokens, Some(5)), None);
    }
}
