//! Markdown-style emphasis conversion for flat paragraph text.
//!
//! Three substitutions in strict precedence order: `****x****` (bold) before
//! `**x**` (bold) before `*x*` (italic). Running the longer patterns first
//! keeps the shorter ones from prematurely consuming their asterisks. Runs
//! are bounded by non-asterisk content; emphasis does not nest.

use std::sync::LazyLock;

use regex::Regex;

static BOLD4_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*{4}([^*]+)\*{4}").unwrap());
static BOLD2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

/// Convert asterisk emphasis in already-escaped flat text.
pub fn apply_emphasis(text: &str) -> String {
    let text = BOLD4_RE.replace_all(text, "<strong>$1</strong>");
    let text = BOLD2_RE.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC_RE.replace_all(&text, "<em>$1</em>");

    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_four_asterisks_single_wrap() {
        assert_eq!(apply_emphasis("****bold****"), "<strong>bold</strong>");
    }

    #[test]
    fn test_bold_two_asterisks() {
        assert_eq!(apply_emphasis("**bold**"), "<strong>bold</strong>");
    }

    #[test]
    fn test_italic() {
        assert_eq!(apply_emphasis("*italic*"), "<em>italic</em>");
    }

    #[test]
    fn test_mixed_bold_and_italic() {
        assert_eq!(
            apply_emphasis("**a** and *b*"),
            "<strong>a</strong> and <em>b</em>"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(apply_emphasis("no stars here"), "no stars here");
        assert_eq!(apply_emphasis("a * b"), "a * b");
    }

    #[test]
    fn test_unbalanced_asterisks() {
        assert_eq!(apply_emphasis("**dangling"), "**dangling");
        assert_eq!(apply_emphasis("*"), "*");
    }

    #[test]
    fn test_multiple_bold_runs() {
        assert_eq!(
            apply_emphasis("**a** **b**"),
            "<strong>a</strong> <strong>b</strong>"
        );
    }
}
