//! Bracket color tag substitution.
//!
//! The inline mini-language recognizes three bracket forms:
//!
//! - `[color:C,bgColor:B]...[/color]`
//! - `[color:C]...[/color]`
//! - `[bgColor:B]...[/bgColor]`
//!
//! Substitution runs against *escaped* text. The pipeline escapes element
//! content without the slash entity, so the closing tokens appear literally
//! and the patterns match them as written. The combined form is replaced
//! first; its opening tag contains a comma, which the single-color pattern
//! cannot match, so the later passes never half-consume it.
//!
//! Matching is non-greedy and spans newlines. Color values are trimmed and
//! attribute-escaped into the generated `style` attribute.

use std::sync::LazyLock;

use blockdown_html::escape_attr;
use regex::{Captures, Regex};

static COLOR_BG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\[color:([^,\]]+),bgColor:([^,\]]+)\](.*?)\[/color\]").unwrap()
});

static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[color:([^,\]]+)\](.*?)\[/color\]").unwrap());

static BG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[bgColor:([^,\]]+)\](.*?)\[/bgColor\]").unwrap());

/// Replace bracket color tags in already-escaped inline text.
pub fn apply_color_spans(text: &str) -> String {
    let text = COLOR_BG_RE.replace_all(text, |caps: &Captures| {
        format!(
            r#"<span style="color: {}; background-color: {};">{}</span>"#,
            escape_attr(caps[1].trim()),
            escape_attr(caps[2].trim()),
            &caps[3]
        )
    });
    let text = COLOR_RE.replace_all(&text, |caps: &Captures| {
        format!(
            r#"<span style="color: {};">{}</span>"#,
            escape_attr(caps[1].trim()),
            &caps[2]
        )
    });
    let text = BG_RE.replace_all(&text, |caps: &Captures| {
        format!(
            r#"<span style="background-color: {};">{}</span>"#,
            escape_attr(caps[1].trim()),
            &caps[2]
        )
    });

    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tag() {
        assert_eq!(
            apply_color_spans("[color:red]hot[/color]"),
            r#"<span style="color: red;">hot</span>"#
        );
    }

    #[test]
    fn test_bg_color_tag() {
        assert_eq!(
            apply_color_spans("[bgColor:#ff0]lit[/bgColor]"),
            r#"<span style="background-color: #ff0;">lit</span>"#
        );
    }

    #[test]
    fn test_combined_tag() {
        assert_eq!(
            apply_color_spans("[color:red,bgColor:blue]x[/color]"),
            r#"<span style="color: red; background-color: blue;">x</span>"#
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        assert_eq!(
            apply_color_spans("[color: red ]x[/color]"),
            r#"<span style="color: red;">x</span>"#
        );
    }

    #[test]
    fn test_non_greedy_matching() {
        assert_eq!(
            apply_color_spans("[color:a]1[/color] and [color:b]2[/color]"),
            r#"<span style="color: a;">1</span> and <span style="color: b;">2</span>"#
        );
    }

    #[test]
    fn test_spans_newlines() {
        assert_eq!(
            apply_color_spans("[color:red]a\nb[/color]"),
            "<span style=\"color: red;\">a\nb</span>"
        );
    }

    #[test]
    fn test_unclosed_tag_left_alone() {
        assert_eq!(apply_color_spans("[color:red]dangling"), "[color:red]dangling");
        assert_eq!(apply_color_spans("[bgColor:x]"), "[bgColor:x]");
    }

    #[test]
    fn test_color_value_is_attribute_escaped() {
        assert_eq!(
            apply_color_spans(r#"[color:"x]y[/color]"#),
            r#"<span style="color: &quot;x;">y</span>"#
        );
    }
}
