//! HTML escaping primitive.
//!
//! One single-pass character map with two modes. [`escape_html`] converts
//! the five HTML-unsafe characters into named entities and is used for all
//! element text content; [`escape_attr`] additionally converts `/` to
//! `&#x2F;` and is used for attribute values.
//!
//! The content mode deliberately leaves `/` intact: the inline color
//! mini-language matches its closing tokens (`[/color]`, `[/bgColor]`)
//! against escaped text, and those tokens must survive escaping unchanged.
//!
//! Escaping is not idempotent: a string already containing entities has its
//! `&` escaped again. That is documented behavior; callers escape exactly
//! once, at the point where text enters markup.

/// Escape the five HTML-unsafe characters in element text content.
pub fn escape_html(input: &str) -> String {
    escape_impl(input, false)
}

/// Escape for attribute-value context: the five unsafe characters plus `/`.
pub fn escape_attr(input: &str) -> String {
    escape_impl(input, true)
}

fn escape_impl(input: &str, escape_slash: bool) -> String {
    let mut result = String::with_capacity(input.len() + input.len() / 8);

    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            '/' if escape_slash => result.push_str("&#x2F;"),
            _ => result.push(c),
        }
    }

    result
}
