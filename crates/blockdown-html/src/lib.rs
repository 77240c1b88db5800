//! Blockdown HTML
//!
//! Output-encoding primitives for the blockdown renderer: the HTML escaping
//! pass that every piece of user-controlled text goes through, and the URL
//! classification used to decide link safety attributes.
//!
//! Escaping is the renderer's only line of defense against injection, so the
//! rule is simple: element text goes through [`escape_html`], attribute
//! values through [`escape_attr`], and nothing user-controlled is ever
//! interpolated raw.

pub mod escape;
pub mod url;

pub use escape::{escape_attr, escape_html};
pub use url::is_external_url;
