//! Render behavior configuration.
//!
//! This module contains the `RenderConfig` struct which holds the
//! renderer's behavior toggles and text overrides.

use serde::{Deserialize, Serialize};

/// Render behavior configuration.
///
/// Defaults reproduce the renderer's reference output exactly; every field
/// exists so deployments can dial a behavior without forking templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderConfig {
    /// Append a `#` self-link to headings that carry an anchor id.
    /// Default: true
    #[serde(default = "default_true")]
    pub anchor_links: bool,

    /// Open external anchor links in a new tab with
    /// `rel="noopener noreferrer"`.
    /// Default: true
    #[serde(default = "default_true")]
    pub external_new_tab: bool,

    /// Message shown in the fallback row of a table with no data rows.
    /// Default: "No data available"
    #[serde(default = "default_no_data_text")]
    pub no_data_text: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            anchor_links: true,
            external_new_tab: true,
            no_data_text: default_no_data_text(),
        }
    }
}

impl RenderConfig {
    /// Merge another RenderConfig into this one.
    ///
    /// All fields are copied from `other`: TOML cannot distinguish "not set"
    /// from "set to default", so override files carry only the values the
    /// user wants to change and are parsed as a partial config.
    pub fn merge(&mut self, other: &RenderConfig) {
        self.anchor_links = other.anchor_links;
        self.external_new_tab = other.external_new_tab;
        self.no_data_text = other.no_data_text.clone();
    }
}

fn default_true() -> bool {
    true
}

fn default_no_data_text() -> String {
    "No data available".to_string()
}
