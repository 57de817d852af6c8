//! Configuration options for page export.

use serde::Deserialize;

use crate::Result;

/// Markdown output formatting
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Horizontal rule string
    pub hr: String,

    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Emphasis delimiter
    pub em_delimiter: char,

    /// Strong delimiter
    pub strong_delimiter: String,

    /// Fence string for preformatted blocks
    pub fence: String,

    /// Attributes that give a button its target URL, highest priority first
    pub button_url_attributes: Vec<String>,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            hr: "---".to_string(),
            bullet_list_marker: '-',
            em_delimiter: '*',
            strong_delimiter: "**".to_string(),
            fence: "```".to_string(),
            button_url_attributes: vec![
                "data-url".to_string(),
                "data-href".to_string(),
                "href".to_string(),
            ],
        }
    }
}

/// An exact `name="value"` attribute match
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttributeMatch {
    pub name: String,
    pub value: String,
}

impl AttributeMatch {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Attribute conventions shared with the page that produced the tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportMarkers {
    /// Elements with this attribute set to `flag_value` are dropped with
    /// their whole subtree
    pub exclude_attribute: String,

    /// Elements with this attribute set to `flag_value` are emitted verbatim
    /// ahead of the converted body
    pub include_attribute: String,

    pub flag_value: String,

    /// Transient tooltip/overlay surfaces
    pub overlays: Vec<AttributeMatch>,

    /// Tags that never carry readable content
    pub stripped_tags: Vec<String>,

    /// Landmarks preferred as the conversion root, in priority order
    pub content_roots: Vec<String>,
}

impl Default for ExportMarkers {
    fn default() -> Self {
        Self {
            exclude_attribute: "data-exclude-md".to_string(),
            include_attribute: "data-include-md".to_string(),
            flag_value: "true".to_string(),
            overlays: vec![
                AttributeMatch::new("data-slot", "tooltip-content"),
                AttributeMatch::new("role", "tooltip"),
            ],
            stripped_tags: ["script", "style", "noscript", "template"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            content_roots: vec!["main".to_string(), "body".to_string()],
        }
    }
}

/// Options for [`CopyPageService`](crate::CopyPageService)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub markdown: MarkdownOptions,
    pub markers: ExportMarkers,
}

impl ExportOptions {
    /// Parse options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}
