//! CopyPageService - the main entry point for page to Markdown conversion.

#[cfg(feature = "html")]
use std::io::Read;

use log::debug;

use crate::convert::Converter;
use crate::node::Node;
use crate::options::ExportOptions;
use crate::rules::{Rule, Rules};
use crate::sanitize::sanitize;
use crate::tag::Tag;
use crate::utilities::collapse_blank_lines;
#[cfg(feature = "html")]
use crate::Result;

/// The main service for converting page trees to Markdown
pub struct CopyPageService {
    options: ExportOptions,
    rules: Rules,
}

impl CopyPageService {
    /// Create a new CopyPageService with default options
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create a CopyPageService with custom options
    pub fn with_options(options: ExportOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Add a custom rule, consulted before the built-in ones
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ExportOptions {
        &mut self.options
    }

    /// Convert a single subtree to a Markdown fragment.
    ///
    /// No sanitizing or landmark selection happens here; only the per-node
    /// exclude flag is honoured. The fragment keeps its block padding.
    pub fn convert_node(&self, node: &Node) -> String {
        Converter::new(&self.rules, &self.options).convert(node, None)
    }

    /// Convert a whole page tree to the final Markdown document.
    ///
    /// The tree is cloned and sanitized, include blocks are placed first,
    /// the preferred content landmark is converted, and blank-line runs are
    /// collapsed. `page` itself is never modified.
    pub fn convert_document(&self, page: &Node) -> String {
        let sanitized = sanitize(page, &self.options.markers);
        let target = self.content_root(&sanitized.root);
        let body = self.convert_node(target);

        let document = [sanitized.blueprint.as_str(), body.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        collapse_blank_lines(&document).trim().to_string()
    }

    /// Parse an HTML document and convert it
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> String {
        self.convert_document(&crate::html::parse_document(html))
    }

    /// Read an HTML document from `reader` and convert it
    #[cfg(feature = "html")]
    pub fn convert_reader(&self, mut reader: impl Read) -> Result<String> {
        let mut html = String::new();
        reader.read_to_string(&mut html)?;
        Ok(self.convert_html(&html))
    }

    /// First configured landmark found below `root`, else `root` itself
    fn content_root<'a>(&self, root: &'a Node) -> &'a Node {
        for name in &self.options.markers.content_roots {
            let tag = Tag::from_name(name);
            let found = if tag == Tag::Other {
                root.descendants_where(|n| n.as_element().is_some_and(|e| e.name == *name))
                    .into_iter()
                    .next()
            } else {
                root.find_descendant(tag)
            };
            if let Some(found) = found {
                debug!("converting from <{}> landmark", name);
                return found;
            }
        }
        root
    }
}

impl Default for CopyPageService {
    fn default() -> Self {
        Self::new()
    }
}
