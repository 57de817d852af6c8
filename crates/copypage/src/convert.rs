//! Recursive node to Markdown conversion.
//!
//! Each node maps to a Markdown fragment; fragments of siblings are
//! concatenated. Elements are dispatched through [`Rules`]; anything without
//! a rule is a transparent container.

use log::trace;

use crate::node::{Element, Node};
use crate::options::{ExportMarkers, ExportOptions, MarkdownOptions};
use crate::rules::Rules;
use crate::utilities::collapse_whitespace;

/// List state handed to a list item by its parent list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListContext {
    pub ordered: bool,
    /// 1-based position; meaningless for unordered lists
    pub index: usize,
}

impl ListContext {
    pub fn unordered() -> Self {
        Self {
            ordered: false,
            index: 0,
        }
    }

    pub fn ordered(index: usize) -> Self {
        Self {
            ordered: true,
            index,
        }
    }
}

/// Borrowed view of the rule table and options used during one walk.
pub struct Converter<'a> {
    rules: &'a Rules,
    options: &'a ExportOptions,
}

impl<'a> Converter<'a> {
    pub fn new(rules: &'a Rules, options: &'a ExportOptions) -> Self {
        Self { rules, options }
    }

    /// Markdown formatting options
    pub fn options(&self) -> &MarkdownOptions {
        &self.options.markdown
    }

    /// Attribute conventions
    pub fn markers(&self) -> &ExportMarkers {
        &self.options.markers
    }

    /// Convert a node and its subtree to a Markdown fragment
    pub fn convert(&self, node: &Node, list: Option<ListContext>) -> String {
        match node {
            Node::Text(text) => collapse_whitespace(text),
            Node::Element(element) => self.convert_element(element, list),
        }
    }

    /// Convert every child of `element` and concatenate the fragments
    pub fn convert_children(&self, element: &Element, list: Option<ListContext>) -> String {
        element
            .children()
            .map(|child| self.convert(child, list))
            .collect()
    }

    fn convert_element(&self, element: &Element, list: Option<ListContext>) -> String {
        if self.is_excluded(element) {
            return String::new();
        }

        match self.rules.for_element(element) {
            Some(rule) => rule.replace(element, self, list),
            None => {
                trace!("no rule for <{}>, passing through", element.name);
                self.convert_children(element, list)
            }
        }
    }

    /// Check the exclude flag on a single element
    pub fn is_excluded(&self, element: &Element) -> bool {
        let markers = self.markers();
        element.attr(&markers.exclude_attribute) == Some(markers.flag_value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Filter, Rule};
    use crate::tag::Tag;

    fn convert_with(rules: &Rules, node: &Node) -> String {
        let options = ExportOptions::default();
        Converter::new(rules, &options).convert(node, None)
    }

    #[test]
    fn test_text_collapses_whitespace() {
        let rules = Rules::new();
        assert_eq!(convert_with(&rules, &Node::text("  a \n\n b  ")), "a b");
        assert_eq!(convert_with(&rules, &Node::text(" \n ")), "");
    }

    #[test]
    fn test_excluded_element_is_empty() {
        let rules = Rules::new();
        let h1 = Node::element_with_attrs("h1", vec![("data-exclude-md", "true")])
            .with_child(Node::text("Hidden"));
        assert_eq!(convert_with(&rules, &h1), "");
    }

    #[test]
    fn test_exclude_flag_needs_exact_value() {
        let rules = Rules::new();
        let h1 = Node::element_with_attrs("h1", vec![("data-exclude-md", "false")])
            .with_child(Node::text("Shown"));
        assert_eq!(convert_with(&rules, &h1), "\n\n# Shown\n\n");
    }

    #[test]
    fn test_empty_element() {
        let rules = Rules::new();
        assert_eq!(convert_with(&rules, &Node::element("div")), "");
    }

    #[test]
    fn test_pass_through_forwards_list_context() {
        let rules = Rules::new();
        let options = ExportOptions::default();
        let converter = Converter::new(&rules, &options);
        let wrapper = Node::element("div").with_child(Node::element("li").with_child(Node::text("x")));
        assert_eq!(converter.convert(&wrapper, Some(ListContext::ordered(4))), "4. x\n");
    }

    #[test]
    fn test_custom_rule_for_custom_element() {
        let mut rules = Rules::new();
        rules.add(
            "badge",
            Rule::new(Filter::name("partner-badge"), |el, _, _| {
                format!("[partner: {}]", el.attr("name").unwrap_or("?"))
            }),
        );
        let badge = Node::element_with_attrs("partner-badge", vec![("name", "Acme")]);
        assert_eq!(convert_with(&rules, &badge), "[partner: Acme]");
    }

    #[test]
    fn test_custom_rule_still_respects_exclude() {
        let mut rules = Rules::new();
        rules.add("loud", Rule::for_tag(Tag::Paragraph, |_, _, _| "LOUD".to_string()));
        let p = Node::element_with_attrs("p", vec![("data-exclude-md", "true")]);
        assert_eq!(convert_with(&rules, &p), "");
    }
}
