//! Rule system for element to Markdown conversion.

mod page;
mod rule;

pub use page::page_rules;
pub use rule::{Filter, ReplacementFn, Rule};

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::node::Element;
use crate::tag::Tag;

/// Collection of rules for conversion
pub struct Rules {
    /// Custom rules added by the user (checked first, in insertion order)
    custom_rules: IndexMap<String, Rule>,
    /// Built-in page rules keyed by tag
    table: HashMap<Tag, Arc<Rule>>,
}

impl Rules {
    /// Create a new Rules instance with the built-in page rules
    pub fn new() -> Self {
        let mut table = HashMap::new();
        for rule in page_rules() {
            let rule = Arc::new(rule);
            for tag in rule.filter.keys() {
                table.insert(*tag, Arc::clone(&rule));
            }
        }

        Self {
            custom_rules: IndexMap::new(),
            table,
        }
    }

    /// Add a custom rule. Re-using a key replaces the earlier rule in place.
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Find the rule for an element. `None` means pass-through.
    pub fn for_element(&self, element: &Element) -> Option<&Rule> {
        self.custom_rules
            .values()
            .find(|rule| rule.filter.matches(element))
            .or_else(|| self.table.get(&element.tag).map(Arc::as_ref))
    }

    /// Check if a tag has a built-in rule
    pub fn has_builtin(&self, tag: Tag) -> bool {
        self.table.contains_key(&tag)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
