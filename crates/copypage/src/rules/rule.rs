//! Rule and Filter types for element conversion.

use std::sync::Arc;

use crate::convert::{Converter, ListContext};
use crate::node::Element;
use crate::tag::Tag;

/// Replacement function: receives the element, a converter to recurse with,
/// and the list context the element was reached with.
pub type ReplacementFn =
    Arc<dyn Fn(&Element, &Converter<'_>, Option<ListContext>) -> String + Send + Sync>;

/// A filter determines which elements a rule applies to
pub enum Filter {
    /// Match a single tag kind
    Tag(Tag),
    /// Match any of multiple tag kinds
    Tags(Vec<Tag>),
    /// Match a literal tag name, e.g. a custom element
    Name(String),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&Element) -> bool + Send + Sync>),
}

impl Filter {
    /// Create a filter for a single tag
    pub fn tag(tag: Tag) -> Self {
        Filter::Tag(tag)
    }

    /// Create a filter for multiple tags
    pub fn tags(tags: &[Tag]) -> Self {
        Filter::Tags(tags.to_vec())
    }

    /// Create a filter for a tag name
    pub fn name(name: &str) -> Self {
        Filter::Name(name.to_ascii_lowercase())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Element) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches an element
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Filter::Tag(t) => element.tag == *t,
            Filter::Tags(tags) => tags.contains(&element.tag),
            Filter::Name(name) => element.name == *name,
            Filter::Predicate(f) => f(element),
        }
    }

    /// The tags this filter is keyed under in the built-in table.
    /// Name and predicate filters have no key.
    pub(crate) fn keys(&self) -> &[Tag] {
        match self {
            Filter::Tag(t) => std::slice::from_ref(t),
            Filter::Tags(tags) => tags,
            Filter::Name(_) | Filter::Predicate(_) => &[],
        }
    }
}

/// A rule defines how to convert a matched element to Markdown
pub struct Rule {
    /// Filter to determine which elements this rule applies to
    pub filter: Filter,
    /// Replacement function that generates Markdown
    pub replacement: ReplacementFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(filter: Filter, replacement: F) -> Self
    where
        F: Fn(&Element, &Converter<'_>, Option<ListContext>) -> String + Send + Sync + 'static,
    {
        Self {
            filter,
            replacement: Arc::new(replacement),
        }
    }

    /// Create a rule that matches a single tag
    pub fn for_tag<F>(tag: Tag, replacement: F) -> Self
    where
        F: Fn(&Element, &Converter<'_>, Option<ListContext>) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::tag(tag), replacement)
    }

    /// Create a rule that matches multiple tags
    pub fn for_tags<F>(tags: &[Tag], replacement: F) -> Self
    where
        F: Fn(&Element, &Converter<'_>, Option<ListContext>) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::tags(tags), replacement)
    }

    /// Apply this rule's replacement
    pub fn replace(
        &self,
        element: &Element,
        converter: &Converter<'_>,
        list: Option<ListContext>,
    ) -> String {
        (self.replacement)(element, converter, list)
    }
}
