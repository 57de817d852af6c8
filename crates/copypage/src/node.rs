//! DOM node structure for page to Markdown conversion.
//!
//! A node is either a text node or an element. Any parser (html5ever, a
//! browser bridge, hand-built trees in tests) can produce this structure to
//! feed the converter.

use indexmap::IndexMap;

use crate::tag::Tag;

/// A node of the page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Character data
    Text(String),
    /// An element with a tag, attributes and ordered children
    Element(Element),
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Dispatch kind resolved from `name`
    pub tag: Tag,

    /// Lowercase tag name, e.g. "div"
    pub name: String,

    /// Attributes in source order, names lowercased
    pub attributes: IndexMap<String, String>,

    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(tag_name);
        for (name, value) in attrs {
            element.set_attr(name, value);
        }
        Node::Element(element)
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Builder form of [`Element::set_attr`]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        if let Node::Element(element) = &mut self {
            element.set_attr(name, value);
        }
        self
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Borrow the element, if this is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Get the dispatch tag, if this is an element
    pub fn tag(&self) -> Option<Tag> {
        self.as_element().map(|e| e.tag)
    }

    /// Get an attribute value by name. Text nodes have none.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element()?.attr(name)
    }

    /// Append a child. Text nodes cannot hold children; the call is ignored.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text_content(&mut out);
        out
    }

    fn push_text_content(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.push_text_content(out);
                }
            }
        }
    }

    /// Find the first descendant (excluding `self`) with the given tag, in
    /// document order.
    pub fn find_descendant(&self, tag: Tag) -> Option<&Node> {
        self.as_element()?.find_descendant(tag)
    }

    /// Collect every descendant (excluding `self`) with the given tag, in
    /// document order.
    pub fn descendants_with_tag(&self, tag: Tag) -> Vec<&Node> {
        self.descendants_where(|node| node.tag() == Some(tag))
    }

    /// Collect every descendant (excluding `self`) satisfying `pred`
    pub fn descendants_where<F>(&self, pred: F) -> Vec<&Node>
    where
        F: Fn(&Node) -> bool,
    {
        match self {
            Node::Element(element) => element.descendants_where(pred),
            Node::Text(_) => Vec::new(),
        }
    }
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag_name: &str) -> Self {
        let name = tag_name.to_ascii_lowercase();
        Self {
            tag: Tag::from_name(&name),
            name,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Get an attribute value, treating an empty value as absent
    pub fn non_empty_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Get all text content from this element's descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.push_text_content(&mut out);
        }
        out
    }

    /// Find the first descendant with the given tag, in document order
    pub fn find_descendant(&self, tag: Tag) -> Option<&Node> {
        for child in &self.children {
            if child.tag() == Some(tag) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(tag) {
                return Some(found);
            }
        }
        None
    }

    /// Collect every descendant with the given tag, in document order
    pub fn descendants_with_tag(&self, tag: Tag) -> Vec<&Node> {
        self.descendants_where(|node| node.tag() == Some(tag))
    }

    /// Collect every descendant satisfying `pred`, in document order
    pub fn descendants_where<F>(&self, pred: F) -> Vec<&Node>
    where
        F: Fn(&Node) -> bool,
    {
        let mut found = Vec::new();
        collect_descendants(self, &pred, &mut found);
        found
    }
}

fn collect_descendants<'a, F>(element: &'a Element, pred: &F, found: &mut Vec<&'a Node>)
where
    F: Fn(&Node) -> bool,
{
    for child in &element.children {
        if pred(child) {
            found.push(child);
        }
        if let Node::Element(inner) = child {
            collect_descendants(inner, pred, found);
        }
    }
}
