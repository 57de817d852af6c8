//! HTML parsing support.
//!
//! Parses HTML strings with scraper/html5ever and converts the result to the
//! [`Node`] tree the converter works on. Comments, doctypes and processing
//! instructions are dropped.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse a complete HTML document. The returned node is the `html` element,
/// so `main` and `body` landmarks can be located below it.
///
/// # Example
///
/// ```rust
/// use copypage::{parse_document, CopyPageService};
///
/// let page = parse_document("<body><main><h1>Hello</h1></main></body>");
/// let markdown = CopyPageService::new().convert_document(&page);
/// assert_eq!(markdown, "# Hello");
/// ```
pub fn parse_document(html: &str) -> Node {
    let document = Html::parse_document(html);
    scraper_to_node(document.root_element())
}

/// Parse an HTML fragment. The fragment's nodes are wrapped in an `html`
/// element, as html5ever does for fragment parsing.
pub fn parse_fragment(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();

    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(tag, attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
