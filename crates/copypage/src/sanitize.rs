//! Pre-pass that prepares a private copy of the page tree for conversion.
//!
//! The live tree is only ever read; all removals happen on a clone.

use log::debug;

use crate::node::{Element, Node};
use crate::options::ExportMarkers;

/// A conversion-safe clone plus the blueprint text pulled out of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    /// Include blocks, trimmed and joined by blank lines in document order
    pub blueprint: String,
    pub root: Node,
}

/// Clone `root` and strip everything that must not reach the converter.
///
/// Excluded, overlay and non-content elements are dropped first, so an
/// include block inside an excluded subtree never surfaces. Include blocks
/// are then collected and removed. A non-content tag flagged as include
/// (e.g. `<script type="text/markdown">`) is kept for extraction.
pub fn sanitize(root: &Node, markers: &ExportMarkers) -> Sanitized {
    let mut clone = root.clone();

    let mut removed = 0;
    if let Node::Element(element) = &mut clone {
        remove_unwanted(element, markers, &mut removed);
    }

    let mut blocks = Vec::new();
    if let Node::Element(element) = &mut clone {
        extract_includes(element, markers, &mut blocks);
    }
    debug!(
        "sanitized page tree: {} subtrees removed, {} include blocks extracted",
        removed,
        blocks.len()
    );

    let blueprint = blocks
        .into_iter()
        .filter(|b| !b.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    Sanitized {
        blueprint,
        root: clone,
    }
}

fn remove_unwanted(element: &mut Element, markers: &ExportMarkers, removed: &mut usize) {
    element.children.retain(|child| match child {
        Node::Element(child) if is_unwanted(child, markers) => {
            *removed += 1;
            false
        }
        _ => true,
    });

    for child in &mut element.children {
        if let Node::Element(child) = child {
            remove_unwanted(child, markers, removed);
        }
    }
}

fn extract_includes(element: &mut Element, markers: &ExportMarkers, blocks: &mut Vec<String>) {
    // Children are visited in order so blocks keep document order
    let mut kept = Vec::with_capacity(element.children.len());
    for child in std::mem::take(&mut element.children) {
        match child {
            Node::Element(inner) if is_flagged(&inner, &markers.include_attribute, markers) => {
                blocks.push(inner.text_content().trim().to_string());
            }
            Node::Element(mut inner) => {
                extract_includes(&mut inner, markers, blocks);
                kept.push(Node::Element(inner));
            }
            text => kept.push(text),
        }
    }
    element.children = kept;
}

fn is_unwanted(element: &Element, markers: &ExportMarkers) -> bool {
    is_flagged(element, &markers.exclude_attribute, markers)
        || markers
            .overlays
            .iter()
            .any(|m| element.attr(&m.name) == Some(m.value.as_str()))
        || (markers.stripped_tags.iter().any(|t| *t == element.name)
            && !is_flagged(element, &markers.include_attribute, markers))
}

fn is_flagged(element: &Element, attribute: &str, markers: &ExportMarkers) -> bool {
    element.attr(attribute) == Some(markers.flag_value.as_str())
}
