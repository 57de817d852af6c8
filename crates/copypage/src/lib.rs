//! # copypage
//!
//! Serialize a rendered page's DOM tree into AI-ready Markdown.
//!
//! The converter walks a tree of [`Node`]s and renders headings, lists,
//! tables, code blocks, links and buttons as Markdown. A whole-page
//! conversion additionally works on a private clone of the tree, drops
//! elements flagged `data-exclude-md="true"` and tooltip overlays, places
//! `data-include-md="true"` blocks verbatim at the top, and prefers the
//! `main` landmark over surrounding chrome.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use copypage::{CopyPageService, Node};
//!
//! let service = CopyPageService::new();
//!
//! let mut h2 = Node::element("h2");
//! h2.add_child(Node::text("Prizes"));
//!
//! assert_eq!(service.convert_node(&h2), "\n\n## Prizes\n\n");
//! assert_eq!(service.convert_document(&h2), "## Prizes");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use copypage::CopyPageService;
//!
//! let service = CopyPageService::new();
//! let markdown = service.convert_html(
//!     r#"<body><div data-include-md="true">title: Demo</div><main><p>Hi</p></main></body>"#,
//! );
//! assert_eq!(markdown, "title: Demo\n\nHi");
//! ```

mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod options;
mod rules;
mod sanitize;
mod service;
mod tag;
mod utilities;

pub use convert::{Converter, ListContext};
#[cfg(feature = "html")]
pub use html::{parse_document, parse_fragment};
pub use node::{Element, Node};
pub use options::{AttributeMatch, ExportMarkers, ExportOptions, MarkdownOptions};
pub use rules::{Filter, ReplacementFn, Rule, Rules};
pub use sanitize::{sanitize, Sanitized};
pub use service::CopyPageService;
pub use tag::Tag;
pub use utilities::*;

/// Error type for copypage operations
#[derive(Debug, thiserror::Error)]
pub enum CopyPageError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CopyPageError>;
