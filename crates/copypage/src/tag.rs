//! Enumerated tag set used as the rule-table key.

/// The element kinds the converter knows about.
///
/// Anything not listed maps to [`Tag::Other`] and is converted by the
/// pass-through rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `h1` through `h6`; the payload is the level (1-6)
    Heading(u8),
    Paragraph,
    LineBreak,
    HorizontalRule,
    /// `strong` or `b`
    Strong,
    /// `em` or `i`
    Emphasis,
    Code,
    Pre,
    Anchor,
    Image,
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
    Table,
    TableRow,
    TableHeaderCell,
    TableCell,
    Nav,
    Footer,
    Aside,
    Button,
    Main,
    Body,
    Script,
    Style,
    NoScript,
    Template,
    Other,
}

impl Tag {
    /// Resolve a tag name (any case) to its enumerated kind.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "p" => Tag::Paragraph,
            "br" => Tag::LineBreak,
            "hr" => Tag::HorizontalRule,
            "strong" | "b" => Tag::Strong,
            "em" | "i" => Tag::Emphasis,
            "code" => Tag::Code,
            "pre" => Tag::Pre,
            "a" => Tag::Anchor,
            "img" => Tag::Image,
            "ul" => Tag::UnorderedList,
            "ol" => Tag::OrderedList,
            "li" => Tag::ListItem,
            "blockquote" => Tag::Blockquote,
            "table" => Tag::Table,
            "tr" => Tag::TableRow,
            "th" => Tag::TableHeaderCell,
            "td" => Tag::TableCell,
            "nav" => Tag::Nav,
            "footer" => Tag::Footer,
            "aside" => Tag::Aside,
            "button" => Tag::Button,
            "main" => Tag::Main,
            "body" => Tag::Body,
            "script" => Tag::Script,
            "style" => Tag::Style,
            "noscript" => Tag::NoScript,
            "template" => Tag::Template,
            _ => Tag::Other,
        }
    }

    /// Check if this is a `ul` or `ol`
    pub fn is_list(self) -> bool {
        matches!(self, Tag::UnorderedList | Tag::OrderedList)
    }

    /// Check if this is a table cell (`th` or `td`)
    pub fn is_table_cell(self) -> bool {
        matches!(self, Tag::TableHeaderCell | Tag::TableCell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(Tag::from_name("h1"), Tag::Heading(1));
        assert_eq!(Tag::from_name("H6"), Tag::Heading(6));
        assert_eq!(Tag::from_name("h7"), Tag::Other);
    }

    #[test]
    fn test_aliases_share_a_kind() {
        assert_eq!(Tag::from_name("b"), Tag::from_name("strong"));
        assert_eq!(Tag::from_name("i"), Tag::from_name("em"));
    }

    #[test]
    fn test_unknown_tags() {
        assert_eq!(Tag::from_name("div"), Tag::Other);
        assert_eq!(Tag::from_name("section"), Tag::Other);
        assert_eq!(Tag::from_name("custom-element"), Tag::Other);
    }

    #[test]
    fn test_predicates() {
        assert!(Tag::UnorderedList.is_list());
        assert!(Tag::OrderedList.is_list());
        assert!(!Tag::ListItem.is_list());
        assert!(Tag::TableCell.is_table_cell());
        assert!(Tag::TableHeaderCell.is_table_cell());
        assert!(!Tag::TableRow.is_table_cell());
    }
}
