//! Built-in rules for rendered landing pages.
//!
//! Block-level elements are padded with blank lines so Markdown renderers
//! keep them apart; inline elements are not padded. Navigation, footers and
//! asides are flattened to plain text.

use super::{Filter, Rule};
use crate::convert::ListContext;
use crate::node::Node;
use crate::tag::Tag;
use crate::utilities::{block, collapse_whitespace, indent_lines};

const HEADINGS: [Tag; 6] = [
    Tag::Heading(1),
    Tag::Heading(2),
    Tag::Heading(3),
    Tag::Heading(4),
    Tag::Heading(5),
    Tag::Heading(6),
];

/// Create all built-in rules
pub fn page_rules() -> Vec<Rule> {
    vec![
        heading_rule(),
        paragraph_rule(),
        line_break_rule(),
        horizontal_rule(),
        strong_rule(),
        emphasis_rule(),
        code_rule(),
        preformatted_rule(),
        link_rule(),
        image_rule(),
        unordered_list_rule(),
        ordered_list_rule(),
        list_item_rule(),
        blockquote_rule(),
        table_rule(),
        nav_rule(),
        text_only_rule(),
        button_rule(),
    ]
}

fn heading_rule() -> Rule {
    Rule::new(Filter::tags(&HEADINGS), |el, conv, list| {
        let level = match el.tag {
            Tag::Heading(level) => level as usize,
            _ => 1,
        };
        let content = conv.convert_children(el, list);
        block(format!("{} {}", "#".repeat(level), content).trim())
    })
}

fn paragraph_rule() -> Rule {
    Rule::for_tag(Tag::Paragraph, |el, conv, list| {
        block(conv.convert_children(el, list).trim())
    })
}

fn line_break_rule() -> Rule {
    Rule::for_tag(Tag::LineBreak, |_, _, _| "\n".to_string())
}

fn horizontal_rule() -> Rule {
    Rule::for_tag(Tag::HorizontalRule, |_, conv, _| block(&conv.options().hr))
}

fn strong_rule() -> Rule {
    Rule::for_tag(Tag::Strong, |el, conv, list| {
        let delimiter = &conv.options().strong_delimiter;
        format!("{}{}{}", delimiter, conv.convert_children(el, list), delimiter)
    })
}

fn emphasis_rule() -> Rule {
    Rule::for_tag(Tag::Emphasis, |el, conv, list| {
        let delimiter = conv.options().em_delimiter;
        format!("{}{}{}", delimiter, conv.convert_children(el, list), delimiter)
    })
}

fn code_rule() -> Rule {
    // Raw text: nested markup inside inline code is not converted
    Rule::for_tag(Tag::Code, |el, _, _| format!("`{}`", el.text_content()))
}

fn preformatted_rule() -> Rule {
    Rule::for_tag(Tag::Pre, |el, conv, _| {
        let fence = &conv.options().fence;
        block(&format!(
            "{}\n{}\n{}",
            fence,
            el.text_content().trim(),
            fence
        ))
    })
}

fn link_rule() -> Rule {
    Rule::for_tag(Tag::Anchor, |el, _, _| {
        let href = el.attr("href").unwrap_or("");
        let content = el.text_content();
        let text = match content.trim() {
            "" => href,
            text => text,
        };
        format!("[{}]({})", text, href)
    })
}

fn image_rule() -> Rule {
    Rule::for_tag(Tag::Image, |el, _, _| {
        let alt = el.attr("alt").unwrap_or("");
        match el.attr("src") {
            Some(src) if !src.is_empty() => format!("![{}]({})", alt, src),
            _ => String::new(),
        }
    })
}

fn unordered_list_rule() -> Rule {
    Rule::for_tag(Tag::UnorderedList, |el, conv, _| {
        let items: String = list_items(el.children())
            .map(|li| conv.convert(li, Some(ListContext::unordered())))
            .collect();
        block(items.trim())
    })
}

fn ordered_list_rule() -> Rule {
    Rule::for_tag(Tag::OrderedList, |el, conv, _| {
        // Numbering is local to this list
        let items: String = list_items(el.children())
            .enumerate()
            .map(|(i, li)| conv.convert(li, Some(ListContext::ordered(i + 1))))
            .collect();
        block(items.trim())
    })
}

fn list_items<'a>(children: impl Iterator<Item = &'a Node>) -> impl Iterator<Item = &'a Node> {
    children.filter(|child| child.tag() == Some(Tag::ListItem))
}

fn list_item_rule() -> Rule {
    Rule::for_tag(Tag::ListItem, |el, conv, list| {
        let marker = match list {
            Some(ListContext {
                ordered: true,
                index,
            }) => format!("{}. ", index),
            _ => format!("{} ", conv.options().bullet_list_marker),
        };
        let width = marker.chars().count();

        // The item's own context is not forwarded; nested lists start fresh
        let mut content = String::new();
        let mut after_list = false;
        for child in el.children() {
            let fragment = conv.convert(child, None);
            if child.tag().is_some_and(Tag::is_list) {
                let nested = fragment.trim();
                if nested.is_empty() {
                    continue;
                }
                content.truncate(content.trim_end().len());
                content.push('\n');
                content.push_str(nested);
                content.push('\n');
                after_list = true;
            } else {
                // A blank line keeps trailing text out of the nested list
                if after_list && !fragment.trim().is_empty() {
                    content.push('\n');
                    after_list = false;
                }
                content.push_str(&fragment);
            }
        }

        // Continuation lines sit under the item's content column
        let content = content.trim();
        match content.split_once('\n') {
            Some((first, rest)) => {
                format!("{}{}\n{}\n", marker, first, indent_lines(rest, width))
            }
            None => format!("{}{}\n", marker, content),
        }
    })
}

fn blockquote_rule() -> Rule {
    Rule::for_tag(Tag::Blockquote, |el, conv, list| {
        let quoted = conv
            .convert_children(el, list)
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("> {}", line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        block(quoted.trim())
    })
}

fn table_rule() -> Rule {
    Rule::for_tag(Tag::Table, |el, _, _| {
        let rows = el.descendants_with_tag(Tag::TableRow);
        let Some((header_row, body_rows)) = rows.split_first() else {
            return String::new();
        };

        let header = row_cells(header_row);
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(format!("| {} |", header.join(" | ")));
        lines.push(format!(
            "| {} |",
            header.iter().map(|_| "---").collect::<Vec<_>>().join(" | ")
        ));
        for row in body_rows {
            lines.push(format!("| {} |", row_cells(row).join(" | ")));
        }

        block(&lines.join("\n"))
    })
}

fn row_cells(row: &Node) -> Vec<String> {
    row.descendants_where(|n| n.tag().is_some_and(Tag::is_table_cell))
        .into_iter()
        .map(|cell| collapse_whitespace(&cell.text_content()))
        .collect()
}

fn nav_rule() -> Rule {
    Rule::for_tag(Tag::Nav, |el, conv, _| {
        let parts: Vec<String> = el
            .children()
            .map(|child| conv.convert(child, None))
            .filter(|part| !part.is_empty())
            .collect();
        block(&collapse_whitespace(&parts.join(" ")))
    })
}

fn text_only_rule() -> Rule {
    Rule::for_tags(&[Tag::Footer, Tag::Aside], |el, _, _| {
        block(el.text_content().trim())
    })
}

fn button_rule() -> Rule {
    Rule::for_tag(Tag::Button, |el, conv, _| {
        let content = el.text_content();
        let text = content.trim();
        let url = conv
            .options()
            .button_url_attributes
            .iter()
            .find_map(|name| el.non_empty_attr(name));

        match url {
            Some(url) if text.is_empty() => format!("[{}]({})", url, url),
            Some(url) => format!("[{}]({})", text, url),
            None if text.is_empty() => String::new(),
            None => format!("**{}**", text),
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::convert::{Converter, ListContext};
    use crate::node::Node;
    use crate::options::ExportOptions;
    use crate::rules::Rules;

    fn convert(node: &Node) -> String {
        let rules = Rules::new();
        let options = ExportOptions::default();
        Converter::new(&rules, &options).convert(node, None)
    }

    fn el(tag: &str, text: &str) -> Node {
        Node::element(tag).with_child(Node::text(text))
    }

    fn list(tag: &str, items: &[&str]) -> Node {
        items
            .iter()
            .fold(Node::element(tag), |list, item| list.with_child(el("li", item)))
    }

    #[test]
    fn test_heading() {
        assert_eq!(convert(&el("h2", "Title")), "\n\n## Title\n\n");
        assert_eq!(convert(&el("h6", "Deep")), "\n\n###### Deep\n\n");
    }

    #[test]
    fn test_heading_with_inline_children() {
        let h1 = Node::element("h1")
            .with_child(Node::text("Build "))
            .with_child(el("em", "fast"));
        assert_eq!(convert(&h1), "\n\n# Build*fast*\n\n");
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(convert(&el("p", "  Hello   World ")), "\n\nHello World\n\n");
        assert_eq!(convert(&Node::element("p")), "\n\n");
    }

    #[test]
    fn test_line_break_and_rule() {
        assert_eq!(convert(&Node::element("br")), "\n");
        assert_eq!(convert(&Node::element("hr")), "\n\n---\n\n");
    }

    #[test]
    fn test_inline_formatting() {
        assert_eq!(convert(&el("strong", "bold")), "**bold**");
        assert_eq!(convert(&el("b", "bold")), "**bold**");
        assert_eq!(convert(&el("em", "soft")), "*soft*");
        assert_eq!(convert(&el("i", "soft")), "*soft*");
    }

    #[test]
    fn test_inline_code_keeps_raw_text() {
        let code = Node::element("code")
            .with_child(Node::text("getPrice("))
            .with_child(el("strong", "id"))
            .with_child(Node::text(")"));
        assert_eq!(convert(&code), "`getPrice(id)`");
    }

    #[test]
    fn test_preformatted() {
        let pre = Node::element("pre").with_child(el("code", "\n  const x = 1;\n"));
        assert_eq!(convert(&pre), "\n\n```\nconst x = 1;\n```\n\n");
    }

    #[test]
    fn test_link() {
        let a = Node::element_with_attrs("a", vec![("href", "https://example.com")])
            .with_child(Node::text("  Docs "));
        assert_eq!(convert(&a), "[Docs](https://example.com)");
    }

    #[test]
    fn test_link_falls_back_to_href() {
        let a = Node::element_with_attrs("a", vec![("href", "https://x.test")]);
        assert_eq!(convert(&a), "[https://x.test](https://x.test)");
    }

    #[test]
    fn test_link_without_href() {
        assert_eq!(convert(&el("a", "anchor")), "[anchor]()");
    }

    #[test]
    fn test_image() {
        let img = Node::element_with_attrs("img", vec![("src", "logo.png"), ("alt", "Logo")]);
        assert_eq!(convert(&img), "![Logo](logo.png)");
        let no_alt = Node::element_with_attrs("img", vec![("src", "logo.png")]);
        assert_eq!(convert(&no_alt), "![](logo.png)");
        let no_src = Node::element_with_attrs("img", vec![("alt", "Logo")]);
        assert_eq!(convert(&no_src), "");
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(convert(&list("ul", &["One", "Two"])), "\n\n- One\n- Two\n\n");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(convert(&list("ol", &["One", "Two"])), "\n\n1. One\n2. Two\n\n");
    }

    #[test]
    fn test_list_ignores_non_item_children() {
        let ul = list("ul", &["One"])
            .with_child(Node::text("stray"))
            .with_child(el("div", "also stray"));
        assert_eq!(convert(&ul), "\n\n- One\n\n");
    }

    #[test]
    fn test_sibling_ordered_lists_restart() {
        let div = Node::element("div")
            .with_child(list("ol", &["a", "b"]))
            .with_child(list("ol", &["c"]));
        assert_eq!(convert(&div), "\n\n1. a\n2. b\n\n\n\n1. c\n\n");
    }

    #[test]
    fn test_list_item_without_context_is_bullet() {
        assert_eq!(convert(&el("li", "loose")), "- loose\n");
    }

    #[test]
    fn test_list_item_with_ordered_context() {
        let rules = Rules::new();
        let options = ExportOptions::default();
        let converter = Converter::new(&rules, &options);
        let md = converter.convert(&el("li", "third"), Some(ListContext::ordered(3)));
        assert_eq!(md, "3. third\n");
    }

    #[test]
    fn test_nested_list_in_ordered_item() {
        let item = Node::element("li")
            .with_child(Node::text("Setup"))
            .with_child(list("ul", &["Install", "Configure"]));
        let ol = Node::element("ol").with_child(item).with_child(el("li", "Run"));

        assert_eq!(
            convert(&ol),
            "\n\n1. Setup\n   - Install\n   - Configure\n2. Run\n\n"
        );
    }

    #[test]
    fn test_nested_ordered_list_in_bullet_item() {
        let item = Node::element("li")
            .with_child(Node::text("Steps"))
            .with_child(list("ol", &["first", "second"]));
        let ul = Node::element("ul").with_child(item);

        assert_eq!(convert(&ul), "\n\n- Steps\n  1. first\n  2. second\n\n");
    }

    #[test]
    fn test_list_wrapped_in_container_stays_in_item() {
        let item = Node::element("li")
            .with_child(Node::text("A"))
            .with_child(Node::element("div").with_child(list("ul", &["x"])));
        let ol = Node::element("ol").with_child(item).with_child(el("li", "B"));

        assert_eq!(convert(&ol), "\n\n1. A\n\n   - x\n2. B\n\n");
    }

    #[test]
    fn test_text_after_nested_list_stays_in_item() {
        let inner = Node::element("li")
            .with_child(Node::text("x"))
            .with_child(list("ol", &["y"]));
        let outer = Node::element("li")
            .with_child(Node::text("A"))
            .with_child(Node::element("ul").with_child(inner))
            .with_child(Node::text("tail"));
        let ul = Node::element("ul").with_child(outer);

        assert_eq!(convert(&ul), "\n\n- A\n  - x\n    1. y\n\n  tail\n\n");
    }

    #[test]
    fn test_multi_paragraph_item_is_indented() {
        let item = Node::element("li")
            .with_child(el("p", "First"))
            .with_child(el("p", "Second"));
        let ul = Node::element("ul").with_child(item);

        // Blank-line runs are collapsed later by the orchestrator
        assert_eq!(convert(&ul), "\n\n- First\n\n\n\n  Second\n\n");
    }

    #[test]
    fn test_blockquote() {
        let quote = Node::element("blockquote")
            .with_child(el("p", "First"))
            .with_child(el("p", "Second"));
        assert_eq!(convert(&quote), "\n\n> First\n\n\n\n> Second\n\n");
    }

    #[test]
    fn test_table() {
        let row = |tag: &str, cells: &[&str]| {
            cells
                .iter()
                .fold(Node::element("tr"), |tr, c| tr.with_child(el(tag, c)))
        };
        let table = Node::element("table")
            .with_child(Node::element("thead").with_child(row("th", &["A", "B"])))
            .with_child(Node::element("tbody").with_child(row("td", &["1", "2"])));

        assert_eq!(
            convert(&table),
            "\n\n| A | B |\n| --- | --- |\n| 1 | 2 |\n\n"
        );
    }

    #[test]
    fn test_table_cells_collapse_whitespace() {
        let tr = Node::element("tr").with_child(
            Node::element("td")
                .with_child(Node::text("  multi\n  line "))
                .with_child(el("strong", "cell")),
        );
        let table = Node::element("table").with_child(tr);
        assert_eq!(convert(&table), "\n\n| multi line cell |\n| --- |\n\n");
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(convert(&Node::element("table")), "");
    }

    #[test]
    fn test_nav_is_single_line() {
        let link = |text: &str, href: &str| {
            Node::element_with_attrs("a", vec![("href", href)]).with_child(Node::text(text))
        };
        let nav = Node::element("nav")
            .with_child(link("Home", "/"))
            .with_child(Node::text("\n  "))
            .with_child(link("Docs", "/docs"))
            .with_child(el("p", "Extra"));

        assert_eq!(convert(&nav), "\n\n[Home](/) [Docs](/docs) Extra\n\n");
    }

    #[test]
    fn test_footer_and_aside_are_plain_text() {
        let footer = Node::element("footer")
            .with_child(el("h3", "Contact"))
            .with_child(el("strong", " Team "));
        assert_eq!(convert(&footer), "\n\nContact Team\n\n");

        let aside = Node::element("aside").with_child(Node::text("  note  "));
        assert_eq!(convert(&aside), "\n\nnote\n\n");
    }

    #[test]
    fn test_button_with_url() {
        let button = Node::element_with_attrs(
            "button",
            vec![("href", "/fallback"), ("data-url", "https://register.test")],
        )
        .with_child(Node::text(" Register "));
        assert_eq!(convert(&button), "[Register](https://register.test)");
    }

    #[test]
    fn test_button_skips_empty_url_attributes() {
        let button = Node::element_with_attrs("button", vec![("data-url", ""), ("data-href", "/join")]);
        assert_eq!(convert(&button), "[/join](/join)");
    }

    #[test]
    fn test_button_without_url() {
        assert_eq!(convert(&el("button", "Submit")), "**Submit**");
        assert_eq!(convert(&Node::element("button")), "");
    }

    #[test]
    fn test_unknown_container_passes_through() {
        let section = Node::element("section")
            .with_child(el("h2", "Title"))
            .with_child(el("span", "inline"));
        assert_eq!(convert(&section), "\n\n## Title\n\ninline");
    }
}
