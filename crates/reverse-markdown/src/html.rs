//! HTML parsing support.
//!
//! This module parses HTML strings with scraper (html5ever) and converts the
//! result to the [`Node`] structure the mapper walks.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Tag of the synthetic element wrapping a parsed fragment
pub const ROOT_TAG: &str = "root";

/// Parse an HTML string into a Node tree.
///
/// A full document (one mentioning `<html` or `<body`) keeps its `html` element,
/// which becomes the only child of a synthetic `root` element. For a bare
/// fragment the top-level nodes become children of `root` directly. Comments
/// and doctypes are dropped.
///
/// # Example
///
/// ```rust
/// use reverse_markdown::{parse_html, Mapper};
///
/// let root = parse_html("<h1>Hello <em>World</em></h1>");
/// assert_eq!(root.tag_name(), "root");
///
/// let markdown = Mapper::new().process(&root).unwrap();
/// assert!(markdown.contains("# Hello *World*"));
/// ```
pub fn parse_html(html: &str) -> Node {
    let mut root = Node::element(ROOT_TAG);
    if is_document(html) {
        let document = Html::parse_document(html);
        root.add_child(scraper_to_node(document.root_element()));
    } else {
        let document = Html::parse_fragment(html);
        append_children(&mut root, document.root_element());
    }
    root
}

fn is_document(html: &str) -> bool {
    let lower = html.to_ascii_lowercase();
    lower.contains("<html") || lower.contains("<body")
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = Node::element_with_attrs(tag, attrs);
    append_children(&mut node, element);
    node
}

fn append_children(node: &mut Node, element: ElementRef) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            // html5ever inserts an empty <head> into every document
            ScraperNode::Element(el) if el.name() == "head" && !child.has_children() => {}
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mapper;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_wraps_fragment_in_root() {
        let node = parse_html("<p>Hello</p><p>World</p>");
        assert_eq!(node.tag_name(), "root");
        let tags: Vec<&str> = node.children().iter().map(Node::tag_name).collect();
        assert_eq!(tags, vec!["p", "p"]);
    }

    #[test]
    fn test_parse_keeps_attributes() {
        let node = parse_html(r#"<a HREF="http://foobar.com" title="Foo">x</a>"#);
        let a = &node.children()[0];
        assert_eq!(a.attr("href"), Some("http://foobar.com"));
        assert_eq!(a.attr("title"), Some("Foo"));
    }

    #[test]
    fn test_parse_drops_comments() {
        let node = parse_html("<!-- note --><em>x</em>");
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.text_content(), "x");
    }

    #[test]
    fn test_parse_decodes_entities() {
        let node = parse_html("<p>a &amp; b</p>");
        assert_eq!(node.text_content(), "a & b");
    }

    #[test]
    fn test_parse_document_keeps_html_and_body() {
        let node = parse_html("<html><body><p>one</p></body></html>");
        let html = &node.children()[0];
        assert_eq!(html.tag_name(), "html");
        let tags: Vec<&str> = html.children().iter().map(Node::tag_name).collect();
        assert_eq!(tags, vec!["body"]);
    }

    #[test]
    fn test_document_body_paragraphs() {
        let result = crate::parse_string("<html><body><p>one</p><p>two</p></body></html>").unwrap();
        assert!(result.starts_with("\none\n\ntwo"));
        assert_eq!(result, "\none\n\ntwo\n");
    }

    #[test]
    fn test_document_without_head_converts_strictly() {
        let mapper = Mapper::with_options(crate::MapperOptions {
            raise_on_error: true,
            ..Default::default()
        });
        let result = mapper.convert_html("<body><h1>Title</h1></body>").unwrap();
        assert_eq!(result, "\n# Title\n\n");
    }

    #[test]
    fn test_convert_html() {
        let mapper = Mapper::new();
        let result = mapper.convert_html("<h2>Title</h2>").unwrap();
        assert_eq!(result, "\n## Title\n\n");
    }

    #[test]
    fn test_convert_html_with_formatting() {
        let result = Mapper::new()
            .convert_html("<p>Hello <strong>World</strong></p>")
            .unwrap();
        assert_eq!(result, "\n\n\nHello **World**\n");
    }
}
