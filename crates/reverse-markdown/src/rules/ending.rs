//! Tokens emitted after an element's children.

use super::{is_link, ElementKind};
use crate::node::NodeRef;
use crate::options::{CodeBlockStyle, MapperOptions};
use crate::utilities::title_suffix;

/// End token for `node`, or `None` when the tag is not recognized.
pub fn ending(kind: &ElementKind, node: &NodeRef, options: &MapperOptions) -> Option<String> {
    let token = match kind {
        ElementKind::Html
        | ElementKind::Body
        | ElementKind::Pre
        | ElementKind::HorizontalRule
        | ElementKind::Paragraph => String::new(),
        ElementKind::Heading(_) => "\n".to_string(),
        ElementKind::Emphasis => "*".to_string(),
        ElementKind::Strong => "**".to_string(),
        ElementKind::ListItem
        | ElementKind::Blockquote
        | ElementKind::Root
        | ElementKind::OrderedList
        | ElementKind::UnorderedList => "\n".to_string(),
        ElementKind::Code => match (node.parent_tag(), options.code_block_style) {
            (Some("pre"), CodeBlockStyle::Fenced) => "\n```".to_string(),
            (Some("pre"), CodeBlockStyle::Indented) => "\n".to_string(),
            _ => "` ".to_string(),
        },
        ElementKind::Anchor => {
            if is_link(node) {
                format!(
                    "]({}{}) ",
                    node.attr("href").unwrap_or_default(),
                    title_suffix(node.attr("title"))
                )
            } else {
                String::new()
            }
        }
        ElementKind::Image => format!(
            "{}]({}{}) ",
            node.attr("alt").unwrap_or_default(),
            node.attr("src").unwrap_or_default(),
            title_suffix(node.attr("title"))
        ),
        // `<br>` only has a start token; its end goes down the unknown-tag path
        ElementKind::LineBreak | ElementKind::Unknown(_) => return None,
    };

    Some(token)
}
