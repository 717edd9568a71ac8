//! Tokens emitted before an element's children.

use super::{is_link, ConversionState, ElementKind};
use crate::node::NodeRef;
use crate::options::{CodeBlockStyle, MapperOptions};

/// Start token for `node`, or `None` when the tag is not recognized.
pub fn opening(
    kind: &ElementKind,
    node: &NodeRef,
    options: &MapperOptions,
    state: &mut ConversionState,
) -> Option<String> {
    let parent = node.parent_tag();

    let token = match kind {
        ElementKind::Html | ElementKind::Body => String::new(),
        ElementKind::ListItem => list_item(node, state),
        ElementKind::Pre => "\n".to_string(),
        ElementKind::OrderedList => {
            state.ordered_list_counter = 0;
            "\n".to_string()
        }
        ElementKind::UnorderedList | ElementKind::Root => "\n".to_string(),
        ElementKind::Paragraph => paragraph(node),
        ElementKind::Heading(level) => format!("{} ", "#".repeat(*level as usize)),
        ElementKind::Emphasis => "*".to_string(),
        ElementKind::Strong => "**".to_string(),
        ElementKind::Blockquote => "> ".to_string(),
        ElementKind::Code => match (parent, options.code_block_style) {
            (Some("pre"), CodeBlockStyle::Fenced) => "\n```\n".to_string(),
            (Some("pre"), CodeBlockStyle::Indented) => "\n    ".to_string(),
            _ => " `".to_string(),
        },
        ElementKind::Anchor => {
            if is_link(node) {
                " [".to_string()
            } else {
                " ".to_string()
            }
        }
        ElementKind::Image => " ![".to_string(),
        ElementKind::HorizontalRule => "----------\n\n".to_string(),
        ElementKind::LineBreak => "  \n".to_string(),
        ElementKind::Unknown(_) => return None,
    };

    Some(token)
}

fn list_item(node: &NodeRef, state: &mut ConversionState) -> String {
    let depth = node.count_ancestors("ol") + node.count_ancestors("ul");
    let indent = "  ".repeat(depth.saturating_sub(1));

    if node.parent_tag() == Some("ol") {
        state.ordered_list_counter += 1;
        format!("{}{}. ", indent, state.ordered_list_counter)
    } else {
        format!("{}- ", indent)
    }
}

fn paragraph(node: &NodeRef) -> String {
    if node.has_ancestor("blockquote") {
        return "\n\n> ".to_string();
    }

    match node.parent_tag() {
        None | Some("body") => {
            // Text and blank elements before the paragraph don't count
            let is_first = node
                .previous_siblings()
                .all(|sibling| sibling.is_text() || sibling.text_content().trim().is_empty());
            if is_first {
                String::new()
            } else {
                "\n\n".to_string()
            }
        }
        Some(_) => "\n\n".to_string(),
    }
}
