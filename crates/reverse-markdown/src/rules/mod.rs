//! Tag rules: which Markdown tokens an element emits before and after its
//! children.

mod ending;
mod opening;

pub use ending::ending;
pub use opening::opening;

use std::fmt;

use crate::node::NodeRef;

/// The closed set of tags the mapper knows how to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Html,
    Body,
    /// Synthetic wrapper around a parsed fragment
    Root,
    Paragraph,
    /// `h1` to `h4`
    Heading(u8),
    Emphasis,
    Strong,
    Blockquote,
    Pre,
    Code,
    OrderedList,
    UnorderedList,
    ListItem,
    Anchor,
    Image,
    HorizontalRule,
    LineBreak,
    /// Any other tag, with its original name
    Unknown(String),
}

impl ElementKind {
    /// Classify a tag name (case-insensitive)
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "html" => ElementKind::Html,
            "body" => ElementKind::Body,
            "root" => ElementKind::Root,
            "p" => ElementKind::Paragraph,
            "h1" => ElementKind::Heading(1),
            "h2" => ElementKind::Heading(2),
            "h3" => ElementKind::Heading(3),
            "h4" => ElementKind::Heading(4),
            "em" => ElementKind::Emphasis,
            "strong" => ElementKind::Strong,
            "blockquote" => ElementKind::Blockquote,
            "pre" => ElementKind::Pre,
            "code" => ElementKind::Code,
            "ol" => ElementKind::OrderedList,
            "ul" => ElementKind::UnorderedList,
            "li" => ElementKind::ListItem,
            "a" => ElementKind::Anchor,
            "img" => ElementKind::Image,
            "hr" => ElementKind::HorizontalRule,
            "br" => ElementKind::LineBreak,
            _ => ElementKind::Unknown(tag.to_string()),
        }
    }
}

/// Which side of an element a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagBoundary {
    Start,
    End,
}

impl fmt::Display for TagBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagBoundary::Start => f.write_str("start"),
            TagBoundary::End => f.write_str("end"),
        }
    }
}

/// Traversal-scoped state threaded through one top-level conversion.
#[derive(Debug, Default, Clone)]
pub struct ConversionState {
    /// Last number emitted for an `<ol>` item; every `<ol>` open resets it
    pub ordered_list_counter: usize,
    /// Element nesting depth of the node being rendered
    pub depth: usize,
}

/// An anchor renders as a Markdown link only when it has visible text and an
/// `href` that is not a same-page fragment.
fn is_link(node: &NodeRef) -> bool {
    let has_text = !node.text_content().trim().is_empty();
    match node.attr("href") {
        Some(href) => has_text && !href.starts_with('#'),
        None => false,
    }
}
