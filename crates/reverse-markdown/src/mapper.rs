//! Mapper - the main entry point for Node to Markdown conversion.

use std::fmt;
use std::sync::Arc;

use crate::logger::{LogFacade, Logger};
use crate::node::{Node, NodeRef};
use crate::options::{CodeBlockStyle, MapperOptions};
use crate::rules::{ending, opening, ConversionState, ElementKind, TagBoundary};
use crate::utilities::{collapse_spaces, indent_code, squeeze_whitespace};
use crate::{Result, ReverseMarkdownError};

/// Renders a document tree as Markdown by depth-first descent.
///
/// The mapper only holds configuration. Everything that changes during a
/// conversion lives in a [`ConversionState`] created per [`Mapper::process`]
/// call, so one mapper can be reused and shared across threads.
#[derive(Clone)]
pub struct Mapper {
    options: MapperOptions,
    logger: Arc<dyn Logger>,
}

impl Mapper {
    /// Create a new Mapper with default options
    pub fn new() -> Self {
        Self::with_options(MapperOptions::default())
    }

    /// Create a Mapper with custom options
    pub fn with_options(options: MapperOptions) -> Self {
        Self {
            options,
            logger: Arc::new(LogFacade),
        }
    }

    /// Replace the logger that receives unknown-tag messages
    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Convert a node and its descendants to Markdown
    pub fn process(&self, node: &Node) -> Result<String> {
        let mut state = ConversionState::default();
        self.process_node(&NodeRef::new(node), &mut state)
    }

    /// Parse an HTML string and convert it to Markdown
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<String> {
        let root = crate::html::parse_html(html);
        self.process(&root)
    }

    fn process_node(&self, node: &NodeRef, state: &mut ConversionState) -> Result<String> {
        if node.is_text() {
            return Ok(collapse_spaces(&self.render_text(node)));
        }

        let depth = state.depth + 1;
        if depth > self.options.max_depth {
            return Err(ReverseMarkdownError::DepthLimitExceeded {
                depth,
                max_depth: self.options.max_depth,
            });
        }

        let kind = ElementKind::from_tag(node.tag_name());

        let mut output = match opening(&kind, node, &self.options, state) {
            Some(token) => token,
            None => self.unknown_tag(node.tag_name(), TagBoundary::Start)?,
        };

        state.depth = depth;
        for child in node.children() {
            output.push_str(&self.process_node(&child, state)?);
        }
        state.depth = depth - 1;

        match ending(&kind, node, &self.options) {
            Some(token) => output.push_str(&token),
            None => output.push_str(&self.unknown_tag(node.tag_name(), TagBoundary::End)?),
        }

        Ok(collapse_spaces(&output))
    }

    fn render_text(&self, node: &NodeRef) -> String {
        let Node::Text(text) = node.node else {
            return String::new();
        };

        let in_indented_code = node.parent_tag() == Some("code")
            && self.options.code_block_style == CodeBlockStyle::Indented;

        if in_indented_code {
            indent_code(text)
        } else {
            squeeze_whitespace(text)
        }
    }

    fn unknown_tag(&self, tag: &str, boundary: TagBoundary) -> Result<String> {
        if self.options.raise_on_error {
            return Err(ReverseMarkdownError::UnknownTag {
                tag: tag.to_string(),
                boundary,
            });
        }

        if self.options.log_unknown_tags {
            self.logger.log(
                self.options.log_level,
                &format!("unknown {} tag: {}", boundary, tag),
            );
        }

        Ok(String::new())
    }
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
