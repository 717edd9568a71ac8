//! # reverse-markdown
//!
//! Map HTML document trees to Markdown.
//!
//! The [`Mapper`] walks a [`Node`] tree depth-first and emits Markdown tokens
//! for each element according to its tag, its parent and its position among
//! siblings. The output is a readable, mechanically derived rendering rather
//! than minimal Markdown.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use reverse_markdown::{Mapper, Node};
//!
//! let mapper = Mapper::new();
//!
//! let mut h1 = Node::element("h1");
//! h1.add_child(Node::text("Hello World"));
//!
//! let markdown = mapper.process(&h1).unwrap();
//! assert_eq!(markdown, "# Hello World\n");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! let markdown = reverse_markdown::parse_string("<em>Hello</em>").unwrap();
//! assert!(markdown.contains("*Hello*"));
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod logger;
mod mapper;
pub mod node;
mod options;
mod rules;
mod utilities;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use logger::{LogFacade, Logger, NoopLogger};
pub use mapper::Mapper;
pub use node::{Element, Node, NodeRef};
pub use options::{CodeBlockStyle, MapperOptions, DEFAULT_MAX_DEPTH};
pub use rules::{ElementKind, TagBoundary};

/// Error type for reverse-markdown operations
#[derive(Debug, thiserror::Error)]
pub enum ReverseMarkdownError {
    #[error("unknown {boundary} tag: {tag}")]
    UnknownTag { tag: String, boundary: TagBoundary },

    #[error("nesting depth {depth} exceeds the limit of {max_depth}")]
    DepthLimitExceeded { depth: usize, max_depth: usize },
}

pub type Result<T> = std::result::Result<T, ReverseMarkdownError>;

/// Convert an HTML string to Markdown with default options
#[cfg(feature = "html")]
pub fn parse_string(html: &str) -> Result<String> {
    Mapper::new().convert_html(html)
}

/// Convert an already parsed tree to Markdown with default options
pub fn parse_element(node: &Node) -> Result<String> {
    Mapper::new().process(node)
}
