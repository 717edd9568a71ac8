//! Configuration options for the Mapper

use log::Level;

/// Default limit on element nesting before a conversion is aborted
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Code block style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeBlockStyle {
    /// Use indented code blocks (4 spaces)
    #[default]
    Indented,
    /// Use fenced code blocks (```), as on GitHub
    Fenced,
}

/// Options for the Mapper
#[derive(Debug, Clone)]
pub struct MapperOptions {
    /// How `<pre><code>` blocks are rendered
    pub code_block_style: CodeBlockStyle,

    /// Fail the conversion on an unrecognized tag instead of skipping it
    pub raise_on_error: bool,

    /// Report skipped unrecognized tags to the logger
    pub log_unknown_tags: bool,

    /// Level used for unknown-tag messages
    pub log_level: Level,

    /// Deepest element nesting accepted before the conversion fails
    pub max_depth: usize,
}

impl MapperOptions {
    /// Defaults with fenced code blocks
    pub fn github_style() -> Self {
        Self {
            code_block_style: CodeBlockStyle::Fenced,
            ..Default::default()
        }
    }
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            code_block_style: CodeBlockStyle::Indented,
            raise_on_error: false,
            log_unknown_tags: true,
            log_level: Level::Info,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
