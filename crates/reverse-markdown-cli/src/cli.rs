use clap::{Parser, Subcommand};
use reverse_markdown::{CodeBlockStyle, MapperOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Render <pre><code> blocks with ``` fences
    #[clap(long, global = true)]
    pub github_style_code_blocks: bool,
    /// Fail on tags that have no Markdown rendering
    #[clap(long, global = true)]
    pub raise_errors: bool,
    /// Log skipped tags (-v) and debug details (-vv) to stderr
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download HTML from given URL and convert to Markdown
    Convert { url: String },
    /// Convert a local HTML file, or stdin when PATH is `-`
    File { path: String },
}

impl Cli {
    pub fn mapper_options(&self) -> MapperOptions {
        MapperOptions {
            code_block_style: if self.github_style_code_blocks {
                CodeBlockStyle::Fenced
            } else {
                CodeBlockStyle::Indented
            },
            raise_on_error: self.raise_errors,
            log_level: log::Level::Warn,
            ..Default::default()
        }
    }
}
