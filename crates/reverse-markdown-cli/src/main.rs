mod cli;

use std::io::{stdin, Read};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use reverse_markdown::Mapper;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logger(cli.verbose)?;

    let html = match &cli.command {
        Command::Convert { url } => fetch(url)?,
        Command::File { path } => read_input(path)?,
    };

    let mapper = Mapper::with_options(cli.mapper_options());
    let markdown = mapper
        .convert_html(&html)
        .context("Failed to convert HTML to Markdown")?;
    println!("{}", markdown.trim());
    Ok(())
}

fn fetch(url: &str) -> Result<String> {
    debug!("GET {url}");
    let response = reqwest::blocking::get(url)
        .and_then(|res| res.error_for_status())
        .with_context(|| format!("Failed to download '{url}'"))?;
    let body = response
        .text()
        .with_context(|| format!("Failed to read response body of '{url}'"))?;
    debug!("Downloaded {} bytes", body.len());
    Ok(body)
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut html = String::new();
        stdin()
            .read_to_string(&mut html)
            .context("Failed to read stdin")?;
        return Ok(html);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read '{path}'"))
}

fn setup_logger(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        _ => LevelFilter::Debug,
    };
    let config = ConfigBuilder::new()
        .add_filter_allow_str("reverse_markdown")
        .set_thread_level(LevelFilter::Off)
        .build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}
