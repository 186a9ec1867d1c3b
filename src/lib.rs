mod block;
pub mod chunk;
mod config;
pub mod convert;
mod error;
pub mod parser;
pub mod sync;

pub use block::{
    Annotations, Block, Code, Heading, Link, ListItem, RichText, Table, TableRow, Text, TextBody,
    plain_text,
};
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use parser::{NodeKind, SyntaxNode};
pub use sync::{BlockSink, DeleteRequest, PayloadWriter, SyncSummary, replace_children};

use std::fs;
use std::path::Path;

/// Parse markdown text into a syntax tree.
pub fn parse(markdown: &str) -> SyntaxNode {
    parser::parse(markdown)
}

/// Convert markdown to blocks using the compiled default config.
pub fn markdown_to_blocks(markdown: &str) -> Vec<Block> {
    markdown_to_blocks_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to blocks with custom config.
pub fn markdown_to_blocks_with_config(markdown: &str, config: &Config) -> Vec<Block> {
    let document = parse(markdown);
    convert::convert_document(&document, markdown, config)
}

/// Read a markdown file and convert it to blocks.
pub fn convert_file(path: &Path, config: &Config) -> Result<Vec<Block>> {
    let markdown = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let blocks = markdown_to_blocks_with_config(&markdown, config);
    log::debug!("converted {} into {} blocks", path.display(), blocks.len());
    Ok(blocks)
}
