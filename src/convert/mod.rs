mod blockquote;
mod code;
mod heading;
mod inline;
mod list;
mod paragraph;
mod table;

pub use blockquote::convert_blockquote;
pub use code::{convert_fenced_code, extract_language, is_supported_language};
pub use heading::convert_heading;
pub use inline::convert_children;
pub use list::convert_list;
pub use paragraph::convert_paragraph;
pub use table::convert_table;

use crate::block::Block;
use crate::config::Config;
use crate::parser::{NodeKind, SyntaxNode};

/// Walk the tree depth-first and convert every recognized block node.
/// Converted nodes are not descended into; any other node is transparent.
pub fn convert_document(document: &SyntaxNode, source: &str, config: &Config) -> Vec<Block> {
    let mut blocks = Vec::new();
    walk(document, source, config, &mut blocks);
    blocks
}

fn walk(node: &SyntaxNode, source: &str, config: &Config, blocks: &mut Vec<Block>) {
    match &node.kind {
        NodeKind::FencedCode { info } => blocks.extend(convert_fenced_code(node, info)),
        NodeKind::Heading { level } => {
            blocks.extend(convert_heading(node, *level, source, config))
        }
        NodeKind::List { ordered, .. } => blocks.extend(convert_list(node, *ordered)),
        NodeKind::BlockQuote => blocks.extend(convert_blockquote(node, source)),
        NodeKind::Paragraph => blocks.extend(convert_paragraph(node)),
        NodeKind::Table => blocks.extend(convert_table(node)),
        _ => {
            if !matches!(node.kind, NodeKind::Document) {
                log::trace!("passing through {:?} at {:?}", node.kind, node.range);
            }
            for child in &node.children {
                walk(child, source, config, blocks);
            }
        }
    }
}
