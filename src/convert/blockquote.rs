use crate::block::{Block, TextBody};
use crate::chunk::split_text;
use crate::parser::{NodeKind, SyntaxNode};

use super::inline::convert_node;

/// Convert a blockquote into a single quote block. Directly nested
/// blockquotes are skipped; if nothing else yields text, the raw source
/// buffer is used instead.
pub fn convert_blockquote(node: &SyntaxNode, source: &str) -> Option<Block> {
    let mut rich_text = Vec::new();
    for child in &node.children {
        if child.kind == NodeKind::BlockQuote {
            continue;
        }
        convert_node(child, &mut rich_text);
    }

    if rich_text.is_empty() {
        if source.is_empty() {
            return None;
        }
        rich_text = split_text(source, None);
    }

    Some(Block::Quote {
        quote: TextBody {
            rich_text,
            color: "default".to_string(),
        },
    })
}
