use crate::block::{Block, TextBody};
use crate::chunk::split_text;
use crate::parser::SyntaxNode;

use super::inline::convert_children;

/// Convert a paragraph's inline content, falling back to its flattened text
/// when no inline node produced a run.
pub fn convert_paragraph(node: &SyntaxNode) -> Option<Block> {
    let mut rich_text = convert_children(node);

    if rich_text.is_empty() {
        let content = node.text();
        if content.is_empty() {
            return None;
        }
        rich_text = split_text(&content, None);
    }

    Some(Block::Paragraph {
        paragraph: TextBody {
            rich_text,
            color: "default".to_string(),
        },
    })
}
