use crate::block::{Block, Heading};
use crate::chunk::split_text;
use crate::config::Config;
use crate::parser::SyntaxNode;

/// Convert a heading from its raw line text. Inline markup inside headings is
/// kept as written rather than styled. Levels without a configured color
/// (4-6) produce no block.
pub fn convert_heading(
    node: &SyntaxNode,
    level: u8,
    source: &str,
    config: &Config,
) -> Option<Block> {
    let text = source.get(node.inner_range()).unwrap_or_default();
    if text.is_empty() {
        return None;
    }

    let Some(color) = config.heading_color(level) else {
        log::debug!("dropping level {} heading {:?}", level, text);
        return None;
    };

    Block::heading(
        level,
        Heading {
            rich_text: split_text(text, None),
            color: format!("{}_background", color),
            is_toggleable: false,
        },
    )
}
