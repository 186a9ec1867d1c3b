use crate::block::{Annotations, RichText};
use crate::chunk::{split_text, split_text_with_link};
use crate::parser::{NodeKind, SyntaxNode};

/// Convert the children of `node` into rich text runs, in document order.
pub fn convert_children(node: &SyntaxNode) -> Vec<RichText> {
    let mut runs = Vec::new();
    for child in &node.children {
        convert_node(child, &mut runs);
    }
    runs
}

/// Dispatch a single inline node. Containers that are not links or styles
/// are transparent: their children are converted in place.
pub(crate) fn convert_node(node: &SyntaxNode, runs: &mut Vec<RichText>) {
    match &node.kind {
        NodeKind::Link { destination, .. } => runs.extend(convert_link(node, destination)),
        NodeKind::Emphasis { level: 1 } => runs.extend(convert_style(node, Annotations::italic())),
        NodeKind::Emphasis { level: 2 } => runs.extend(convert_style(node, Annotations::bold())),
        NodeKind::CodeSpan => runs.extend(convert_style(node, Annotations::code())),
        NodeKind::Text(content) => {
            if !content.is_empty() {
                runs.extend(split_text(content, None));
            }
        }
        _ => {
            for child in &node.children {
                convert_node(child, runs);
            }
        }
    }
}

// Styles do not compose: the whole subtree takes this node's annotation.
fn convert_style(node: &SyntaxNode, annotations: Annotations) -> Vec<RichText> {
    let content = node.text();
    if content.is_empty() {
        return Vec::new();
    }
    split_text(&content, Some(annotations))
}

fn convert_link(node: &SyntaxNode, destination: &str) -> Vec<RichText> {
    if destination.is_empty() {
        log::trace!("dropping link without destination at {:?}", node.range);
        return Vec::new();
    }

    let content = node.text();
    let content = if content.is_empty() {
        destination
    } else {
        content.as_str()
    };
    split_text_with_link(content, destination)
}
