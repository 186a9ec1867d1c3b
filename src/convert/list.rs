use crate::block::{Block, ListItem, RichText};
use crate::parser::{NodeKind, SyntaxNode};

use super::inline::convert_node;

/// Convert a list into one block per item. Nested lists become the children
/// of the item that contains them.
pub fn convert_list(node: &SyntaxNode, ordered: bool) -> Vec<Block> {
    node.children
        .iter()
        .filter(|child| child.kind == NodeKind::Item)
        .filter_map(|item| convert_item(item, ordered))
        .collect()
}

fn convert_item(item: &SyntaxNode, ordered: bool) -> Option<Block> {
    let mut children = Vec::new();
    for child in &item.children {
        if let NodeKind::List { ordered, .. } = child.kind {
            children.extend(convert_list(child, ordered));
        }
    }

    let rich_text = item_content(item);
    if rich_text.is_empty() {
        if !children.is_empty() {
            log::debug!(
                "dropping list item without text and its {} nested items",
                children.len()
            );
        }
        return None;
    }

    let item = ListItem {
        rich_text,
        children,
    };
    Some(if ordered {
        Block::NumberedListItem {
            numbered_list_item: item,
        }
    } else {
        Block::BulletedListItem {
            bulleted_list_item: item,
        }
    })
}

fn item_content(item: &SyntaxNode) -> Vec<RichText> {
    let mut runs = Vec::new();
    for child in &item.children {
        if matches!(child.kind, NodeKind::List { .. }) {
            continue;
        }
        convert_node(child, &mut runs);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Annotations, plain_text};
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn convert(source: &str) -> Vec<Block> {
        let doc = parse(source);
        let list = &doc.children[0];
        let NodeKind::List { ordered, .. } = list.kind else {
            panic!("expected list, got {:?}", list.kind);
        };
        convert_list(list, ordered)
    }

    fn bullet(text: &str, children: Vec<Block>) -> Block {
        Block::BulletedListItem {
            bulleted_list_item: ListItem {
                rich_text: vec![RichText::plain(text)],
                children,
            },
        }
    }

    fn numbered(text: &str, children: Vec<Block>) -> Block {
        Block::NumberedListItem {
            numbered_list_item: ListItem {
                rich_text: vec![RichText::plain(text)],
                children,
            },
        }
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            convert("- one\n- two"),
            vec![bullet("one", vec![]), bullet("two", vec![])]
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            convert("1. one\n2. two"),
            vec![numbered("one", vec![]), numbered("two", vec![])]
        );
    }

    #[test]
    fn nested_lists_become_children() {
        assert_eq!(
            convert("1. parent\n   - child a\n   - child b\n     1. grandchild\n2. next"),
            vec![
                numbered(
                    "parent",
                    vec![
                        bullet("child a", vec![]),
                        bullet("child b", vec![numbered("grandchild", vec![])]),
                    ]
                ),
                numbered("next", vec![]),
            ]
        );
    }

    #[test]
    fn loose_items_keep_content() {
        let blocks = convert("- first\n\n- second *styled*\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[1].rich_text()[1],
            RichText::styled("styled", Some(Annotations::italic()))
        );
    }

    #[test]
    fn empty_items_are_dropped() {
        let blocks = convert("- one\n-\n- three");
        assert_eq!(blocks.len(), 2);
        assert_eq!(plain_text(blocks[1].rich_text()), "three");
    }

    #[test]
    fn parsed_item_with_only_nested_list_is_dropped() {
        let doc = parse("-\n  - nested\n");
        let item = &doc.children[0].children[0];
        assert!(matches!(
            item.children.first().map(|c| &c.kind),
            Some(NodeKind::List { .. })
        ));

        assert!(convert("-\n  - nested\n").is_empty());
    }

    #[test]
    fn item_with_only_nested_list_is_dropped() {
        let item = SyntaxNode::new(NodeKind::Item, 0..0).with_children(vec![
            SyntaxNode::new(
                NodeKind::List {
                    ordered: false,
                    start: None,
                },
                0..0,
            )
            .with_children(vec![
                SyntaxNode::new(NodeKind::Item, 0..0).with_children(vec![SyntaxNode::new(
                    NodeKind::Text("nested".to_string()),
                    0..6,
                )]),
            ]),
        ]);
        let list = SyntaxNode::new(
            NodeKind::List {
                ordered: false,
                start: None,
            },
            0..0,
        )
        .with_children(vec![item]);

        assert!(convert_list(&list, false).is_empty());
    }
}
