use crate::block::{Block, RichText, Table, TableRow};
use crate::parser::{NodeKind, SyntaxNode};

use super::inline::convert_children;

/// Convert a table. The first row (the header row when present) fixes the
/// table width; empty cells stay as empty rich text to keep columns aligned.
pub fn convert_table(node: &SyntaxNode) -> Option<Block> {
    let mut table_width = None;
    let mut rows = Vec::new();

    for child in &node.children {
        let cells = match child.kind {
            NodeKind::TableHead | NodeKind::TableRow => convert_cells(child),
            _ => continue,
        };
        if cells.is_empty() {
            continue;
        }
        if table_width.is_none() {
            table_width = Some(cells.len());
        }
        rows.push(Block::TableRow {
            table_row: TableRow { cells },
        });
    }

    let table_width = table_width?;
    Some(Block::Table {
        table: Table {
            table_width,
            has_column_header: true,
            has_row_header: false,
            children: rows,
        },
    })
}

fn convert_cells(row: &SyntaxNode) -> Vec<Vec<RichText>> {
    row.children
        .iter()
        .filter(|cell| cell.kind == NodeKind::TableCell)
        .map(convert_children)
        .collect()
}
