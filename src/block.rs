use serde::Serialize;

/// Style flags attached to a rich text run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

impl Annotations {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }

    pub fn code() -> Self {
        Self {
            code: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

/// A contiguous span of text sharing one style or link treatment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "text")]
pub struct RichText {
    pub text: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            text: Text {
                content: content.into(),
                link: None,
            },
            annotations: None,
        }
    }

    pub fn styled(content: impl Into<String>, annotations: Option<Annotations>) -> Self {
        Self {
            annotations,
            ..Self::plain(content)
        }
    }

    pub fn linked(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: Text {
                content: content.into(),
                link: Some(Link { url: url.into() }),
            },
            annotations: None,
        }
    }

    pub fn plain_text(&self) -> &str {
        &self.text.content
    }

    pub fn link_url(&self) -> Option<&str> {
        self.text.link.as_ref().map(|link| link.url.as_str())
    }
}

/// Concatenated plain text of a rich text sequence.
pub fn plain_text(runs: &[RichText]) -> String {
    runs.iter().map(RichText::plain_text).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub rich_text: Vec<RichText>,
    pub color: String,
    pub is_toggleable: bool,
}

/// Body shared by paragraph and quote blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBody {
    pub rich_text: Vec<RichText>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Code {
    pub rich_text: Vec<RichText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A bulleted or numbered list item with its nested items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub rich_text: Vec<RichText>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub table_width: usize,
    pub has_column_header: bool,
    pub has_row_header: bool,
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub cells: Vec<Vec<RichText>>,
}

/// Block-level elements of the destination document.
///
/// Variant field names follow the wire format, where each block carries its
/// body under a key named after its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: Heading },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: Heading },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: Heading },
    Paragraph { paragraph: TextBody },
    Quote { quote: TextBody },
    Code { code: Code },
    BulletedListItem { bulleted_list_item: ListItem },
    NumberedListItem { numbered_list_item: ListItem },
    Table { table: Table },
    TableRow { table_row: TableRow },
}

impl Block {
    /// Build a heading block for levels 1-3; other levels have no block.
    pub fn heading(level: u8, heading: Heading) -> Option<Self> {
        match level {
            1 => Some(Block::Heading1 { heading_1: heading }),
            2 => Some(Block::Heading2 { heading_2: heading }),
            3 => Some(Block::Heading3 { heading_3: heading }),
            _ => None,
        }
    }

    /// Rich text carried directly by the block (empty for tables and rows).
    pub fn rich_text(&self) -> &[RichText] {
        match self {
            Block::Heading1 { heading_1: h }
            | Block::Heading2 { heading_2: h }
            | Block::Heading3 { heading_3: h } => &h.rich_text,
            Block::Paragraph { paragraph: body } | Block::Quote { quote: body } => &body.rich_text,
            Block::Code { code } => &code.rich_text,
            Block::BulletedListItem {
                bulleted_list_item: item,
            }
            | Block::NumberedListItem {
                numbered_list_item: item,
            } => &item.rich_text,
            Block::Table { .. } | Block::TableRow { .. } => &[],
        }
    }

    /// Nested blocks owned by this block.
    pub fn children(&self) -> &[Block] {
        match self {
            Block::BulletedListItem {
                bulleted_list_item: item,
            }
            | Block::NumberedListItem {
                numbered_list_item: item,
            } => &item.children,
            Block::Table { table } => &table.children,
            _ => &[],
        }
    }
}
