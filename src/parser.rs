use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

/// Kind of a syntax tree node, with kind-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Heading { level: u8 },
    Paragraph,
    List { ordered: bool, start: Option<u64> },
    Item,
    BlockQuote,
    FencedCode { info: String },
    IndentedCode,
    Table,
    TableHead,
    TableRow,
    TableCell,
    Text(String),
    CodeSpan,
    /// Level 1 is italic, level 2 is bold.
    Emphasis { level: u8 },
    Link { destination: String, title: String },
    Image { destination: String, title: String },
    Html(String),
    Other,
}

/// One node of the parsed Markdown tree. `range` is the byte range of the
/// node in the source it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub range: Range<usize>,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, range: Range<usize>) -> Self {
        Self {
            kind,
            range,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    /// Concatenated content of all descendant text nodes.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let NodeKind::Text(content) = &self.kind {
            out.push_str(content);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Byte range from the start of the first child to the end of the last
    /// one: the node's line text without block markers.
    pub fn inner_range(&self) -> Range<usize> {
        match (self.children.first(), self.children.last()) {
            (Some(first), Some(last)) => first.range.start..last.range.end.max(first.range.start),
            _ => self.range.end..self.range.end,
        }
    }

    /// Source bytes spanned by this node, or "" if the range is out of bounds.
    pub fn source<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.range.clone()).unwrap_or_default()
    }
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options
}

/// Parse markdown text into a syntax tree rooted at a `Document` node.
pub fn parse(markdown: &str) -> SyntaxNode {
    let mut stack = vec![SyntaxNode::new(NodeKind::Document, 0..markdown.len())];

    for (event, range) in Parser::new_ext(markdown, options()).into_offset_iter() {
        match event {
            Event::Start(tag) => stack.push(SyntaxNode::new(tag_kind(tag), range)),
            Event::End(_) => close(&mut stack),
            Event::Text(text) => push_leaf(&mut stack, NodeKind::Text(text.into_string()), range),
            Event::Code(code) => {
                let text = SyntaxNode::new(NodeKind::Text(code.into_string()), range.clone());
                let span = SyntaxNode::new(NodeKind::CodeSpan, range).with_children(vec![text]);
                attach(&mut stack, span);
            }
            Event::SoftBreak => push_leaf(&mut stack, NodeKind::Text(" ".to_string()), range),
            Event::HardBreak => push_leaf(&mut stack, NodeKind::Text("\n".to_string()), range),
            Event::Html(html) | Event::InlineHtml(html) => {
                push_leaf(&mut stack, NodeKind::Html(html.into_string()), range)
            }
            _ => push_leaf(&mut stack, NodeKind::Other, range),
        }
    }

    while stack.len() > 1 {
        close(&mut stack);
    }
    stack
        .pop()
        .unwrap_or_else(|| SyntaxNode::new(NodeKind::Document, 0..markdown.len()))
}

fn tag_kind(tag: Tag) -> NodeKind {
    match tag {
        Tag::Heading { level, .. } => NodeKind::Heading {
            level: heading_level_to_u8(level),
        },
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::List(start) => NodeKind::List {
            ordered: start.is_some(),
            start,
        },
        Tag::Item => NodeKind::Item,
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => NodeKind::FencedCode {
            info: info.into_string(),
        },
        Tag::CodeBlock(CodeBlockKind::Indented) => NodeKind::IndentedCode,
        Tag::Table(_) => NodeKind::Table,
        Tag::TableHead => NodeKind::TableHead,
        Tag::TableRow => NodeKind::TableRow,
        Tag::TableCell => NodeKind::TableCell,
        Tag::Emphasis => NodeKind::Emphasis { level: 1 },
        Tag::Strong => NodeKind::Emphasis { level: 2 },
        Tag::Link {
            dest_url, title, ..
        } => NodeKind::Link {
            destination: dest_url.into_string(),
            title: title.into_string(),
        },
        Tag::Image {
            dest_url, title, ..
        } => NodeKind::Image {
            destination: dest_url.into_string(),
            title: title.into_string(),
        },
        _ => NodeKind::Other,
    }
}

fn push_leaf(stack: &mut [SyntaxNode], kind: NodeKind, range: Range<usize>) {
    attach(stack, SyntaxNode::new(kind, range));
}

fn attach(stack: &mut [SyntaxNode], node: SyntaxNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

fn close(stack: &mut Vec<SyntaxNode>) {
    // The document root is never closed by an end event.
    if stack.len() > 1 {
        if let Some(node) = stack.pop() {
            attach(stack, node);
        }
    }
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
