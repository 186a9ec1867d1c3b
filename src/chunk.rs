use crate::block::{Annotations, Block, RichText};

/// Maximum number of blocks that can be sent in a single request.
pub const BLOCK_LIMIT: usize = 100;

/// Maximum number of characters in a single rich text run.
pub const CHARACTER_LIMIT: usize = 2000;

/// Split text into runs of at most [`CHARACTER_LIMIT`] characters, all
/// carrying the same annotations. Empty text still yields one empty run.
pub fn split_text(content: &str, annotations: Option<Annotations>) -> Vec<RichText> {
    segments(content)
        .into_iter()
        .map(|segment| RichText::styled(segment, annotations))
        .collect()
}

/// Like [`split_text`], but every run links to `url`.
pub fn split_text_with_link(content: &str, url: &str) -> Vec<RichText> {
    segments(content)
        .into_iter()
        .map(|segment| RichText::linked(segment, url))
        .collect()
}

/// Partition blocks into consecutive batches of at most `limit` blocks.
pub fn split_blocks(blocks: &[Block], limit: usize) -> Vec<&[Block]> {
    blocks.chunks(limit.max(1)).collect()
}

fn segments(content: &str) -> Vec<&str> {
    if content.chars().count() <= CHARACTER_LIMIT {
        return vec![content];
    }

    let mut segments = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in content.char_indices() {
        if count == CHARACTER_LIMIT {
            segments.push(&content[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    segments.push(&content[start..]);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::TextBody;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn paragraph(n: usize) -> Block {
        Block::Paragraph {
            paragraph: TextBody {
                rich_text: vec![RichText::plain(n.to_string())],
                color: "default".to_string(),
            },
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(100, 1)]
    #[case(101, 2)]
    #[case(250, 3)]
    fn split_blocks_into_batches(#[case] len: usize, #[case] batches: usize) {
        let blocks: Vec<Block> = (0..len).map(paragraph).collect();
        let split = split_blocks(&blocks, BLOCK_LIMIT);

        assert_eq!(split.len(), batches);
        assert!(split.iter().all(|batch| batch.len() <= BLOCK_LIMIT));
        assert_eq!(split.concat(), blocks);
    }

    #[test]
    fn split_blocks_zero_limit_is_total() {
        let blocks: Vec<Block> = (0..3).map(paragraph).collect();
        assert_eq!(split_blocks(&blocks, 0).len(), 3);
    }

    #[rstest]
    #[case("")]
    #[case("short text")]
    fn short_text_is_one_run(#[case] content: &str) {
        let runs = split_text(content, None);
        assert_eq!(runs, vec![RichText::plain(content)]);
    }

    #[test]
    fn text_at_limit_is_one_run() {
        let content = "a".repeat(CHARACTER_LIMIT);
        let runs = split_text(&content, Some(Annotations::bold()));
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].plain_text(), content);
        assert_eq!(runs[0].annotations, Some(Annotations::bold()));
    }

    #[rstest]
    #[case(CHARACTER_LIMIT + 1, 2)]
    #[case(CHARACTER_LIMIT * 2, 2)]
    #[case(CHARACTER_LIMIT * 2 + 500, 3)]
    fn long_text_is_chunked(#[case] len: usize, #[case] expected: usize) {
        let content: String = (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect();
        let runs = split_text(&content, Some(Annotations::italic()));

        assert_eq!(runs.len(), expected);
        for run in &runs[..runs.len() - 1] {
            assert_eq!(run.plain_text().chars().count(), CHARACTER_LIMIT);
        }
        assert!(runs.iter().all(|r| r.annotations == Some(Annotations::italic())));
        let joined: String = runs.iter().map(RichText::plain_text).collect();
        assert_eq!(joined, content);
    }

    #[test]
    fn chunks_count_characters_not_bytes() {
        let content = "é".repeat(CHARACTER_LIMIT + 10);
        let runs = split_text(&content, None);

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].plain_text().chars().count(), CHARACTER_LIMIT);
        assert_eq!(runs[1].plain_text(), "é".repeat(10));
    }

    #[test]
    fn linked_text_links_every_chunk() {
        let content = "x".repeat(CHARACTER_LIMIT + 1);
        let runs = split_text_with_link(&content, "https://example.com");

        assert_eq!(runs.len(), 2);
        assert!(runs.iter().all(|r| r.link_url() == Some("https://example.com")));
        assert!(runs.iter().all(|r| r.annotations.is_none()));
    }
}
