use std::io::Write;

use serde::Serialize;

use crate::block::Block;
use crate::chunk::{BLOCK_LIMIT, split_blocks};
use crate::error::Error;

/// The two operations the converter needs from a destination document.
/// Implementations do the transport; callers never send more than
/// [`BLOCK_LIMIT`] blocks per append.
pub trait BlockSink {
    type Error;

    fn append_children(&mut self, parent_id: &str, blocks: &[Block]) -> Result<(), Self::Error>;

    fn delete_children(&mut self, parent_id: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub batches: usize,
    pub blocks: usize,
}

/// Replace the children of `parent_id` with `blocks`: delete what is there,
/// then append in order, batch by batch. Stops at the first failure.
pub fn replace_children<S: BlockSink>(
    sink: &mut S,
    parent_id: &str,
    blocks: &[Block],
) -> Result<SyncSummary, S::Error> {
    sink.delete_children(parent_id)?;

    let mut summary = SyncSummary::default();
    for batch in split_blocks(blocks, BLOCK_LIMIT) {
        log::debug!(
            "appending batch {} ({} blocks) to {}",
            summary.batches + 1,
            batch.len(),
            parent_id
        );
        sink.append_children(parent_id, batch)?;
        summary.batches += 1;
        summary.blocks += batch.len();
    }
    Ok(summary)
}

/// Request body of an append call.
#[derive(Debug, Serialize)]
pub struct AppendRequest<'a> {
    pub children: &'a [Block],
}

/// Marker for a delete call in [`PayloadWriter`] output.
#[derive(Debug, Serialize)]
pub struct DeleteRequest<'a> {
    pub delete_children: &'a str,
}

/// A sink that writes each request as one JSON line instead of sending it.
pub struct PayloadWriter<W: Write> {
    out: W,
}

impl<W: Write> PayloadWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BlockSink for PayloadWriter<W> {
    type Error = Error;

    fn append_children(&mut self, parent_id: &str, blocks: &[Block]) -> Result<(), Error> {
        log::trace!("writing append payload for {}", parent_id);
        serde_json::to_writer(&mut self.out, &AppendRequest { children: blocks })?;
        self.out.write_all(b"\n").map_err(Error::Write)?;
        Ok(())
    }

    fn delete_children(&mut self, parent_id: &str) -> Result<(), Error> {
        log::trace!("writing delete marker for {}", parent_id);
        serde_json::to_writer(
            &mut self.out,
            &DeleteRequest {
                delete_children: parent_id,
            },
        )?;
        self.out.write_all(b"\n").map_err(Error::Write)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{RichText, TextBody};
    use pretty_assertions::assert_eq;

    fn paragraphs(n: usize) -> Vec<Block> {
        (0..n)
            .map(|i| Block::Paragraph {
                paragraph: TextBody {
                    rich_text: vec![RichText::plain(i.to_string())],
                    color: "default".to_string(),
                },
            })
            .collect()
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Delete(String),
        Append(String, usize),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        appended: Vec<Block>,
        fail_on_append: Option<usize>,
    }

    impl BlockSink for Recorder {
        type Error = String;

        fn append_children(&mut self, parent_id: &str, blocks: &[Block]) -> Result<(), String> {
            let appends = self
                .calls
                .iter()
                .filter(|c| matches!(c, Call::Append(..)))
                .count();
            if self.fail_on_append == Some(appends) {
                return Err("rate limited".to_string());
            }
            self.calls
                .push(Call::Append(parent_id.to_string(), blocks.len()));
            self.appended.extend_from_slice(blocks);
            Ok(())
        }

        fn delete_children(&mut self, parent_id: &str) -> Result<(), String> {
            self.calls.push(Call::Delete(parent_id.to_string()));
            Ok(())
        }
    }

    #[test]
    fn deletes_then_appends_in_batches() {
        let blocks = paragraphs(250);
        let mut sink = Recorder::default();

        let summary = replace_children(&mut sink, "page", &blocks).unwrap();

        assert_eq!(
            summary,
            SyncSummary {
                batches: 3,
                blocks: 250
            }
        );
        assert_eq!(
            sink.calls,
            vec![
                Call::Delete("page".to_string()),
                Call::Append("page".to_string(), 100),
                Call::Append("page".to_string(), 100),
                Call::Append("page".to_string(), 50),
            ]
        );
        assert_eq!(sink.appended, blocks);
    }

    #[test]
    fn empty_document_only_deletes() {
        let mut sink = Recorder::default();
        let summary = replace_children(&mut sink, "page", &[]).unwrap();

        assert_eq!(summary, SyncSummary::default());
        assert_eq!(sink.calls, vec![Call::Delete("page".to_string())]);
    }

    #[test]
    fn stops_at_first_failed_batch() {
        let mut sink = Recorder {
            fail_on_append: Some(1),
            ..Recorder::default()
        };

        let err = replace_children(&mut sink, "page", &paragraphs(150)).unwrap_err();

        assert_eq!(err, "rate limited");
        assert_eq!(sink.appended.len(), 100);
    }

    #[test]
    fn payload_writer_emits_json_lines() {
        let mut writer = PayloadWriter::new(Vec::new());
        replace_children(&mut writer, "page", &paragraphs(101)).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);

        let delete: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(delete, serde_json::json!({ "delete_children": "page" }));
        let first: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first["children"].as_array().unwrap().len(), 100);
        assert_eq!(first["children"][0]["type"], "paragraph");
        let second: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(second["children"][0]["paragraph"]["rich_text"][0]["text"]["content"], "100");
    }
}
