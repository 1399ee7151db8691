//! Document script runner — one ordered pass, then finalize.
//!
//! The script is the single input defining a document's full content and
//! order. The runner walks it top-to-bottom, dispatching each block to its
//! renderer; later blocks depend on the cursor position earlier blocks left
//! behind, so there is no parallelism within a render. Same script + same
//! geometry produces byte-identical output.

use serde::{Deserialize, Serialize};

use crate::layout::blocks::{render_block, ContentBlock};
use crate::layout::canvas::Canvas;
use crate::layout::cursor::Cursor;
use crate::layout::error::LayoutError;
use crate::layout::geometry::PageGeometry;

/// Ordered sequence of content blocks; insertion order is rendering order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentScript {
    blocks: Vec<ContentBlock>,
}

impl DocumentScript {
    pub fn new() -> Self {
        DocumentScript { blocks: Vec::new() }
    }

    pub fn push(&mut self, block: ContentBlock) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl From<Vec<ContentBlock>> for DocumentScript {
    fn from(blocks: Vec<ContentBlock>) -> Self {
        DocumentScript { blocks }
    }
}

/// Renders a script against a canvas and returns the finished byte stream.
///
/// The canvas must have been constructed for the same `geometry`. A fresh
/// cursor is created here and dropped when the bytes are returned; nothing
/// persists across renders. Any error aborts the whole render — partial
/// output is never returned.
pub fn render_script<C: Canvas>(
    script: &DocumentScript,
    geometry: &PageGeometry,
    mut canvas: C,
) -> Result<Vec<u8>, LayoutError> {
    let mut cursor = Cursor::new(*geometry);
    for block in script.blocks() {
        render_block(block, &mut cursor, &mut canvas)?;
    }
    canvas.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::blocks::{BulletItem, ContactField, HEADER_BOX_HEIGHT};
    use crate::layout::canvas::recording::{DrawCall, RecordingCanvas};
    use crate::layout::geometry::Margins;

    fn make_geometry() -> PageGeometry {
        PageGeometry::new(600.0, 800.0, Margins::uniform(50.0)).unwrap()
    }

    fn skills_script() -> DocumentScript {
        DocumentScript::from(vec![
            ContentBlock::SectionHeader {
                title: "Skills".into(),
            },
            ContentBlock::BulletList {
                items: vec![
                    BulletItem::plain("A"),
                    BulletItem::plain("B"),
                    BulletItem::plain("C"),
                ],
            },
        ])
    }

    #[test]
    fn test_skills_scenario_single_page_header_at_top_margin() {
        let geometry = make_geometry();
        let mut canvas = RecordingCanvas::new();
        let mut cursor = Cursor::new(geometry);
        for block in skills_script().blocks() {
            render_block(block, &mut cursor, &mut canvas).unwrap();
        }

        assert_eq!(skills_script().len(), 2);
        assert_eq!(canvas.page_count(), 1, "short script must fit one page");

        match &canvas.calls[0] {
            DrawCall::Rect { y, h, .. } => {
                assert_eq!(*y, 50.0, "header box drawn at the top margin");
                assert_eq!(*h, HEADER_BOX_HEIGHT);
            }
            other => panic!("expected the header rect first, got {other:?}"),
        }

        // Header title, then bullet glyph/text pairs for A, B, C in order.
        let item_texts: Vec<String> = canvas
            .texts()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } if ["A", "B", "C"].contains(&text.as_str()) => {
                    Some(text.clone())
                }
                _ => None,
            })
            .collect();
        assert_eq!(item_texts, vec!["A", "B", "C"], "items render in script order");
    }

    #[test]
    fn test_header_near_bottom_breaks_to_new_page_top() {
        let geometry = make_geometry();
        let mut canvas = RecordingCanvas::new();
        let mut cursor = Cursor::new(geometry);

        // Exhaust the first page.
        cursor.advance(10_000.0);
        assert_eq!(cursor.remaining_space(), 0.0);

        render_block(
            &ContentBlock::SectionHeader {
                title: "Education".into(),
            },
            &mut cursor,
            &mut canvas,
        )
        .unwrap();

        assert_eq!(canvas.page_count(), 2, "page count increases by exactly one");
        assert_eq!(cursor.page_index(), 1);
        match &canvas.calls[0] {
            DrawCall::Rect { page, y, .. } => {
                assert_eq!(*page, 2, "header belongs to the new page");
                assert_eq!(*y, 50.0, "header drawn at the new page's top margin");
            }
            other => panic!("expected the header rect, got {other:?}"),
        }
    }

    #[test]
    fn test_render_script_runs_all_blocks_in_order() {
        let geometry = make_geometry();
        let script = DocumentScript::from(vec![
            ContentBlock::NameHeader { name: "Ada".into() },
            ContentBlock::SectionHeader {
                title: "Contact Information".into(),
            },
            ContentBlock::ContactInfo {
                fields: vec![ContactField::plain("Email", "a@b.c")],
            },
            ContentBlock::Paragraph {
                text: "Short summary.".into(),
            },
        ]);

        let canvas = RecordingCanvas::new();
        // render_script consumes the canvas; assert it completes cleanly.
        let bytes = render_script(&script, &geometry, canvas).unwrap();
        assert!(bytes.is_empty(), "recording canvas has no byte stream");
    }

    #[test]
    fn test_identical_scripts_record_identical_draw_calls() {
        let geometry = make_geometry();
        let run = || {
            let mut canvas = RecordingCanvas::new();
            let mut cursor = Cursor::new(geometry);
            for block in skills_script().blocks() {
                render_block(block, &mut cursor, &mut canvas).unwrap();
            }
            canvas.calls
        };
        assert_eq!(run(), run(), "rendering is deterministic");
    }

    #[test]
    fn test_empty_script_renders_nothing() {
        let geometry = make_geometry();
        let script = DocumentScript::new();
        assert!(script.is_empty());
        let mut canvas = RecordingCanvas::new();
        let mut cursor = Cursor::new(geometry);
        for block in script.blocks() {
            render_block(block, &mut cursor, &mut canvas).unwrap();
        }
        assert!(canvas.calls.is_empty());
        assert_eq!(canvas.page_count(), 1);
    }
}
