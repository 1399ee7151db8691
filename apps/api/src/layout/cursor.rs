//! Cursor & pagination tracker — the single owner of vertical position.
//!
//! One `Cursor` exists per render. Renderers never write its fields; they
//! reserve space with [`Cursor::ensure_space`] *before* drawing and move the
//! write position with [`Cursor::advance`] after. Space is reserved ahead of
//! drawing, never retroactively, which is what keeps a block's header and its
//! first body line on the same page.

use crate::layout::canvas::Canvas;
use crate::layout::error::LayoutError;
use crate::layout::geometry::PageGeometry;

/// Mutable render state: current vertical offset and page index.
#[derive(Debug)]
pub struct Cursor {
    y: f32,
    page_index: usize,
    geometry: PageGeometry,
}

impl Cursor {
    /// Starts at the top margin of page 0.
    pub fn new(geometry: PageGeometry) -> Self {
        Cursor {
            y: geometry.margins.top,
            page_index: 0,
            geometry,
        }
    }

    /// Current vertical write position (top-origin).
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Zero-based index of the page being written.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Vertical space left above the bottom margin.
    pub fn remaining_space(&self) -> f32 {
        self.geometry.max_y() - self.y
    }

    /// Reserves `required` points before any drawing for the pending block.
    ///
    /// Breaks the page (new canvas page, cursor reset to the top margin) when
    /// the remaining space is strictly smaller than `required` — an exact fit
    /// never breaks. Returns whether a break occurred. Idempotent: a second
    /// call with the same `required` and no draw in between is a no-op.
    pub fn ensure_space<C: Canvas>(
        &mut self,
        required: f32,
        canvas: &mut C,
    ) -> Result<bool, LayoutError> {
        if self.remaining_space() < required {
            canvas.new_page()?;
            self.y = self.geometry.margins.top;
            self.page_index += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Moves the cursor down by `delta` after a draw call.
    ///
    /// Saturates at the bottom margin so the cursor never leaves the content
    /// box; trailing inter-block gaps near the page end collapse instead of
    /// overflowing, and the next `ensure_space` breaks the page.
    pub fn advance(&mut self, delta: f32) {
        self.y = (self.y + delta).min(self.geometry.max_y());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::canvas::recording::RecordingCanvas;
    use crate::layout::geometry::Margins;

    fn make_geometry() -> PageGeometry {
        PageGeometry::new(600.0, 800.0, Margins::uniform(50.0)).unwrap()
    }

    #[test]
    fn test_cursor_starts_at_top_margin_of_page_zero() {
        let cursor = Cursor::new(make_geometry());
        assert_eq!(cursor.y(), 50.0);
        assert_eq!(cursor.page_index(), 0);
    }

    #[test]
    fn test_remaining_space_on_fresh_page_is_content_height() {
        let cursor = Cursor::new(make_geometry());
        // 800 − 50 (top) − 50 (bottom) = 700
        assert_eq!(cursor.remaining_space(), 700.0);
    }

    #[test]
    fn test_remaining_space_after_break_is_content_height() {
        let mut cursor = Cursor::new(make_geometry());
        let mut canvas = RecordingCanvas::new();
        cursor.advance(650.0);
        let broke = cursor.ensure_space(100.0, &mut canvas).unwrap();
        assert!(broke);
        assert_eq!(cursor.remaining_space(), 700.0);
        assert_eq!(cursor.y(), 50.0);
    }

    #[test]
    fn test_ensure_space_no_break_when_fits() {
        let mut cursor = Cursor::new(make_geometry());
        let mut canvas = RecordingCanvas::new();
        let broke = cursor.ensure_space(700.0, &mut canvas).unwrap();
        assert!(!broke, "content that exactly fills the page must not break");
        assert_eq!(canvas.page_count(), 1);
        assert_eq!(cursor.page_index(), 0);
    }

    #[test]
    fn test_ensure_space_exact_fit_tie_break() {
        let mut cursor = Cursor::new(make_geometry());
        let mut canvas = RecordingCanvas::new();
        cursor.advance(600.0);
        assert_eq!(cursor.remaining_space(), 100.0);
        // remaining == required: the block fits, no break
        assert!(!cursor.ensure_space(100.0, &mut canvas).unwrap());
        // one point more: break
        assert!(cursor.ensure_space(100.1, &mut canvas).unwrap());
        assert_eq!(cursor.page_index(), 1);
    }

    #[test]
    fn test_ensure_space_is_idempotent() {
        let mut cursor = Cursor::new(make_geometry());
        let mut canvas = RecordingCanvas::new();
        cursor.advance(680.0);
        assert!(cursor.ensure_space(100.0, &mut canvas).unwrap());
        // Second call with the same requirement and no draw in between:
        // the fresh page satisfies it, so no second break.
        assert!(!cursor.ensure_space(100.0, &mut canvas).unwrap());
        assert_eq!(canvas.page_count(), 2, "at most one page break");
    }

    #[test]
    fn test_advance_moves_cursor_down() {
        let mut cursor = Cursor::new(make_geometry());
        cursor.advance(120.5);
        assert_eq!(cursor.y(), 170.5);
    }

    #[test]
    fn test_advance_saturates_at_bottom_margin() {
        let mut cursor = Cursor::new(make_geometry());
        cursor.advance(10_000.0);
        assert_eq!(cursor.y(), 750.0, "cursor must never pass height − bottom margin");
        assert_eq!(cursor.remaining_space(), 0.0);
    }
}
