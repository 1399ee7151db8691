//! Page geometry — immutable per-document dimensions and margins.
//!
//! The content box is `width − left − right` wide and `height − top − bottom`
//! tall, constant for the document's lifetime. Degenerate geometry is rejected
//! at construction, never clamped.

use serde::{Deserialize, Serialize};

use crate::layout::error::LayoutError;

/// US letter page dimensions in points.
pub const LETTER_WIDTH: f32 = 612.0;
pub const LETTER_HEIGHT: f32 = 792.0;

/// The four page margins, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Margins {
    /// Same margin on all four sides.
    pub fn uniform(value: f32) -> Self {
        Margins {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}

/// Immutable page dimensions for one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PageGeometry {
    /// Validates and constructs a page geometry.
    ///
    /// Rejects non-positive page dimensions, negative margins, and margins
    /// that leave no usable content width or height.
    pub fn new(width: f32, height: f32, margins: Margins) -> Result<Self, LayoutError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::Geometry(format!(
                "page dimensions must be positive, got {width}x{height}"
            )));
        }
        if margins.top < 0.0 || margins.bottom < 0.0 || margins.left < 0.0 || margins.right < 0.0 {
            return Err(LayoutError::Geometry("margins must be non-negative".into()));
        }
        let geometry = PageGeometry {
            width,
            height,
            margins,
        };
        if geometry.content_width() <= 0.0 {
            return Err(LayoutError::Geometry(format!(
                "horizontal margins ({} + {}) leave no content width on a {width}pt page",
                margins.left, margins.right
            )));
        }
        if geometry.content_height() <= 0.0 {
            return Err(LayoutError::Geometry(format!(
                "vertical margins ({} + {}) leave no content height on a {height}pt page",
                margins.top, margins.bottom
            )));
        }
        Ok(geometry)
    }

    /// US letter with the 50pt margins the service renders at.
    pub fn letter() -> Self {
        PageGeometry {
            width: LETTER_WIDTH,
            height: LETTER_HEIGHT,
            margins: Margins::uniform(50.0),
        }
    }

    /// Usable text width between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }

    /// Usable height between the top and bottom margins.
    pub fn content_height(&self) -> f32 {
        self.height - self.margins.top - self.margins.bottom
    }

    /// The lowest y the cursor may reach (top-origin coordinates).
    pub fn max_y(&self) -> f32 {
        self.height - self.margins.bottom
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
