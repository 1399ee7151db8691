//! Canvas abstraction — the drawing capability the layout engine consumes.
//!
//! The engine issues measured text, rect fill, and page-creation calls
//! against this trait and never touches the PDF object model directly.
//! `render::PdfCanvas` is the production implementation; tests use the
//! recording double below. Measurement and wrapping have default
//! implementations backed by the static metric tables in [`fonts`], so every
//! backend measures identically and renders deterministically.

use serde::{Deserialize, Serialize};

use crate::layout::error::LayoutError;
use crate::layout::fonts::{self, Font};

// ────────────────────────────────────────────────────────────────────────────
// Styles
// ────────────────────────────────────────────────────────────────────────────

/// An RGB color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Hyperlink blue.
    pub const LINK_BLUE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };

    /// Section header background (#e6f0ff).
    pub const HEADER_FILL: Color = Color {
        r: 230.0 / 255.0,
        g: 240.0 / 255.0,
        b: 1.0,
    };
}

/// Everything needed to draw one run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub color: Color,
    /// Navigable target; link runs also render underlined in [`Color::LINK_BLUE`].
    pub link: Option<String>,
    pub underline: bool,
}

impl TextStyle {
    /// Plain black text in the given font and size.
    pub fn plain(font: Font, size: f32) -> Self {
        TextStyle {
            font,
            size,
            color: Color::BLACK,
            link: None,
            underline: false,
        }
    }

    /// Hyperlink styling: blue, underlined, carrying the target URI.
    pub fn linked(font: Font, size: f32, url: impl Into<String>) -> Self {
        TextStyle {
            font,
            size,
            color: Color::LINK_BLUE,
            link: Some(url.into()),
            underline: true,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Canvas trait
// ────────────────────────────────────────────────────────────────────────────

/// A page surface the layout engine draws on.
///
/// Coordinates are top-origin: `y` grows downward from the top of the page
/// and denotes the top of a text line or rect. Backends convert to their own
/// coordinate space. All drawing appends to the current page in call order;
/// `new_page` finalizes it and opens a fresh one.
pub trait Canvas {
    /// Width of `text` in points.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        style.font.metrics().measure(text, style.size)
    }

    /// Greedy word-wrap of `text` into lines no wider than `width`.
    fn wrap_text(&self, text: &str, width: f32, style: &TextStyle) -> Vec<String> {
        style.font.metrics().wrap(text, width, style.size)
    }

    /// Vertical space consumed by drawing `text` wrapped to `width`, with
    /// `line_gap` added after every line (matching how renderers advance).
    fn measure_wrapped_height(
        &self,
        text: &str,
        width: f32,
        style: &TextStyle,
        line_gap: f32,
    ) -> f32 {
        let lines = self.wrap_text(text, width, style).len() as f32;
        lines * (fonts::line_height(style.size) + line_gap)
    }

    /// Draws a single pre-wrapped line with its top edge at `y`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle)
        -> Result<(), LayoutError>;

    /// Fills a rect whose top-left corner is at `(x, y)`.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color)
        -> Result<(), LayoutError>;

    /// Finalizes the current page and opens a new empty one.
    fn new_page(&mut self) -> Result<(), LayoutError>;

    /// Number of pages created so far, including the current one.
    fn page_count(&self) -> usize;

    /// Finalizes the document and flushes the completed byte stream.
    fn finish(self) -> Result<Vec<u8>, LayoutError>
    where
        Self: Sized;
}

// ────────────────────────────────────────────────────────────────────────────
// Recording double (tests only)
// ────────────────────────────────────────────────────────────────────────────


// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
