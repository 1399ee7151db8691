//! Content blocks and their renderers.
//!
//! `ContentBlock` is a closed sum type: the script runner dispatches with an
//! exhaustive `match`, so adding a block type is a compile-time-checked
//! change and an unrecognized block cannot exist at runtime.
//!
//! Each renderer is a function of (block data, cursor, canvas). It reserves
//! its keep-together minimum through the cursor *before* the first draw
//! call, draws, then advances. Renderers never read each other's state; the
//! cursor is the only shared coordination point.

use serde::{Deserialize, Serialize};

use crate::layout::canvas::{Canvas, Color, TextStyle};
use crate::layout::cursor::Cursor;
use crate::layout::error::LayoutError;
use crate::layout::fonts::{self, Font};

// ────────────────────────────────────────────────────────────────────────────
// Block types
// ────────────────────────────────────────────────────────────────────────────

/// One labeled contact line, optionally hyperlinked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactField {
    pub label: String,
    pub value: String,
    pub link: Option<String>,
}

impl ContactField {
    pub fn plain(label: impl Into<String>, value: impl Into<String>) -> Self {
        ContactField {
            label: label.into(),
            value: value.into(),
            link: None,
        }
    }

    pub fn linked(
        label: impl Into<String>,
        value: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        ContactField {
            label: label.into(),
            value: value.into(),
            link: Some(url.into()),
        }
    }
}

/// One bullet list item, optionally hyperlinked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletItem {
    pub text: String,
    pub link: Option<String>,
}

impl BulletItem {
    pub fn plain(text: impl Into<String>) -> Self {
        BulletItem {
            text: text.into(),
            link: None,
        }
    }

    pub fn linked(text: impl Into<String>, url: impl Into<String>) -> Self {
        BulletItem {
            text: text.into(),
            link: Some(url.into()),
        }
    }
}

/// One discrete content unit of the document script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentBlock {
    /// Centered document title line (bold 18pt).
    NameHeader { name: String },
    /// Filled background box with a bold section title.
    SectionHeader { title: String },
    /// Wrapped body text.
    Paragraph { text: String },
    /// Labeled fields at a fixed indent, one per line.
    ContactInfo { fields: Vec<ContactField> },
    /// Bulleted items with hanging indent.
    BulletList { items: Vec<BulletItem> },
    /// Bold heading line followed by a bullet list.
    ExperienceEntry {
        title: String,
        organization: String,
        duration: String,
        bullets: Vec<BulletItem>,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Style constants
// ────────────────────────────────────────────────────────────────────────────

const NAME_SIZE: f32 = 18.0;
const NAME_TRAILING_GAP: f32 = 25.0;

pub(crate) const HEADER_BOX_HEIGHT: f32 = 22.0;
const HEADER_TITLE_SIZE: f32 = 12.0;
const HEADER_TITLE_INSET_X: f32 = 5.0;
const HEADER_TITLE_INSET_Y: f32 = 6.0;
const HEADER_TRAILING_GAP: f32 = 12.0;

const BODY_SIZE: f32 = 10.5;
const PARAGRAPH_LINE_GAP: f32 = 3.0;
const PARAGRAPH_TRAILING_GAP: f32 = 8.0;

const CONTACT_INDENT: f32 = 5.0;
const CONTACT_LINE_GAP: f32 = 4.0;
const CONTACT_TRAILING_GAP: f32 = 8.0;

const BULLET_GLYPH: &str = "\u{2022} ";
const BULLET_TEXT_PAD: f32 = 4.0;
const BULLET_LINE_GAP: f32 = 2.0;
const BULLET_ITEM_GAP: f32 = 2.0;
const LIST_TRAILING_GAP: f32 = 6.0;

const EXPERIENCE_HEADING_SIZE: f32 = 10.8;
const EXPERIENCE_HEADING_GAP: f32 = 3.0;

fn body_style() -> TextStyle {
    TextStyle::plain(Font::Helvetica, BODY_SIZE)
}

/// Body-size line plus the paragraph inter-line gap — the unit a following
/// block's first text line occupies.
fn body_line_advance() -> f32 {
    fonts::line_height(BODY_SIZE) + PARAGRAPH_LINE_GAP
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

/// Renders one block: reserve space, draw, advance the cursor.
pub fn render_block<C: Canvas>(
    block: &ContentBlock,
    cursor: &mut Cursor,
    canvas: &mut C,
) -> Result<(), LayoutError> {
    match block {
        ContentBlock::NameHeader { name } => render_name_header(name, cursor, canvas),
        ContentBlock::SectionHeader { title } => render_section_header(title, cursor, canvas),
        ContentBlock::Paragraph { text } => render_paragraph(text, cursor, canvas),
        ContentBlock::ContactInfo { fields } => render_contact_info(fields, cursor, canvas),
        ContentBlock::BulletList { items } => render_bullet_list(items, cursor, canvas),
        ContentBlock::ExperienceEntry {
            title,
            organization,
            duration,
            bullets,
        } => render_experience(title, organization, duration, bullets, cursor, canvas),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderers
// ────────────────────────────────────────────────────────────────────────────

fn render_name_header<C: Canvas>(
    name: &str,
    cursor: &mut Cursor,
    canvas: &mut C,
) -> Result<(), LayoutError> {
    let style = TextStyle::plain(Font::HelveticaBold, NAME_SIZE);
    let left = cursor.geometry().margins.left;
    let content_width = cursor.geometry().content_width();
    let advance = fonts::line_height(NAME_SIZE);

    cursor.ensure_space(advance, canvas)?;
    let text_width = canvas.measure_text(name, &style);
    let x = left + ((content_width - text_width) / 2.0).max(0.0);
    canvas.draw_text(name, x, cursor.y(), &style)?;
    cursor.advance(advance + NAME_TRAILING_GAP);
    Ok(())
}

fn render_section_header<C: Canvas>(
    title: &str,
    cursor: &mut Cursor,
    canvas: &mut C,
) -> Result<(), LayoutError> {
    let left = cursor.geometry().margins.left;
    let content_width = cursor.geometry().content_width();

    // Keep-together minimum: the box, its trailing gap, and one line of the
    // following body text must land on the same page.
    let required = HEADER_BOX_HEIGHT + HEADER_TRAILING_GAP + body_line_advance();
    cursor.ensure_space(required, canvas)?;

    canvas.fill_rect(
        left,
        cursor.y(),
        content_width,
        HEADER_BOX_HEIGHT,
        Color::HEADER_FILL,
    )?;
    canvas.draw_text(
        title,
        left + HEADER_TITLE_INSET_X,
        cursor.y() + HEADER_TITLE_INSET_Y,
        &TextStyle::plain(Font::HelveticaBold, HEADER_TITLE_SIZE),
    )?;
    cursor.advance(HEADER_BOX_HEIGHT + HEADER_TRAILING_GAP);
    Ok(())
}

fn render_paragraph<C: Canvas>(
    text: &str,
    cursor: &mut Cursor,
    canvas: &mut C,
) -> Result<(), LayoutError> {
    let style = body_style();
    let left = cursor.geometry().margins.left;
    let content_width = cursor.geometry().content_width();
    let content_height = cursor.geometry().content_height();
    let advance = body_line_advance();

    // A paragraph that fits on one page is reserved atomically and stays
    // whole; a paragraph taller than a full page flows line by line across
    // page boundaries instead (never truncated, never an error).
    let wrapped_height =
        canvas.measure_wrapped_height(text, content_width, &style, PARAGRAPH_LINE_GAP);
    if wrapped_height <= content_height {
        cursor.ensure_space(wrapped_height, canvas)?;
    }

    for line in canvas.wrap_text(text, content_width, &style) {
        cursor.ensure_space(advance, canvas)?;
        canvas.draw_text(&line, left, cursor.y(), &style)?;
        cursor.advance(advance);
    }
    cursor.advance(PARAGRAPH_TRAILING_GAP);
    Ok(())
}

fn render_contact_info<C: Canvas>(
    fields: &[ContactField],
    cursor: &mut Cursor,
    canvas: &mut C,
) -> Result<(), LayoutError> {
    let label_style = body_style();
    let x = cursor.geometry().margins.left + CONTACT_INDENT;
    // Fixed per-line advance: link and plain fields keep an identical
    // baseline rhythm regardless of styling.
    let advance = fonts::line_height(BODY_SIZE) + CONTACT_LINE_GAP;

    for field in fields {
        cursor.ensure_space(advance, canvas)?;
        let label = format!("{}: ", field.label);
        canvas.draw_text(&label, x, cursor.y(), &label_style)?;

        let value_style = match &field.link {
            Some(url) => TextStyle::linked(Font::Helvetica, BODY_SIZE, url.clone()),
            None => body_style(),
        };
        let label_width = canvas.measure_text(&label, &label_style);
        canvas.draw_text(&field.value, x + label_width, cursor.y(), &value_style)?;
        cursor.advance(advance);
    }
    cursor.advance(CONTACT_TRAILING_GAP);
    Ok(())
}

fn render_bullet_list<C: Canvas>(
    items: &[BulletItem],
    cursor: &mut Cursor,
    canvas: &mut C,
) -> Result<(), LayoutError> {
    render_bullet_items(items, cursor, canvas)?;
    cursor.advance(LIST_TRAILING_GAP);
    Ok(())
}

/// Shared by `BulletList` and `ExperienceEntry`. Each item reserves one line
/// so the glyph and the first text line stay together; continuation lines
/// flow and may cross a page boundary.
fn render_bullet_items<C: Canvas>(
    items: &[BulletItem],
    cursor: &mut Cursor,
    canvas: &mut C,
) -> Result<(), LayoutError> {
    let glyph_style = body_style();
    let left = cursor.geometry().margins.left;
    let content_width = cursor.geometry().content_width();
    let indent = canvas.measure_text(BULLET_GLYPH, &glyph_style) + BULLET_TEXT_PAD;
    let text_width = content_width - indent;
    let advance = fonts::line_height(BODY_SIZE) + BULLET_LINE_GAP;

    for item in items {
        let item_style = match &item.link {
            Some(url) => TextStyle::linked(Font::Helvetica, BODY_SIZE, url.clone()),
            None => body_style(),
        };
        let lines = canvas.wrap_text(&item.text, text_width, &item_style);

        cursor.ensure_space(advance, canvas)?;
        canvas.draw_text(BULLET_GLYPH, left, cursor.y(), &glyph_style)?;
        if lines.is_empty() {
            cursor.advance(advance);
        }
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                cursor.ensure_space(advance, canvas)?;
            }
            canvas.draw_text(line, left + indent, cursor.y(), &item_style)?;
            cursor.advance(advance);
        }
        cursor.advance(BULLET_ITEM_GAP);
    }
    Ok(())
}

fn render_experience<C: Canvas>(
    title: &str,
    organization: &str,
    duration: &str,
    bullets: &[BulletItem],
    cursor: &mut Cursor,
    canvas: &mut C,
) -> Result<(), LayoutError> {
    let style = TextStyle::plain(Font::HelveticaBold, EXPERIENCE_HEADING_SIZE);
    let left = cursor.geometry().margins.left;
    let advance = fonts::line_height(EXPERIENCE_HEADING_SIZE);

    // Only the heading line is protected from a page split; the bullets
    // below are an independent child render and flow on their own.
    cursor.ensure_space(advance, canvas)?;
    let heading = format!("{title} | {organization} | {duration}");
    canvas.draw_text(&heading, left, cursor.y(), &style)?;
    cursor.advance(advance + EXPERIENCE_HEADING_GAP);

    render_bullet_list(bullets, cursor, canvas)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
