//! lopdf-backed implementation of the layout engine's `Canvas` trait.
//!
//! Pages are assembled incrementally: draw calls append operations to the
//! current page's content stream, `new_page` flushes it into the document,
//! and `finish` writes the page tree, catalog, and trailer before
//! serializing to an in-memory buffer. The two document fonts are registered
//! as Type1 base fonts with WinAnsiEncoding, matching the static metric
//! tables the engine measures with. Nothing time- or randomness-dependent is
//! written, so identical draw sequences serialize to identical bytes.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::io::Cursor;

use crate::layout::canvas::{Canvas, Color, TextStyle};
use crate::layout::error::LayoutError;
use crate::layout::fonts::{self, Font};
use crate::layout::geometry::PageGeometry;

const UNDERLINE_OFFSET: f32 = 1.5;
const UNDERLINE_THICKNESS: f32 = 0.5;

/// Maps a char to its WinAnsi byte. Latin-1 maps through unchanged; the
/// handful of punctuation codepoints WinAnsi places in 0x80..0x9F are
/// special-cased; everything else degrades to '?'.
fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en dash
            '\u{2014}' => 0x97, // em dash
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            c if (c as u32) < 0x100 => c as u8,
            _ => b'?',
        })
        .collect()
}

/// A PDF page surface built on `lopdf`.
pub struct PdfCanvas {
    doc: Document,
    geometry: PageGeometry,
    resources_id: ObjectId,
    pages_id: ObjectId,
    /// Operations accumulated for the page currently being written.
    ops: Vec<Operation>,
    /// Link annotations for the current page.
    annotations: Vec<ObjectId>,
    /// Flushed page object ids, in page order.
    page_ids: Vec<ObjectId>,
    page_count: usize,
}

impl PdfCanvas {
    pub fn new(geometry: PageGeometry) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let helvetica = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => Font::Helvetica.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        });
        let helvetica_bold = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => Font::HelveticaBold.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => helvetica,
                "F2" => helvetica_bold,
            },
        });

        PdfCanvas {
            doc,
            geometry,
            resources_id,
            pages_id,
            ops: Vec::new(),
            annotations: Vec::new(),
            page_ids: Vec::new(),
            page_count: 1,
        }
    }

    fn font_resource(font: Font) -> &'static str {
        match font {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    /// Converts a top-origin y to the PDF's bottom-origin coordinate space.
    fn pdf_y(&self, y: f32) -> f32 {
        self.geometry.height - y
    }

    fn push_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let bottom = self.pdf_y(y + h);
        self.ops.push(Operation::new(
            "rg",
            vec![color.r.into(), color.g.into(), color.b.into()],
        ));
        self.ops.push(Operation::new(
            "re",
            vec![x.into(), bottom.into(), w.into(), h.into()],
        ));
        self.ops.push(Operation::new("f", vec![]));
    }

    /// Finalizes the current page into a page object.
    fn flush_page(&mut self) -> Result<(), LayoutError> {
        let content = Content {
            operations: std::mem::take(&mut self.ops),
        };
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.encode()?));

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0_i64.into(),
                0_i64.into(),
                self.geometry.width.into(),
                self.geometry.height.into(),
            ],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let annotations = std::mem::take(&mut self.annotations);
        if !annotations.is_empty() {
            page_dict.set(
                "Annots",
                Object::Array(annotations.into_iter().map(Object::Reference).collect()),
            );
        }
        self.page_ids.push(self.doc.add_object(page_dict));
        Ok(())
    }
}

impl Canvas for PdfCanvas {
    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: &TextStyle,
    ) -> Result<(), LayoutError> {
        let baseline = self.pdf_y(y + style.size * fonts::ASCENDER_RATIO);
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![Self::font_resource(style.font).into(), style.size.into()],
        ));
        self.ops.push(Operation::new(
            "rg",
            vec![
                style.color.r.into(),
                style.color.g.into(),
                style.color.b.into(),
            ],
        ));
        self.ops
            .push(Operation::new("Td", vec![x.into(), baseline.into()]));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_winansi(text), StringFormat::Literal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));

        let width = self.measure_text(text, style);
        if style.underline {
            self.push_rect(
                x,
                y + style.size * fonts::ASCENDER_RATIO + UNDERLINE_OFFSET,
                width,
                UNDERLINE_THICKNESS,
                style.color,
            );
        }
        if let Some(url) = &style.link {
            let top = self.pdf_y(y);
            let bottom = self.pdf_y(y + fonts::line_height(style.size));
            let annotation = self.doc.add_object(dictionary! {
                "Type" => "Annot",
                "Subtype" => "Link",
                "Rect" => vec![x.into(), bottom.into(), (x + width).into(), top.into()],
                "Border" => vec![0_i64.into(), 0_i64.into(), 0_i64.into()],
                "A" => dictionary! {
                    "Type" => "Action",
                    "S" => "URI",
                    "URI" => Object::String(url.clone().into_bytes(), StringFormat::Literal),
                },
            });
            self.annotations.push(annotation);
        }
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    ) -> Result<(), LayoutError> {
        self.push_rect(x, y, w, h, color);
        Ok(())
    }

    fn new_page(&mut self) -> Result<(), LayoutError> {
        self.flush_page()?;
        self.page_count += 1;
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.page_count
    }

    fn finish(mut self) -> Result<Vec<u8>, LayoutError> {
        self.flush_page()?;

        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|&id| Object::Reference(id))
            .collect();
        let count = self.page_ids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut buffer = Cursor::new(Vec::new());
        self.doc.save_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::geometry::Margins;

    fn make_geometry() -> PageGeometry {
        PageGeometry::new(600.0, 800.0, Margins::uniform(50.0)).unwrap()
    }

    fn make_canvas() -> PdfCanvas {
        PdfCanvas::new(make_geometry())
    }

    #[test]
    fn test_empty_canvas_finishes_as_single_page_pdf() {
        let bytes = make_canvas().finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output must carry the PDF magic");
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_new_page_adds_a_page_to_the_document() {
        let mut canvas = make_canvas();
        canvas.new_page().unwrap();
        assert_eq!(canvas.page_count(), 2);
        let bytes = canvas.finish().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_drawn_text_lands_in_page_content() {
        let mut canvas = make_canvas();
        let style = TextStyle::plain(Font::Helvetica, 10.5);
        canvas.draw_text("Hello", 50.0, 50.0, &style).unwrap();
        let bytes = canvas.finish().unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let content = doc.get_page_content(page_id).unwrap();
        let content_str = String::from_utf8_lossy(&content);
        assert!(content_str.contains("Hello"), "content stream should carry the text");
        assert!(content_str.contains("F1"), "regular text uses the F1 font resource");
    }

    #[test]
    fn test_link_text_records_uri_annotation_on_its_page() {
        let mut canvas = make_canvas();
        let style = TextStyle::linked(Font::Helvetica, 10.5, "https://example.com");
        canvas.draw_text("example.com", 50.0, 50.0, &style).unwrap();
        let bytes = canvas.finish().unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
        let annots = page.get(b"Annots").unwrap().as_array().unwrap();
        assert_eq!(annots.len(), 1);

        let annot = doc
            .get_object(annots[0].as_reference().unwrap())
            .unwrap()
            .as_dict()
            .unwrap();
        assert_eq!(annot.get(b"Subtype").unwrap().as_name().unwrap(), b"Link".as_slice());
        let action = annot.get(b"A").unwrap().as_dict().unwrap();
        match action.get(b"URI").unwrap() {
            Object::String(uri, _) => assert_eq!(uri.as_slice(), b"https://example.com"),
            other => panic!("URI should be a string, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_text_has_no_annotations() {
        let mut canvas = make_canvas();
        let style = TextStyle::plain(Font::Helvetica, 10.5);
        canvas.draw_text("plain", 50.0, 50.0, &style).unwrap();
        let bytes = canvas.finish().unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
        assert!(page.get(b"Annots").is_err(), "no Annots entry expected");
    }

    #[test]
    fn test_identical_draw_sequences_serialize_identically() {
        let render = || {
            let mut canvas = make_canvas();
            let style = TextStyle::plain(Font::HelveticaBold, 12.0);
            canvas.fill_rect(50.0, 50.0, 500.0, 22.0, Color::HEADER_FILL).unwrap();
            canvas.draw_text("Skills", 55.0, 56.0, &style).unwrap();
            canvas.new_page().unwrap();
            canvas.draw_text("More", 50.0, 50.0, &style).unwrap();
            canvas.finish().unwrap()
        };
        assert_eq!(render(), render(), "output must be byte-identical");
    }

    #[test]
    fn test_winansi_maps_bullet_and_fallback() {
        assert_eq!(to_winansi("\u{2022} A"), vec![0x95, b' ', b'A']);
        assert_eq!(to_winansi("天"), vec![b'?']);
        assert_eq!(to_winansi("café"), vec![b'c', b'a', b'f', 0xE9]);
    }
}
