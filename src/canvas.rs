//! The drawing surface the layout engine talks to.
//!
//! The engine only needs two capabilities: measuring text ([TextMeasurer]) and placing
//! things on the current page ([Canvas]). [PdfCanvas] provides both on top of a
//! [Document], recording spans, shapes and link annotations page by page.

use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::{Font, FontFace, FontSpec};
use crate::info::Info;
use crate::layout::Margins;
use crate::page::{Page, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;
use crate::ResumeError;
use id_arena::Id;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

/// Measures the horizontal advance of text
pub trait TextMeasurer {
    fn text_width(&self, text: &str, font: FontSpec) -> Result<Pt, ResumeError>;
}

/// A page-oriented drawing surface. Coordinates are PDF points with the origin at the
/// bottom-left of the page; text is positioned by its baseline.
pub trait Canvas: TextMeasurer {
    /// Make `font` the font of subsequent [Canvas::draw_string] calls
    fn set_font(&mut self, font: FontSpec) -> Result<(), ResumeError>;

    /// Draw `text` with its baseline starting at (x, y)
    fn draw_string(&mut self, x: Pt, y: Pt, text: &str) -> Result<(), ResumeError>;

    /// Stroke a line segment in the stroke colour
    fn line(&mut self, from: (Pt, Pt), to: (Pt, Pt));

    /// Fill a rectangle in the fill colour
    fn fill_rect(&mut self, rect: Rect);

    /// Stroke a circle outline in the stroke colour
    fn circle(&mut self, centre: (Pt, Pt), radius: Pt);

    /// Make `rect` a clickable region that opens `url`
    fn link_url(&mut self, url: &str, rect: Rect);

    /// Colour used for text and filled shapes
    fn set_fill_colour(&mut self, colour: Colour);

    /// Colour used for lines and outlines
    fn set_stroke_colour(&mut self, colour: Colour);

    /// Finish the current page and start a blank one
    fn show_page(&mut self) -> Result<(), ResumeError>;
}

/// A [Canvas] that builds a PDF [Document]
pub struct PdfCanvas {
    document: Document,
    page_size: PageSize,
    margins: Margins,
    page: Page,
    faces: HashMap<FontFace, Id<Font>>,
    font: Option<SpanFont>,
    fill_colour: Colour,
    stroke_colour: Colour,
}

impl PdfCanvas {
    pub fn new(page_size: PageSize, margins: Margins) -> PdfCanvas {
        PdfCanvas {
            document: Document::default(),
            page_size,
            margins,
            page: Page::new(page_size, Some(margins)),
            faces: HashMap::new(),
            font: None,
            fill_colour: colours::BLACK,
            stroke_colour: colours::BLACK,
        }
    }

    /// Load a font file from disk and use it for `face`
    pub fn register_font<P: AsRef<Path>>(
        &mut self,
        face: FontFace,
        path: P,
    ) -> Result<Id<Font>, ResumeError> {
        let font = Font::load_from_path(path)?;
        Ok(self.add_font(face, font))
    }

    /// Use an already-parsed font for `face`
    pub fn add_font(&mut self, face: FontFace, font: Font) -> Id<Font> {
        let id = self.document.add_font(font);
        self.faces.insert(face, id);
        id
    }

    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    /// Number of pages so far, including the one being drawn on
    pub fn page_count(&self) -> usize {
        self.document.pages.len() + 1
    }

    fn font_for(&self, face: FontFace) -> Result<(Id<Font>, &Font), ResumeError> {
        let id = *self.faces.get(&face).ok_or(ResumeError::FontMissing(face))?;
        Ok((id, &self.document.fonts[id]))
    }

    /// Close the last page and write the whole document to `w`
    pub fn write<W: Write>(self, w: W) -> Result<(), ResumeError> {
        let PdfCanvas {
            mut document, page, ..
        } = self;
        document.add_page(page);
        document.write(w)
    }

    /// Close the last page and write the whole document to a file at `path`
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), ResumeError> {
        let path = path.as_ref();
        log::debug!("saving document to {}", path.display());
        let file = std::fs::File::create(path)?;
        self.write(std::io::BufWriter::new(file))
    }
}

impl TextMeasurer for PdfCanvas {
    fn text_width(&self, text: &str, font: FontSpec) -> Result<Pt, ResumeError> {
        let (_, f) = self.font_for(font.face)?;
        f.width_of_text(text, font.size)
    }
}

impl Canvas for PdfCanvas {
    fn set_font(&mut self, font: FontSpec) -> Result<(), ResumeError> {
        let (id, _) = self.font_for(font.face)?;
        self.font = Some(SpanFont {
            id,
            size: font.size,
        });
        Ok(())
    }

    fn draw_string(&mut self, x: Pt, y: Pt, text: &str) -> Result<(), ResumeError> {
        if text.is_empty() {
            return Ok(());
        }
        let font = self.font.ok_or(ResumeError::FontMissing(FontFace::Regular))?;
        self.page.add_span(SpanLayout {
            text: text.to_string(),
            font,
            colour: self.fill_colour,
            coords: (x, y),
        });
        Ok(())
    }

    fn line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        self.page.add_line(from, to, self.stroke_colour);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.page.add_filled_rect(rect, self.fill_colour);
    }

    fn circle(&mut self, centre: (Pt, Pt), radius: Pt) {
        self.page.add_circle(centre, radius, self.stroke_colour);
    }

    fn link_url(&mut self, url: &str, rect: Rect) {
        self.page.add_uri_link(rect, url);
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.fill_colour = colour;
    }

    fn set_stroke_colour(&mut self, colour: Colour) {
        self.stroke_colour = colour;
    }

    fn show_page(&mut self) -> Result<(), ResumeError> {
        let finished = std::mem::replace(
            &mut self.page,
            Page::new(self.page_size, Some(self.margins)),
        );
        let index = self.document.add_page(finished);
        log::trace!("finished page {}", index + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::LETTER;

    #[test]
    fn unregistered_faces_are_reported() {
        let canvas = PdfCanvas::new(LETTER, Margins::all(Pt(18.0)));
        let err = canvas
            .text_width("hi", FontSpec::new(Pt(12.0), true))
            .unwrap_err();
        assert!(matches!(err, ResumeError::FontMissing(FontFace::Bold)));
    }

    #[test]
    fn shapes_and_pages_are_recorded() {
        let mut canvas = PdfCanvas::new(LETTER, Margins::all(Pt(18.0)));
        canvas.set_fill_colour(Colour::from_hex(0xFFBD88));
        canvas.fill_rect(Rect::from_origin(Pt(0.0), Pt(0.0), Pt(10.0), Pt(10.0)));
        canvas.link_url("https://example.com", Rect::from_origin(Pt(0.0), Pt(0.0), Pt(5.0), Pt(5.0)));
        assert_eq!(canvas.page.contents.len(), 1);
        assert_eq!(canvas.page.links.len(), 1);

        canvas.show_page().unwrap();
        assert_eq!(canvas.page_count(), 2);
        assert!(canvas.page.contents.is_empty());
        assert_eq!(canvas.document.pages[0].links[0].uri, "https://example.com");
    }

    #[test]
    fn empty_document_still_writes_one_page() {
        let canvas = PdfCanvas::new(LETTER, Margins::all(Pt(18.0)));
        let mut out: Vec<u8> = Vec::new();
        canvas.write(&mut out).unwrap();
        assert!(out.starts_with(b"%PDF-"));
    }
}
