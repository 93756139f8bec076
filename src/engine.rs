//! The cursor and pagination engine.
//!
//! [PageEngine] keeps a vertical write position on the current page and places wrapped
//! text line by line, starting a new page whenever the next line would cross the
//! bottom margin. Its page geometry (page width and margins) can be overridden for a
//! scope with [PageEngine::scoped]; the returned [GeometryGuard] puts the previous
//! geometry back when it is dropped, whichever way the scope is left.

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::config::LayoutConfig;
use crate::font::FontSpec;
use crate::layout::{line_height, wrap, Margins, PhysicalLine, Token, Wrapped, LINE_GAP};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;
use crate::ResumeError;
use std::ops::{Deref, DerefMut};

/// Default size of body text
pub const BODY_SIZE: Pt = Pt(12.0);

/// The horizontal frame content is laid out in
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geometry {
    pub page_width: Pt,
    pub page_height: Pt,
    pub margins: Margins,
}

impl Geometry {
    pub fn usable_width(&self) -> Pt {
        self.margins.usable_width(self.page_width)
    }

    /// Where the cursor sits on a fresh page
    pub fn top(&self) -> Pt {
        self.page_height - self.margins.top
    }

    /// The x coordinate of the right edge of the frame
    pub fn right_edge(&self) -> Pt {
        self.page_width - self.margins.right
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Align {
    Left,
    Center,
    Right,
}

/// A saved cursor position, see [PageEngine::mark]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mark {
    page: usize,
    pos: Pt,
}

pub struct PageEngine<C: Canvas> {
    canvas: C,
    geometry: Geometry,
    pos: Pt,
    font: Option<FontSpec>,
    page: usize,
    body_size: Pt,
}

impl<C: Canvas> PageEngine<C> {
    pub fn new(canvas: C, page_size: PageSize, margins: Margins) -> PageEngine<C> {
        let geometry = Geometry {
            page_width: page_size.0,
            page_height: page_size.1,
            margins,
        };
        PageEngine {
            canvas,
            pos: geometry.top(),
            geometry,
            font: None,
            page: 0,
            body_size: BODY_SIZE,
        }
    }

    /// An engine laid out as `config` describes
    pub fn with_config(canvas: C, config: &LayoutConfig) -> PageEngine<C> {
        let mut engine = PageEngine::new(canvas, config.page_size, config.margins);
        engine.body_size = config.body_size;
        engine
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Give the canvas back, e.g. to save it
    pub fn finish(self) -> C {
        self.canvas
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Size of [PageEngine::body] text
    pub fn body_size(&self) -> Pt {
        self.body_size
    }

    /// The current baseline
    pub fn position(&self) -> Pt {
        self.pos
    }

    pub fn set_position(&mut self, pos: Pt) {
        self.pos = pos;
    }

    /// Move the cursor down by `by` without drawing anything
    pub fn advance(&mut self, by: Pt) {
        self.pos -= by;
    }

    /// 0-based index of the page being drawn on
    pub fn page_index(&self) -> usize {
        self.page
    }

    /// Space left between the cursor and the bottom margin
    pub fn remaining(&self) -> Pt {
        self.pos - self.geometry.margins.bottom
    }

    /// Start a new page when `height > position - bottom margin`. Returns whether a
    /// page break happened.
    ///
    /// The one exception is a cursor still at the top of a page: content taller than
    /// a whole page can't be helped by breaking, so it is drawn where it is and runs
    /// over the bottom margin onto the following pages. That overflow is accepted
    /// layout behaviour, not an error.
    pub fn ensure_space(&mut self, height: Pt) -> Result<bool, ResumeError> {
        if height > self.remaining() && self.pos < self.geometry.top() {
            self.new_page()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn set_font(&mut self, font: FontSpec) -> Result<(), ResumeError> {
        if self.font == Some(font) {
            return Ok(());
        }
        log::trace!("font -> {:?} {}pt", font.face, font.size);
        self.canvas.set_font(font)?;
        self.font = Some(font);
        Ok(())
    }

    pub fn new_page(&mut self) -> Result<(), ResumeError> {
        self.canvas.show_page()?;
        if let Some(font) = self.font {
            self.canvas.set_font(font)?;
        }
        self.page += 1;
        self.pos = self.geometry.top();
        log::trace!("page break, now on page {}", self.page + 1);
        Ok(())
    }

    /// Wrap `text` to the current usable width
    pub fn wrap(&self, text: &str, font: FontSpec) -> Result<Wrapped, ResumeError> {
        wrap(&self.canvas, text, font, self.geometry.usable_width())
    }

    pub fn draw_left(
        &mut self,
        text: &str,
        size: Pt,
        bold: bool,
        underline: bool,
    ) -> Result<(), ResumeError> {
        self.draw_aligned(text, FontSpec::new(size, bold), underline, Align::Left)
    }

    pub fn draw_centered(&mut self, text: &str, size: Pt, bold: bool) -> Result<(), ResumeError> {
        self.draw_aligned(text, FontSpec::new(size, bold), false, Align::Center)
    }

    pub fn draw_right(&mut self, text: &str, size: Pt, bold: bool) -> Result<(), ResumeError> {
        self.draw_aligned(text, FontSpec::new(size, bold), false, Align::Right)
    }

    /// Left-aligned body text
    pub fn body(&mut self, text: &str) -> Result<(), ResumeError> {
        self.draw_left(text, self.body_size, false, false)
    }

    /// One empty body line
    pub fn spacer(&mut self) -> Result<(), ResumeError> {
        self.body("")
    }

    fn draw_aligned(
        &mut self,
        text: &str,
        font: FontSpec,
        underline: bool,
        align: Align,
    ) -> Result<(), ResumeError> {
        self.set_font(font)?;
        let wrapped = self.wrap(text, font)?;
        let height = line_height(font.size);

        for line in wrapped.lines.iter() {
            if self.ensure_space(height)? && line.is_empty() {
                // a blank line would only push the first content of a new page down
                continue;
            }

            let x = match align {
                Align::Left => self.geometry.margins.left,
                Align::Center => {
                    let centre = (self.geometry.margins.left + self.geometry.right_edge()) / 2.0;
                    centre - line.width(&self.canvas, font)? / 2.0
                }
                Align::Right => self.geometry.right_edge() - line.width(&self.canvas, font)?,
            };
            self.draw_line(line, x, font, underline)?;
            self.pos -= height;
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        line: &PhysicalLine,
        x: Pt,
        font: FontSpec,
        underline: bool,
    ) -> Result<(), ResumeError> {
        if !line.is_empty() {
            log::debug!("page {} @ {}: {}", self.page + 1, self.pos, line.text());
        }
        let mut x = x;
        let y = self.pos;
        for token in line.tokens.iter() {
            x += self.draw_token(token, x, y, font, underline)?;
        }
        Ok(())
    }

    /// Draw one token with its baseline at (x, y) and return its width. Links are
    /// underlined and made clickable.
    fn draw_token(
        &mut self,
        token: &Token,
        x: Pt,
        y: Pt,
        font: FontSpec,
        underline: bool,
    ) -> Result<Pt, ResumeError> {
        if token.text.is_empty() {
            return Ok(Pt(0.0));
        }
        let width = self.canvas.text_width(&token.text, font)?;
        self.canvas.draw_string(x, y, &token.text)?;

        let rule_y = y - LINE_GAP;
        if underline || token.url().is_some() {
            self.canvas.line((x, rule_y), (x + width, rule_y));
        }
        if let Some(url) = token.url() {
            self.canvas.link_url(
                url,
                Rect {
                    x1: x,
                    y1: rule_y,
                    x2: x + width,
                    y2: y + font.size,
                },
            );
        }
        Ok(width)
    }

    /// Draw one row of a table. Each cell is wrapped to its column width and drawn
    /// left-aligned at `left margin + widths of the columns before it`. A row is never
    /// split across pages: if the tallest cell doesn't fit, the page breaks first.
    /// Columns beyond the shortest of the four slices are ignored.
    pub fn draw_table_row(
        &mut self,
        cells: &[&str],
        widths: &[Pt],
        sizes: &[Pt],
        bold: &[bool],
    ) -> Result<(), ResumeError> {
        let mut columns: Vec<(Pt, FontSpec, Wrapped)> = Vec::with_capacity(cells.len());
        for (((cell, &width), &size), &bold) in cells.iter().zip(widths).zip(sizes).zip(bold) {
            let font = FontSpec::new(size, bold);
            columns.push((width, font, wrap(&self.canvas, cell, font, width)?));
        }

        let row_height = columns
            .iter()
            .map(|(_, _, cell)| cell.height)
            .fold(Pt(0.0), Pt::max);
        self.ensure_space(row_height)?;

        let mut x = self.geometry.margins.left;
        for (width, font, cell) in columns.iter() {
            self.set_font(*font)?;
            let mut y = self.pos;
            for line in cell.lines.iter() {
                if !line.is_empty() {
                    log::debug!("page {} @ {}: {}", self.page + 1, y, line.text());
                }
                let mut tx = x;
                for token in line.tokens.iter() {
                    tx += self.draw_token(token, tx, y, *font, false)?;
                }
                y -= line_height(font.size);
            }
            x += *width;
        }

        self.pos -= row_height;
        Ok(())
    }

    /// Draw a single glyph in a font outside of the regular/bold pair (an icon) on the
    /// current line, without moving the cursor
    pub fn draw_glyph(&mut self, x: Pt, glyph: &str, font: FontSpec) -> Result<(), ResumeError> {
        self.canvas.set_font(font)?;
        self.canvas.draw_string(x, self.pos, glyph)?;
        // the canvas font no longer matches, so the next set_font must commit
        self.font = None;
        Ok(())
    }

    /// Remember the cursor so a following draw can share the current line
    pub fn mark(&self) -> Mark {
        Mark {
            page: self.page,
            pos: self.pos,
        }
    }

    /// Move the cursor back to `mark`. If a page break happened since, the cursor goes
    /// to the top of the current page instead, which is where the marked line ended up.
    pub fn restore(&mut self, mark: Mark) {
        self.pos = if mark.page == self.page {
            mark.pos
        } else {
            self.geometry.top()
        };
    }

    /// Temporarily change the page geometry. The previous geometry is restored when the
    /// returned guard is dropped.
    pub fn scoped<F>(&mut self, change: F) -> GeometryGuard<'_, C>
    where
        F: FnOnce(&mut Geometry),
    {
        let saved = self.geometry;
        change(&mut self.geometry);
        GeometryGuard {
            engine: self,
            saved,
        }
    }

    /// Temporarily move the left margin right by `by`, keeping the right edge in place
    pub fn indent(&mut self, by: Pt) -> GeometryGuard<'_, C> {
        self.scoped(|geometry| geometry.margins.left += by)
    }

    /// Move the left margin right by `by` for the rest of the document
    pub fn shift_left_margin(&mut self, by: Pt) {
        self.geometry.margins.left += by;
    }

    pub fn line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        self.canvas.line(from, to);
    }

    pub fn fill_rect(&mut self, rect: Rect) {
        self.canvas.fill_rect(rect);
    }

    pub fn circle(&mut self, centre: (Pt, Pt), radius: Pt) {
        self.canvas.circle(centre, radius);
    }

    pub fn set_fill_colour(&mut self, colour: Colour) {
        self.canvas.set_fill_colour(colour);
    }

    pub fn set_stroke_colour(&mut self, colour: Colour) {
        self.canvas.set_stroke_colour(colour);
    }
}

/// Restores a [PageEngine]'s geometry when dropped. Derefs to the engine so drawing
/// continues through the guard.
pub struct GeometryGuard<'e, C: Canvas> {
    engine: &'e mut PageEngine<C>,
    saved: Geometry,
}

impl<C: Canvas> Deref for GeometryGuard<'_, C> {
    type Target = PageEngine<C>;

    fn deref(&self) -> &PageEngine<C> {
        self.engine
    }
}

impl<C: Canvas> DerefMut for GeometryGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut PageEngine<C> {
        self.engine
    }
}

impl<C: Canvas> Drop for GeometryGuard<'_, C> {
    fn drop(&mut self) {
        self.engine.geometry = self.saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, RecordingCanvas};

    // 200 x 100 page, 10pt margins all round: cursor starts at 90, bottom at 10
    fn engine() -> PageEngine<RecordingCanvas> {
        PageEngine::new(
            RecordingCanvas::default(),
            (Pt(200.0), Pt(100.0)),
            Margins::all(Pt(10.0)),
        )
    }

    #[test]
    fn lines_advance_by_size_plus_gap() {
        let mut e = engine();
        e.body("hello").unwrap();
        assert_eq!(e.position(), Pt(76.0));
        e.draw_left("big", Pt(16.0), true, false).unwrap();
        assert_eq!(e.position(), Pt(58.0));
        assert_eq!(e.canvas().texts(), vec!["hello", "big"]);
    }

    #[test]
    fn body_size_comes_from_the_config() {
        let config = LayoutConfig {
            page_size: (Pt(200.0), Pt(100.0)),
            margins: Margins::all(Pt(10.0)),
            body_size: Pt(10.0),
        };
        let mut e = PageEngine::with_config(RecordingCanvas::default(), &config);
        e.body("small").unwrap();
        assert_eq!(e.position(), Pt(78.0));
    }

    #[test]
    fn repeated_fonts_are_not_recommitted() {
        let mut e = engine();
        e.body("a").unwrap();
        e.body("b").unwrap();
        e.draw_left("c", BODY_SIZE, true, false).unwrap();
        let font_calls = e
            .canvas()
            .calls
            .iter()
            .filter(|call| matches!(call, DrawCall::SetFont(_)))
            .count();
        assert_eq!(font_calls, 2);
    }

    #[test]
    fn page_breaks_exactly_when_the_line_does_not_fit() {
        // line height 14 with 14pt left: fits
        let mut e = engine();
        e.set_position(Pt(24.0));
        e.body("fits").unwrap();
        assert_eq!(e.canvas().page_breaks(), 0);
        assert_eq!(e.position(), Pt(10.0));

        // 13.9pt left: breaks once, then draws at the top of the new page
        let mut e = engine();
        e.set_position(Pt(23.9));
        e.body("breaks").unwrap();
        assert_eq!(e.canvas().page_breaks(), 1);
        assert_eq!(e.canvas().texts_at(Pt(90.0)), vec!["breaks"]);
        assert_eq!(e.position(), Pt(76.0));
        assert_eq!(e.page_index(), 1);
    }

    #[test]
    fn fresh_pages_are_never_skipped() {
        let mut e = engine();
        assert!(!e.ensure_space(Pt(500.0)).unwrap());
        e.advance(Pt(1.0));
        assert!(e.ensure_space(Pt(500.0)).unwrap());
        assert_eq!(e.canvas().page_breaks(), 1);
    }

    #[test]
    fn content_taller_than_a_page_overflows_from_the_top() {
        let mut e = engine();
        let usable = e.geometry().top() - e.geometry().margins.bottom;
        assert!(!e.ensure_space(usable + Pt(1.0)).unwrap());
        assert_eq!(e.canvas().page_breaks(), 0);

        // anywhere below the top the ordinary threshold applies
        e.set_position(Pt(50.0));
        assert!(!e.ensure_space(Pt(40.0)).unwrap());
        assert!(e.ensure_space(Pt(40.1)).unwrap());
        assert_eq!(e.position(), Pt(90.0));
    }

    #[test]
    fn new_page_restores_the_active_font() {
        let mut e = engine();
        e.draw_left("x", Pt(14.0), true, false).unwrap();
        e.new_page().unwrap();
        let calls = &e.canvas().calls;
        assert_eq!(calls[calls.len() - 2], DrawCall::ShowPage);
        assert_eq!(
            calls[calls.len() - 1],
            DrawCall::SetFont(FontSpec::new(Pt(14.0), true))
        );
    }

    #[test]
    fn blank_line_is_dropped_at_the_top_of_a_new_page() {
        let mut e = engine();
        e.set_position(Pt(15.0));
        e.spacer().unwrap();
        assert_eq!(e.canvas().page_breaks(), 1);
        assert_eq!(e.position(), Pt(90.0));
        e.body("first").unwrap();
        assert_eq!(e.canvas().texts_at(Pt(90.0)), vec!["first"]);
    }

    #[test]
    fn centred_and_right_aligned_lines() {
        let mut e = engine();
        // "abcd" at 12pt is 24pt wide
        e.draw_centered("abcd", BODY_SIZE, false).unwrap();
        e.draw_right("abcd", BODY_SIZE, false).unwrap();
        let xs: Vec<Pt> = e
            .canvas()
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, vec![Pt(88.0), Pt(166.0)]);
    }

    #[test]
    fn links_are_underlined_and_clickable() {
        let mut e = engine();
        e.body("[site](https://example.com)").unwrap();
        let calls = &e.canvas().calls;
        assert!(calls.contains(&DrawCall::Line {
            from: (Pt(10.0), Pt(88.0)),
            to: (Pt(34.0), Pt(88.0)),
        }));
        assert!(calls.contains(&DrawCall::Link {
            url: "https://example.com".to_string(),
            rect: Rect {
                x1: Pt(10.0),
                y1: Pt(88.0),
                x2: Pt(34.0),
                y2: Pt(102.0),
            },
        }));
    }

    #[test]
    fn table_rows_are_atomic() {
        let mut e = engine();
        e.set_position(Pt(30.0));
        // the second cell wraps to 3 lines (42pt) and can't fit in 20pt
        e.draw_table_row(
            &["Key:", "one two three"],
            &[Pt(40.0), Pt(40.0)],
            &[BODY_SIZE, BODY_SIZE],
            &[true, false],
        )
        .unwrap();
        let canvas = e.canvas();
        assert_eq!(canvas.page_breaks(), 1);
        assert_eq!(canvas.texts_at(Pt(90.0)), vec!["Key:", "one"]);
        assert_eq!(canvas.texts_at(Pt(76.0)), vec!["two"]);
        assert_eq!(canvas.texts_at(Pt(62.0)), vec!["three"]);
        assert_eq!(e.position(), Pt(48.0));
    }

    #[test]
    fn indent_is_undone_on_early_return() {
        fn failing(e: &mut PageEngine<RecordingCanvas>, fail: bool) -> Result<(), ResumeError> {
            let mut indented = e.indent(Pt(7.0));
            assert_eq!(indented.geometry().margins.left, Pt(17.0));
            indented.body("inside")?;
            if fail {
                return Err(ResumeError::SectionNotFound("nope".into()));
            }
            indented.body("never")
        }

        let mut e = engine();
        assert!(failing(&mut e, true).is_err());
        assert_eq!(e.geometry().margins.left, Pt(10.0));
        assert_eq!(e.canvas().texts(), vec!["inside"]);
    }

    #[test]
    fn nested_scopes_restore_in_order() {
        let mut e = engine();
        {
            let mut outer = e.scoped(|g| g.page_width = Pt(100.0));
            {
                let inner = outer.indent(Pt(5.0));
                assert_eq!(inner.geometry().usable_width(), Pt(75.0));
            }
            assert_eq!(outer.geometry().usable_width(), Pt(80.0));
        }
        assert_eq!(e.geometry().usable_width(), Pt(180.0));
    }

    #[test]
    fn mark_and_restore_share_a_line() {
        let mut e = engine();
        let mark = e.mark();
        e.body("left").unwrap();
        e.restore(mark);
        e.draw_right("right", BODY_SIZE, false).unwrap();
        assert_eq!(e.canvas().texts_at(Pt(90.0)), vec!["left", "right"]);
    }

    #[test]
    fn glyphs_force_the_next_font_change() {
        let mut e = engine();
        e.body("a").unwrap();
        e.draw_glyph(Pt(10.0), "\u{1F4DE}", FontSpec::symbol(BODY_SIZE))
            .unwrap();
        e.body("b").unwrap();
        let fonts: Vec<&DrawCall> = e
            .canvas()
            .calls
            .iter()
            .filter(|call| matches!(call, DrawCall::SetFont(_)))
            .collect();
        assert_eq!(fonts.len(), 3);
        assert_eq!(e.position(), Pt(62.0));
    }
}
