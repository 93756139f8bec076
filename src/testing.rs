//! Deterministic collaborators for unit tests: every character advances by half the
//! font size, and every canvas call is recorded instead of drawn.

use crate::canvas::{Canvas, TextMeasurer};
use crate::colour::Colour;
use crate::font::FontSpec;
use crate::rect::Rect;
use crate::units::Pt;
use crate::ResumeError;

/// Every character is `size / 2` wide
pub struct MonoMeasurer;

impl TextMeasurer for MonoMeasurer {
    fn text_width(&self, text: &str, font: FontSpec) -> Result<Pt, ResumeError> {
        Ok(font.size * (text.chars().count() as f32 * 0.5))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    SetFont(FontSpec),
    Text { x: Pt, y: Pt, text: String },
    Line { from: (Pt, Pt), to: (Pt, Pt) },
    FillRect(Rect),
    Circle { centre: (Pt, Pt), radius: Pt },
    Link { url: String, rect: Rect },
    FillColour(Colour),
    StrokeColour(Colour),
    ShowPage,
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn page_breaks(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::ShowPage))
            .count()
    }

    /// Text calls drawn at exactly baseline `y`
    pub fn texts_at(&self, y: Pt) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { y: at, text, .. } if *at == y => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl TextMeasurer for RecordingCanvas {
    fn text_width(&self, text: &str, font: FontSpec) -> Result<Pt, ResumeError> {
        MonoMeasurer.text_width(text, font)
    }
}

impl Canvas for RecordingCanvas {
    fn set_font(&mut self, font: FontSpec) -> Result<(), ResumeError> {
        self.calls.push(DrawCall::SetFont(font));
        Ok(())
    }

    fn draw_string(&mut self, x: Pt, y: Pt, text: &str) -> Result<(), ResumeError> {
        self.calls.push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
        });
        Ok(())
    }

    fn line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        self.calls.push(DrawCall::Line { from, to });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::FillRect(rect));
    }

    fn circle(&mut self, centre: (Pt, Pt), radius: Pt) {
        self.calls.push(DrawCall::Circle { centre, radius });
    }

    fn link_url(&mut self, url: &str, rect: Rect) {
        self.calls.push(DrawCall::Link {
            url: url.to_string(),
            rect,
        });
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.calls.push(DrawCall::FillColour(colour));
    }

    fn set_stroke_colour(&mut self, colour: Colour) {
        self.calls.push(DrawCall::StrokeColour(colour));
    }

    fn show_page(&mut self) -> Result<(), ResumeError> {
        self.calls.push(DrawCall::ShowPage);
        Ok(())
    }
}
