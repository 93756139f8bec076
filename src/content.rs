//! Converts recorded page contents into PDF content stream operators.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{PageContents, SpanFont, SpanLayout};
use crate::units::Pt;
use crate::ResumeError;
use id_arena::Arena;
use std::io::Write;

/// Bezier control point distance for approximating a quarter circle
const KAPPA: f32 = 0.552_284_8;

#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, ResumeError> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans, fonts)?;
            }
            PageContents::Line { from, to, colour } => {
                write!(&mut content, "q\n")?;
                write_stroke_colour(&mut content, *colour)?;
                write!(&mut content, "1 w\n")?;
                write!(&mut content, "{} {} m\n", from.0, from.1)?;
                write!(&mut content, "{} {} l\n", to.0, to.1)?;
                write!(&mut content, "S\nQ\n")?;
            }
            PageContents::FilledRect { rect, colour } => {
                write!(&mut content, "q\n")?;
                write_fill_colour(&mut content, *colour)?;
                write!(
                    &mut content,
                    "{} {} {} {} re\n",
                    rect.x1,
                    rect.y1,
                    rect.width(),
                    rect.height()
                )?;
                write!(&mut content, "f\nQ\n")?;
            }
            PageContents::Circle {
                centre,
                radius,
                colour,
            } => {
                write!(&mut content, "q\n")?;
                write_stroke_colour(&mut content, *colour)?;
                write!(&mut content, "1 w\n")?;
                write_circle_path(&mut content, *centre, *radius)?;
                write!(&mut content, "S\nQ\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), ResumeError> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;
    write_fill_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_fill_colour(content, current_colour)?;
        }

        let font = &fonts[current_font.id];
        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for ch in span.text.chars() {
            write!(content, "{:04x}", font.glyph_or_replacement(ch)?)?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_circle_path(content: &mut Vec<u8>, centre: (Pt, Pt), radius: Pt) -> std::io::Result<()> {
    let (cx, cy) = (centre.0 .0, centre.1 .0);
    let r = radius.0;
    let k = r * KAPPA;

    write!(content, "{} {} m\n", cx + r, cy)?;
    write!(content, "{} {} {} {} {} {} c\n", cx + r, cy + k, cx + k, cy + r, cx, cy + r)?;
    write!(content, "{} {} {} {} {} {} c\n", cx - k, cy + r, cx - r, cy + k, cx - r, cy)?;
    write!(content, "{} {} {} {} {} {} c\n", cx - r, cy - k, cx - k, cy - r, cx, cy - r)?;
    write!(content, "{} {} {} {} {} {} c\n", cx + k, cy - r, cx + r, cy - k, cx + r, cy)?;
    write!(content, "h\n")
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> std::io::Result<()> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> std::io::Result<()> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}
