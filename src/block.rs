//! Content blocks: the normalized shape every dated / titled résumé entry is drawn as.

use crate::canvas::Canvas;
use crate::engine::PageEngine;
use crate::font::FontSpec;
use crate::units::Pt;
use crate::ResumeError;
use chrono::NaiveDate;
use std::fmt;

/// Size of a block's title line
pub const TITLE_SIZE: Pt = Pt(14.0);

/// Short month and 4-digit year, e.g. "Jan 2020"
pub fn format_month(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// A start date with an optional end date; without an end date the range is ongoing
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> DateRange {
        DateRange { start, end }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{} - {}", format_month(self.start), format_month(end)),
            None => write!(f, "{} - Present", format_month(self.start)),
        }
    }
}

/// One description line, nested `indent` levels deep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bullet {
    pub text: String,
    pub indent: usize,
}

impl Bullet {
    pub fn new<S: Into<String>>(text: S) -> Bullet {
        Bullet {
            text: text.into(),
            indent: 0,
        }
    }

    pub fn nested<S: Into<String>>(text: S, indent: usize) -> Bullet {
        Bullet {
            text: text.into(),
            indent,
        }
    }

    /// Read a line whose leading tabs encode its nesting depth
    pub fn parse(raw: &str) -> Bullet {
        let text = raw.trim_start_matches('\t');
        Bullet {
            indent: raw.len() - text.len(),
            text: text.to_string(),
        }
    }

    /// The text as drawn: four spaces per indent level, then the bullet glyph
    pub fn display_text(&self) -> String {
        format!("{} \u{2022} {}", "    ".repeat(self.indent), self.text)
    }
}

impl From<&str> for Bullet {
    fn from(raw: &str) -> Self {
        Bullet::parse(raw)
    }
}

impl From<String> for Bullet {
    fn from(raw: String) -> Self {
        Bullet::parse(&raw)
    }
}

/// A titled entry: a job, a degree, a project. Built once by an adapter and then drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentBlock {
    pub title: String,
    pub subtitle: Option<String>,
    pub location: Option<String>,
    pub dates: Option<DateRange>,
    pub description: Vec<Bullet>,
}

impl ContentBlock {
    pub fn new<S: Into<String>>(title: S) -> ContentBlock {
        ContentBlock {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_subtitle<S: Into<String>>(mut self, subtitle: S) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_dates(mut self, start: NaiveDate, end: Option<NaiveDate>) -> Self {
        self.dates = Some(DateRange::new(start, end));
        self
    }

    pub fn with_description<I, B>(mut self, description: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bullet>,
    {
        self.description = description.into_iter().map(Into::into).collect();
        self
    }

    /// Every line below the title in drawing order, all in the body font
    fn body_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        lines.extend(self.subtitle.iter().cloned());
        lines.extend(self.dates.iter().map(DateRange::to_string));
        lines.extend(self.location.iter().cloned());
        lines.extend(self.description.iter().map(Bullet::display_text));
        lines
    }

    /// The vertical space [ContentBlock::render] will use if no page break happens in
    /// the middle of the block. Section gaps before and after the block aren't included.
    pub fn measure_height<C: Canvas>(&self, engine: &PageEngine<C>) -> Result<Pt, ResumeError> {
        let mut height = engine
            .wrap(&self.title, FontSpec::new(TITLE_SIZE, true))?
            .height;
        let body = FontSpec::new(engine.body_size(), false);
        for line in self.body_lines() {
            height += engine.wrap(&line, body)?.height;
        }
        Ok(height)
    }

    /// Draw the block, moving to a new page first if it wouldn't fit on this one, so the
    /// title is never left alone at the bottom of a page. A block taller than a whole page
    /// simply continues over as many pages as it needs.
    pub fn render<C: Canvas>(&self, engine: &mut PageEngine<C>) -> Result<(), ResumeError> {
        let height = self.measure_height(engine)?;
        engine.ensure_space(height)?;

        engine.draw_left(&self.title, TITLE_SIZE, true, false)?;
        for line in self.body_lines() {
            engine.body(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;
    use crate::pagesize::LETTER;
    use crate::testing::RecordingCanvas;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn engine() -> PageEngine<RecordingCanvas> {
        PageEngine::new(RecordingCanvas::default(), LETTER, Margins::all(Pt(18.0)))
    }

    fn job() -> ContentBlock {
        ContentBlock::new("ABC Tech Solutions")
            .with_subtitle("Software Engineer")
            .with_location("Some City, TX")
            .with_dates(date(2020, 1), None)
            .with_description([
                "Designed and developed scalable web applications using React, Node.js, and \
                 MongoDB, enhancing user experience and application performance.",
                "\tLed the migration of legacy systems to [AWS](https://aws.amazon.com).",
                "Mentored junior developers.",
            ])
    }

    #[test]
    fn ongoing_ranges_say_present() {
        assert_eq!(DateRange::new(date(2020, 1), None).to_string(), "Jan 2020 - Present");
        assert_eq!(
            DateRange::new(date(2016, 6), Some(date(2019, 12))).to_string(),
            "Jun 2016 - Dec 2019"
        );
    }

    #[test]
    fn leading_tabs_become_indent_levels() {
        let bullet = Bullet::parse("\t\tnested item");
        assert_eq!(bullet, Bullet::nested("nested item", 2));
        assert_eq!(bullet.display_text(), "         \u{2022} nested item");
        assert_eq!(Bullet::parse("top").display_text(), " \u{2022} top");
    }

    #[test]
    fn measured_height_matches_drawn_height() {
        let blocks = [
            job(),
            ContentBlock::new("Bare title"),
            ContentBlock::new("Project Management Tool").with_description(["one", "two"]),
            ContentBlock::new(
                "A title long enough that it has to wrap onto a second line when the page \
                 is only letter sized and the font is fourteen points",
            )
            .with_location("Somewhere"),
        ];
        for block in blocks.iter() {
            let mut e = engine();
            let expected = block.measure_height(&e).unwrap();
            let before = e.position();
            block.render(&mut e).unwrap();
            assert_eq!(e.canvas().page_breaks(), 0);
            assert_eq!(before - e.position(), expected, "block {:?}", block.title);
        }
    }

    #[test]
    fn draws_fields_in_order() {
        let mut e = engine();
        job().render(&mut e).unwrap();
        let texts = e.canvas().texts();
        assert_eq!(texts[0], "ABC Tech Solutions");
        assert_eq!(texts[1], "Software Engineer");
        assert_eq!(texts[2], "Jan 2020 - Present");
        assert_eq!(texts[3], "Some City, TX");
        assert!(texts[4].starts_with(" \u{2022} Designed"));
        assert!(texts.contains(&"     \u{2022} Led the migration of legacy systems to "));
        assert!(texts.contains(&"AWS"));
    }

    #[test]
    fn block_moves_to_the_next_page_instead_of_splitting() {
        let mut e = engine();
        let block = job();
        let height = block.measure_height(&e).unwrap();
        e.set_position(Pt(18.0) + height - Pt(1.0));
        block.render(&mut e).unwrap();
        assert_eq!(e.canvas().page_breaks(), 1);
        let top = LETTER.1 - Pt(18.0);
        assert_eq!(e.canvas().texts_at(top), vec!["ABC Tech Solutions"]);
    }

    #[test]
    fn blocks_taller_than_a_page_overflow() {
        let mut e = engine();
        let bullets: Vec<String> = (0..80).map(|i| format!("bullet {i}")).collect();
        let block = ContentBlock::new("Huge").with_description(bullets);
        block.render(&mut e).unwrap();
        // no blank first page: 52 bullets fit below the title, the other 28 go over
        assert_eq!(e.canvas().page_breaks(), 1);
        assert_eq!(e.canvas().texts().len(), 81);
    }
}
