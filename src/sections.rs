//! The classic single-column résumé: centred section headers over full-width content.

use crate::block::ContentBlock;
use crate::canvas::{Canvas, PdfCanvas, TextMeasurer};
use crate::config::LayoutConfig;
use crate::engine::PageEngine;
use crate::font::FontSpec;
use crate::layout::line_height;
use crate::resume::Resume;
use crate::units::Pt;
use crate::ResumeError;
use std::path::Path;

/// Size of section headers
pub const HEADER_SIZE: Pt = Pt(16.0);
/// Size of the author's name at the top of the first page
pub const NAME_SIZE: Pt = Pt(18.0);
/// Gap between the skill names and the skill lists
const SKILL_GUTTER: Pt = Pt(8.0);

/// A section of the classic layout, for drawing a whole résumé with
/// [ResumeGenerator::draw]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Author,
    Pitch,
    Skills,
    WorkExperience,
    /// One of [Resume::custom_sections], by name
    Custom(String),
    Certifications,
    Education,
    Courses,
}

/// Draws the sections of a [Resume] one after another, paginating as it goes
pub struct ResumeGenerator<'r, C: Canvas> {
    resume: &'r Resume,
    engine: PageEngine<C>,
}

impl<'r, C: Canvas> ResumeGenerator<'r, C> {
    pub fn new(resume: &'r Resume, canvas: C, config: &LayoutConfig) -> ResumeGenerator<'r, C> {
        ResumeGenerator {
            resume,
            engine: PageEngine::with_config(canvas, config),
        }
    }

    pub fn engine(&self) -> &PageEngine<C> {
        &self.engine
    }

    /// Stop drawing and hand back the canvas
    pub fn finish(self) -> C {
        self.engine.finish()
    }

    fn body_line(&self) -> Pt {
        line_height(self.engine.body_size())
    }

    /// Break the page now unless `height` fits, so a header isn't stranded at the bottom
    fn look_ahead(&mut self, height: Pt) -> Result<(), ResumeError> {
        self.engine.ensure_space(height)?;
        Ok(())
    }

    fn header(&mut self, title: &str) -> Result<(), ResumeError> {
        self.engine.draw_centered(title, HEADER_SIZE, true)
    }

    /// Draw every section in `sections`, in order
    pub fn draw(&mut self, sections: &[Section]) -> Result<(), ResumeError> {
        for section in sections {
            log::debug!("drawing section {section:?}");
            match section {
                Section::Author => self.draw_author()?,
                Section::Pitch => self.draw_pitch()?,
                Section::Skills => self.draw_skills()?,
                Section::WorkExperience => self.draw_work_experience()?,
                Section::Custom(name) => self.draw_custom_section(name)?,
                Section::Certifications => self.draw_certifications()?,
                Section::Education => self.draw_education()?,
                Section::Courses => self.draw_courses()?,
            }
        }
        Ok(())
    }

    /// Name, phone, email and address, centred
    pub fn draw_author(&mut self) -> Result<(), ResumeError> {
        let resume = self.resume;
        let author = &resume.author;
        self.look_ahead(line_height(NAME_SIZE) + self.body_line() * 4.0)?;

        let body = self.engine.body_size();
        self.engine
            .draw_centered(&author.name.to_uppercase(), NAME_SIZE, true)?;
        self.engine
            .draw_centered(&author.formatted_phone(), body, false)?;
        self.engine.draw_centered(&author.email, body, false)?;
        self.engine.draw_centered(&author.address, body, false)?;
        self.engine.draw_centered("", body, false)
    }

    pub fn draw_pitch(&mut self) -> Result<(), ResumeError> {
        let resume = self.resume;
        let pitch = &resume.pitch;
        if pitch.is_empty() {
            return Ok(());
        }
        self.look_ahead(self.body_line() * 4.0)?;
        self.engine.body(pitch)?;
        self.engine.spacer()
    }

    /// A two-column table: bold skill names on the left, comma-separated skills on the right
    pub fn draw_skills(&mut self) -> Result<(), ResumeError> {
        let resume = self.resume;
        let skills = &resume.skills;
        if skills.is_empty() {
            return Ok(());
        }
        self.look_ahead(line_height(HEADER_SIZE) + self.body_line() * 2.0)?;
        self.header("SKILLS")?;
        self.engine.spacer()?;

        let body = self.engine.body_size();
        let key_font = FontSpec::new(body, true);
        let mut key_width = Pt(0.0);
        for key in skills.keys() {
            let width = self
                .engine
                .canvas()
                .text_width(&format!("{key}: "), key_font)?;
            key_width = key_width.max(width);
        }
        let key_width = key_width + SKILL_GUTTER;
        let list_width = self.engine.geometry().usable_width() - key_width;

        for (key, list) in skills.iter() {
            self.engine.draw_table_row(
                &[&format!("{key}:"), &list.join(", ")],
                &[key_width, list_width],
                &[body, body],
                &[true, false],
            )?;
        }
        self.engine.spacer()
    }

    /// Under `title`: a gap before every block and one after the last
    fn draw_blocks(&mut self, title: &str, blocks: &[ContentBlock]) -> Result<(), ResumeError> {
        let Some(first) = blocks.first() else {
            return Ok(());
        };
        let first_height = first.measure_height(&self.engine)?;
        self.look_ahead(line_height(HEADER_SIZE) + self.body_line() + first_height)?;
        self.header(title)?;
        for block in blocks {
            self.engine.spacer()?;
            block.render(&mut self.engine)?;
        }
        self.engine.spacer()
    }

    pub fn draw_work_experience(&mut self) -> Result<(), ResumeError> {
        let blocks: Vec<ContentBlock> =
            self.resume.experience.iter().map(|e| e.content()).collect();
        self.draw_blocks("WORK EXPERIENCE", &blocks)
    }

    /// Draw the custom section called `name`, titled with its name
    pub fn draw_custom_section(&mut self, name: &str) -> Result<(), ResumeError> {
        let resume = self.resume;
        let blocks = resume
            .custom_sections
            .get(name)
            .ok_or_else(|| ResumeError::SectionNotFound(name.to_string()))?;
        self.draw_blocks(name, blocks)
    }

    /// One `"Name   [MMM YYYY]"` line per certification
    pub fn draw_certifications(&mut self) -> Result<(), ResumeError> {
        let resume = self.resume;
        let certifications = &resume.certifications;
        if certifications.is_empty() {
            return Ok(());
        }
        let lines = 2.0 + certifications.len() as f32;
        self.look_ahead(line_height(HEADER_SIZE) + self.body_line() * lines)?;
        self.header("CERTIFICATIONS")?;
        self.engine.spacer()?;
        for cert in certifications {
            self.engine.body(&cert.line())?;
        }
        self.engine.spacer()
    }

    pub fn draw_education(&mut self) -> Result<(), ResumeError> {
        let blocks: Vec<ContentBlock> =
            self.resume.education.iter().map(|e| e.content()).collect();
        self.draw_blocks("EDUCATION", &blocks)
    }

    pub fn draw_courses(&mut self) -> Result<(), ResumeError> {
        let blocks: Vec<ContentBlock> =
            self.resume.courses.iter().map(|e| e.content()).collect();
        self.draw_blocks("COURSES", &blocks)
    }
}

impl ResumeGenerator<'_, PdfCanvas> {
    /// Write the finished document to `path`, with metadata taken from the author
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), ResumeError> {
        let info = self.resume.info();
        let mut canvas = self.finish();
        canvas.set_info(info);
        canvas.save(path)
    }
}
