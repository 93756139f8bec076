//! The two-column résumé: a coloured sidebar with the author's details, education and
//! skills, and a main column with work history and custom sections. Consecutive roles
//! at one employer are tied together by a circle and a vertical rule.

use crate::block::Bullet;
use crate::canvas::{Canvas, PdfCanvas};
use crate::config::{FancyStyle, LayoutConfig};
use crate::engine::PageEngine;
use crate::font::FontSpec;
use crate::layout::line_height;
use crate::rect::Rect;
use crate::resume::{Education, Resume, WorkExperience};
use crate::units::{In, Pt};
use crate::ResumeError;
use std::path::Path;

const NAME_SIZE: Pt = Pt(22.0);
const TITLE_SIZE: Pt = Pt(14.0);
const SIDEBAR_HEADER_SIZE: Pt = Pt(14.0);
const MAIN_HEADER_SIZE: Pt = Pt(16.0);
const COMPANY_SIZE: Pt = Pt(14.0);
/// Space between a header's text and the rule under it
const RULE_GAP: Pt = Pt(3.0);
/// Indentation of section content under its header
const STEP: Pt = Pt(7.0);
/// How far contact details sit right of their icons
const ICON_GUTTER: Pt = Pt(20.0);
const RUN_MARKER_RADIUS: Pt = Pt(4.0);
/// Extra space between a skill category and its skills
const SKILL_GAP: Pt = Pt(4.0);

const PHONE_ICON: &str = "\u{1F4DE}";
const EMAIL_ICON: &str = "\u{1F582}";
const ADDRESS_ICON: &str = "\u{1F4CD}";

/// A section of the main column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainSection {
    WorkExperience,
    /// One of [Resume::custom_sections], by name
    Custom(String),
}

/// Consecutive roles at the same company
struct Run<'r> {
    company: &'r str,
    roles: Vec<&'r WorkExperience>,
}

fn runs(experience: &[WorkExperience]) -> Vec<Run<'_>> {
    let mut runs: Vec<Run> = Vec::new();
    for exp in experience {
        match runs.last_mut() {
            Some(run) if run.company == exp.company => run.roles.push(exp),
            _ => runs.push(Run {
                company: &exp.company,
                roles: vec![exp],
            }),
        }
    }
    runs
}

pub struct FancyResume<'r, C: Canvas> {
    resume: &'r Resume,
    engine: PageEngine<C>,
    style: FancyStyle,
}

impl<'r, C: Canvas> FancyResume<'r, C> {
    pub fn new(
        resume: &'r Resume,
        canvas: C,
        config: &LayoutConfig,
        style: FancyStyle,
    ) -> FancyResume<'r, C> {
        FancyResume {
            resume,
            engine: PageEngine::with_config(canvas, config),
            style,
        }
    }

    pub fn engine(&self) -> &PageEngine<C> {
        &self.engine
    }

    /// Stop drawing and hand back the canvas
    pub fn finish(self) -> C {
        self.engine.finish()
    }

    /// Draw the sidebar, then `sections` in the main column
    pub fn draw(&mut self, sections: &[MainSection]) -> Result<(), ResumeError> {
        self.draw_sidebar()?;
        self.start_main_column();
        for section in sections {
            log::debug!("drawing main column section {section:?}");
            match section {
                MainSection::WorkExperience => self.draw_work_experience()?,
                MainSection::Custom(name) => self.draw_custom_section(name)?,
            }
        }
        Ok(())
    }

    pub fn draw_sidebar(&mut self) -> Result<(), ResumeError> {
        let resume = self.resume;
        let style = self.style;
        let body = self.engine.body_size();

        let page_height = self.engine.geometry().page_height;
        self.engine.set_fill_colour(style.sidebar_colour);
        self.engine.fill_rect(Rect::from_origin(
            Pt(0.0),
            Pt(0.0),
            style.sidebar_width,
            page_height,
        ));
        self.engine.set_fill_colour(style.sidebar_text_colour);
        self.engine.set_stroke_colour(style.sidebar_text_colour);

        let drawable = style.sidebar_drawable_width();
        let mut bar = self
            .engine
            .scoped(|g| g.page_width = drawable + g.margins.right);

        // room for the name's ascent above its baseline
        bar.advance(NAME_SIZE);
        bar.draw_left(&resume.author.name, NAME_SIZE, true, false)?;
        bar.draw_left(&resume.author.title, TITLE_SIZE, false, false)?;
        bar.draw_left("", Pt(8.0), false, false)?;
        if !resume.pitch.is_empty() {
            bar.body(&resume.pitch)?;
            bar.spacer()?;
        }

        bar.ensure_space(line_height(SIDEBAR_HEADER_SIZE) + RULE_GAP + line_height(body) * 3.0)?;
        sidebar_header(&mut bar, "Contact", drawable)?;
        {
            let mut indented = bar.indent(STEP);
            let icon_x = indented.geometry().margins.left;
            let mut details = indented.indent(ICON_GUTTER);
            let author = &resume.author;
            for (icon, text) in [
                (PHONE_ICON, author.formatted_phone()),
                (EMAIL_ICON, author.email.clone()),
                (ADDRESS_ICON, author.address.clone()),
            ] {
                details.ensure_space(line_height(body))?;
                details.draw_glyph(icon_x, icon, FontSpec::symbol(body))?;
                details.body(&text)?;
            }
        }

        if let Some(first) = resume.education.first() {
            bar.spacer()?;
            let first_height = lines_height(&bar.indent(STEP), &education_lines(first))?;
            bar.ensure_space(line_height(SIDEBAR_HEADER_SIZE) + RULE_GAP + first_height)?;
            sidebar_header(&mut bar, "Education", drawable)?;
            let mut indented = bar.indent(STEP);
            for (idx, edu) in resume.education.iter().enumerate() {
                if idx > 0 {
                    indented.spacer()?;
                }
                for (text, bold) in education_lines(edu) {
                    indented.draw_left(&text, body, bold, false)?;
                }
            }
        }

        if let Some((key, list)) = resume.skills.first() {
            bar.spacer()?;
            let first_height = skill_height(&bar.indent(STEP), key, list)?;
            bar.ensure_space(line_height(SIDEBAR_HEADER_SIZE) + RULE_GAP + first_height)?;
            sidebar_header(&mut bar, "Skills", drawable)?;
            let mut indented = bar.indent(STEP);
            for (idx, (key, list)) in resume.skills.iter().enumerate() {
                if idx > 0 {
                    indented.spacer()?;
                }
                indented.draw_left(key, body, true, false)?;
                indented.advance(SKILL_GAP);
                indented.body(&list.join(", "))?;
            }
        }
        Ok(())
    }

    /// Move the cursor back up to the top of the page and the left margin past the sidebar
    fn start_main_column(&mut self) {
        let style = self.style;
        let top = self.engine.geometry().top();
        self.engine.set_position(top - MAIN_HEADER_SIZE);
        self.engine.set_fill_colour(style.text_colour);
        self.engine.set_stroke_colour(style.text_colour);

        let left = self.engine.geometry().margins.left;
        self.engine
            .shift_left_margin(style.sidebar_width - left + Pt::from(In(0.125)));
    }

    /// A bold header over a rule that runs to the edge of the page
    fn main_header(&mut self, title: &str) -> Result<(), ResumeError> {
        let geometry = *self.engine.geometry();
        let y = self.engine.position() - RULE_GAP;
        self.engine
            .line((geometry.margins.left, y), (geometry.page_width, y));
        self.engine.draw_left(title, MAIN_HEADER_SIZE, true, false)?;
        self.engine.advance(RULE_GAP);
        Ok(())
    }

    pub fn draw_custom_section(&mut self, name: &str) -> Result<(), ResumeError> {
        let resume = self.resume;
        let blocks = resume
            .custom_sections
            .get(name)
            .ok_or_else(|| ResumeError::SectionNotFound(name.to_string()))?;
        let Some(first) = blocks.first() else {
            return Ok(());
        };
        let first_height = first.measure_height(&self.engine)?;
        self.engine
            .ensure_space(line_height(MAIN_HEADER_SIZE) + RULE_GAP + first_height)?;
        self.main_header(name)?;
        for (idx, block) in blocks.iter().enumerate() {
            block.render(&mut self.engine)?;
            if idx + 1 < blocks.len() {
                self.engine.spacer()?;
            }
        }
        Ok(())
    }

    /// Work history, with every run of roles at one company drawn as a single entry
    pub fn draw_work_experience(&mut self) -> Result<(), ResumeError> {
        let resume = self.resume;
        let style = self.style;
        let Some(first) = resume.experience.first() else {
            return Ok(());
        };
        let first_height = first.content().measure_height(&self.engine)?;
        self.engine
            .ensure_space(line_height(MAIN_HEADER_SIZE) + RULE_GAP + first_height)?;
        self.main_header("WORK EXPERIENCE")?;

        for run in runs(&resume.experience) {
            let left = self.engine.geometry().margins.left;
            let start_page = self.engine.page_index();
            let start_y = self.engine.position();

            self.engine.set_stroke_colour(style.continuity_colour);
            self.engine
                .circle((left, start_y + RUN_MARKER_RADIUS), RUN_MARKER_RADIUS);
            self.engine.set_stroke_colour(style.text_colour);

            {
                let mut company = self.engine.indent(STEP);
                company.draw_left(run.company, COMPANY_SIZE, true, true)?;
                let mut role = company.indent(STEP);
                for exp in run.roles {
                    draw_role(&mut role, exp)?;
                }
            }

            // a run that crossed pages is only joined up on the page it ends on
            let from = if self.engine.page_index() == start_page {
                start_y
            } else {
                self.engine.geometry().top()
            };
            let to = self.engine.position() + Pt(24.0);
            self.engine.set_stroke_colour(style.continuity_colour);
            self.engine.line((left, from), (left, to));
            self.engine.set_stroke_colour(style.text_colour);
        }
        Ok(())
    }
}

/// The lines of one sidebar education entry, each flagged bold or not
fn education_lines(edu: &Education) -> Vec<(String, bool)> {
    let mut lines: Vec<(String, bool)> = Vec::new();
    lines.extend(edu.course.iter().map(|course| (course.clone(), true)));
    lines.extend(edu.school.iter().map(|school| (school.clone(), false)));
    lines.push((edu.location.clone(), false));
    lines.push((edu.dates().to_string(), false));
    lines.extend(edu.gpa.map(|gpa| (format!("GPA: {gpa}"), false)));
    lines
}

/// Wrapped height of body-sized `lines` at the engine's current width
fn lines_height<C: Canvas>(
    engine: &PageEngine<C>,
    lines: &[(String, bool)],
) -> Result<Pt, ResumeError> {
    let body = engine.body_size();
    lines
        .iter()
        .try_fold(Pt(0.0), |height, (text, bold)| -> Result<Pt, ResumeError> {
            Ok(height + engine.wrap(text, FontSpec::new(body, *bold))?.height)
        })
}

fn skill_height<C: Canvas>(
    engine: &PageEngine<C>,
    key: &str,
    list: &[String],
) -> Result<Pt, ResumeError> {
    let lines = [(key.to_string(), true), (list.join(", "), false)];
    Ok(lines_height(engine, &lines)? + SKILL_GAP)
}

/// A bold header over a rule that stops at the sidebar's drawable width
fn sidebar_header<C: Canvas>(
    engine: &mut PageEngine<C>,
    title: &str,
    drawable: Pt,
) -> Result<(), ResumeError> {
    let left = engine.geometry().margins.left;
    let y = engine.position() - RULE_GAP;
    engine.line((left, y), (drawable, y));
    engine.draw_left(title, SIDEBAR_HEADER_SIZE, true, false)?;
    engine.advance(RULE_GAP);
    Ok(())
}

/// Job title on the left and dates on the right of the same line, then the details
fn draw_role<C: Canvas>(engine: &mut PageEngine<C>, exp: &WorkExperience) -> Result<(), ResumeError> {
    let body = engine.body_size();
    let mark = engine.mark();
    engine.draw_left(&exp.job_title, body, true, false)?;
    let below_title = engine.position();
    engine.restore(mark);
    engine.draw_right(&exp.dates().to_string(), body, false)?;
    // a wrapped title reaches further down than the dates
    if below_title < engine.position() {
        engine.set_position(below_title);
    }
    if let Some(location) = &exp.location {
        engine.body(location)?;
    }
    for bullet in exp.description.iter().map(Bullet::display_text) {
        engine.body(&bullet)?;
    }
    engine.spacer()
}

impl FancyResume<'_, PdfCanvas> {
    /// Write the finished document to `path`, with metadata taken from the author
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), ResumeError> {
        let info = self.resume.info();
        let mut canvas = self.finish();
        canvas.set_info(info);
        canvas.save(path)
    }
}
