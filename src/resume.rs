//! The résumé record callers fill in, and its adapters into [ContentBlock]s.

use crate::block::{Bullet, ContentBlock, DateRange};
use crate::info::Info;
use chrono::NaiveDate;
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Author {
    pub name: String,
    /// Professional title, shown under the name by the sidebar layout
    pub title: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Author {
    /// The phone number re-punctuated as `(DDD) DDD-DDDD`
    pub fn formatted_phone(&self) -> String {
        format_phone(&self.phone)
    }
}

/// Keep only the digits of `raw` and punctuate them as `(DDD) DDD-DDDD`. Short numbers
/// are punctuated as far as their digits go; extra digits stay in the last group.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let area = &digits[..digits.len().min(3)];
    let exchange = &digits[area.len()..digits.len().min(6)];
    let line = &digits[area.len() + exchange.len()..];
    format!("({area}) {exchange}-{line}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkExperience {
    pub company: String,
    pub job_title: String,
    pub location: Option<String>,
    pub start: NaiveDate,
    /// `None` while the job is ongoing
    pub end: Option<NaiveDate>,
    pub description: Vec<Bullet>,
}

impl WorkExperience {
    pub fn dates(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }

    pub fn content(&self) -> ContentBlock {
        ContentBlock {
            title: self.company.clone(),
            subtitle: Some(self.job_title.clone()),
            location: self.location.clone(),
            dates: Some(self.dates()),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub name: String,
    pub date: NaiveDate,
}

impl Certification {
    /// `"Name   [MMM YYYY]"`
    pub fn line(&self) -> String {
        format!("{}   [{}]", self.name, crate::block::format_month(self.date))
    }
}

/// A degree or a course. At least one of `school` and `course` should be set.
#[derive(Debug, Clone, PartialEq)]
pub struct Education {
    pub school: Option<String>,
    pub course: Option<String>,
    pub location: String,
    pub gpa: Option<f32>,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub description: Vec<Bullet>,
}

impl Education {
    pub fn dates(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }

    /// The course name, followed by the GPA when there is one
    fn course_line(&self) -> Option<String> {
        let course = self.course.as_deref().unwrap_or_default();
        match self.gpa {
            Some(gpa) => Some(format!("{course}   [GPA: {gpa:.2}]")),
            None => self.course.clone(),
        }
    }

    /// The school is the title when known and the course becomes the subtitle;
    /// otherwise the course is the title.
    pub fn content(&self) -> ContentBlock {
        let course = self.course_line();
        let (title, subtitle) = match &self.school {
            Some(school) => (school.clone(), course),
            None => (course.unwrap_or_default(), None),
        };
        ContentBlock {
            title,
            subtitle,
            location: Some(self.location.clone()),
            dates: Some(self.dates()),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resume {
    pub author: Author,
    pub pitch: String,
    /// Skill category -> skills, drawn in insertion order
    pub skills: IndexMap<String, Vec<String>>,
    pub experience: Vec<WorkExperience>,
    /// Section name -> entries, looked up by name when drawn
    pub custom_sections: IndexMap<String, Vec<ContentBlock>>,
    pub certifications: Vec<Certification>,
    pub education: Vec<Education>,
    pub courses: Vec<Education>,
}

impl Resume {
    /// Document metadata describing this résumé
    pub fn info(&self) -> Info {
        let mut info = Info::new();
        info.title(format!("{} - Résumé", self.author.name))
            .author(self.author.name.clone());
        if !self.author.title.is_empty() {
            info.subject(self.author.title.clone());
        }
        for category in self.skills.keys() {
            info.keyword(category);
        }
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn degree(school: Option<&str>, gpa: Option<f32>) -> Education {
        Education {
            school: school.map(str::to_string),
            course: Some("B.S. Computer Science".to_string()),
            location: "Some City, TX".to_string(),
            gpa,
            start: date(2012, 8),
            end: Some(date(2016, 5)),
            description: vec![],
        }
    }

    #[test]
    fn phone_numbers_are_repunctuated() {
        assert_eq!(format_phone("123.456.7890"), "(123) 456-7890");
        assert_eq!(format_phone("(123) 456-7890"), "(123) 456-7890");
        assert_eq!(format_phone("+1 234 567 8901"), "(123) 456-78901");
        assert_eq!(format_phone("12345"), "(123) 45-");
        assert_eq!(format_phone(""), "() -");
    }

    #[test]
    fn work_experience_becomes_a_block() {
        let job = WorkExperience {
            company: "ABC Tech Solutions".to_string(),
            job_title: "Software Engineer".to_string(),
            location: None,
            start: date(2020, 1),
            end: None,
            description: vec![Bullet::parse("\tnested")],
        };
        let block = job.content();
        assert_eq!(block.title, "ABC Tech Solutions");
        assert_eq!(block.subtitle.as_deref(), Some("Software Engineer"));
        assert_eq!(block.location, None);
        assert_eq!(block.dates.map(|d| d.to_string()).unwrap(), "Jan 2020 - Present");
        assert_eq!(block.description[0].indent, 1);
    }

    #[test]
    fn school_is_the_title_when_present() {
        let block = degree(Some("State University"), Some(3.8)).content();
        assert_eq!(block.title, "State University");
        assert_eq!(
            block.subtitle.as_deref(),
            Some("B.S. Computer Science   [GPA: 3.80]")
        );

        let block = degree(None, None).content();
        assert_eq!(block.title, "B.S. Computer Science");
        assert_eq!(block.subtitle, None);
        assert_eq!(block.location.as_deref(), Some("Some City, TX"));
    }

    #[test]
    fn certification_lines() {
        let cert = Certification {
            name: "AWS Certified Developer".to_string(),
            date: date(2021, 3),
        };
        assert_eq!(cert.line(), "AWS Certified Developer   [Mar 2021]");
    }

    #[test]
    fn info_comes_from_the_author() {
        let mut resume = Resume::default();
        resume.author.name = "John Doe".to_string();
        resume
            .skills
            .insert("Languages".to_string(), vec!["Rust".to_string()]);
        let info = resume.info();
        assert_eq!(info.title.as_deref(), Some("John Doe - Résumé"));
        assert_eq!(info.author.as_deref(), Some("John Doe"));
        assert_eq!(info.subject, None);
        assert_eq!(info.keywords, vec!["Languages".to_string()]);
    }
}
