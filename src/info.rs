use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date, Pdf, TextStr};

/// Document metadata shown by PDF viewers in their document properties
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Written comma separated, as Acrobat suggests
    pub keywords: Vec<String>,
    /// The creation date; the time the document is written when unset
    pub created: Option<DateTime<FixedOffset>>,
}

impl Info {
    /// Create a new info block, with all metadata unset
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Add one keyword
    pub fn keyword<S: ToString>(&mut self, keyword: S) -> &mut Self {
        self.keywords.push(keyword.to_string());
        self
    }

    pub fn created(&mut self, at: DateTime<FixedOffset>) -> &mut Self {
        self.created = Some(at);
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject));
        }
        if !self.keywords.is_empty() {
            info.keywords(TextStr(&self.keywords.join(", ")));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        let created = self
            .created
            .unwrap_or_else(|| Local::now().fixed_offset());
        info.creation_date(pdf_date(created));
    }
}

fn pdf_date(at: DateTime<FixedOffset>) -> Date {
    let offset_seconds = at.offset().local_minus_utc();
    Date::new(at.year() as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour((offset_seconds / 3600) as i8)
        .utc_offset_minute(((offset_seconds % 3600) / 60).unsigned_abs() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_lands_in_the_info_dictionary() {
        let created = DateTime::parse_from_rfc3339("2024-01-02T03:04:05-05:30").unwrap();
        let mut info = Info::new();
        info.title("John Doe")
            .keyword("Rust")
            .keyword("PDF")
            .created(created);

        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        info.write(&mut refs, &mut writer);
        let bytes = writer.finish();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("(John Doe)"));
        assert!(text.contains("(Rust, PDF)"));
        assert!(text.contains("D:20240102030405"));
        assert!(refs.get(RefType::Info).is_some());
    }
}
