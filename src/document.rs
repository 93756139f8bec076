use crate::{
    font::Font,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    ResumeError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

/// Finished pages plus the fonts they reference, serialized in one go by
/// [Document::write]
#[derive(Default)]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Vec<Page>,
    pub fonts: Arena<Font>,
}

impl Document {
    /// Without info, the PDF gets no document information dictionary
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its 0-based index
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    /// Fonts are shared by every page
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Serialize the document in memory, then write the bytes to `w`
    pub fn write<W: Write>(self, mut w: W) -> Result<(), ResumeError> {
        let Document { info, pages, fonts } = self;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (page_index, page) in pages.iter().enumerate() {
            page.write(&mut refs, page_index, &fonts, &mut writer)?;
        }

        let page_refs: Vec<Ref> = (0..pages.len())
            .filter_map(|i| refs.get(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        let bytes = writer.finish();
        log::info!(
            "wrote PDF with {} page(s), {} byte(s)",
            pages.len(),
            bytes.len()
        );
        w.write_all(bytes.as_slice()).map_err(Into::into)
    }
}
