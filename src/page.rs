use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::ResumeError;
use id_arena::{Arena, Id};
use pdf_writer::types::{ActionType, AnnotationType};
use pdf_writer::{Filter, Finish, Name, Pdf, Str};

/// A font as used by a span: which registered font, at what size
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text in a single font and colour, starting at a baseline coordinate
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    /// A stroked line segment, 1pt wide
    Line {
        from: (Pt, Pt),
        to: (Pt, Pt),
        colour: Colour,
    },
    /// A filled rectangle without an outline
    FilledRect { rect: Rect, colour: Colour },
    /// A stroked circle outline
    Circle {
        centre: (Pt, Pt),
        radius: Pt,
        colour: Colour,
    },
}

/// A clickable region that opens an external URL
#[derive(Clone, PartialEq, Debug)]
pub struct UriLink {
    pub rect: Rect,
    pub uri: String,
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// Everything drawn on the page, in painting order
    pub contents: Vec<PageContents>,
    /// Link annotations layered over the contents
    pub links: Vec<UriLink>,
}

impl Page {
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
            links: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        // consecutive spans share one text object
        if let Some(PageContents::Text(spans)) = self.contents.last_mut() {
            spans.push(span);
        } else {
            self.contents.push(PageContents::Text(vec![span]));
        }
    }

    pub fn add_line(&mut self, from: (Pt, Pt), to: (Pt, Pt), colour: Colour) {
        self.contents.push(PageContents::Line { from, to, colour });
    }

    pub fn add_filled_rect(&mut self, rect: Rect, colour: Colour) {
        self.contents.push(PageContents::FilledRect { rect, colour });
    }

    pub fn add_circle(&mut self, centre: (Pt, Pt), radius: Pt, colour: Colour) {
        self.contents.push(PageContents::Circle {
            centre,
            radius,
            colour,
        });
    }

    /// Add a clickable region pointing to an external URL
    pub fn add_uri_link<S: ToString>(&mut self, rect: Rect, uri: S) {
        self.links.push(UriLink {
            rect,
            uri: uri.to_string(),
        });
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), ResumeError> {
        let id = refs.gen(RefType::Page(page_index));
        let page_tree_id = refs.gen_or_get(RefType::PageTree);
        let content_id = refs.gen(RefType::ContentForPage(page_index));
        let link_ids: Vec<_> = (0..self.links.len())
            .map(|i| refs.gen(RefType::LinkAnnotation(page_index, i)))
            .collect();

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(page_tree_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            let font_ref = refs.gen_or_get(RefType::Font(font_id.index()));
            resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        if !link_ids.is_empty() {
            page.annotations(link_ids.iter().copied());
        }
        page.finish();

        let rendered = render_contents(&self.contents, fonts)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            &rendered,
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, &compressed)
            .filter(Filter::FlateDecode);

        for (link, link_id) in self.links.iter().zip(link_ids) {
            let mut annotation = writer.annotation(link_id);
            annotation.subtype(AnnotationType::Link);
            annotation.rect(link.rect.into());
            annotation.border_style().width(0.0);
            annotation
                .action()
                .action_type(ActionType::Uri)
                .uri(Str(link.uri.as_bytes()));
        }

        Ok(())
    }
}
