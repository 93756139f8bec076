use crate::{
    refs::{ObjectReferences, RefType},
    Pt, ResumeError,
};
use derive_more::Display;
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::{collections::BTreeMap, path::Path};

/// The roles a font can play in a résumé. Each role is backed by one registered font file.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontFace {
    /// Body text
    #[display("regular")]
    Regular,
    /// Titles, headers and table keys
    #[display("bold")]
    Bold,
    /// Pictographs used as icons (phone, envelope, pin)
    #[display("symbol")]
    Symbol,
}

impl FontFace {
    /// The regular or bold face, depending on `bold`
    pub fn weighted(bold: bool) -> FontFace {
        if bold {
            FontFace::Bold
        } else {
            FontFace::Regular
        }
    }
}

/// A face at a given size. This is the full "active font" state of a canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontSpec {
    pub face: FontFace,
    pub size: Pt,
}

impl FontSpec {
    pub fn new(size: Pt, bold: bool) -> FontSpec {
        FontSpec {
            face: FontFace::weighted(bold),
            size,
        }
    }

    pub fn symbol(size: Pt) -> FontSpec {
        FontSpec {
            face: FontFace::Symbol,
            size,
        }
    }
}

/// A parsed TrueType / OpenType font. Fonts are embedded in their entirety in the
/// generated PDF, so large fonts may dramatically increase the size of the output.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, ResumeError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face })
    }

    /// Read and parse a font file from disk
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Font, ResumeError> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face().units_per_em() as f32
    }

    /// Obtain the full name of the font, if it declares one
    pub fn name(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the family name of the font, if it declares one
    pub fn family(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Width of a run of text in this font. Characters are measured with the same
    /// replacement glyphs they are drawn with, so text that can't be drawn fails here,
    /// while it is laid out, rather than when the document is written.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Result<Pt, ResumeError> {
        let scaling = self.scaling(size);
        text.chars()
            .map(|ch| -> Result<Pt, ResumeError> {
                let gid = self.glyph_or_replacement(ch)?;
                let advance = self.face().glyph_hor_advance(GlyphId(gid));
                Ok(scaling * advance.unwrap_or_default() as f32)
            })
            .sum()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph to draw for `ch`, falling back to U+FFFD and then '?'
    pub fn glyph_or_replacement(&self, ch: char) -> Result<u16, ResumeError> {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
            .ok_or(ResumeError::MissingGlyph(ch))
    }

    /// Map of glyph id -> (first char mapping to it, horizontal advance)
    fn glyphs(&self) -> BTreeMap<u16, (char, u16)> {
        let mut map: BTreeMap<u16, (char, u16)> = BTreeMap::new();
        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                let Ok(ch) = char::try_from(codepoint) else {
                    return;
                };
                if let Some(gid) = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0) {
                    let advance = self.face().glyph_hor_advance(gid).unwrap_or_default();
                    map.entry(gid.0).or_insert((ch, advance));
                }
            });
        }

        map
    }

    fn write_cid(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) -> Ref {
        let font_descriptor_id = self.write_descriptor(refs, font_index, writer);

        let id = refs.gen(RefType::CidFont(font_index));
        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(font_descriptor_id);

        let scaling = 1000.0 / self.face().units_per_em() as f32;
        let glyphs = self.glyphs();

        // runs of consecutive glyph ids share one widths array entry
        let mut widths = cid_font.widths();
        let mut run_start: Option<u16> = None;
        let mut run: Vec<f32> = Vec::new();
        for (&gid, &(_, advance)) in glyphs.iter() {
            match run_start {
                Some(start) if gid as usize == start as usize + run.len() => {}
                Some(start) => {
                    widths.consecutive(start, run.drain(..));
                    run_start = Some(gid);
                }
                None => run_start = Some(gid),
            }
            run.push(advance as f32 * scaling);
        }
        if let Some(start) = run_start {
            widths.consecutive(start, run.drain(..));
        }
        widths.finish();

        cid_font.default_width(1000.0);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let font_data_id = refs.gen(RefType::FontData(font_index));
        writer
            .stream(font_data_id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        let face = self.face();
        let scaling = 1000.0 / face.units_per_em() as f32;
        let bbox = face.global_bounding_box();
        let name = self.name().unwrap_or_else(|| format!("F{font_index}"));
        let family = self.family().unwrap_or_else(|| name.clone());

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(name.replace(' ', "").as_bytes()));
        descriptor.family(Str(family.as_bytes()));
        descriptor.weight(face.weight().to_number());

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if face.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        descriptor.flags(flags);

        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(1000.0),
        );
        // TODO: derive the stem width from the OS/2 weight class instead of a fixed guess
        descriptor.stem_v(80.0);
        descriptor.font_file2(font_data_id);
        descriptor.finish();

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries
        let glyphs: Vec<(u16, char)> = self
            .glyphs()
            .into_iter()
            .map(|(gid, (ch, _))| (gid, ch))
            .collect();
        for block in glyphs.chunks(100) {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for &(gid, ch) in block {
                let mut utf16 = [0u16; 2];
                let units: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                map.push_str(&format!("<{gid:04x}> <{units}>\n"));
            }
            map.push_str("endbfchar\n");
        }
        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }
}
