use crate::font::FontFace;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum ResumeError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("no custom section named {0:?}")]
    /// A custom section was requested by name but the résumé doesn't have it
    SectionNotFound(String),

    #[error("no font registered for the {0} face")]
    /// Text was measured or drawn in a face that was never registered
    FontMissing(FontFace),

    #[error("font has no glyph for {0:?} and no replacement glyph")]
    /// The font can't represent a character at all, not even with a fallback glyph
    MissingGlyph(char),
}
