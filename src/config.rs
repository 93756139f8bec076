//! Layout settings. Everything is configured in code; the defaults reproduce the stock
//! letter-sized résumé.

use crate::colour::{colours, Colour};
use crate::engine::BODY_SIZE;
use crate::layout::Margins;
use crate::pagesize::{self, PageSize};
use crate::units::{In, Pt};

/// Page and text settings shared by both layouts
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub margins: Margins,
    /// Size of body text; headers and titles keep their fixed sizes
    pub body_size: Pt,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page_size: pagesize::LETTER,
            margins: Margins::all(In(0.25)),
            body_size: BODY_SIZE,
        }
    }
}

/// Colours and sidebar dimensions of the two-column layout
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FancyStyle {
    pub text_colour: Colour,
    /// Fill of the sidebar band
    pub sidebar_colour: Colour,
    pub sidebar_text_colour: Colour,
    /// Circles and rules that tie the roles of one employer together
    pub continuity_colour: Colour,
    /// Width of the sidebar band, measured from the left edge of the page
    pub sidebar_width: Pt,
    /// Gap kept clear between sidebar text and the end of the band
    pub sidebar_inset: Pt,
}

impl FancyStyle {
    /// The x coordinate sidebar text and rules stop at
    pub fn sidebar_drawable_width(&self) -> Pt {
        self.sidebar_width - self.sidebar_inset
    }
}

impl Default for FancyStyle {
    fn default() -> Self {
        FancyStyle {
            text_colour: colours::BLACK,
            sidebar_colour: Colour::from_hex(0xFFBD88),
            sidebar_text_colour: colours::BLACK,
            continuity_colour: Colour::from_hex(0x888FFF),
            sidebar_width: In(3.4).into(),
            sidebar_inset: In(0.15).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_letter_with_quarter_inch_margins() {
        let config = LayoutConfig::default();
        assert_eq!(config.page_size, (Pt(612.0), Pt(792.0)));
        assert_eq!(config.margins.left, Pt(18.0));
        assert_eq!(config.margins.bottom, Pt(18.0));
        assert_eq!(config.body_size, Pt(12.0));
    }

    #[test]
    fn sidebar_text_stops_short_of_the_band() {
        let style = FancyStyle::default();
        assert!((style.sidebar_width.0 - 244.8).abs() < 1e-3);
        assert!((style.sidebar_drawable_width().0 - 234.0).abs() < 1e-3);
    }
}
