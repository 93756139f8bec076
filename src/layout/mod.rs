//! Text measurement helpers and page geometry.
//!
//! [wrap] turns a logical line of text, optionally containing inline links written as
//! `[display](https://target)`, into width-constrained [PhysicalLine]s. Wrapping only
//! needs a [TextMeasurer](crate::TextMeasurer), so the height of any text can be known
//! before anything is drawn.
//!
//! ```
//! use resume_gen::layout::{wrap, Margins};
//! use resume_gen::{FontSpec, Pt, ResumeError, TextMeasurer};
//!
//! struct Mono;
//! impl TextMeasurer for Mono {
//!     fn text_width(&self, text: &str, font: FontSpec) -> Result<Pt, ResumeError> {
//!         Ok(font.size * (text.chars().count() as f32 * 0.5))
//!     }
//! }
//!
//! let margins = Margins::all(Pt(18.0));
//! let width = margins.usable_width(Pt(100.0));
//! let wrapped = wrap(&Mono, "read [the docs](https://docs.rs) first", FontSpec::new(Pt(12.0), false), width)
//!     .expect("mono measuring never fails");
//! assert_eq!(wrapped.lines.len(), 2);
//! assert_eq!(wrapped.lines[0].text(), "read the");
//! assert_eq!(wrapped.lines[1].tokens[0].url(), Some("https://docs.rs"));
//! assert_eq!(wrapped.height, Pt(28.0));
//! ```

mod margins;
mod wrap;

pub use margins::*;
pub use wrap::*;
