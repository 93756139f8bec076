//! Page sizes a résumé is commonly printed on.
//!
//! All sizes are provided in portrait orientation as (width, height).
//!
//! ```
//! use resume_gen::pagesize::{LETTER, A4};
//!
//! assert!(LETTER.0 < LETTER.1);
//! assert!(A4.1 > LETTER.1);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// US Letter, 8.5in × 11in
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));

/// ISO A4, 210mm × 297mm (595.28 × 841.89 points)
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
