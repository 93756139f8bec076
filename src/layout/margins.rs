use crate::units::Pt;

/// Margins around the drawable region of a page. Nothing stops content from being
/// placed outside of them; they are guidelines for the layout engine and are also
/// written out as the `ArtBox` of each page.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }

    /// Horizontal space left between the margins on a page `page_width` wide
    pub fn usable_width(&self, page_width: Pt) -> Pt {
        page_width - self.left - self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::In;

    #[test]
    fn usable_width_subtracts_both_sides() {
        let margins = Margins {
            left: In(0.5).into(),
            ..Margins::all(In(0.25))
        };
        assert_eq!(margins.top, Pt(18.0));
        assert_eq!(margins.usable_width(Pt(612.0)), Pt(558.0));
    }
}
