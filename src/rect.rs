use crate::units::*;

/// An axis-aligned box in page space: `(x1, y1)` is the lower-left corner and
/// `(x2, y2)` the upper-right one. Link hot spots and the sidebar band are `Rect`s.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x1: Pt,
    pub y1: Pt,
    pub x2: Pt,
    pub y2: Pt,
}

impl Rect {
    /// Create a rectangle from its lower-left corner and its size
    pub fn from_origin(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(Rect { x1, y1, x2, y2 }: Rect) -> Self {
        pdf_writer::Rect::new(x1.0, y1.0, x2.0, y2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_and_size_give_the_corners() {
        let rect = Rect::from_origin(Pt(10.0), Pt(20.0), Pt(30.0), Pt(5.0));
        assert_eq!(rect.x2, Pt(40.0));
        assert_eq!(rect.y2, Pt(25.0));
        assert_eq!(rect.width(), Pt(30.0));
        assert_eq!(rect.height(), Pt(5.0));
    }
}
