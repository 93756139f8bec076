//! Typed lengths. All layout happens in PDF points (1/72 of an inch).

use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

/// A length in PDF points
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
    Deref,
)]
#[display("{_0}")]
pub struct Pt(pub f32);

/// A length in inches, mostly for specifying margins and page sizes by hand
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into, Deref)]
#[display("{_0}in")]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl Pt {
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Mul<Pt> for f32 {
    type Output = Pt;

    fn mul(self, rhs: Pt) -> Pt {
        Pt(self * rhs.0)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_convert_to_points() {
        assert_eq!(Pt::from(In(0.25)), Pt(18.0));
        assert_eq!(Pt::from(In(8.5)), Pt(612.0));
    }

    #[test]
    fn arithmetic_stays_in_points() {
        let mut p = Pt(10.0) + Pt(4.0) - Pt(2.0);
        p += Pt(1.0);
        assert_eq!(p, Pt(13.0));
        assert_eq!(p * 2.0, Pt(26.0));
        assert_eq!(Pt(12.0) / Pt(4.0), 3.0);
        assert_eq!([Pt(1.0), Pt(2.0)].into_iter().sum::<Pt>(), Pt(3.0));
    }
}
