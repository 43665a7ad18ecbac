use derive_more::{Add, AddAssign, Display, From, Into, MulAssign, Sub, Sum};

/// A distance in PDF points (1/72 of an inch). This is the unit every layout
/// and drawing call works in; [In] and [Mm] exist for ergonomic construction
/// and convert losslessly into [Pt].
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, Sum, MulAssign,
    Display, From, Into,
)]
pub struct Pt(pub f32);

impl Pt {
    /// The larger of two distances
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    /// The smaller of two distances
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    /// Round down to a whole number of points
    pub fn floor(self) -> Pt {
        Pt(self.0.floor())
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl std::ops::Div<Pt> for Pt {
    type Output = Pt;

    fn div(self, rhs: Pt) -> Pt {
        Pt(self.0 / rhs.0)
    }
}

/// A distance in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, From, Into)]
pub struct In(pub f32);

/// A distance in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, From, Into)]
pub struct Mm(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(value.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Pt {
        Pt(value.0 * 72.0 / 25.4)
    }
}

impl From<In> for Mm {
    fn from(value: In) -> Mm {
        Mm(value.0 * 25.4)
    }
}

impl From<Mm> for In {
    fn from(value: Mm) -> In {
        In(value.0 / 25.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_units() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert_eq!(Pt::from(Mm(25.4)), Pt(72.0));
        assert_eq!(Mm::from(In(2.0)), Mm(50.8));
    }

    #[test]
    fn scalar_arithmetic() {
        assert_eq!(Pt(10.0) + Pt(4.0), Pt(14.0));
        assert_eq!(Pt(10.0) - Pt(4.0), Pt(6.0));
        assert_eq!(Pt(10.0) * 0.5, Pt(5.0));
        assert_eq!(Pt(10.0) / 2.0, Pt(5.0));
        assert_eq!(Pt(555.3).floor(), Pt(555.0));
    }
}
