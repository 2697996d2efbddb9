use super::Rect;
use crate::common::*;

/// Bounding box in TLHW format.
///
/// The height and width are stored as given, so they and the center do
/// not pick up rounding from the corner position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TLHW<T> {
    pub(crate) t: T,
    pub(crate) l: T,
    pub(crate) h: T,
    pub(crate) w: T,
}

impl<T> Rect for TLHW<T>
where
    T: Copy + Num + PartialOrd,
{
    type Type = T;

    fn t(&self) -> Self::Type {
        self.t
    }

    fn l(&self) -> Self::Type {
        self.l
    }

    fn b(&self) -> Self::Type {
        self.t + self.h
    }

    fn r(&self) -> Self::Type {
        self.l + self.w
    }

    fn cy(&self) -> Self::Type {
        let two = T::one() + T::one();
        self.t + self.h / two
    }

    fn cx(&self) -> Self::Type {
        let two = T::one() + T::one();
        self.l + self.w / two
    }

    fn h(&self) -> Self::Type {
        self.h
    }

    fn w(&self) -> Self::Type {
        self.w
    }

    fn try_from_tlbr(tlbr: [Self::Type; 4]) -> Result<Self> {
        let [t, l, b, r] = tlbr;
        ensure!(b >= t && r >= l, "b >= t and r >= l must hold");

        Ok(Self {
            t,
            l,
            h: b - t,
            w: r - l,
        })
    }

    fn try_from_tlhw(tlhw: [Self::Type; 4]) -> Result<Self> {
        let [t, l, h, w] = tlhw;
        let zero = T::zero();
        ensure!(h >= zero && w >= zero, "h and w must be non-negative");

        Ok(Self { t, l, h, w })
    }
}
