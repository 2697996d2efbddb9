use super::Rect;
use crate::common::*;

/// Circle described by its center and diameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Circle<T> {
    pub(crate) cy: T,
    pub(crate) cx: T,
    pub(crate) d: T,
}

impl<T> Circle<T> {
    pub fn try_cast<V>(self) -> Option<Circle<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        Some(Circle {
            cy: V::from(self.cy)?,
            cx: V::from(self.cx)?,
            d: V::from(self.d)?,
        })
    }
}

impl<T> Circle<T>
where
    T: Copy + Num + PartialOrd,
{
    /// The circle centered in `rect` whose diameter is the rect width.
    ///
    /// The height only moves the center. A zero-width rect gives a
    /// zero-diameter circle.
    pub fn from_rect_width<R>(rect: &R) -> Self
    where
        R: Rect<Type = T>,
    {
        Self {
            cy: rect.cy(),
            cx: rect.cx(),
            d: rect.w(),
        }
    }

    pub fn cy(&self) -> T {
        self.cy
    }

    pub fn cx(&self) -> T {
        self.cx
    }

    pub fn diameter(&self) -> T {
        self.d
    }

    pub fn radius(&self) -> T {
        let two = T::one() + T::one();
        self.d / two
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RectNum, TLHW};
    use approx::assert_abs_diff_eq;

    #[test]
    fn circle_from_rect_width() {
        let rect = TLHW::from_tlhw([20.0, 10.0, 50.0, 100.0]);
        let circle = Circle::from_rect_width(&rect);

        assert_abs_diff_eq!(circle.cx(), 60.0);
        assert_abs_diff_eq!(circle.cy(), 45.0);
        assert_abs_diff_eq!(circle.diameter(), 100.0);
        assert_abs_diff_eq!(circle.radius(), 50.0);
    }

    #[test]
    fn height_does_not_change_diameter() {
        let tall = Circle::from_rect_width(&TLHW::from_tlhw([0.0, 0.0, 400.0, 30.0]));
        let flat = Circle::from_rect_width(&TLHW::from_tlhw([0.0, 0.0, 2.0, 30.0]));
        assert_eq!(tall.diameter(), flat.diameter());
    }

    #[test]
    fn zero_width_gives_zero_radius() {
        let circle = Circle::from_rect_width(&TLHW::from_tlhw([5.0, 5.0, 8.0, 0.0]));
        assert_eq!(circle.radius(), 0.0);
        assert_eq!(circle.try_cast::<i64>().unwrap().radius(), 0);
    }

    #[test]
    fn integer_radius_truncates() {
        let circle = Circle::from_rect_width(&TLHW::from_tlhw([0.0, 0.0, 1.0, 5.9]));
        let pixels = circle.try_cast::<i64>().unwrap();
        assert_eq!([pixels.cx(), pixels.diameter(), pixels.radius()], [2, 5, 2]);
    }
}
