//! A rectangle tagged with a class.

use bbox::Rect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label<R, C>
where
    R: Rect,
{
    pub rect: R,
    pub class: C,
}

impl<R, C> Label<R, C>
where
    R: Rect,
{
    pub fn new(rect: R, class: C) -> Self {
        Self { rect, class }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbox::{RectNum, TLHW};

    #[test]
    fn label_keeps_rect_and_class() {
        let label = Label::new(TLHW::from_tlhw([2.5, 4.9, 6.0, 8.0]), "pore");

        assert_eq!(label.class, "pore");
        assert_eq!(label.rect.tlbr(), [2.5, 4.9, 8.5, 12.9]);
    }
}
