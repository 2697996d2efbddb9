//! Safe bounding box types and functions.

mod common;

pub use rect::*;
pub mod rect;

pub use tlbr::*;
pub mod tlbr;

pub use tlhw::*;
pub mod tlhw;

pub use circle::*;
pub mod circle;

pub mod prelude {
    pub use crate::rect::{Rect, RectNum};
}
