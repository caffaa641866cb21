//! Pure geometry data for dragpanel
//!
//! Points, sizes, rectangles and edge insets used by the layout, gesture and
//! panel crates. Everything here is `Copy` and allocation free.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
