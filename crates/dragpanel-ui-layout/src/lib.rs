//! Layout contracts & policies for dragpanel

mod axis;
mod clamp;
mod constraints;
mod panel_layout;

pub use axis::*;
pub use clamp::*;
pub use constraints::*;
pub use panel_layout::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::clamp::RangeClamp;
    pub use crate::constraints::Constraints;
    pub use crate::panel_layout::{PanelGeometry, PanelLayout};
}
