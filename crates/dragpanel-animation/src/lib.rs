//! Animation support for dragpanel
//!
//! Time-based settle interpolation between two panel positions, the easing
//! curves it uses, and the clocks that feed it frame times.

mod clock;
mod easing;
mod settle;

pub use clock::*;
pub use easing::*;
pub use settle::*;

pub mod prelude {
    pub use crate::clock::{AnimationClock, ManualClock, SystemClock};
    pub use crate::easing::Easing;
    pub use crate::settle::{SettleAnimation, SettleSpec};
}
