//! Foundation elements for dragpanel: pointer input, gesture classification
//! and the drag capture/settle engine.

pub mod drag_helper;
pub mod gesture_constants;
pub mod nodes;
pub mod velocity_tracker;

pub use drag_helper::{DragCallbacks, DragHelper, DragState, SettlingAnimator};
pub use gesture_constants::*;
pub use nodes::input::gestures::{GestureClassifier, PointerRelease};
pub use nodes::input::{PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::{Velocity, VelocityTracker, VelocityTracker1D};

pub mod prelude {
    pub use crate::drag_helper::{DragCallbacks, DragHelper, DragState, SettlingAnimator};
    pub use crate::gesture_constants::*;
    pub use crate::nodes::input::gestures::{GestureClassifier, PointerRelease};
    pub use crate::nodes::input::prelude::*;
    pub use crate::velocity_tracker::Velocity;
}
