//! Drives a [`DragPanel`](dragpanel_ui::DragPanel) through a scripted
//! sequence of gestures and reports what the host would have seen.

pub mod session;

pub use session::{Session, SessionReport, Viewport};
