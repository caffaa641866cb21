//! Gesture-driven panel controller.
//!
//! [`DragPanel`] manages two children: a panel that can be dragged between a
//! maximized form and a small corner form, and a description pane that
//! follows it. While minimized the panel can be flung sideways to dismiss it.
//! The controller turns pointer samples into a locked drag axis, clamps the
//! panel into its legal range, resizes it along the way and, on release,
//! decides where it settles.

mod child;
mod config;
mod error;
mod listener;
mod panel;
mod release;
mod state;

pub use child::PanelChild;
pub use config::{PanelConfig, MIN_PLAYER_ALPHA};
pub use error::PanelError;
pub use listener::{DisappearListener, DisappearSide};
pub use panel::DragPanel;
pub use release::{ReleaseResolver, ReleaseThresholds, SettleDecision, SettleOutcome};
pub use state::{DisappearDirection, PanelState};

pub use dragpanel_foundation::{DragState, PointerEvent, PointerEventKind};
pub use dragpanel_ui_layout::Axis;

pub mod prelude {
    pub use crate::{
        DisappearListener, DisappearSide, DragPanel, PanelChild, PanelConfig, PanelError,
    };
    pub use dragpanel_foundation::prelude::*;
    pub use dragpanel_ui_graphics::prelude::*;
    pub use dragpanel_ui_layout::{Axis, Constraints};
}
