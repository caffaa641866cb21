use dragpanel_ui_graphics::{Rect, Size};
use dragpanel_ui_layout::Constraints;

/// One of the two children a [`DragPanel`](crate::DragPanel) manages.
///
/// The first child is the draggable panel and is always measured with tight
/// constraints; the second is the description pane and gets the container's
/// constraints minus padding.
pub trait PanelChild {
    fn measure(&mut self, constraints: Constraints) -> Size;

    fn place(&mut self, frame: Rect);
}
