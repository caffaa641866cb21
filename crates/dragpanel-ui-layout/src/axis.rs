/// Axis a drag gesture is locked to.
///
/// A gesture that has not yet travelled past the touch slop has no axis; the
/// panel models that as `Option<Axis>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Sideways drag, only honoured while the panel is minimized.
    Horizontal,

    /// Up/down drag between the maximized and minimized forms.
    Vertical,
}

