#[derive(Debug, Clone, PartialEq)]
pub enum PanelError {
    /// The container must manage exactly two children.
    ChildCount { found: usize },
    /// Shrink ratio outside `(0, 1)`.
    InvalidShrinkRatio(f32),
    /// Aspect ratio not finite and positive.
    InvalidAspectRatio(f32),
    /// Touch slop negative or not finite.
    InvalidTouchSlop(f32),
}

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelError::ChildCount { found } => {
                write!(f, "drag panel must contain exactly 2 children, found {found}")
            }
            PanelError::InvalidShrinkRatio(ratio) => {
                write!(f, "shrink ratio {ratio} is outside (0, 1)")
            }
            PanelError::InvalidAspectRatio(ratio) => {
                write!(f, "aspect ratio {ratio} must be finite and positive")
            }
            PanelError::InvalidTouchSlop(slop) => {
                write!(f, "touch slop {slop} must be finite and non-negative")
            }
        }
    }
}

impl std::error::Error for PanelError {}
