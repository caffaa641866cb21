use dragpanel_animation::SettleSpec;
use dragpanel_foundation::{DRAG_THRESHOLD, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY};
use dragpanel_ui_layout::PanelLayout;

use crate::PanelError;

/// Lowest opacity the panel was ever meant to fade to.
///
/// Kept for hosts that fade the panel themselves; the controller never
/// applies it.
pub const MIN_PLAYER_ALPHA: f32 = 0.2;

/// Tunables for a [`DragPanel`](crate::DragPanel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    /// Fraction of the full width kept when minimized. Also drives the
    /// sideways dismissal thresholds.
    pub shrink_ratio: f32,
    /// Width over height of the panel.
    pub aspect_ratio: f32,
    /// Travel separating a tap from a drag, in logical pixels.
    pub touch_slop: f32,
    pub min_fling_velocity: f32,
    pub max_fling_velocity: f32,
    pub settle: SettleSpec,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            shrink_ratio: PanelLayout::DEFAULT_SHRINK_RATIO,
            aspect_ratio: PanelLayout::VIDEO_ASPECT_RATIO,
            touch_slop: DRAG_THRESHOLD,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
            settle: SettleSpec::default(),
        }
    }
}

impl PanelConfig {
    pub fn with_shrink_ratio(mut self, shrink_ratio: f32) -> Self {
        self.shrink_ratio = shrink_ratio;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_fling_velocity(mut self, min: f32, max: f32) -> Self {
        self.min_fling_velocity = min;
        self.max_fling_velocity = max;
        self
    }

    pub fn with_settle(mut self, settle: SettleSpec) -> Self {
        self.settle = settle;
        self
    }

    pub fn validate(&self) -> Result<(), PanelError> {
        if !(self.shrink_ratio > 0.0 && self.shrink_ratio < 1.0) {
            return Err(PanelError::InvalidShrinkRatio(self.shrink_ratio));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(PanelError::InvalidAspectRatio(self.aspect_ratio));
        }
        if !(self.touch_slop.is_finite() && self.touch_slop >= 0.0) {
            return Err(PanelError::InvalidTouchSlop(self.touch_slop));
        }
        Ok(())
    }

    pub(crate) fn layout(&self) -> PanelLayout {
        PanelLayout::new(self.shrink_ratio, self.aspect_ratio)
    }
}
