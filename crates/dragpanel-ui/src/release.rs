//! Release decisions: where the panel settles when the pointer lets go.

use dragpanel_foundation::Velocity;
use dragpanel_ui_graphics::Point;
use dragpanel_ui_layout::Axis;

use crate::state::{DisappearDirection, PanelState};

/// Horizontal offsets derived from the shrink ratio `R`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseThresholds {
    /// `1 / (1 + R)`: where a minimized panel rests on the sideways track.
    pub rest_offset: f32,
    /// `(4 - R) / (4 + 4R)`: a leftward fling below this dismisses.
    pub left_disappear_offset: f32,
    /// `(4 + R) / (4 + 4R)`: a rightward fling above this dismisses.
    pub right_disappear_offset: f32,
}

impl ReleaseThresholds {
    pub fn for_shrink_ratio(ratio: f32) -> Self {
        Self {
            rest_offset: 1.0 / (1.0 + ratio),
            left_disappear_offset: (4.0 - ratio) / (4.0 + 4.0 * ratio),
            right_disappear_offset: (4.0 + ratio) / (4.0 + 4.0 * ratio),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    Maximize,
    Minimize,
    SlideLeft,
    SlideRight,
    /// Back to the rest offset on the sideways track.
    Restore,
    /// No axis applies; settle where the panel already is.
    Stay,
}

impl SettleOutcome {
    pub fn disappear_direction(self) -> DisappearDirection {
        match self {
            SettleOutcome::SlideLeft => DisappearDirection::Left,
            SettleOutcome::SlideRight => DisappearDirection::Right,
            _ => DisappearDirection::Restore,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleDecision {
    pub outcome: SettleOutcome,
    /// Panel origin to settle at, in container pixels.
    pub target: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseResolver {
    shrink_ratio: f32,
    thresholds: ReleaseThresholds,
}

impl ReleaseResolver {
    pub fn new(shrink_ratio: f32) -> Self {
        Self {
            shrink_ratio,
            thresholds: ReleaseThresholds::for_shrink_ratio(shrink_ratio),
        }
    }

    pub fn thresholds(&self) -> &ReleaseThresholds {
        &self.thresholds
    }

    /// Decides the outcome for the locked axis and release velocity.
    ///
    /// A vertical release with no velocity at exactly half way minimizes.
    /// Sideways dismissal needs both the position past its threshold
    /// (strictly) and a fling in the same direction.
    pub fn outcome(&self, state: &PanelState, velocity: Velocity) -> SettleOutcome {
        match state.drag_axis() {
            Some(Axis::Vertical) => {
                let v = velocity.y;
                if v > 0.0 || (v == 0.0 && state.vertical_offset() >= 0.5) {
                    SettleOutcome::Minimize
                } else {
                    SettleOutcome::Maximize
                }
            }
            Some(Axis::Horizontal) if state.is_minimized() => {
                let v = velocity.x;
                let offset = state.horizontal_offset();
                if offset < self.thresholds.left_disappear_offset && v < 0.0 {
                    SettleOutcome::SlideLeft
                } else if offset > self.thresholds.right_disappear_offset && v > 0.0 {
                    SettleOutcome::SlideRight
                } else {
                    SettleOutcome::Restore
                }
            }
            _ => SettleOutcome::Stay,
        }
    }

    /// Pixel origin for `outcome`. `player_width` is the panel's current
    /// width, which anchors the sideways track.
    pub fn target(
        &self,
        outcome: SettleOutcome,
        state: &PanelState,
        padding_left: f32,
        player_width: f32,
    ) -> Point {
        let geometry = state.geometry();
        match outcome {
            SettleOutcome::Maximize => Point::new(padding_left, geometry.top_for(0.0)),
            SettleOutcome::Minimize => Point::new(
                geometry.max_width * (1.0 - self.shrink_ratio),
                geometry.top_for(1.0),
            ),
            SettleOutcome::SlideLeft => Point::new(geometry.left_for(0.0, player_width), state.top()),
            SettleOutcome::SlideRight => {
                Point::new(geometry.left_for(1.0, player_width), state.top())
            }
            SettleOutcome::Restore => Point::new(
                geometry.left_for(self.thresholds.rest_offset, player_width),
                state.top(),
            ),
            SettleOutcome::Stay => Point::new(state.left(), state.top()),
        }
    }

    pub fn resolve(
        &self,
        state: &PanelState,
        velocity: Velocity,
        padding_left: f32,
        player_width: f32,
    ) -> SettleDecision {
        let outcome = self.outcome(state, velocity);
        SettleDecision {
            outcome,
            target: self.target(outcome, state, padding_left, player_width),
        }
    }
}

#[cfg(test)]
#[path = "tests/release_tests.rs"]
mod tests;
