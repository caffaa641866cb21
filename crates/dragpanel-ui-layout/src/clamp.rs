//! Drag range clamping.
//!
//! Proposed coordinates are always saturated into the legal range, never
//! rejected. When the gesture is locked to the other axis (or the panel is
//! not minimized, for sideways drags) the current coordinate is returned
//! unchanged so the drag has no effect on that axis.

use crate::{Axis, PanelGeometry};

/// Bounds proposed panel coordinates for the currently locked axis.
#[derive(Clone, Copy, Debug)]
pub struct RangeClamp<'a> {
    geometry: &'a PanelGeometry,
    axis: Option<Axis>,
    minimized: bool,
}

impl<'a> RangeClamp<'a> {
    pub fn new(geometry: &'a PanelGeometry, axis: Option<Axis>, minimized: bool) -> Self {
        Self {
            geometry,
            axis,
            minimized,
        }
    }

    /// Vertical travel available to the drag, zero unless locked vertically.
    pub fn vertical_range(&self) -> f32 {
        if self.axis == Some(Axis::Vertical) {
            self.geometry.vertical_range
        } else {
            0.0
        }
    }

    /// Horizontal travel available to the drag, zero unless locked
    /// horizontally on a minimized panel.
    pub fn horizontal_range(&self) -> f32 {
        if self.horizontal_active() {
            self.geometry.horizontal_range
        } else {
            0.0
        }
    }

    /// Clamps `proposed_top` into `[min_top, min_top + vertical_range]`.
    pub fn vertical(&self, proposed_top: f32, current_top: f32) -> f32 {
        if self.axis != Some(Axis::Vertical) {
            return current_top;
        }
        let top_bound = self.geometry.min_top;
        let bottom_bound = top_bound + self.geometry.vertical_range;
        let clamped = proposed_top.max(top_bound).min(bottom_bound);
        log::trace!("clamp vertical {proposed_top} -> {clamped}");
        clamped
    }

    /// Clamps `proposed_left` into `[-player_width, -player_width + horizontal_range]`.
    pub fn horizontal(&self, proposed_left: f32, current_left: f32, player_width: f32) -> f32 {
        if !self.horizontal_active() {
            return current_left;
        }
        let left_bound = -player_width;
        let right_bound = left_bound + self.geometry.horizontal_range;
        let clamped = proposed_left.max(left_bound).min(right_bound);
        log::trace!("clamp horizontal {proposed_left} -> {clamped}");
        clamped
    }

    fn horizontal_active(&self) -> bool {
        self.minimized && self.axis == Some(Axis::Horizontal)
    }
}

#[cfg(test)]
#[path = "tests/clamp_tests.rs"]
mod tests;
