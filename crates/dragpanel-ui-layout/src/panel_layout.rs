//! Size mapping for the draggable panel.
//!
//! The panel shrinks linearly from its full width at vertical offset `0` to
//! `shrink_ratio * max_width` at offset `1`, keeping a fixed aspect ratio. The
//! description pane follows it, right-anchored and stacked underneath.

use dragpanel_ui_graphics::{EdgeInsets, Point, Rect, Size};

/// Drag ranges cached from the first measurement pass.
///
/// These never change during a gesture; the panel rebuilds them only after a
/// detach.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelGeometry {
    /// Topmost legal panel top (the container's top padding).
    pub min_top: f32,
    /// Distance the panel top travels between maximized and minimized.
    pub vertical_range: f32,
    /// Length of the sideways track (`max_width + min_width`).
    pub horizontal_range: f32,
    /// Panel width in its minimized form.
    pub min_width: f32,
    /// Panel width in its maximized form.
    pub max_width: f32,
}

impl PanelGeometry {
    /// Converts a panel top into a vertical offset in `[0, 1]`.
    pub fn vertical_offset_for(&self, top: f32) -> f32 {
        if self.vertical_range <= 0.0 {
            return 0.0;
        }
        ((top - self.min_top) / self.vertical_range).clamp(0.0, 1.0)
    }

    /// Converts a panel left into a horizontal offset in `[0, 1]`.
    pub fn horizontal_offset_for(&self, left: f32) -> f32 {
        if self.horizontal_range <= 0.0 {
            return 0.0;
        }
        ((left + self.min_width) / self.horizontal_range)
            .abs()
            .clamp(0.0, 1.0)
    }

    /// Panel top for a vertical offset.
    pub fn top_for(&self, vertical_offset: f32) -> f32 {
        self.min_top + vertical_offset.clamp(0.0, 1.0) * self.vertical_range
    }

    /// Panel left for a horizontal offset, measured from `-player_width`.
    pub fn left_for(&self, horizontal_offset: f32, player_width: f32) -> f32 {
        -player_width + horizontal_offset.clamp(0.0, 1.0) * self.horizontal_range
    }
}

/// Maps the vertical offset to panel and description placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelLayout {
    shrink_ratio: f32,
    aspect_ratio: f32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SHRINK_RATIO, Self::VIDEO_ASPECT_RATIO)
    }
}

impl PanelLayout {
    /// Fraction of the full width kept when minimized.
    pub const DEFAULT_SHRINK_RATIO: f32 = 0.5;
    /// Width over height of the panel content.
    pub const VIDEO_ASPECT_RATIO: f32 = 16.0 / 9.0;

    pub fn new(shrink_ratio: f32, aspect_ratio: f32) -> Self {
        Self {
            shrink_ratio,
            aspect_ratio,
        }
    }

    pub fn shrink_ratio(&self) -> f32 {
        self.shrink_ratio
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Panel width at `vertical_offset`.
    #[inline]
    pub fn player_width(&self, vertical_offset: f32, max_width: f32) -> f32 {
        let offset = vertical_offset.clamp(0.0, 1.0);
        max_width * (1.0 - offset * (1.0 - self.shrink_ratio))
    }

    /// Panel size at `vertical_offset`; height follows the aspect ratio.
    pub fn player_size(&self, vertical_offset: f32, max_width: f32) -> Size {
        let width = self.player_width(vertical_offset, max_width);
        Size::new(width, width / self.aspect_ratio)
    }

    /// Right-anchored left edge shared by the panel and its description.
    pub fn anchored_left(&self, container_width: f32, padding: EdgeInsets, width: f32) -> f32 {
        container_width - padding.horizontal_sum() - width
    }

    /// Description origin: same left edge as the panel, directly below it.
    pub fn description_origin(&self, player: Rect) -> Point {
        Point::new(player.x, player.bottom())
    }
}

#[cfg(test)]
#[path = "tests/panel_layout_tests.rs"]
mod tests;
