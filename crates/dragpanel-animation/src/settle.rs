//! Settle animation: eased interpolation of a panel origin toward a target.

use dragpanel_ui_graphics::Point;

use crate::Easing;

/// Timing for settle animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleSpec {
    /// Duration of a settle that travels zero distance along a full range.
    pub base_duration_millis: u64,
    /// Upper bound for any settle.
    pub max_duration_millis: u64,
    pub easing: Easing,
}

impl Default for SettleSpec {
    fn default() -> Self {
        Self {
            base_duration_millis: 256,
            max_duration_millis: 600,
            easing: Easing::QuinticOut,
        }
    }
}

impl SettleSpec {
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_durations(mut self, base_millis: u64, max_millis: u64) -> Self {
        self.base_duration_millis = base_millis;
        self.max_duration_millis = max_millis;
        self
    }

    /// Duration for travelling `delta` along one axis whose drag range is
    /// `range`. A zero range (axis not draggable) gets the maximum.
    pub fn axis_duration(&self, delta: f32, range: f32) -> u64 {
        if delta == 0.0 {
            return 0;
        }
        if range <= 0.0 {
            return self.max_duration_millis;
        }
        let fraction = delta.abs() / range;
        let millis = (fraction + 1.0) * self.base_duration_millis as f32;
        (millis as u64).min(self.max_duration_millis)
    }

    /// Duration for a two-axis settle: per-axis durations weighted by how
    /// much of the travel each axis contributes.
    pub fn duration_for(&self, delta: Point, ranges: (f32, f32)) -> u64 {
        let abs_dx = delta.x.abs();
        let abs_dy = delta.y.abs();
        let total = abs_dx + abs_dy;
        if total == 0.0 {
            return 0;
        }
        let x_duration = self.axis_duration(delta.x, ranges.0) as f32;
        let y_duration = self.axis_duration(delta.y, ranges.1) as f32;
        (x_duration * (abs_dx / total) + y_duration * (abs_dy / total)) as u64
    }
}

/// A single in-flight settle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleAnimation {
    start: Point,
    target: Point,
    start_millis: u64,
    duration_millis: u64,
    easing: Easing,
}

impl SettleAnimation {
    pub fn new(
        start: Point,
        target: Point,
        start_millis: u64,
        duration_millis: u64,
        easing: Easing,
    ) -> Self {
        Self {
            start,
            target,
            start_millis,
            duration_millis,
            easing,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn duration_millis(&self) -> u64 {
        self.duration_millis
    }

    /// Linear time fraction at `now_millis`, saturated to `[0, 1]`.
    pub fn fraction_at(&self, now_millis: u64) -> f32 {
        if self.duration_millis == 0 {
            return 1.0;
        }
        let elapsed = now_millis.saturating_sub(self.start_millis);
        (elapsed as f32 / self.duration_millis as f32).min(1.0)
    }

    /// Eased position at `now_millis`; exactly `target` once finished.
    pub fn value_at(&self, now_millis: u64) -> Point {
        let fraction = self.fraction_at(now_millis);
        if fraction >= 1.0 {
            return self.target;
        }
        let eased = self.easing.transform(fraction);
        Point::new(
            lerp(self.start.x, self.target.x, eased),
            lerp(self.start.y, self.target.y, eased),
        )
    }

    pub fn is_finished(&self, now_millis: u64) -> bool {
        self.fraction_at(now_millis) >= 1.0
    }
}

#[inline]
fn lerp(from: f32, to: f32, fraction: f32) -> f32 {
    from + (to - from) * fraction
}

#[cfg(test)]
#[path = "tests/settle_tests.rs"]
mod tests;
