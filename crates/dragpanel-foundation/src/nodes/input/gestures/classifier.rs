//! Axis classification for a single press/drag/release sequence.
//!
//! The classifier only remembers where the pointer went down. The locked axis
//! belongs to the caller (it outlives the gesture until the settle finishes),
//! so every query takes the current lock and returns the resolved one.

use dragpanel_ui_graphics::Point;
use dragpanel_ui_layout::Axis;

/// How a pointer-up ended the gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerRelease {
    /// Total travel stayed under the slop and no axis was locked.
    Tap,
    /// The gesture was locked to an axis before release.
    Drag(Axis),
    /// Travelled past the slop without any move sample locking an axis.
    Unresolved,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureClassifier {
    down: Point,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_down(&mut self, position: Point) {
        self.down = position;
    }

    pub fn down_position(&self) -> Point {
        self.down
    }

    /// Resolves the axis for a move sample. An existing lock is returned
    /// unchanged; otherwise the axis locks once travel reaches `slop`.
    pub fn on_move(&self, position: Point, slop: f32, locked: Option<Axis>) -> Option<Axis> {
        if locked.is_some() {
            return locked;
        }
        let axis = resolve_axis(self.down, position, slop);
        if let Some(axis) = axis {
            log::debug!(
                "gesture locked to {axis:?} after travelling {:.1}",
                self.down.distance_to(position)
            );
        }
        axis
    }

    pub fn on_up(&self, position: Point, slop: f32, locked: Option<Axis>) -> PointerRelease {
        match locked {
            Some(axis) => PointerRelease::Drag(axis),
            None if self.down.distance_to(position) < slop => PointerRelease::Tap,
            None => PointerRelease::Unresolved,
        }
    }
}

/// `Vertical` when `dy >= dx`, so a perfect diagonal locks vertically.
pub fn resolve_axis(down: Point, current: Point, slop: f32) -> Option<Axis> {
    let dx = (current.x - down.x).abs();
    let dy = (current.y - down.y).abs();
    if (dx * dx + dy * dy).sqrt() < slop {
        return None;
    }
    if dy >= dx {
        Some(Axis::Vertical)
    } else {
        Some(Axis::Horizontal)
    }
}
