//! Pointer capture and settle engine.
//!
//! [`SettlingAnimator`] is the contract the panel controller drives: it feeds
//! pointer events and animation frames in, and receives capture, clamp,
//! position, release and state notifications back through a
//! [`DragCallbacks`] record. [`DragHelper`] is the reference implementation.
//!
//! The callback record is a plain table of function values. The owner's
//! state is passed explicitly on every call, so the animator never holds a
//! reference into its owner and no trait objects are involved.
//!
//! # State machine
//!
//! ```text
//! Idle --capture--> Dragging --release--> Settling --finished--> Idle
//!                       ^                     |
//!                       +------capture--------+
//! ```
//!
//! A capture during `Settling` drops the animation where it is and goes
//! straight to `Dragging`; the owner sees no `Idle` in between. Only
//! [`SettlingAnimator::abort`] jumps to the settle target.

use dragpanel_animation::{AnimationClock, SettleAnimation, SettleSpec, SystemClock};
use dragpanel_ui_graphics::{Point, Rect};

use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY};
use crate::nodes::input::{PointerEvent, PointerEventKind, PointerId};
use crate::velocity_tracker::{Velocity, VelocityTracker};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    /// Nothing captured and nothing animating.
    Idle,
    /// A pointer is moving the captured child.
    Dragging,
    /// The captured child is animating toward a settle target.
    Settling,
}

/// Capabilities the animator calls back into, over owner state `S`.
pub struct DragCallbacks<S> {
    /// Whether a press at the given point captures the draggable child.
    pub try_capture: fn(&S, Point) -> bool,
    /// Current top-left of the captured child.
    pub captured_origin: fn(&S) -> Point,
    /// Legal vertical travel; zero when the axis is not draggable.
    pub vertical_range: fn(&S) -> f32,
    /// Legal horizontal travel; zero when the axis is not draggable.
    pub horizontal_range: fn(&S) -> f32,
    /// Bounds a proposed top.
    pub clamp_vertical: fn(&S, f32) -> f32,
    /// Bounds a proposed left.
    pub clamp_horizontal: fn(&S, f32) -> f32,
    /// The child moved to the given origin by the given delta.
    pub on_position_changed: fn(&mut S, Point, Point),
    /// The pointer let go while dragging; returns where to settle.
    pub on_released: fn(&mut S, Velocity) -> Point,
    pub on_state_changed: fn(&mut S, DragState),
}

impl<S> Clone for DragCallbacks<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for DragCallbacks<S> {}

/// Capture/settle collaborator driven by the panel controller.
pub trait SettlingAnimator {
    fn state(&self) -> DragState;

    /// Travel distance separating a tap from a drag.
    fn touch_slop(&self) -> f32;

    /// Hit test of a child's frame.
    fn is_point_under(&self, frame: Rect, point: Point) -> bool {
        frame.contains(point.x, point.y)
    }

    /// Whether the owner should take over the pointer stream.
    fn should_intercept_touch<S>(
        &mut self,
        event: &PointerEvent,
        owner: &mut S,
        callbacks: &DragCallbacks<S>,
    ) -> bool;

    fn process_touch<S>(&mut self, event: &PointerEvent, owner: &mut S, callbacks: &DragCallbacks<S>);

    /// Starts a settle toward `target`. Returns `false` when already there,
    /// in which case the animator reports `Idle` immediately.
    fn smooth_slide_to<S>(&mut self, owner: &mut S, callbacks: &DragCallbacks<S>, target: Point)
        -> bool;

    /// Advances an in-flight settle by one frame. Returns whether more
    /// frames are needed.
    fn continue_settling<S>(&mut self, owner: &mut S, callbacks: &DragCallbacks<S>) -> bool;

    /// Ends any settle at its target and reports `Idle`.
    fn abort<S>(&mut self, owner: &mut S, callbacks: &DragCallbacks<S>);
}

/// Reference [`SettlingAnimator`] with slop, fling bounds and eased settles.
pub struct DragHelper<C: AnimationClock = SystemClock> {
    clock: C,
    spec: SettleSpec,
    touch_slop: f32,
    min_velocity: f32,
    max_velocity: f32,
    drag_state: DragState,
    active_pointer: Option<PointerId>,
    last_position: Point,
    tracker: VelocityTracker,
    settle: Option<SettleAnimation>,
}

impl Default for DragHelper<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: AnimationClock> DragHelper<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            spec: SettleSpec::default(),
            touch_slop: DRAG_THRESHOLD,
            min_velocity: MIN_FLING_VELOCITY,
            max_velocity: MAX_FLING_VELOCITY,
            drag_state: DragState::Idle,
            active_pointer: None,
            last_position: Point::ZERO,
            tracker: VelocityTracker::new(),
            settle: None,
        }
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_settle_spec(mut self, spec: SettleSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn with_velocity_bounds(mut self, min: f32, max: f32) -> Self {
        self.min_velocity = min;
        self.max_velocity = max;
        self
    }

    /// Target of the in-flight settle, if any.
    pub fn settle_target(&self) -> Option<Point> {
        self.settle.map(|settle| settle.target())
    }

    fn set_drag_state<S>(&mut self, state: DragState, owner: &mut S, callbacks: &DragCallbacks<S>) {
        if self.drag_state == state {
            return;
        }
        log::debug!("drag state {:?} -> {:?}", self.drag_state, state);
        self.drag_state = state;
        if state != DragState::Settling {
            self.settle = None;
        }
        (callbacks.on_state_changed)(owner, state);
    }

    fn try_capture<S>(&mut self, event: &PointerEvent, owner: &mut S, callbacks: &DragCallbacks<S>) -> bool {
        if !(callbacks.try_capture)(owner, event.position) {
            return false;
        }
        if self.drag_state == DragState::Settling {
            // Caught mid-flight: the child stays where the last frame put it.
            log::debug!(
                "settle toward {:?} dropped at {:?}",
                self.settle_target(),
                (callbacks.captured_origin)(owner)
            );
            self.settle = None;
        }
        self.active_pointer = Some(event.id);
        self.set_drag_state(DragState::Dragging, owner, callbacks);
        true
    }

    fn drag_by<S>(&mut self, delta: Point, owner: &mut S, callbacks: &DragCallbacks<S>) {
        let origin = (callbacks.captured_origin)(owner);
        let left = (callbacks.clamp_horizontal)(owner, origin.x + delta.x);
        let top = (callbacks.clamp_vertical)(owner, origin.y + delta.y);
        let clamped = Point::new(left, top);
        if clamped != origin {
            (callbacks.on_position_changed)(owner, clamped, clamped - origin);
        }
    }

    fn release<S>(&mut self, velocity: Velocity, owner: &mut S, callbacks: &DragCallbacks<S>) {
        let velocity = velocity.clamp_magnitude(self.min_velocity, self.max_velocity);
        log::debug!("released with velocity {velocity:?}");
        let target = (callbacks.on_released)(owner, velocity);
        self.smooth_slide_to(owner, callbacks, target);
        if self.drag_state == DragState::Dragging {
            self.set_drag_state(DragState::Idle, owner, callbacks);
        }
    }

    fn end_pointer(&mut self) {
        self.active_pointer = None;
        self.tracker.reset();
    }
}

impl<C: AnimationClock> SettlingAnimator for DragHelper<C> {
    fn state(&self) -> DragState {
        self.drag_state
    }

    fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    fn should_intercept_touch<S>(
        &mut self,
        event: &PointerEvent,
        owner: &mut S,
        callbacks: &DragCallbacks<S>,
    ) -> bool {
        match event.kind {
            // A press on a settling child grabs it mid-flight.
            PointerEventKind::Down if self.drag_state == DragState::Settling => {
                self.tracker.reset();
                self.tracker.add_position(event.uptime_millis, event.position);
                self.last_position = event.position;
                self.try_capture(event, owner, callbacks);
            }
            PointerEventKind::Up | PointerEventKind::Cancel
                if self.drag_state != DragState::Dragging =>
            {
                self.end_pointer();
            }
            _ => {}
        }
        self.drag_state == DragState::Dragging
    }

    fn process_touch<S>(&mut self, event: &PointerEvent, owner: &mut S, callbacks: &DragCallbacks<S>) {
        match event.kind {
            PointerEventKind::Down => {
                self.tracker.reset();
                self.tracker.add_position(event.uptime_millis, event.position);
                self.last_position = event.position;
                if self.drag_state != DragState::Dragging {
                    self.try_capture(event, owner, callbacks);
                }
            }
            PointerEventKind::Move => {
                if self.drag_state != DragState::Dragging || self.active_pointer != Some(event.id) {
                    return;
                }
                self.tracker.add_position(event.uptime_millis, event.position);
                let delta = event.position - self.last_position;
                self.last_position = event.position;
                self.drag_by(delta, owner, callbacks);
            }
            PointerEventKind::Up => {
                if self.drag_state == DragState::Dragging && self.active_pointer == Some(event.id) {
                    self.tracker.add_position(event.uptime_millis, event.position);
                    let velocity = self.tracker.calculate_velocity();
                    self.release(velocity, owner, callbacks);
                }
                self.end_pointer();
            }
            PointerEventKind::Cancel => {
                if self.drag_state == DragState::Dragging {
                    self.release(Velocity::ZERO, owner, callbacks);
                }
                self.end_pointer();
            }
        }
    }

    fn smooth_slide_to<S>(
        &mut self,
        owner: &mut S,
        callbacks: &DragCallbacks<S>,
        target: Point,
    ) -> bool {
        let start = (callbacks.captured_origin)(owner);
        let delta = target - start;
        if delta == Point::ZERO {
            self.settle = None;
            if self.drag_state == DragState::Idle {
                // Nothing moves, but the owner still gets its completion.
                (callbacks.on_state_changed)(owner, DragState::Idle);
            } else {
                self.set_drag_state(DragState::Idle, owner, callbacks);
            }
            return false;
        }

        let ranges = (
            (callbacks.horizontal_range)(owner),
            (callbacks.vertical_range)(owner),
        );
        let duration = self.spec.duration_for(delta, ranges);
        log::debug!("settling {start:?} -> {target:?} over {duration}ms");
        self.settle = Some(SettleAnimation::new(
            start,
            target,
            self.clock.now_millis(),
            duration,
            self.spec.easing,
        ));
        self.active_pointer = None;
        if self.drag_state == DragState::Settling {
            return true;
        }
        self.drag_state = DragState::Settling;
        (callbacks.on_state_changed)(owner, DragState::Settling);
        true
    }

    fn continue_settling<S>(&mut self, owner: &mut S, callbacks: &DragCallbacks<S>) -> bool {
        if self.drag_state != DragState::Settling {
            return false;
        }
        let Some(settle) = self.settle else {
            self.set_drag_state(DragState::Idle, owner, callbacks);
            return false;
        };

        let now = self.clock.now_millis();
        let position = settle.value_at(now);
        let origin = (callbacks.captured_origin)(owner);
        if position != origin {
            log::trace!("settle frame at {now}ms: {position:?}");
            (callbacks.on_position_changed)(owner, position, position - origin);
        }

        if settle.is_finished(now) {
            self.set_drag_state(DragState::Idle, owner, callbacks);
            return false;
        }
        true
    }

    fn abort<S>(&mut self, owner: &mut S, callbacks: &DragCallbacks<S>) {
        if let Some(settle) = self.settle.take() {
            let origin = (callbacks.captured_origin)(owner);
            let target = settle.target();
            if target != origin {
                (callbacks.on_position_changed)(owner, target, target - origin);
            }
        }
        self.set_drag_state(DragState::Idle, owner, callbacks);
    }
}

#[cfg(test)]
#[path = "tests/drag_helper_tests.rs"]
mod tests;
