//! The panel controller: lifecycle glue between host layout, pointer input
//! and the settling animator.

use std::rc::Rc;

use dragpanel_animation::{AnimationClock, SystemClock};
use dragpanel_foundation::{
    DragCallbacks, DragHelper, DragState, GestureClassifier, PointerEvent, PointerEventKind,
    PointerRelease, SettlingAnimator, Velocity,
};
use dragpanel_ui_graphics::{EdgeInsets, Point, Rect, Size};
use dragpanel_ui_layout::{Axis, Constraints, PanelGeometry, PanelLayout, RangeClamp};

use crate::child::PanelChild;
use crate::config::PanelConfig;
use crate::error::PanelError;
use crate::listener::{DisappearListener, DisappearSide, ListenerSlot};
use crate::release::{ReleaseResolver, SettleOutcome};
use crate::state::{DisappearDirection, PanelState};

/// Everything the animator calls back into. Split from [`DragPanel`] so the
/// animator and this core can be borrowed mutably at the same time.
struct PanelCore {
    config: PanelConfig,
    layout: PanelLayout,
    resolver: ReleaseResolver,
    player: Box<dyn PanelChild>,
    description: Box<dyn PanelChild>,
    state: Option<PanelState>,
    classifier: GestureClassifier,
    listener: ListenerSlot,
    container: Size,
    padding: EdgeInsets,
    player_size: Size,
    description_size: Size,
    player_frame: Rect,
    description_frame: Rect,
    player_alpha: f32,
    container_alpha: f32,
    redraw_requested: bool,
}

const CALLBACKS: DragCallbacks<PanelCore> = DragCallbacks {
    try_capture: PanelCore::try_capture,
    captured_origin: PanelCore::captured_origin,
    vertical_range: PanelCore::vertical_range,
    horizontal_range: PanelCore::horizontal_range,
    clamp_vertical: PanelCore::clamp_vertical,
    clamp_horizontal: PanelCore::clamp_horizontal,
    on_position_changed: PanelCore::on_position_changed,
    on_released: PanelCore::on_released,
    on_state_changed: PanelCore::on_state_changed,
};

impl PanelCore {
    fn range_clamp(&self) -> Option<RangeClamp<'_>> {
        self.state
            .as_ref()
            .map(|state| RangeClamp::new(&state.geometry, state.drag_axis, state.minimized))
    }

    fn try_capture(&self, point: Point) -> bool {
        self.state.is_some() && self.player_frame.contains(point.x, point.y)
    }

    fn captured_origin(&self) -> Point {
        self.state
            .as_ref()
            .map_or(Point::ZERO, |state| Point::new(state.left, state.top))
    }

    fn vertical_range(&self) -> f32 {
        self.range_clamp().map_or(0.0, |clamp| clamp.vertical_range())
    }

    fn horizontal_range(&self) -> f32 {
        self.range_clamp().map_or(0.0, |clamp| clamp.horizontal_range())
    }

    fn clamp_vertical(&self, proposed_top: f32) -> f32 {
        let current = self.captured_origin().y;
        self.range_clamp()
            .map_or(current, |clamp| clamp.vertical(proposed_top, current))
    }

    fn clamp_horizontal(&self, proposed_left: f32) -> f32 {
        let current = self.captured_origin().x;
        let width = self.player_size.width;
        self.range_clamp()
            .map_or(current, |clamp| clamp.horizontal(proposed_left, current, width))
    }

    fn on_position_changed(&mut self, origin: Point, _delta: Point) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        match state.drag_axis {
            Some(Axis::Vertical) => {
                state.top = origin.y;
                let offset = state.geometry.vertical_offset_for(origin.y);
                state.set_vertical_offset(offset);
            }
            Some(Axis::Horizontal) if state.minimized => {
                state.left = origin.x;
                let offset = state.geometry.horizontal_offset_for(origin.x);
                state.set_horizontal_offset(offset);
            }
            _ => {}
        }
        log::trace!(
            "position {origin:?} axis {:?} offsets v={:.3} h={:.3}",
            state.drag_axis,
            state.vertical_offset(),
            state.horizontal_offset()
        );
        self.request_layout_lightly();
    }

    fn on_released(&mut self, velocity: Velocity) -> Point {
        let padding_left = self.padding.left;
        let player_width = self.player_size.width;
        let Some(state) = self.state.as_mut() else {
            return Point::ZERO;
        };
        let decision = self
            .resolver
            .resolve(state, velocity, padding_left, player_width);
        log::debug!(
            "release on {:?} -> {:?} at {:?}",
            state.drag_axis,
            decision.outcome,
            decision.target
        );
        match decision.outcome {
            SettleOutcome::Maximize => state.minimized = false,
            SettleOutcome::Minimize => state.minimized = true,
            SettleOutcome::SlideLeft | SettleOutcome::SlideRight | SettleOutcome::Restore => {
                state.disappear = decision.outcome.disappear_direction();
            }
            SettleOutcome::Stay => {}
        }
        decision.target
    }

    fn on_state_changed(&mut self, drag_state: DragState) {
        match drag_state {
            DragState::Idle => self.finish_settle(),
            DragState::Dragging => self.drop_pending_outcome(),
            DragState::Settling => {}
        }
    }

    /// A capture that interrupts a settle cancels the decision made at the
    /// previous release. The panel stays where the last frame left it.
    fn drop_pending_outcome(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if state.drag_axis.is_none() && state.disappear == DisappearDirection::Restore {
            return;
        }
        log::debug!(
            "settle on {:?} caught at ({:.1}, {:.1}), dropping {:?}",
            state.drag_axis,
            state.left,
            state.top,
            state.disappear
        );
        if state.drag_axis == Some(Axis::Vertical) {
            state.minimized = state.vertical_offset() >= 1.0;
        }
        state.disappear = DisappearDirection::Restore;
        state.drag_axis = None;
    }

    fn finish_settle(&mut self) {
        let rest_offset = self.resolver.thresholds().rest_offset;
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let side = match state.disappear {
            DisappearDirection::Left => Some(DisappearSide::Left),
            DisappearDirection::Right => Some(DisappearSide::Right),
            DisappearDirection::Restore => None,
        };
        let dismissed = state.minimized && state.drag_axis == Some(Axis::Horizontal);
        state.drag_axis = None;
        match side {
            Some(side) if dismissed => {
                log::debug!("panel dismissed to the {side:?}");
                state.disappear = DisappearDirection::Restore;
                self.listener.notify(side);
                self.restore_position(rest_offset);
                self.request_layout_lightly();
            }
            _ => state.disappear = DisappearDirection::Restore,
        }
    }

    fn restore_position(&mut self, rest_offset: f32) {
        self.player_alpha = 1.0;
        self.container_alpha = 0.0;
        if let Some(state) = self.state.as_mut() {
            state.reset_to_minimized(rest_offset);
        }
    }

    fn measure_player(&mut self) {
        let (offset, max_width) = match self.state.as_ref() {
            Some(state) => (state.vertical_offset(), state.geometry.max_width),
            None => return,
        };
        let size = self.layout.player_size(offset, max_width);
        self.player_size = self
            .player
            .measure(Constraints::tight(size.width, size.height));
    }

    fn layout_children(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if state.drag_axis != Some(Axis::Horizontal) {
            state.left =
                self.layout
                    .anchored_left(self.container.width, self.padding, self.player_size.width);
        }
        self.player_frame =
            Rect::from_origin_size(Point::new(state.left, state.top), self.player_size);
        if state.drag_axis != Some(Axis::Horizontal) {
            let origin = self.layout.description_origin(self.player_frame);
            self.description_frame = Rect::from_origin_size(origin, self.description_size);
            self.description.place(self.description_frame);
        }
        self.player.place(self.player_frame);
    }

    fn request_layout_lightly(&mut self) {
        self.measure_player();
        self.layout_children();
        self.redraw_requested = true;
    }
}

/// Gesture-driven controller for a minimizable, dismissible panel.
///
/// The host forwards measurement, layout, pointer events and animation frames
/// (`compute_scroll`) to the controller, all from one thread.
pub struct DragPanel<A: SettlingAnimator = DragHelper<SystemClock>> {
    core: PanelCore,
    animator: A,
}

impl DragPanel<DragHelper<SystemClock>> {
    /// Attaches to `children` (panel first, description second) using the
    /// wall clock for settle animations.
    pub fn attach(
        children: Vec<Box<dyn PanelChild>>,
        config: PanelConfig,
    ) -> Result<Self, PanelError> {
        Self::attach_with_clock(children, config, SystemClock::new())
    }
}

impl<C: AnimationClock> DragPanel<DragHelper<C>> {
    pub fn attach_with_clock(
        children: Vec<Box<dyn PanelChild>>,
        config: PanelConfig,
        clock: C,
    ) -> Result<Self, PanelError> {
        let helper = DragHelper::new(clock)
            .with_touch_slop(config.touch_slop)
            .with_settle_spec(config.settle)
            .with_velocity_bounds(config.min_fling_velocity, config.max_fling_velocity);
        DragPanel::with_animator(children, config, helper)
    }
}

impl<A: SettlingAnimator> DragPanel<A> {
    /// Attaches with a caller-supplied animator.
    pub fn with_animator(
        children: Vec<Box<dyn PanelChild>>,
        config: PanelConfig,
        animator: A,
    ) -> Result<Self, PanelError> {
        config.validate()?;
        let found = children.len();
        let mut children = children.into_iter();
        let (Some(player), Some(description), None) =
            (children.next(), children.next(), children.next())
        else {
            return Err(PanelError::ChildCount { found });
        };

        Ok(Self {
            core: PanelCore {
                config,
                layout: config.layout(),
                resolver: ReleaseResolver::new(config.shrink_ratio),
                player,
                description,
                state: None,
                classifier: GestureClassifier::new(),
                listener: ListenerSlot::default(),
                container: Size::ZERO,
                padding: EdgeInsets::default(),
                player_size: Size::ZERO,
                description_size: Size::ZERO,
                player_frame: Rect::default(),
                description_frame: Rect::default(),
                player_alpha: 1.0,
                container_alpha: 1.0,
                redraw_requested: false,
            },
            animator,
        })
    }

    /// Measures both children and returns the container size. The first
    /// pass after attach caches the drag ranges and parks the panel in its
    /// minimized form.
    pub fn measure(&mut self, constraints: Constraints, padding: EdgeInsets) -> Size {
        let core = &mut self.core;
        core.padding = padding;
        let content = constraints.deflate(padding.horizontal_sum(), padding.vertical_sum());
        let (width, height) = constraints.constrain(constraints.max_width, constraints.max_height);
        core.container = Size::new(width, height);

        if core.state.is_none() {
            let max_width = content.max_width;
            let min_size = core.layout.player_size(1.0, max_width);
            core.player_size = core
                .player
                .measure(Constraints::tight(min_size.width, min_size.height));
            let geometry = PanelGeometry {
                min_top: padding.top,
                vertical_range: (height - padding.vertical_sum() - core.player_size.height)
                    .max(0.0),
                horizontal_range: max_width + core.player_size.width,
                min_width: core.player_size.width,
                max_width,
            };
            log::debug!("panel geometry initialised: {geometry:?}");
            let rest_offset = core.resolver.thresholds().rest_offset;
            core.state = Some(PanelState::minimized_default(geometry, rest_offset));
            core.restore_position(rest_offset);
        }

        core.measure_player();
        core.description_size = core.description.measure(content);
        core.container
    }

    /// Places both children for the current state.
    pub fn layout(&mut self) {
        self.core.layout_children();
    }

    /// Drops the panel state; the next `measure` rebuilds it.
    pub fn detach(&mut self) {
        if self.animator.state() != DragState::Idle {
            self.animator.abort(&mut self.core, &CALLBACKS);
        }
        self.core.state = None;
    }

    pub fn on_intercept_touch_event(&mut self, event: &PointerEvent) -> bool {
        if self.core.state.is_none() {
            return false;
        }
        self.animator
            .should_intercept_touch(event, &mut self.core, &CALLBACKS)
    }

    /// Handles one pointer sample. Returns whether it landed on the panel.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        let Some(locked) = self.core.state.as_ref().map(|state| state.drag_axis) else {
            log::warn!("pointer event before first measure ignored: {:?}", event.kind);
            return false;
        };
        let position = event.position;
        let hit = self
            .animator
            .is_point_under(self.core.player_frame, position);
        let slop = self.animator.touch_slop();

        if hit {
            match event.kind {
                PointerEventKind::Down => self.core.classifier.on_down(position),
                PointerEventKind::Move => {
                    if let (None, Some(axis)) =
                        (locked, self.core.classifier.on_move(position, slop, locked))
                    {
                        if let Some(state) = self.core.state.as_mut() {
                            state.lock_axis(axis);
                        }
                    }
                }
                PointerEventKind::Up => {
                    if self.core.classifier.on_up(position, slop, locked) == PointerRelease::Tap {
                        self.toggle_from_tap();
                    }
                }
                PointerEventKind::Cancel => {}
            }
        }

        self.animator
            .process_touch(event, &mut self.core, &CALLBACKS);
        hit
    }

    /// Advances the settle animation by one frame. Hosts call this on every
    /// animation frame while it returns `true`.
    pub fn compute_scroll(&mut self) -> bool {
        if self
            .animator
            .continue_settling(&mut self.core, &CALLBACKS)
        {
            self.core.redraw_requested = true;
            return true;
        }
        false
    }

    /// Reveals the container and animates the panel to its maximized form.
    pub fn show(&mut self) -> bool {
        self.core.container_alpha = 1.0;
        let Some(state) = self.core.state.as_mut() else {
            log::warn!("show() before first measure ignored");
            return false;
        };
        state.drag_axis = Some(Axis::Vertical);
        self.maximize()
    }

    /// Parks the panel minimized without animating and hides the container.
    pub fn restore_position(&mut self) {
        let rest_offset = self.core.resolver.thresholds().rest_offset;
        self.core.restore_position(rest_offset);
        self.core.request_layout_lightly();
    }

    /// Registers a non-owning disappearance listener, replacing any previous
    /// one. Call [`clear_listener`](Self::clear_listener) before dropping it.
    pub fn set_listener(&mut self, listener: &Rc<dyn DisappearListener>) {
        self.core.listener.set(listener);
    }

    pub fn clear_listener(&mut self) {
        self.core.listener.clear();
    }

    pub fn has_listener(&self) -> bool {
        self.core.listener.is_set()
    }

    pub fn state(&self) -> Option<&PanelState> {
        self.core.state.as_ref()
    }

    pub fn phase(&self) -> DragState {
        self.animator.state()
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn config(&self) -> &PanelConfig {
        &self.core.config
    }

    pub fn player_frame(&self) -> Rect {
        self.core.player_frame
    }

    pub fn description_frame(&self) -> Rect {
        self.core.description_frame
    }

    pub fn player_alpha(&self) -> f32 {
        self.core.player_alpha
    }

    pub fn container_alpha(&self) -> f32 {
        self.core.container_alpha
    }

    /// Opacity for content behind the panel: opaque while the panel is at
    /// its minimized width, fading out as it grows.
    pub fn backdrop_alpha(&self) -> f32 {
        let Some(state) = self.core.state.as_ref() else {
            return 1.0;
        };
        let width = self.core.player_size.width;
        let geometry = &state.geometry;
        if geometry.max_width <= 0.0 || width <= geometry.min_width {
            return 1.0;
        }
        (1.0 - width / geometry.max_width).clamp(0.0, 1.0)
    }

    /// Whether the controller asked for a frame since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.core.redraw_requested)
    }

    fn toggle_from_tap(&mut self) {
        let Some(state) = self.core.state.as_mut() else {
            return;
        };
        state.drag_axis = Some(Axis::Vertical);
        let minimized = state.minimized;
        log::debug!("tap on {} panel", if minimized { "minimized" } else { "maximized" });
        if minimized {
            self.maximize();
        } else {
            self.minimize();
        }
    }

    fn maximize(&mut self) -> bool {
        self.slide_vertical(false)
    }

    fn minimize(&mut self) -> bool {
        self.slide_vertical(true)
    }

    fn slide_vertical(&mut self, minimize: bool) -> bool {
        let padding_left = self.core.padding.left;
        let player_width = self.core.player_size.width;
        let Some(state) = self.core.state.as_mut() else {
            return false;
        };
        state.minimized = minimize;
        let outcome = if minimize {
            SettleOutcome::Minimize
        } else {
            SettleOutcome::Maximize
        };
        let target = self
            .core
            .resolver
            .target(outcome, state, padding_left, player_width);
        let started = self
            .animator
            .smooth_slide_to(&mut self.core, &CALLBACKS, target);
        if started {
            self.core.redraw_requested = true;
        }
        started
    }
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
