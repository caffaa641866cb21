//! Full gestures driven through the default animator with a manual clock.

use std::cell::RefCell;
use std::rc::Rc;

use dragpanel_animation::ManualClock;
use dragpanel_foundation::DragHelper;
use dragpanel_ui::prelude::*;
use dragpanel_ui::{DisappearDirection, DragState, PanelState, PointerEvent};

/// Child that records every frame it is placed at.
struct RecordingChild {
    natural: Size,
    placements: Rc<RefCell<Vec<Rect>>>,
}

impl PanelChild for RecordingChild {
    fn measure(&mut self, constraints: Constraints) -> Size {
        if constraints.is_tight() {
            return Size::new(constraints.max_width, constraints.max_height);
        }
        let (width, height) = constraints.constrain(self.natural.width, self.natural.height);
        Size::new(width, height)
    }

    fn place(&mut self, frame: Rect) {
        self.placements.borrow_mut().push(frame);
    }
}

struct Harness {
    panel: DragPanel<DragHelper<ManualClock>>,
    clock: ManualClock,
    player_placements: Rc<RefCell<Vec<Rect>>>,
    disappearances: Rc<RefCell<Vec<DisappearSide>>>,
    _listener: Rc<dyn DisappearListener>,
}

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 1000.0;

fn harness() -> Harness {
    let player_placements = Rc::new(RefCell::new(Vec::new()));
    let children: Vec<Box<dyn PanelChild>> = vec![
        Box::new(RecordingChild {
            natural: Size::ZERO,
            placements: Rc::clone(&player_placements),
        }),
        Box::new(RecordingChild {
            natural: Size::new(WIDTH, 120.0),
            placements: Rc::new(RefCell::new(Vec::new())),
        }),
    ];
    let clock = ManualClock::new();
    let config = PanelConfig::default().with_aspect_ratio(2.0);
    let mut panel = match DragPanel::attach_with_clock(children, config, clock.clone()) {
        Ok(panel) => panel,
        Err(err) => panic!("attach failed: {err}"),
    };

    let disappearances = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&disappearances);
    let listener: Rc<dyn DisappearListener> =
        Rc::new(move |side: DisappearSide| sink.borrow_mut().push(side));
    panel.set_listener(&listener);

    panel.measure(Constraints::loose(WIDTH, HEIGHT), EdgeInsets::default());
    panel.layout();

    Harness {
        panel,
        clock,
        player_placements,
        disappearances,
        _listener: listener,
    }
}

impl Harness {
    fn touch(&mut self, event: PointerEvent) -> bool {
        self.panel.on_intercept_touch_event(&event);
        self.panel.on_touch_event(&event)
    }

    /// Runs frames until the settle finishes.
    fn settle(&mut self) {
        for _ in 0..100 {
            self.clock.advance(16);
            if !self.panel.compute_scroll() {
                return;
            }
        }
        panic!("settle did not finish");
    }

    fn state(&self) -> PanelState {
        match self.panel.state() {
            Some(state) => *state,
            None => panic!("panel has no state"),
        }
    }

    fn maximize_by_tap(&mut self) {
        self.touch(PointerEvent::down(600.0, 900.0, 0));
        self.touch(PointerEvent::up(601.0, 900.0, 40));
        self.settle();
    }
}

fn approx(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn starts_minimized_in_the_corner() {
    let harness = harness();
    let state = harness.state();
    assert!(state.is_minimized());
    assert_eq!(state.drag_axis(), None);
    approx(state.horizontal_offset(), 2.0 / 3.0);
    assert_eq!(
        harness.panel.player_frame(),
        Rect::from_origin_size(Point::new(400.0, 800.0), Size::new(400.0, 200.0))
    );
    assert_eq!(harness.panel.description_frame().y, 1000.0);
    assert_eq!(harness.panel.backdrop_alpha(), 1.0);
}

#[test]
fn events_before_measure_are_ignored() {
    let children: Vec<Box<dyn PanelChild>> = vec![
        Box::new(RecordingChild {
            natural: Size::ZERO,
            placements: Rc::new(RefCell::new(Vec::new())),
        }),
        Box::new(RecordingChild {
            natural: Size::ZERO,
            placements: Rc::new(RefCell::new(Vec::new())),
        }),
    ];
    let mut panel = match DragPanel::attach_with_clock(
        children,
        PanelConfig::default(),
        ManualClock::new(),
    ) {
        Ok(panel) => panel,
        Err(err) => panic!("attach failed: {err}"),
    };
    let down = PointerEvent::down(10.0, 10.0, 0);
    assert!(!panel.on_intercept_touch_event(&down));
    assert!(!panel.on_touch_event(&down));
    assert!(!panel.show());
    assert!(panel.state().is_none());
    assert_eq!(panel.phase(), DragState::Idle);
}

#[test]
fn attach_requires_exactly_two_children() {
    let one: Vec<Box<dyn PanelChild>> = vec![Box::new(RecordingChild {
        natural: Size::ZERO,
        placements: Rc::new(RefCell::new(Vec::new())),
    })];
    assert_eq!(
        DragPanel::attach(one, PanelConfig::default()).err(),
        Some(PanelError::ChildCount { found: 1 })
    );

    let bad_ratio = PanelConfig::default().with_shrink_ratio(1.5);
    assert_eq!(
        DragPanel::attach(Vec::new(), bad_ratio).err(),
        Some(PanelError::InvalidShrinkRatio(1.5))
    );
}

#[test]
fn tap_toggles_between_forms() {
    let mut harness = harness();

    harness.maximize_by_tap();
    let state = harness.state();
    assert!(!state.is_minimized());
    assert_eq!(state.drag_axis(), None);
    assert_eq!(state.vertical_offset(), 0.0);
    assert_eq!(
        harness.panel.player_frame(),
        Rect::from_origin_size(Point::ZERO, Size::new(800.0, 400.0))
    );
    assert_eq!(harness.panel.backdrop_alpha(), 0.0);
    assert_eq!(harness.panel.phase(), DragState::Idle);

    harness.touch(PointerEvent::down(400.0, 200.0, 1000));
    harness.touch(PointerEvent::up(400.0, 202.0, 1040));
    assert!(harness.state().is_minimized());
    assert_eq!(harness.panel.phase(), DragState::Settling);
    harness.settle();

    let state = harness.state();
    assert!(state.is_minimized());
    assert_eq!(state.vertical_offset(), 1.0);
    assert_eq!(
        harness.panel.player_frame(),
        Rect::from_origin_size(Point::new(400.0, 800.0), Size::new(400.0, 200.0))
    );
    assert!(harness.disappearances.borrow().is_empty());
}

#[test]
fn vertical_drag_past_half_minimizes_on_release() {
    let mut harness = harness();
    harness.maximize_by_tap();

    harness.touch(PointerEvent::down(400.0, 200.0, 1000));
    harness.touch(PointerEvent::moved(400.0, 220.0, 1016));
    assert_eq!(harness.state().drag_axis(), Some(Axis::Vertical));
    assert_eq!(harness.state().top(), 20.0);

    harness.touch(PointerEvent::moved(400.0, 700.0, 1032));
    let state = harness.state();
    assert_eq!(state.top(), 500.0);
    assert_eq!(state.vertical_offset(), 0.625);
    // Width 800 * (1 - 0.625 / 2), right-anchored.
    assert_eq!(harness.panel.player_frame().width, 550.0);
    assert_eq!(harness.panel.player_frame().x, 250.0);

    harness.touch(PointerEvent::cancel(400.0, 700.0, 1048));
    assert!(harness.state().is_minimized());
    assert_eq!(harness.panel.phase(), DragState::Settling);
    harness.settle();

    let state = harness.state();
    assert_eq!(state.drag_axis(), None);
    assert_eq!(state.top(), 800.0);
    assert_eq!(harness.panel.player_frame().width, 400.0);
}

#[test]
fn vertical_drag_is_clamped_to_its_range() {
    let mut harness = harness();
    harness.maximize_by_tap();

    harness.touch(PointerEvent::down(400.0, 200.0, 1000));
    harness.touch(PointerEvent::moved(400.0, 190.0, 1016));
    assert_eq!(harness.state().drag_axis(), Some(Axis::Vertical));
    assert_eq!(harness.state().top(), 0.0);
    assert_eq!(harness.state().vertical_offset(), 0.0);
}

#[test]
fn locked_axis_survives_a_change_of_direction() {
    let mut harness = harness();

    harness.touch(PointerEvent::down(600.0, 900.0, 0));
    harness.touch(PointerEvent::moved(580.0, 900.0, 10));
    assert_eq!(harness.state().drag_axis(), Some(Axis::Horizontal));

    harness.touch(PointerEvent::moved(580.0, 700.0, 20));
    let state = harness.state();
    assert_eq!(state.drag_axis(), Some(Axis::Horizontal));
    assert_eq!(state.top(), 800.0);
    assert_eq!(state.left(), 380.0);
}

#[test]
fn swipe_left_dismisses_once_and_resets() {
    let mut harness = harness();

    harness.touch(PointerEvent::down(600.0, 900.0, 0));
    harness.touch(PointerEvent::moved(580.0, 900.0, 10));
    harness.touch(PointerEvent::moved(400.0, 900.0, 20));
    approx(harness.state().horizontal_offset(), 0.5);
    harness.touch(PointerEvent::up(380.0, 900.0, 30));

    assert_eq!(
        harness.state().disappear_direction(),
        DisappearDirection::Left
    );
    assert_eq!(harness.panel.phase(), DragState::Settling);
    assert!(harness.disappearances.borrow().is_empty());

    let before = harness.player_placements.borrow().len();
    harness.settle();
    assert!(harness.player_placements.borrow().len() > before);

    assert_eq!(*harness.disappearances.borrow(), vec![DisappearSide::Left]);
    let state = harness.state();
    assert!(state.is_minimized());
    assert_eq!(state.drag_axis(), None);
    assert_eq!(state.disappear_direction(), DisappearDirection::Restore);
    approx(state.horizontal_offset(), 2.0 / 3.0);
    assert_eq!(state.vertical_offset(), 1.0);
    assert_eq!(harness.panel.container_alpha(), 0.0);
    assert_eq!(harness.panel.player_frame().x, 400.0);

    harness.clock.advance(500);
    assert!(!harness.panel.compute_scroll());
    assert_eq!(harness.disappearances.borrow().len(), 1);
}

#[test]
fn short_swipe_restores_without_notifying() {
    let mut harness = harness();

    harness.touch(PointerEvent::down(600.0, 900.0, 0));
    harness.touch(PointerEvent::moved(580.0, 900.0, 10));
    harness.touch(PointerEvent::up(570.0, 900.0, 20));
    assert_eq!(
        harness.state().disappear_direction(),
        DisappearDirection::Restore
    );
    harness.settle();

    assert!(harness.disappearances.borrow().is_empty());
    let state = harness.state();
    assert_eq!(state.drag_axis(), None);
    approx(state.horizontal_offset(), 2.0 / 3.0);
    approx(harness.panel.player_frame().x, 400.0);
}

#[test]
fn dropped_listener_is_skipped() {
    let mut harness = harness();
    harness._listener = Rc::new(|_side: DisappearSide| {});

    harness.touch(PointerEvent::down(600.0, 900.0, 0));
    harness.touch(PointerEvent::moved(580.0, 900.0, 10));
    harness.touch(PointerEvent::moved(400.0, 900.0, 20));
    harness.touch(PointerEvent::up(380.0, 900.0, 30));
    harness.settle();

    assert!(harness.disappearances.borrow().is_empty());
    assert!(harness.state().is_minimized());
    assert!(harness.panel.has_listener());
    harness.panel.clear_listener();
    assert!(!harness.panel.has_listener());
}

#[test]
fn show_and_restore_position() {
    let mut harness = harness();
    assert_eq!(harness.panel.container_alpha(), 0.0);

    assert!(harness.panel.show());
    assert_eq!(harness.panel.container_alpha(), 1.0);
    assert_eq!(harness.state().drag_axis(), Some(Axis::Vertical));
    assert!(harness.panel.take_redraw_request());
    harness.settle();
    assert!(!harness.state().is_minimized());
    assert_eq!(harness.panel.player_frame().width, 800.0);

    harness.panel.restore_position();
    let state = harness.state();
    assert!(state.is_minimized());
    assert_eq!(state.top(), 800.0);
    assert_eq!(harness.panel.player_alpha(), 1.0);
    assert_eq!(harness.panel.container_alpha(), 0.0);
    assert_eq!(
        harness.panel.player_frame(),
        Rect::from_origin_size(Point::new(400.0, 800.0), Size::new(400.0, 200.0))
    );
}

#[test]
fn press_during_settle_catches_the_panel_in_place() {
    let mut harness = harness();
    assert!(harness.panel.show());
    harness.clock.advance(16);
    assert!(harness.panel.compute_scroll());

    let frame = harness.panel.player_frame();
    let top = harness.state().top();
    assert!(top > 0.0 && top < 800.0, "{top}");

    let center = Point::new(frame.x + frame.width / 2.0, frame.y + frame.height / 2.0);
    assert!(harness.touch(PointerEvent::down(center.x, center.y, 20)));
    assert_eq!(harness.panel.phase(), DragState::Dragging);
    assert_eq!(harness.panel.player_frame(), frame);
    let state = harness.state();
    assert_eq!(state.top(), top);
    assert_eq!(state.drag_axis(), None);
    assert!(!state.is_minimized());

    harness.clock.advance(1000);
    assert!(!harness.panel.compute_scroll());
    assert_eq!(harness.state().top(), top);
}

#[test]
fn catching_a_dismissal_cancels_it() {
    let mut harness = harness();

    harness.touch(PointerEvent::down(600.0, 900.0, 0));
    harness.touch(PointerEvent::moved(580.0, 900.0, 10));
    harness.touch(PointerEvent::moved(400.0, 900.0, 20));
    harness.touch(PointerEvent::up(380.0, 900.0, 30));
    assert_eq!(
        harness.state().disappear_direction(),
        DisappearDirection::Left
    );

    harness.clock.advance(16);
    assert!(harness.panel.compute_scroll());
    let frame = harness.panel.player_frame();
    assert!(frame.x < 200.0 && frame.x > -400.0, "{frame:?}");

    let grab = Point::new(frame.x + frame.width / 2.0, frame.y + frame.height / 2.0);
    assert!(harness.touch(PointerEvent::down(grab.x, grab.y, 60)));
    assert_eq!(harness.panel.phase(), DragState::Dragging);
    assert_eq!(harness.panel.player_frame(), frame);
    assert!(harness.disappearances.borrow().is_empty());
    let state = harness.state();
    assert!(state.is_minimized());
    assert_eq!(state.drag_axis(), None);
    assert_eq!(state.disappear_direction(), DisappearDirection::Restore);

    // Nothing settles while the panel is held.
    harness.clock.advance(1000);
    assert!(!harness.panel.compute_scroll());
    assert!(harness.disappearances.borrow().is_empty());

    // Dragged back toward the rest offset, it restores instead.
    harness.touch(PointerEvent::moved(grab.x + 20.0, grab.y, 76));
    assert_eq!(harness.state().drag_axis(), Some(Axis::Horizontal));
    harness.touch(PointerEvent::moved(grab.x + 280.0, grab.y, 92));
    harness.touch(PointerEvent::up(grab.x + 280.0, grab.y, 108));
    assert_eq!(
        harness.state().disappear_direction(),
        DisappearDirection::Restore
    );
    harness.settle();

    assert!(harness.disappearances.borrow().is_empty());
    let state = harness.state();
    assert_eq!(state.drag_axis(), None);
    approx(state.horizontal_offset(), 2.0 / 3.0);
}

#[test]
fn swipe_right_dismisses_once_and_resets() {
    let mut harness = harness();

    harness.touch(PointerEvent::down(600.0, 900.0, 0));
    harness.touch(PointerEvent::moved(620.0, 900.0, 10));
    assert_eq!(harness.state().drag_axis(), Some(Axis::Horizontal));
    harness.touch(PointerEvent::moved(760.0, 900.0, 20));
    approx(harness.state().horizontal_offset(), 0.8);
    harness.touch(PointerEvent::up(780.0, 900.0, 30));

    assert_eq!(
        harness.state().disappear_direction(),
        DisappearDirection::Right
    );
    harness.settle();

    assert_eq!(*harness.disappearances.borrow(), vec![DisappearSide::Right]);
    let state = harness.state();
    assert!(state.is_minimized());
    assert_eq!(state.drag_axis(), None);
    assert_eq!(state.disappear_direction(), DisappearDirection::Restore);
    assert_eq!(state.vertical_offset(), 1.0);
    approx(state.horizontal_offset(), 2.0 / 3.0);
    assert_eq!(harness.panel.container_alpha(), 0.0);
    assert_eq!(
        harness.panel.player_frame(),
        Rect::from_origin_size(Point::new(400.0, 800.0), Size::new(400.0, 200.0))
    );

    harness.clock.advance(500);
    assert!(!harness.panel.compute_scroll());
    assert_eq!(harness.disappearances.borrow().len(), 1);
}
