use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, ensure, Context};
use dragpanel_animation::{Easing, ManualClock, SettleSpec};
use dragpanel_foundation::DragHelper;
use dragpanel_ui::prelude::*;

/// Frame interval of the simulated host.
const FRAME_MILLIS: u64 = 16;
/// Upper bound on frames for one settle before the session gives up.
const MAX_SETTLE_FRAMES: usize = 500;

/// Host window the panel lives in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1920.0,
            padding: 0.0,
        }
    }
}

impl Viewport {
    /// Parses `WIDTHxHEIGHT`.
    pub fn parse(spec: &str) -> anyhow::Result<Self> {
        let (width, height) = spec
            .split_once('x')
            .context("expected WIDTHxHEIGHT")?;
        let width: f32 = width.trim().parse().context("width is not a number")?;
        let height: f32 = height.trim().parse().context("height is not a number")?;
        ensure!(width > 0.0 && height > 0.0, "viewport must be non-empty");
        Ok(Self {
            width,
            height,
            ..Self::default()
        })
    }
}

/// Stand-in for a host view; logs where it is placed.
struct DemoChild {
    label: &'static str,
    natural: Size,
}

impl PanelChild for DemoChild {
    fn measure(&mut self, constraints: Constraints) -> Size {
        let (width, height) = if constraints.is_tight() {
            (constraints.max_width, constraints.max_height)
        } else {
            constraints.constrain(self.natural.width, self.natural.height)
        };
        Size::new(width, height)
    }

    fn place(&mut self, frame: Rect) {
        log::debug!("{} placed at {frame:?}", self.label);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionReport {
    pub timeline: Vec<String>,
    pub frames: usize,
    pub disappearances: Vec<DisappearSide>,
}

pub struct Session {
    panel: DragPanel<DragHelper<ManualClock>>,
    clock: ManualClock,
    uptime: i64,
    disappearances: Rc<RefCell<Vec<DisappearSide>>>,
    _listener: Rc<dyn DisappearListener>,
    report: SessionReport,
}

impl Session {
    pub fn new(viewport: Viewport) -> anyhow::Result<Self> {
        let children: Vec<Box<dyn PanelChild>> = vec![
            Box::new(DemoChild {
                label: "player",
                natural: Size::ZERO,
            }),
            Box::new(DemoChild {
                label: "description",
                natural: Size::new(viewport.width, viewport.height * 0.4),
            }),
        ];
        let config = PanelConfig::default()
            .with_settle(SettleSpec::default().with_easing(Easing::FastOutSlowInEasing));
        let clock = ManualClock::new();
        let mut panel = DragPanel::attach_with_clock(children, config, clock.clone())
            .context("attaching drag panel")?;

        let disappearances = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&disappearances);
        let listener: Rc<dyn DisappearListener> = Rc::new(move |side: DisappearSide| {
            log::info!("panel disappeared to the {side:?}");
            sink.borrow_mut().push(side);
        });
        panel.set_listener(&listener);

        panel.measure(
            Constraints::loose(viewport.width, viewport.height),
            EdgeInsets::uniform(viewport.padding),
        );
        panel.layout();

        Ok(Self {
            panel,
            clock,
            uptime: 0,
            disappearances,
            _listener: listener,
            report: SessionReport::default(),
        })
    }

    /// Show, tap to minimize, swipe away, then bring the panel back.
    pub fn run_script(&mut self) -> anyhow::Result<SessionReport> {
        self.record("attached");

        ensure!(self.panel.show(), "show() did not start a settle");
        self.settle().context("settling after show")?;
        self.record("show");

        let center = self.player_center();
        self.touch(PointerEvent::down(center.x, center.y, self.uptime));
        let release = self.tick();
        self.touch(PointerEvent::up(center.x, center.y, release));
        self.settle().context("settling after tap")?;
        self.record("tap");

        self.swipe_left()?;
        self.settle().context("settling after swipe")?;
        self.record("swipe left");

        self.panel.restore_position();
        self.record("restore position");

        self.panel.clear_listener();
        self.report.disappearances = self.disappearances.borrow().clone();
        log::info!("session finished after {} frames", self.report.frames);
        Ok(std::mem::take(&mut self.report))
    }

    fn swipe_left(&mut self) -> anyhow::Result<()> {
        let state = self.panel.state().context("panel was never measured")?;
        if !state.is_minimized() {
            bail!("sideways swipe needs a minimized panel");
        }
        let start = self.player_center();
        let width = self.panel.player_frame().width;
        self.touch(PointerEvent::down(start.x, start.y, self.uptime));
        for travel in [20.0, width * 0.25, width * 0.5] {
            let event = PointerEvent::moved(start.x - travel, start.y, self.tick());
            self.touch(event);
        }
        let release = self.tick();
        self.touch(PointerEvent::up(start.x - width * 0.55, start.y, release));
        Ok(())
    }

    fn touch(&mut self, event: PointerEvent) {
        let intercepted = self.panel.on_intercept_touch_event(&event);
        let handled = self.panel.on_touch_event(&event);
        log::trace!("{:?} intercepted={intercepted} handled={handled}", event.kind);
    }

    fn tick(&mut self) -> i64 {
        self.uptime += FRAME_MILLIS as i64;
        self.uptime
    }

    fn settle(&mut self) -> anyhow::Result<()> {
        for _ in 0..MAX_SETTLE_FRAMES {
            self.clock.advance(FRAME_MILLIS);
            self.uptime += FRAME_MILLIS as i64;
            let running = self.panel.compute_scroll();
            if self.panel.take_redraw_request() {
                self.report.frames += 1;
            }
            if !running {
                return Ok(());
            }
        }
        bail!("no idle state after {MAX_SETTLE_FRAMES} frames")
    }

    fn player_center(&self) -> Point {
        let frame = self.panel.player_frame();
        Point::new(frame.x + frame.width / 2.0, frame.y + frame.height / 2.0)
    }

    fn record(&mut self, step: &str) {
        let frame = self.panel.player_frame();
        let minimized = self
            .panel
            .state()
            .is_some_and(|state| state.is_minimized());
        let line = format!(
            "{step:<17} frame=({:.0}, {:.0}, {:.0}x{:.0}) minimized={minimized} backdrop={:.2} container={:.1}",
            frame.x,
            frame.y,
            frame.width,
            frame.height,
            self.panel.backdrop_alpha(),
            self.panel.container_alpha(),
        );
        log::info!("{line}");
        self.report.timeline.push(line);
    }
}
