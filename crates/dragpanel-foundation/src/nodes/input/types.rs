use dragpanel_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer sample in container-local coordinates.
///
/// `uptime_millis` is the host's event timestamp and feeds velocity
/// tracking; it is unrelated to the animation clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub uptime_millis: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_millis: i64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_millis,
        }
    }

    pub fn down(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), uptime_millis)
    }

    pub fn moved(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), uptime_millis)
    }

    pub fn up(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), uptime_millis)
    }

    pub fn cancel(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y), uptime_millis)
    }

    /// Same event attributed to another pointer.
    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}
