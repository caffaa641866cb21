use dragpanel_ui_layout::{Axis, PanelGeometry};

/// Outcome of a release, consumed once when the settle completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisappearDirection {
    /// Stay (or return) on screen.
    #[default]
    Restore,
    Left,
    Right,
}

/// Mutable panel state, created at the first measurement pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelState {
    pub(crate) minimized: bool,
    pub(crate) drag_axis: Option<Axis>,
    vertical_offset: f32,
    horizontal_offset: f32,
    pub(crate) disappear: DisappearDirection,
    pub(crate) geometry: PanelGeometry,
    pub(crate) top: f32,
    pub(crate) left: f32,
}

impl PanelState {
    /// Fully minimized, resting at `rest_offset` on the sideways track.
    pub(crate) fn minimized_default(geometry: PanelGeometry, rest_offset: f32) -> Self {
        let mut state = Self {
            minimized: true,
            drag_axis: None,
            vertical_offset: 1.0,
            horizontal_offset: rest_offset,
            disappear: DisappearDirection::Restore,
            geometry,
            top: 0.0,
            left: 0.0,
        };
        state.reset_to_minimized(rest_offset);
        state
    }

    pub(crate) fn reset_to_minimized(&mut self, rest_offset: f32) {
        self.minimized = true;
        self.vertical_offset = 1.0;
        self.set_horizontal_offset(rest_offset);
        self.top = self.geometry.top_for(1.0);
        self.left = self.geometry.left_for(self.horizontal_offset, self.geometry.min_width);
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn drag_axis(&self) -> Option<Axis> {
        self.drag_axis
    }

    pub fn vertical_offset(&self) -> f32 {
        self.vertical_offset
    }

    pub fn horizontal_offset(&self) -> f32 {
        self.horizontal_offset
    }

    pub fn disappear_direction(&self) -> DisappearDirection {
        self.disappear
    }

    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub(crate) fn set_vertical_offset(&mut self, offset: f32) {
        self.vertical_offset = saturate(offset);
    }

    pub(crate) fn set_horizontal_offset(&mut self, offset: f32) {
        self.horizontal_offset = saturate(offset);
    }

    /// Locks the axis unless one is already locked. Returns the lock in
    /// effect afterwards.
    pub(crate) fn lock_axis(&mut self, axis: Axis) -> Axis {
        *self.drag_axis.get_or_insert(axis)
    }
}

fn saturate(offset: f32) -> f32 {
    if offset.is_nan() {
        0.0
    } else {
        offset.clamp(0.0, 1.0)
    }
}
