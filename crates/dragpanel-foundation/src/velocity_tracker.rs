//! Release velocity estimation.
//!
//! Impulse strategy: the velocity is derived from the kinetic energy the
//! pointer samples impart, which is robust against the jittery timestamps
//! touch screens produce.

use dragpanel_ui_graphics::Point;

/// Samples kept per axis.
const HISTORY_SIZE: usize = 20;

/// Samples older than this (relative to the newest) are ignored.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer had stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Default)]
struct Sample {
    time_ms: i64,
    value: f32,
}

/// Release velocity in pixels per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Applies the fling bounds to each component: magnitudes below `min`
    /// become zero, magnitudes above `max` are capped.
    pub fn clamp_magnitude(self, min: f32, max: f32) -> Self {
        Self {
            x: clamp_mag(self.x, min, max),
            y: clamp_mag(self.y, min, max),
        }
    }
}

fn clamp_mag(value: f32, min: f32, max: f32) -> f32 {
    let magnitude = value.abs();
    if magnitude.is_nan() || magnitude < min {
        0.0
    } else if magnitude > max {
        max.copysign(value)
    } else {
        value
    }
}

/// Single-axis tracker over absolute positions.
#[derive(Clone)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample {
            time_ms,
            value: position,
        });
    }

    /// Velocity in units per second, `0.0` with fewer than two usable samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut cursor = self.index;
        let mut previous = newest;

        // Walk backwards from the newest sample until the window or a pause
        // ends the run.
        while let Some(sample) = self.samples[cursor] {
            let age = newest.time_ms - sample.time_ms;
            let gap = (sample.time_ms - previous.time_ms).abs();
            previous = sample;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }

            positions[count] = sample.value;
            times[count] = -(age as f32);
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
            cursor = cursor.checked_sub(1).unwrap_or(HISTORY_SIZE - 1);
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Samples are ordered newest first; the result is in units per millisecond.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;
    for i in (1..=oldest).rev() {
        let (current_time, next_time) = (times[i], times[i - 1]);
        if current_time == next_time {
            continue;
        }
        let v_curr = (positions[i - 1] - positions[i]) / (next_time - current_time);
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }
    energy_to_velocity(work)
}

/// `E = v^2 / 2` with unit mass, keeping the sign of the energy.
#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

/// Tracks both axes of one pointer.
#[derive(Clone, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time_ms: i64, position: Point) {
        self.x.add_data_point(time_ms, position.x);
        self.y.add_data_point(time_ms, position.y);
    }

    pub fn calculate_velocity(&self) -> Velocity {
        Velocity::new(self.x.calculate_velocity(), self.y.calculate_velocity())
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}
