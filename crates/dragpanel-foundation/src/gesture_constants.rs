//! Shared gesture constants for touch/pointer handling.
//!
//! Values are in logical pixels (and logical pixels per second). Hosts on
//! high-density screens scale them through `PanelConfig` rather than editing
//! these defaults.

/// Touch slop: travel from the press position before a gesture counts as a
/// drag instead of a tap. Matches Android's `ViewConfiguration` touch slop.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Release speeds below this are treated as zero.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Release speeds are capped to this magnitude.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
