//! Pitch configuration with documented defaults for every field.

use crate::coords::{HalfSelection, Orientation};
use crate::markings::MarkingConfig;

/// Input for [`PitchGeometry::new`](crate::PitchGeometry::new).
///
/// | field | default |
/// |---|---|
/// | `orientation` | horizontal |
/// | `half` | both halves |
/// | `markings` | 105 × 68, standard markings, no overrides |
/// | `x_range` / `y_range` | `(0, pitch size)` for the axis, length on x unless vertical |
/// | `lock_markings` | `true`: markings stay in meters whatever the axis units |
#[derive(Clone, Debug, PartialEq)]
pub struct PitchConfig {
    pub orientation: Orientation,
    pub half: HalfSelection,
    pub markings: MarkingConfig,
    /// Full-pitch x range; halved when x carries the length and a half is selected
    pub x_range: Option<(f64, f64)>,
    /// Full-pitch y range; halved when y carries the length and a half is selected
    pub y_range: Option<(f64, f64)>,
    /// When `false`, markings are rescaled from meters into axis units
    pub lock_markings: bool,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            half: HalfSelection::Both,
            markings: MarkingConfig::default(),
            x_range: None,
            y_range: None,
            lock_markings: true,
        }
    }
}

impl PitchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Shorthand for vertical orientation
    pub fn vertical(self) -> Self {
        self.with_orientation(Orientation::Vertical)
    }

    pub fn with_half(mut self, half: HalfSelection) -> Self {
        self.half = half;
        self
    }

    pub fn with_markings(mut self, markings: MarkingConfig) -> Self {
        self.markings = markings;
        self
    }

    pub fn with_x_range(mut self, start: f64, end: f64) -> Self {
        self.x_range = Some((start, end));
        self
    }

    pub fn with_y_range(mut self, start: f64, end: f64) -> Self {
        self.y_range = Some((start, end));
        self
    }

    pub fn lock_markings(mut self, lock: bool) -> Self {
        self.lock_markings = lock;
        self
    }
}
