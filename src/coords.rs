//! Axis ranges for a pitch: orientation, half selection, and the
//! direction-aware offset rule every region query goes through.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

use crate::defaults;
use crate::errors::{PitchError, Result};
use crate::log::debug;
use crate::types::{Meters, NumericError, approx_eq, check_finite};

/// Which axis carries the pitch length
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Length along x, goals on the left and right
    #[default]
    Horizontal,
    /// Length along y, goals at the bottom and top
    Vertical,
}

impl Orientation {
    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }

    /// The other orientation
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl FromStr for Orientation {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(PitchError::InvalidOrientation {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Restriction of the usable space to one half of the pitch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HalfSelection {
    Left,
    Right,
    #[default]
    Both,
}

impl HalfSelection {
    pub fn includes_left(self) -> bool {
        matches!(self, HalfSelection::Left | HalfSelection::Both)
    }

    pub fn includes_right(self) -> bool {
        matches!(self, HalfSelection::Right | HalfSelection::Both)
    }

    pub fn is_half(self) -> bool {
        self != HalfSelection::Both
    }
}

impl FromStr for HalfSelection {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(HalfSelection::Left),
            "right" => Ok(HalfSelection::Right),
            "both" => Ok(HalfSelection::Both),
            _ => Err(PitchError::InvalidHalfSelection {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for HalfSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalfSelection::Left => f.write_str("left"),
            HalfSelection::Right => f.write_str("right"),
            HalfSelection::Both => f.write_str("both"),
        }
    }
}

/// An ordered `(start, end)` pair; `start > end` means the axis is inverted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
}

impl AxisRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Validate a user-provided range: both ends finite and a non-zero span.
    pub fn try_new(field: &'static str, start: f64, end: f64) -> Result<Self> {
        check_finite(start).map_err(|e| PitchError::invalid(field, start, e))?;
        check_finite(end).map_err(|e| PitchError::invalid(field, end, e))?;
        if start == end {
            return Err(PitchError::invalid(field, end - start, NumericError::Zero));
        }
        Ok(Self { start, end })
    }

    /// Absolute span
    #[inline]
    pub fn span(self) -> f64 {
        (self.end - self.start).abs()
    }

    #[inline]
    pub fn is_inverted(self) -> bool {
        self.start > self.end
    }

    /// Position `p` units into the axis, following its direction.
    #[inline]
    pub fn offset(self, p: f64) -> f64 {
        if self.is_inverted() {
            self.start - p
        } else {
            self.start + p
        }
    }

    #[inline]
    pub fn midpoint(self) -> f64 {
        self.start + (self.end - self.start) / 2.0
    }

    /// The sub-range for one half; `Both` returns the range unchanged.
    pub fn halve(self, half: HalfSelection) -> Self {
        match half {
            HalfSelection::Both => self,
            HalfSelection::Left => Self::new(self.start, self.midpoint()),
            HalfSelection::Right => Self::new(self.midpoint(), self.end),
        }
    }

    /// Widen by `fraction` of the span on both ends, keeping direction.
    pub fn padded(self, fraction: f64) -> Self {
        let pad = self.span() * fraction;
        if self.start < self.end {
            Self::new(self.start - pad, self.end + pad)
        } else {
            Self::new(self.start + pad, self.end - pad)
        }
    }

    pub fn as_tuple(self) -> (f64, f64) {
        (self.start, self.end)
    }

    pub fn approx_eq(self, other: Self) -> bool {
        approx_eq(self.start, other.start) && approx_eq(self.end, other.end)
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

/// Default x and y ranges for a pitch size.
///
/// Lengths go on x and widths on y; vertical orientation swaps them. With a
/// half selection, the axis carrying the length is halved.
pub fn compute_ranges(
    length: f64,
    width: f64,
    orientation: Orientation,
    half: HalfSelection,
) -> (AxisRange, AxisRange) {
    let length_range = AxisRange::new(0.0, length).halve(half);
    let width_range = AxisRange::new(0.0, width);
    match orientation {
        Orientation::Horizontal => (length_range, width_range),
        Orientation::Vertical => (width_range, length_range),
    }
}

/// The usable axis ranges of a pitch
#[derive(Clone, Copy, Debug)]
pub struct CoordinateSpace {
    orientation: Orientation,
    half: HalfSelection,
    x_range: AxisRange,
    y_range: AxisRange,
    /// Length axis before halving
    full_length_range: AxisRange,
}

impl CoordinateSpace {
    /// Axis ranges for a pitch of the given size, starting at the origin.
    pub fn new(
        length: Meters,
        width: Meters,
        orientation: Orientation,
        half: HalfSelection,
    ) -> Result<Self> {
        let length = Meters::try_positive(length.raw())
            .map_err(|e| PitchError::invalid("pitch_length", length.raw(), e))?;
        let width = Meters::try_positive(width.raw())
            .map_err(|e| PitchError::invalid("pitch_width", width.raw(), e))?;
        let full = compute_ranges(length.raw(), width.raw(), orientation, HalfSelection::Both);
        Ok(Self::assemble(full.0, full.1, orientation, half))
    }

    /// Explicit, possibly inverted, full-pitch ranges (e.g. `0..100` data axes).
    ///
    /// With a half selection, the range of the length axis is halved.
    pub fn from_ranges(
        x_range: (f64, f64),
        y_range: (f64, f64),
        orientation: Orientation,
        half: HalfSelection,
    ) -> Result<Self> {
        let x_range = AxisRange::try_new("x_range", x_range.0, x_range.1)?;
        let y_range = AxisRange::try_new("y_range", y_range.0, y_range.1)?;
        Ok(Self::assemble(x_range, y_range, orientation, half))
    }

    /// Horizontal regulation pitch, both halves, starting at the origin.
    pub fn regulation() -> Self {
        let (x_range, y_range) = compute_ranges(
            defaults::PITCH_LENGTH.raw(),
            defaults::PITCH_WIDTH.raw(),
            Orientation::Horizontal,
            HalfSelection::Both,
        );
        Self::assemble(x_range, y_range, Orientation::Horizontal, HalfSelection::Both)
    }

    fn assemble(
        x_range: AxisRange,
        y_range: AxisRange,
        orientation: Orientation,
        half: HalfSelection,
    ) -> Self {
        let (full_length_range, x_range, y_range) = match orientation {
            Orientation::Horizontal => (x_range, x_range.halve(half), y_range),
            Orientation::Vertical => (y_range, x_range, y_range.halve(half)),
        };
        debug!(
            %orientation,
            %half,
            x = ?x_range.as_tuple(),
            y = ?y_range.as_tuple(),
            "computed coordinate space"
        );
        Self {
            orientation,
            half,
            x_range,
            y_range,
            full_length_range,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn half_selection(&self) -> HalfSelection {
        self.half
    }

    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    pub fn x_start(&self) -> f64 {
        self.x_range.start
    }

    pub fn x_end(&self) -> f64 {
        self.x_range.end
    }

    pub fn y_start(&self) -> f64 {
        self.y_range.start
    }

    pub fn y_end(&self) -> f64 {
        self.y_range.end
    }

    /// Visible range of the axis carrying the pitch length
    pub fn length_range(&self) -> AxisRange {
        match self.orientation {
            Orientation::Horizontal => self.x_range,
            Orientation::Vertical => self.y_range,
        }
    }

    /// Range of the axis carrying the pitch width
    pub fn width_range(&self) -> AxisRange {
        match self.orientation {
            Orientation::Horizontal => self.y_range,
            Orientation::Vertical => self.x_range,
        }
    }

    /// Length axis range before any half selection
    pub fn full_length_range(&self) -> AxisRange {
        self.full_length_range
    }

    /// Visible extent of the length axis (half the pitch under a half selection)
    pub fn length_extent(&self) -> f64 {
        self.length_range().span()
    }

    pub fn width_extent(&self) -> f64 {
        self.width_range().span()
    }

    pub fn full_length_extent(&self) -> f64 {
        self.full_length_range.span()
    }

    /// `width / length` of the whole pitch in axis units
    pub fn aspect_ratio(&self) -> f64 {
        self.width_extent() / self.full_length_extent()
    }

    /// Map a pitch-frame position to axis coordinates.
    ///
    /// `along` is measured along the pitch length from the left goal line,
    /// `across` along the width from the near touchline.
    #[inline]
    pub fn place(&self, along: f64, across: f64) -> DVec2 {
        let l = self.full_length_range.offset(along);
        let w = self.width_range().offset(across);
        match self.orientation {
            Orientation::Horizontal => dvec2(l, w),
            Orientation::Vertical => dvec2(w, l),
        }
    }
}

impl Default for CoordinateSpace {
    fn default() -> Self {
        Self::regulation()
    }
}

impl PartialEq for CoordinateSpace {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation
            && self.half == other.half
            && self.x_range.approx_eq(other.x_range)
            && self.y_range.approx_eq(other.y_range)
            && self.full_length_range.approx_eq(other.full_length_range)
    }
}
