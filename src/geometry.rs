//! Named-region queries over a coordinate space and a marking spec.
//!
//! Every query is a pure function of the two leaves. Positions are worked
//! out in the pitch frame (along the length from the left goal line, across
//! the width from the near touchline) and mapped to axis coordinates by
//! [`CoordinateSpace::place`], which handles orientation and inverted axes.
//!
//! Under a half selection the pitch frame still spans the whole pitch:
//! left-side regions land in the left half, right-side regions in the right
//! half, and the halfway line sits on the boundary of the visible range.

use std::fmt;

use crate::config::PitchConfig;
use crate::coords::{CoordinateSpace, HalfSelection, Orientation, compute_ranges};
use crate::errors::Result;
use crate::log::{debug, warn};
use crate::markings::MarkingSpec;
use crate::region::{Area, Region};
use crate::types::Meters;

/// The four corners of the pitch.
///
/// `Left`/`Right` name the goal line, `Near`/`Far` the touchline (near is the
/// start of the width axis).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    LeftNear,
    LeftFar,
    RightNear,
    RightFar,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::LeftNear,
        Corner::LeftFar,
        Corner::RightNear,
        Corner::RightFar,
    ];

    fn is_right(self) -> bool {
        matches!(self, Corner::RightNear | Corner::RightFar)
    }

    fn is_far(self) -> bool {
        matches!(self, Corner::LeftFar | Corner::RightFar)
    }
}

/// Every region query the geometry answers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionName {
    PitchArea,
    CentreCircle,
    CentreMark,
    HalfwayLine,
    LeftPenaltyArc,
    LeftPenaltyArea,
    LeftPenaltyMark,
    LeftGoalArea,
    LeftGoal,
    RightPenaltyArc,
    RightPenaltyArea,
    RightPenaltyMark,
    RightGoalArea,
    RightGoal,
    CornerArc(Corner),
}

const LEFT_SIDE: [RegionName; 5] = [
    RegionName::LeftPenaltyArc,
    RegionName::LeftPenaltyArea,
    RegionName::LeftPenaltyMark,
    RegionName::LeftGoalArea,
    RegionName::LeftGoal,
];

const RIGHT_SIDE: [RegionName; 5] = [
    RegionName::RightPenaltyArc,
    RegionName::RightPenaltyArea,
    RegionName::RightPenaltyMark,
    RegionName::RightGoalArea,
    RegionName::RightGoal,
];

const CENTRE: [RegionName; 3] = [
    RegionName::CentreCircle,
    RegionName::CentreMark,
    RegionName::HalfwayLine,
];

impl RegionName {
    pub const ALL: [RegionName; 18] = [
        RegionName::PitchArea,
        RegionName::CentreCircle,
        RegionName::CentreMark,
        RegionName::HalfwayLine,
        RegionName::LeftPenaltyArc,
        RegionName::LeftPenaltyArea,
        RegionName::LeftPenaltyMark,
        RegionName::LeftGoalArea,
        RegionName::LeftGoal,
        RegionName::RightPenaltyArc,
        RegionName::RightPenaltyArea,
        RegionName::RightPenaltyMark,
        RegionName::RightGoalArea,
        RegionName::RightGoal,
        RegionName::CornerArc(Corner::LeftNear),
        RegionName::CornerArc(Corner::LeftFar),
        RegionName::CornerArc(Corner::RightNear),
        RegionName::CornerArc(Corner::RightFar),
    ];

    /// The regions to draw for a half selection, in drawing order: the pitch
    /// area, then the left side, the right side and the centre as selected.
    ///
    /// Corner arcs are left out; they need clipping to the pitch area, which
    /// is up to the renderer.
    pub fn for_half(half: HalfSelection) -> Vec<RegionName> {
        let mut names = vec![RegionName::PitchArea];
        if half.includes_left() {
            names.extend(LEFT_SIDE);
        }
        if half.includes_right() {
            names.extend(RIGHT_SIDE);
        }
        if half == HalfSelection::Both {
            names.extend(CENTRE);
        }
        names
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RegionName::PitchArea => "pitch_area",
            RegionName::CentreCircle => "centre_circle",
            RegionName::CentreMark => "centre_mark",
            RegionName::HalfwayLine => "halfway_line",
            RegionName::LeftPenaltyArc => "left_penalty_arc",
            RegionName::LeftPenaltyArea => "left_penalty_area",
            RegionName::LeftPenaltyMark => "left_penalty_mark",
            RegionName::LeftGoalArea => "left_goal_area",
            RegionName::LeftGoal => "left_goal",
            RegionName::RightPenaltyArc => "right_penalty_arc",
            RegionName::RightPenaltyArea => "right_penalty_area",
            RegionName::RightPenaltyMark => "right_penalty_mark",
            RegionName::RightGoalArea => "right_goal_area",
            RegionName::RightGoal => "right_goal",
            RegionName::CornerArc(Corner::LeftNear) => "corner_arc_left_near",
            RegionName::CornerArc(Corner::LeftFar) => "corner_arc_left_far",
            RegionName::CornerArc(Corner::RightNear) => "corner_arc_right_near",
            RegionName::CornerArc(Corner::RightFar) => "corner_arc_right_far",
        }
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pitch geometry: a coordinate space plus resolved markings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitchGeometry {
    space: CoordinateSpace,
    markings: MarkingSpec,
}

impl Default for PitchGeometry {
    fn default() -> Self {
        Self::regulation()
    }
}

impl PitchGeometry {
    /// Resolve a configuration into a geometry.
    pub fn new(config: &PitchConfig) -> Result<Self> {
        let markings = MarkingSpec::new(&config.markings)?;
        let space = match (config.x_range, config.y_range) {
            (None, None) => CoordinateSpace::new(
                markings.pitch_length(),
                markings.pitch_width(),
                config.orientation,
                config.half,
            )?,
            (x_range, y_range) => {
                let (default_x, default_y) = compute_ranges(
                    markings.pitch_length().raw(),
                    markings.pitch_width().raw(),
                    config.orientation,
                    HalfSelection::Both,
                );
                CoordinateSpace::from_ranges(
                    x_range.unwrap_or(default_x.as_tuple()),
                    y_range.unwrap_or(default_y.as_tuple()),
                    config.orientation,
                    config.half,
                )?
            }
        };

        let markings = if config.lock_markings {
            markings
        } else {
            let along = space.full_length_extent() / markings.pitch_length().raw();
            let across = space.width_extent() / markings.pitch_width().raw();
            warn!(along, across, "markings unlocked, rescaling into axis units");
            let (x_scale, y_scale) = match config.orientation {
                Orientation::Horizontal => (along, across),
                Orientation::Vertical => (across, along),
            };
            markings.rescaled(x_scale, y_scale, config.orientation)?
        };

        debug!(
            length = space.full_length_extent(),
            width = space.width_extent(),
            "pitch geometry ready"
        );
        Ok(Self::from_parts(space, markings))
    }

    /// Combine an existing coordinate space and marking spec.
    pub fn from_parts(space: CoordinateSpace, markings: MarkingSpec) -> Self {
        Self { space, markings }
    }

    /// Horizontal 105 × 68 pitch with regulation markings.
    pub fn regulation() -> Self {
        Self::from_parts(CoordinateSpace::regulation(), MarkingSpec::regulation())
    }

    pub fn space(&self) -> &CoordinateSpace {
        &self.space
    }

    pub fn markings(&self) -> &MarkingSpec {
        &self.markings
    }

    pub fn orientation(&self) -> Orientation {
        self.space.orientation()
    }

    pub fn half_selection(&self) -> HalfSelection {
        self.space.half_selection()
    }

    /// Full pitch length in axis units
    fn length(&self) -> f64 {
        self.space.full_length_extent()
    }

    fn width(&self) -> f64 {
        self.space.width_extent()
    }

    /// Area spanning `along` × `across` intervals of the pitch frame
    fn span(&self, along: (f64, f64), across: (f64, f64)) -> Area {
        Area::from_corners(
            self.space.place(along.0, across.0),
            self.space.place(along.1, across.1),
        )
    }

    /// Square area of half-extent `radius` around a pitch-frame point
    fn around(&self, along: f64, across: f64, radius: Meters) -> Area {
        let r = radius.raw();
        self.span((along - r, along + r), (across - r, across + r))
    }

    /// Across-interval centred on the width with the given half-width
    fn centred_across(&self, half_width: f64) -> (f64, f64) {
        let mid = self.width() / 2.0;
        (mid - half_width, mid + half_width)
    }

    /// Half-width of a box drawn around the goal mouth
    fn box_half_width(&self, depth: Meters) -> f64 {
        self.markings.goal_width().raw() / 2.0 + depth.raw()
    }

    /// Answer a query by name.
    pub fn region(&self, name: RegionName) -> Region {
        match name {
            RegionName::PitchArea => self.pitch_area(),
            RegionName::CentreCircle => self.centre_circle(),
            RegionName::CentreMark => self.centre_mark(),
            RegionName::HalfwayLine => self.halfway_line(),
            RegionName::LeftPenaltyArc => self.left_penalty_arc(),
            RegionName::LeftPenaltyArea => self.left_penalty_area(),
            RegionName::LeftPenaltyMark => self.left_penalty_mark(),
            RegionName::LeftGoalArea => self.left_goal_area(),
            RegionName::LeftGoal => self.left_goal(),
            RegionName::RightPenaltyArc => self.right_penalty_arc(),
            RegionName::RightPenaltyArea => self.right_penalty_area(),
            RegionName::RightPenaltyMark => self.right_penalty_mark(),
            RegionName::RightGoalArea => self.right_goal_area(),
            RegionName::RightGoal => self.right_goal(),
            RegionName::CornerArc(corner) => self.corner_arc(corner),
        }
    }

    /// Every named region, in [`RegionName::ALL`] order
    pub fn regions(&self) -> Vec<(RegionName, Region)> {
        RegionName::ALL
            .iter()
            .map(|&name| (name, self.region(name)))
            .collect()
    }

    /// The visible axis ranges
    pub fn pitch_area(&self) -> Region {
        Region::rect(Area::new(
            self.space.x_start(),
            self.space.y_start(),
            self.space.x_end(),
            self.space.y_end(),
        ))
    }

    pub fn centre_circle(&self) -> Region {
        let radius = self.markings.centre_circle_radius();
        Region::circle(self.around(self.length() / 2.0, self.width() / 2.0, radius))
    }

    pub fn centre_mark(&self) -> Region {
        let radius = self.markings.mark_radius();
        Region::circle(self.around(self.length() / 2.0, self.width() / 2.0, radius))
    }

    pub fn halfway_line(&self) -> Region {
        let mid = self.length() / 2.0;
        Region::line(self.span((mid, mid), (0.0, self.width())))
    }

    pub fn left_penalty_arc(&self) -> Region {
        let m = &self.markings;
        Region::circle(self.around(
            m.penalty_mark_distance().raw(),
            self.width() / 2.0,
            m.centre_circle_radius(),
        ))
    }

    pub fn left_penalty_area(&self) -> Region {
        let depth = self.markings.penalty_area_length();
        Region::rect(self.span(
            (0.0, depth.raw()),
            self.centred_across(self.box_half_width(depth)),
        ))
    }

    pub fn left_penalty_mark(&self) -> Region {
        let m = &self.markings;
        Region::circle(self.around(
            m.penalty_mark_distance().raw(),
            self.width() / 2.0,
            m.mark_radius(),
        ))
    }

    pub fn left_goal_area(&self) -> Region {
        let depth = self.markings.goal_area_length();
        Region::rect(self.span(
            (0.0, depth.raw()),
            self.centred_across(self.box_half_width(depth)),
        ))
    }

    pub fn left_goal(&self) -> Region {
        let m = &self.markings;
        Region::rect(self.span(
            (-m.goal_height().raw(), 0.0),
            self.centred_across(m.goal_width().raw() / 2.0),
        ))
    }

    pub fn right_penalty_arc(&self) -> Region {
        let m = &self.markings;
        Region::circle(self.around(
            self.length() - m.penalty_mark_distance().raw(),
            self.width() / 2.0,
            m.centre_circle_radius(),
        ))
    }

    pub fn right_penalty_area(&self) -> Region {
        let depth = self.markings.penalty_area_length();
        Region::rect(self.span(
            (self.length() - depth.raw(), self.length()),
            self.centred_across(self.box_half_width(depth)),
        ))
    }

    pub fn right_penalty_mark(&self) -> Region {
        let m = &self.markings;
        Region::circle(self.around(
            self.length() - m.penalty_mark_distance().raw(),
            self.width() / 2.0,
            m.mark_radius(),
        ))
    }

    pub fn right_goal_area(&self) -> Region {
        let depth = self.markings.goal_area_length();
        Region::rect(self.span(
            (self.length() - depth.raw(), self.length()),
            self.centred_across(self.box_half_width(depth)),
        ))
    }

    pub fn right_goal(&self) -> Region {
        let m = &self.markings;
        Region::rect(self.span(
            (self.length(), self.length() + m.goal_height().raw()),
            self.centred_across(m.goal_width().raw() / 2.0),
        ))
    }

    /// Full circle of the corner arc radius around a corner
    pub fn corner_arc(&self, corner: Corner) -> Region {
        let along = if corner.is_right() { self.length() } else { 0.0 };
        let across = if corner.is_far() { self.width() } else { 0.0 };
        Region::circle(self.around(along, across, self.markings.corner_arc_radius()))
    }
}
