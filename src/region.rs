//! Region records returned by the geometry queries.
//!
//! Every region is described by its bounding [`Area`], two opposite corners
//! in axis coordinates. The [`Region`] enum tags the area with the drawing
//! primitive a renderer should use for it.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use crate::types::approx_eq;

/// Two opposite corners `(x0, y0)` and `(x1, y1)` in axis coordinates.
///
/// Corners produced by the geometry engine are ordered along each axis's
/// own direction: `x0` is the corner nearer the start of the x axis. On a
/// non-inverted axis that means `x0 <= x1`; use [`Area::normalized`] when
/// min/max order is needed on inverted axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Area {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Area {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn from_corners(start: DVec2, end: DVec2) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    pub fn start(&self) -> DVec2 {
        dvec2(self.x0, self.y0)
    }

    pub fn end(&self) -> DVec2 {
        dvec2(self.x1, self.y1)
    }

    pub fn width(&self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y1 - self.y0).abs()
    }

    pub fn center(&self) -> DVec2 {
        (self.start() + self.end()) * 0.5
    }

    /// Half of the width and height
    pub fn half_extent(&self) -> DVec2 {
        dvec2(self.width(), self.height()) * 0.5
    }

    /// Same area with `x0 <= x1` and `y0 <= y1`
    pub fn normalized(&self) -> Self {
        let min = self.start().min(self.end());
        let max = self.start().max(self.end());
        Self::from_corners(min, max)
    }

    /// Swap the roles of the x and y axes
    pub fn transposed(&self) -> Self {
        Self::new(self.y0, self.x0, self.y1, self.x1)
    }

    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.x0, self.y0, self.x1, self.y1)
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.x0, other.x0)
            && approx_eq(self.y0, other.y0)
            && approx_eq(self.x1, other.x1)
            && approx_eq(self.y1, other.y1)
    }
}

/// Drawing primitive a region maps to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Rect,
    /// Ellipse inscribed in the area (a circle on equal-scale axes)
    Circle,
    /// Segment from `(x0, y0)` to `(x1, y1)`
    Line,
}

/// Common behavior for all regions
#[enum_dispatch]
pub trait Outline {
    /// Bounding corners in axis coordinates
    fn area(&self) -> Area;

    fn primitive(&self) -> Primitive;

    fn center(&self) -> DVec2 {
        self.area().center()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectRegion(pub Area);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleRegion(pub Area);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineRegion(pub Area);

impl Outline for RectRegion {
    fn area(&self) -> Area {
        self.0
    }

    fn primitive(&self) -> Primitive {
        Primitive::Rect
    }
}

impl Outline for CircleRegion {
    fn area(&self) -> Area {
        self.0
    }

    fn primitive(&self) -> Primitive {
        Primitive::Circle
    }
}

impl CircleRegion {
    /// Radii along x and y
    pub fn radii(&self) -> DVec2 {
        self.0.half_extent()
    }
}

impl Outline for LineRegion {
    fn area(&self) -> Area {
        self.0
    }

    fn primitive(&self) -> Primitive {
        Primitive::Line
    }

    fn center(&self) -> DVec2 {
        self.0.start().lerp(self.0.end(), 0.5)
    }
}

impl LineRegion {
    pub fn length(&self) -> f64 {
        self.0.start().distance(self.0.end())
    }
}

/// A named region of the pitch
#[enum_dispatch(Outline)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Region {
    Rect(RectRegion),
    Circle(CircleRegion),
    Line(LineRegion),
}

impl Region {
    pub fn rect(area: Area) -> Self {
        Region::Rect(RectRegion(area))
    }

    pub fn circle(area: Area) -> Self {
        Region::Circle(CircleRegion(area))
    }

    pub fn line(area: Area) -> Self {
        Region::Line(LineRegion(area))
    }

    /// Same primitive with the x and y axes swapped
    pub fn transposed(&self) -> Self {
        let area = self.area().transposed();
        match self {
            Region::Rect(_) => Region::rect(area),
            Region::Circle(_) => Region::circle(area),
            Region::Line(_) => Region::line(area),
        }
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        self.primitive() == other.primitive() && self.area().approx_eq(&other.area())
    }
}
