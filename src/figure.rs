//! Drawing commands and the canvas they are issued to.
//!
//! A [`Canvas`] is the seam to a charting surface. [`Figure`] is the
//! in-crate implementation: it records every command in issue order so the
//! result can be inspected, tested, or replayed onto a real renderer.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::coords::AxisRange;
use crate::errors::PitchError;
use crate::region::Region;
use crate::theme::Color;

/// Which pair of axes a command is positioned against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axes {
    /// Pitch axes, in pitch units
    #[default]
    Pitch,
    /// Data axes drawn over the pitch
    Overlay,
}

/// Stacking of a shape relative to traces
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layer {
    #[default]
    Below,
    Above,
}

/// A region drawn as a shape
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeCommand {
    pub region: Region,
    pub layer: Layer,
    pub line_color: Color,
    /// `None` leaves the shape unfilled
    pub fill_color: Option<Color>,
    pub axes: Axes,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkerSymbol {
    #[default]
    Circle,
    Square,
    TriangleUp,
}

impl FromStr for MarkerSymbol {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(MarkerSymbol::Circle),
            "square" => Ok(MarkerSymbol::Square),
            "triangle-up" => Ok(MarkerSymbol::TriangleUp),
            _ => Err(PitchError::InvalidStyle {
                kind: "marker symbol",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MarkerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MarkerSymbol::Circle => "circle",
            MarkerSymbol::Square => "square",
            MarkerSymbol::TriangleUp => "triangle-up",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dash {
    #[default]
    Solid,
    Dot,
    Dash,
    LongDash,
    DashDot,
}

impl FromStr for Dash {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Dash::Solid),
            "dot" => Ok(Dash::Dot),
            "dash" => Ok(Dash::Dash),
            "longdash" => Ok(Dash::LongDash),
            "dashdot" => Ok(Dash::DashDot),
            _ => Err(PitchError::InvalidStyle {
                kind: "dash",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Dash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dash::Solid => "solid",
            Dash::Dot => "dot",
            Dash::Dash => "dash",
            Dash::LongDash => "longdash",
            Dash::DashDot => "dashdot",
        })
    }
}

/// Where a text label sits relative to its anchor point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextPosition {
    TopCenter,
    MiddleCenter,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub size: u32,
    pub color: Color,
    pub symbol: MarkerSymbol,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    pub dash: Dash,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: TextPosition,
    pub color: Color,
}

/// What a trace draws through its points
#[derive(Clone, Debug, PartialEq)]
pub enum TraceKind {
    /// Markers with a label next to each
    Markers { marker: Marker, label: Label },
    /// Labels only
    Text { label: Label },
    /// Polyline through the points
    Lines { line: LineStyle },
    /// Polyline closed and filled
    Filled { line: LineStyle, fill: Color },
}

/// A data trace
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub points: Vec<DVec2>,
    pub kind: TraceKind,
    pub opacity: f64,
    pub show_legend: bool,
    pub axes: Axes,
}

/// Arrow drawn from `start` to `end`
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowAnnotation {
    pub start: DVec2,
    pub end: DVec2,
    /// Arrowhead style, as numbered by common charting libraries
    pub head: u8,
    pub head_size: f64,
    pub width: f64,
    pub color: Color,
    pub opacity: f64,
    pub axes: Axes,
}

/// Surface drawing commands are issued to
pub trait Canvas {
    fn add_shape(&mut self, shape: ShapeCommand);
    fn add_trace(&mut self, trace: Trace);
    fn add_annotation(&mut self, arrow: ArrowAnnotation);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn add_shape(&mut self, shape: ShapeCommand) {
        (**self).add_shape(shape);
    }

    fn add_trace(&mut self, trace: Trace) {
        (**self).add_trace(trace);
    }

    fn add_annotation(&mut self, arrow: ArrowAnnotation) {
        (**self).add_annotation(arrow);
    }
}

/// One recorded command
#[derive(Clone, Debug, PartialEq)]
pub enum FigureItem {
    Shape(ShapeCommand),
    Trace(Trace),
    Annotation(ArrowAnnotation),
}

/// Recording canvas
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Figure {
    items: Vec<FigureItem>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded, in issue order
    pub fn items(&self) -> &[FigureItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &ShapeCommand> {
        self.items.iter().filter_map(|item| match item {
            FigureItem::Shape(shape) => Some(shape),
            _ => None,
        })
    }

    pub fn traces(&self) -> impl Iterator<Item = &Trace> {
        self.items.iter().filter_map(|item| match item {
            FigureItem::Trace(trace) => Some(trace),
            _ => None,
        })
    }

    pub fn annotations(&self) -> impl Iterator<Item = &ArrowAnnotation> {
        self.items.iter().filter_map(|item| match item {
            FigureItem::Annotation(arrow) => Some(arrow),
            _ => None,
        })
    }
}

impl Canvas for Figure {
    fn add_shape(&mut self, shape: ShapeCommand) {
        self.items.push(FigureItem::Shape(shape));
    }

    fn add_trace(&mut self, trace: Trace) {
        self.items.push(FigureItem::Trace(trace));
    }

    fn add_annotation(&mut self, arrow: ArrowAnnotation) {
        self.items.push(FigureItem::Annotation(arrow));
    }
}

/// Which axis another one is scale-anchored to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnchoredAxis {
    /// y follows x (horizontal pitches)
    YToX,
    /// x follows y (vertical pitches)
    XToY,
}

/// Axis ranges, aspect anchoring and size for presenting a pitch
#[derive(Clone, Debug, PartialEq)]
pub struct FigureLayout {
    pub pitch_x: AxisRange,
    pub pitch_y: AxisRange,
    pub overlay_x: AxisRange,
    pub overlay_y: AxisRange,
    pub anchor: AnchoredAxis,
    /// Scale ratio of the anchored pitch axis
    pub pitch_scale_ratio: f64,
    /// Scale ratio of the anchored overlay axis
    pub overlay_scale_ratio: f64,
    /// Figure width in pixels
    pub width: f64,
    /// Figure height in pixels
    pub height: f64,
    pub background: Color,
}
