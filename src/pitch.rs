//! The pitch drawing facade.
//!
//! [`Pitch`] owns two coordinate spaces: the pitch axes, always in meters of
//! the configured pitch, where the markings are drawn; and the overlay axes,
//! in whatever units the caller's data uses (e.g. `0..100` event data),
//! where points, lines and arrows are placed.

use glam::DVec2;

use crate::config::PitchConfig;
use crate::coords::{AxisRange, CoordinateSpace, HalfSelection, Orientation};
use crate::defaults;
use crate::errors::Result;
use crate::figure::{
    AnchoredAxis, ArrowAnnotation, Axes, Canvas, Dash, Figure, FigureLayout, Label, Layer,
    LineStyle, Marker, MarkerSymbol, ShapeCommand, TextPosition, Trace, TraceKind,
};
use crate::geometry::{PitchGeometry, RegionName};
use crate::log::debug;
use crate::markings::MarkingConfig;
use crate::region::{Outline, Primitive};
use crate::theme::{Color, DefaultTheme, Theme};

/// Options for [`Pitch::new`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PitchOptions {
    /// Overlay range along the pitch length; defaults to `(0, pitch_length)`
    pub length_range: Option<(f64, f64)>,
    /// Overlay range across the pitch width; defaults to `(0, pitch_width)`
    pub width_range: Option<(f64, f64)>,
    pub markings: MarkingConfig,
    pub orientation: Orientation,
    pub half: HalfSelection,
}

impl PitchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length_range(mut self, start: f64, end: f64) -> Self {
        self.length_range = Some((start, end));
        self
    }

    pub fn with_width_range(mut self, start: f64, end: f64) -> Self {
        self.width_range = Some((start, end));
        self
    }

    pub fn with_markings(mut self, markings: MarkingConfig) -> Self {
        self.markings = markings;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_half(mut self, half: HalfSelection) -> Self {
        self.half = half;
        self
    }
}

/// Player or event marker
#[derive(Clone, Debug, PartialEq)]
pub struct PointStyle {
    pub size: u32,
    /// Label shown above the marker
    pub text: Option<String>,
    /// Shirt number drawn on the marker
    pub number: Option<u32>,
    /// Defaults to the theme's home team color
    pub color: Option<Color>,
    pub opacity: f64,
    pub symbol: MarkerSymbol,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            size: defaults::MARKER_SIZE,
            text: None,
            number: None,
            color: None,
            opacity: 1.0,
            symbol: MarkerSymbol::Circle,
        }
    }
}

impl PointStyle {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_symbol(mut self, symbol: MarkerSymbol) -> Self {
        self.symbol = symbol;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineOptions {
    /// Defaults to the theme's line color
    pub color: Option<Color>,
    pub width: f64,
    pub opacity: f64,
    pub dash: Dash,
    /// Fade in from a quarter width and a tenth of the opacity
    pub gradient: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            color: None,
            width: defaults::LINE_WIDTH,
            opacity: 1.0,
            dash: Dash::Solid,
            gradient: false,
        }
    }
}

impl LineOptions {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_dash(mut self, dash: Dash) -> Self {
        self.dash = dash;
        self
    }

    pub fn gradient(mut self) -> Self {
        self.gradient = true;
        self
    }
}

/// Width and opacity interpolated from start to end over `steps` segments
#[derive(Clone, Debug, PartialEq)]
pub struct GradientOptions {
    pub color: Option<Color>,
    pub width_start: f64,
    pub width_end: f64,
    pub opacity_start: f64,
    pub opacity_end: f64,
    pub steps: usize,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            color: None,
            width_start: 1.0,
            width_end: 4.0,
            opacity_start: 0.1,
            opacity_end: 1.0,
            steps: defaults::GRADIENT_STEPS,
        }
    }
}

impl GradientOptions {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_widths(mut self, start: f64, end: f64) -> Self {
        self.width_start = start;
        self.width_end = end;
        self
    }

    pub fn with_opacities(mut self, start: f64, end: f64) -> Self {
        self.opacity_start = start;
        self.opacity_end = end;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }
}

/// Color and opacity of arrows and triangles
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeOptions {
    pub color: Option<Color>,
    pub width: f64,
    pub opacity: f64,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            color: None,
            width: defaults::LINE_WIDTH,
            opacity: 1.0,
        }
    }
}

impl StrokeOptions {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// A pitch drawn onto a canvas, with helpers for annotating it
#[derive(Debug)]
pub struct Pitch<C = Figure, T = DefaultTheme> {
    geometry: PitchGeometry,
    overlay: CoordinateSpace,
    theme: T,
    canvas: C,
}

impl Pitch {
    /// Draw a pitch onto a fresh [`Figure`] with the light default theme.
    pub fn new(options: &PitchOptions) -> Result<Self> {
        Self::with_canvas(options, Figure::new(), DefaultTheme::default())
    }
}

impl<C: Canvas, T: Theme> Pitch<C, T> {
    /// Draw a pitch onto `canvas`.
    pub fn with_canvas(options: &PitchOptions, canvas: C, theme: T) -> Result<Self> {
        let config = PitchConfig::new()
            .with_markings(options.markings.clone())
            .with_orientation(options.orientation)
            .with_half(options.half);
        let geometry = PitchGeometry::new(&config)?;

        let markings = geometry.markings();
        let length_range = options
            .length_range
            .unwrap_or((0.0, markings.pitch_length().raw()));
        let width_range = options
            .width_range
            .unwrap_or((0.0, markings.pitch_width().raw()));
        let (x_range, y_range) = match options.orientation {
            Orientation::Horizontal => (length_range, width_range),
            Orientation::Vertical => (width_range, length_range),
        };
        let overlay =
            CoordinateSpace::from_ranges(x_range, y_range, options.orientation, options.half)?;

        let mut pitch = Self {
            geometry,
            overlay,
            theme,
            canvas,
        };
        pitch.draw_markings();
        Ok(pitch)
    }

    fn draw_markings(&mut self) {
        let names = RegionName::for_half(self.geometry.half_selection());
        for &name in &names {
            let region = self.geometry.region(name);
            let fill_color = match region.primitive() {
                Primitive::Line => None,
                Primitive::Rect | Primitive::Circle => Some(self.theme.background()),
            };
            self.canvas.add_shape(ShapeCommand {
                region,
                layer: Layer::Below,
                line_color: self.theme.border(),
                fill_color,
                axes: Axes::Pitch,
            });
        }
        debug!(shapes = names.len(), half = %self.geometry.half_selection(), "drew pitch markings");
    }

    pub fn geometry(&self) -> &PitchGeometry {
        &self.geometry
    }

    /// Coordinate space of the overlay axes
    pub fn overlay(&self) -> &CoordinateSpace {
        &self.overlay
    }

    pub fn theme(&self) -> &T {
        &self.theme
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Visible x range of the overlay axes
    pub fn xaxis_range(&self) -> (f64, f64) {
        self.overlay.x_range().as_tuple()
    }

    /// Visible y range of the overlay axes
    pub fn yaxis_range(&self) -> (f64, f64) {
        self.overlay.y_range().as_tuple()
    }

    /// Marker at `at`, with an optional label above and number on top.
    pub fn add_point(&mut self, at: DVec2, style: PointStyle) {
        self.canvas.add_trace(Trace {
            points: vec![at],
            kind: TraceKind::Markers {
                marker: Marker {
                    size: style.size,
                    color: style.color.unwrap_or_else(|| self.theme.home_team()),
                    symbol: style.symbol,
                },
                label: Label {
                    text: style.text.unwrap_or_default(),
                    position: TextPosition::TopCenter,
                    color: self.theme.text(),
                },
            },
            opacity: style.opacity,
            show_legend: true,
            axes: Axes::Overlay,
        });

        if let Some(number) = style.number {
            self.canvas.add_trace(Trace {
                points: vec![at],
                kind: TraceKind::Text {
                    label: Label {
                        text: number.to_string(),
                        position: TextPosition::MiddleCenter,
                        color: self.theme.number(),
                    },
                },
                opacity: 1.0,
                show_legend: false,
                axes: Axes::Overlay,
            });
        }
    }

    /// Straight line from `start` to `end`, or a fading one with `gradient`.
    pub fn add_line(&mut self, start: DVec2, end: DVec2, options: LineOptions) {
        let color = options.color.unwrap_or_else(|| self.theme.line());
        if options.gradient {
            let gradient = GradientOptions::default()
                .with_color(color)
                .with_widths(options.width / 4.0, options.width)
                .with_opacities(options.opacity * 0.1, options.opacity);
            self.add_gradient_line(start, end, gradient);
            return;
        }

        self.canvas.add_trace(Trace {
            points: vec![start, end],
            kind: TraceKind::Lines {
                line: LineStyle {
                    color,
                    width: options.width,
                    dash: options.dash,
                },
            },
            opacity: options.opacity,
            show_legend: true,
            axes: Axes::Overlay,
        });
    }

    /// Line split into segments whose width and opacity are taken at each
    /// segment's start.
    pub fn add_gradient_line(&mut self, start: DVec2, end: DVec2, options: GradientOptions) {
        let color = options.color.unwrap_or_else(|| self.theme.line());
        let steps = options.steps as f64;
        for i in 0..options.steps {
            let t0 = i as f64 / steps;
            let t1 = (i + 1) as f64 / steps;
            let width = options.width_start + (options.width_end - options.width_start) * t0;
            let opacity =
                options.opacity_start + (options.opacity_end - options.opacity_start) * t0;
            self.canvas.add_trace(Trace {
                points: vec![start.lerp(end, t0), start.lerp(end, t1)],
                kind: TraceKind::Lines {
                    line: LineStyle {
                        color: color.clone(),
                        width,
                        dash: Dash::Solid,
                    },
                },
                opacity,
                show_legend: false,
                axes: Axes::Overlay,
            });
        }
    }

    /// Arrow pointing from `start` to `end`.
    pub fn add_annotation(&mut self, start: DVec2, end: DVec2, options: StrokeOptions) {
        self.canvas.add_annotation(ArrowAnnotation {
            start,
            end,
            head: 2,
            head_size: 1.0,
            width: options.width,
            color: options.color.unwrap_or_else(|| self.theme.line()),
            opacity: options.opacity,
            axes: Axes::Overlay,
        });
    }

    /// Filled triangle through three points.
    pub fn add_triangle(&mut self, a: DVec2, b: DVec2, c: DVec2, options: StrokeOptions) {
        let color = options.color.unwrap_or_else(|| self.theme.line());
        self.canvas.add_trace(Trace {
            points: vec![a, b, c, a],
            kind: TraceKind::Filled {
                line: LineStyle {
                    color: color.clone(),
                    width: options.width,
                    dash: Dash::Solid,
                },
                fill: color,
            },
            opacity: options.opacity,
            show_legend: true,
            axes: Axes::Overlay,
        });
    }

    /// Figure size in pixels as `(width, height)`.
    ///
    /// Defaults to 1024 pixels along the pitch length (768 for a half) and
    /// enough across it for the pitch's aspect ratio plus a margin; a half
    /// pitch is square. Vertical pitches swap the two.
    pub fn figure_size(&self, fig_length: Option<f64>, fig_width: Option<f64>) -> (f64, f64) {
        let is_half = self.geometry.half_selection().is_half();
        let length = fig_length.unwrap_or(if is_half {
            defaults::HALF_FIGURE_LENGTH
        } else {
            defaults::FIGURE_LENGTH
        });
        let width = fig_width.unwrap_or_else(|| {
            if is_half {
                length
            } else {
                length * self.geometry.space().aspect_ratio() + length * defaults::FIGURE_MARGIN_RATIO
            }
        });
        match self.geometry.orientation() {
            Orientation::Horizontal => (length, width),
            Orientation::Vertical => (width, length),
        }
    }

    /// Padded axis ranges, aspect anchoring and figure size for presenting
    /// the canvas.
    pub fn layout(&self, fig_length: Option<f64>, fig_width: Option<f64>) -> FigureLayout {
        let (width, height) = self.figure_size(fig_length, fig_width);
        let pad = |range: AxisRange| range.padded(defaults::AXIS_PADDING);
        let space = self.geometry.space();
        FigureLayout {
            pitch_x: pad(space.x_range()),
            pitch_y: pad(space.y_range()),
            overlay_x: pad(self.overlay.x_range()),
            overlay_y: pad(self.overlay.y_range()),
            anchor: match self.geometry.orientation() {
                Orientation::Horizontal => AnchoredAxis::YToX,
                Orientation::Vertical => AnchoredAxis::XToY,
            },
            pitch_scale_ratio: 1.0,
            overlay_scale_ratio: space.aspect_ratio() / self.overlay.aspect_ratio(),
            width,
            height,
            background: self.theme.background(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn draws_regions_for_selected_half() {
        let pitch = Pitch::new(&PitchOptions::new()).unwrap();
        assert_eq!(pitch.canvas().shapes().count(), 14);

        let left = Pitch::new(&PitchOptions::new().with_half(HalfSelection::Left)).unwrap();
        assert_eq!(left.canvas().shapes().count(), 6);
    }

    #[test]
    fn halfway_line_is_unfilled() {
        let pitch = Pitch::new(&PitchOptions::new()).unwrap();
        let shapes: Vec<_> = pitch.canvas().shapes().collect();
        let line = shapes.last().unwrap();
        assert_eq!(line.region.primitive(), Primitive::Line);
        assert_eq!(line.fill_color, None);
        assert!(shapes[..shapes.len() - 1].iter().all(|s| s.fill_color.is_some()));
    }

    #[test]
    fn gradient_line_interpolates_from_segment_start() {
        let mut pitch = Pitch::new(&PitchOptions::new()).unwrap();
        pitch.add_gradient_line(
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            GradientOptions::default().with_steps(4),
        );
        let segments: Vec<_> = pitch.canvas().traces().collect();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[1].points, vec![dvec2(2.5, 0.0), dvec2(5.0, 0.0)]);
        let TraceKind::Lines { line } = &segments[2].kind else {
            panic!("expected a line trace");
        };
        assert_eq!(line.width, 1.0 + 3.0 * 0.5);
        assert!((segments[0].opacity - 0.1).abs() < 1e-12);
    }

    #[test]
    fn gradient_flag_scales_width_and_opacity() {
        let mut pitch = Pitch::new(&PitchOptions::new()).unwrap();
        pitch.add_line(dvec2(0.0, 0.0), dvec2(1.0, 1.0), LineOptions::default().gradient());
        let first = pitch.canvas().traces().next().unwrap();
        let TraceKind::Lines { line } = &first.kind else {
            panic!("expected a line trace");
        };
        assert_eq!(line.width, 0.5);
        assert_eq!(pitch.canvas().traces().count(), defaults::GRADIENT_STEPS);
    }

    #[test]
    fn half_pitch_figure_is_square() {
        let pitch = Pitch::new(&PitchOptions::new().with_half(HalfSelection::Right)).unwrap();
        assert_eq!(pitch.figure_size(None, None), (768.0, 768.0));
    }
}
