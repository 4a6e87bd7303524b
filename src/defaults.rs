//! Regulation pitch sizes and marking dimensions (all in meters, IFAB Laws of the Game)

use crate::types::Meters;

pub const PITCH_LENGTH: Meters = Meters::meters(105.0);
pub const PITCH_WIDTH: Meters = Meters::meters(68.0);

pub const CENTRE_CIRCLE_RADIUS: Meters = Meters::meters(9.15);
pub const PENALTY_AREA_LENGTH: Meters = Meters::meters(16.5);
pub const PENALTY_MARK_DISTANCE: Meters = Meters::meters(11.0);
pub const GOAL_AREA_LENGTH: Meters = Meters::meters(5.5);
pub const CORNER_ARC_RADIUS: Meters = Meters::meters(1.0);
pub const GOAL_WIDTH: Meters = Meters::meters(7.32);
pub const GOAL_HEIGHT: Meters = Meters::meters(2.44);
pub const MARK_RADIUS: Meters = Meters::meters(0.2);

/// Padding added on each side of an axis range when laying out a figure
pub const AXIS_PADDING: f64 = 0.05;
/// Default figure length (pixels) for a full pitch
pub const FIGURE_LENGTH: f64 = 1024.0;
/// Default figure length (pixels) for a half pitch
pub const HALF_FIGURE_LENGTH: f64 = 768.0;
/// Extra figure height, as a fraction of the length, reserved for margins
pub const FIGURE_MARGIN_RATIO: f64 = 0.07;

pub const MARKER_SIZE: u32 = 20;
pub const LINE_WIDTH: f64 = 2.0;
pub const GRADIENT_STEPS: usize = 20;
