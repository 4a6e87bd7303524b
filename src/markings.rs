//! Marking dimensions and how each one is sourced.
//!
//! A [`MarkingSpec`] is resolved once from a [`MarkingConfig`]: every
//! dimension is either an explicit override, the fixed regulation constant,
//! or the regulation constant scaled by `pitch_length / 105`. The resolved
//! spec is an immutable value; rescaling produces a new one.

use std::fmt;

use crate::coords::Orientation;
use crate::defaults;
use crate::errors::{PitchError, Result};
use crate::log::{debug, warn};
use crate::types::{Meters, NumericError, Scalar};

/// A named structural dimension of a pitch's markings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    CentreCircleRadius,
    PenaltyAreaLength,
    PenaltyMarkDistance,
    GoalAreaLength,
    CornerArcRadius,
    GoalWidth,
    GoalHeight,
    MarkRadius,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::CentreCircleRadius,
        Dimension::PenaltyAreaLength,
        Dimension::PenaltyMarkDistance,
        Dimension::GoalAreaLength,
        Dimension::CornerArcRadius,
        Dimension::GoalWidth,
        Dimension::GoalHeight,
        Dimension::MarkRadius,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// The IFAB regulation value for this dimension
    pub fn regulation(self) -> Meters {
        match self {
            Dimension::CentreCircleRadius => defaults::CENTRE_CIRCLE_RADIUS,
            Dimension::PenaltyAreaLength => defaults::PENALTY_AREA_LENGTH,
            Dimension::PenaltyMarkDistance => defaults::PENALTY_MARK_DISTANCE,
            Dimension::GoalAreaLength => defaults::GOAL_AREA_LENGTH,
            Dimension::CornerArcRadius => defaults::CORNER_ARC_RADIUS,
            Dimension::GoalWidth => defaults::GOAL_WIDTH,
            Dimension::GoalHeight => defaults::GOAL_HEIGHT,
            Dimension::MarkRadius => defaults::MARK_RADIUS,
        }
    }

    /// Configuration field name, used in error messages
    pub fn field_name(self) -> &'static str {
        match self {
            Dimension::CentreCircleRadius => "centre_circle_radius",
            Dimension::PenaltyAreaLength => "penalty_area_length",
            Dimension::PenaltyMarkDistance => "penalty_mark_distance",
            Dimension::GoalAreaLength => "goal_area_length",
            Dimension::CornerArcRadius => "corner_arc_radius",
            Dimension::GoalWidth => "goal_width",
            Dimension::GoalHeight => "goal_height",
            Dimension::MarkRadius => "mark_radius",
        }
    }

    /// Whether the dimension is measured along the pitch length.
    ///
    /// Used when rescaling markings into axis units: these follow the length
    /// axis factor, the rest follow the width axis factor.
    pub fn runs_along_length(self) -> bool {
        matches!(
            self,
            Dimension::PenaltyAreaLength
                | Dimension::PenaltyMarkDistance
                | Dimension::GoalAreaLength
                | Dimension::CornerArcRadius
        )
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// How a dimension without an override is sourced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkingScale {
    /// Fixed regulation constants regardless of pitch size
    #[default]
    Standard,
    /// Regulation constants scaled by `pitch_length / 105`
    Proportional,
}

/// Input for [`MarkingSpec::new`].
///
/// Defaults: a 105 × 68 pitch, [`MarkingScale::Standard`], no overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkingConfig {
    pub pitch_length: f64,
    pub pitch_width: f64,
    pub scale: MarkingScale,
    overrides: [Option<f64>; 8],
}

impl Default for MarkingConfig {
    fn default() -> Self {
        Self {
            pitch_length: defaults::PITCH_LENGTH.raw(),
            pitch_width: defaults::PITCH_WIDTH.raw(),
            scale: MarkingScale::Standard,
            overrides: [None; 8],
        }
    }
}

impl MarkingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pitch length and width (meters).
    pub fn with_pitch_size(mut self, length: f64, width: f64) -> Self {
        self.pitch_length = length;
        self.pitch_width = width;
        self
    }

    /// Sets how dimensions without an override are sourced.
    pub fn with_scale(mut self, scale: MarkingScale) -> Self {
        self.scale = scale;
        self
    }

    /// Overrides a single dimension (meters).
    pub fn with_override(mut self, dimension: Dimension, value: f64) -> Self {
        self.overrides[dimension.index()] = Some(value);
        self
    }

    /// The override for a dimension, if any
    pub fn override_for(&self, dimension: Dimension) -> Option<f64> {
        self.overrides[dimension.index()]
    }
}

/// Resolve one dimension under the given sourcing policy.
pub fn resolve_dimension(
    dimension: Dimension,
    override_value: Option<Meters>,
    scale: MarkingScale,
    length_ratio: Scalar,
) -> Meters {
    match (override_value, scale) {
        (Some(value), _) => value,
        (None, MarkingScale::Standard) => dimension.regulation(),
        (None, MarkingScale::Proportional) => dimension.regulation() * length_ratio,
    }
}

/// Resolved marking dimensions for one pitch
#[derive(Clone, Copy, Debug)]
pub struct MarkingSpec {
    pitch_length: Meters,
    pitch_width: Meters,
    scale: MarkingScale,
    overrides: [Option<Meters>; 8],
    resolved: [Meters; 8],
    /// Axis-unit factors applied by `rescaled`, along and across the length
    axis_scale: (Scalar, Scalar),
}

impl Default for MarkingSpec {
    fn default() -> Self {
        Self::regulation()
    }
}

impl MarkingSpec {
    /// Resolve a configuration, validating sizes and overrides.
    pub fn new(config: &MarkingConfig) -> Result<Self> {
        let pitch_length = Meters::try_positive(config.pitch_length)
            .map_err(|e| PitchError::invalid("pitch_length", config.pitch_length, e))?;
        let pitch_width = Meters::try_positive(config.pitch_width)
            .map_err(|e| PitchError::invalid("pitch_width", config.pitch_width, e))?;

        let mut overrides = [None; 8];
        for dimension in Dimension::ALL {
            if let Some(value) = config.override_for(dimension) {
                overrides[dimension.index()] = Some(validate_override(dimension, value)?);
            }
        }

        if config.scale == MarkingScale::Proportional && overrides.iter().any(Option::is_some) {
            warn!("marking overrides are used as given and are not scaled proportionally");
        }

        let spec = Self::resolve_all(pitch_length, pitch_width, config.scale, overrides);
        debug!(
            length = spec.pitch_length.raw(),
            width = spec.pitch_width.raw(),
            scale = ?spec.scale,
            "resolved marking spec"
        );
        Ok(spec)
    }

    /// The regulation 105 × 68 pitch with standard markings.
    pub fn regulation() -> Self {
        Self::resolve_all(
            defaults::PITCH_LENGTH,
            defaults::PITCH_WIDTH,
            MarkingScale::Standard,
            [None; 8],
        )
    }

    fn resolve_all(
        pitch_length: Meters,
        pitch_width: Meters,
        scale: MarkingScale,
        overrides: [Option<Meters>; 8],
    ) -> Self {
        // pitch_length is validated positive by every caller
        let length_ratio = pitch_length
            .checked_div(defaults::PITCH_LENGTH)
            .unwrap_or(Scalar::ONE);
        let resolved = Dimension::ALL.map(|dimension| {
            resolve_dimension(dimension, overrides[dimension.index()], scale, length_ratio)
        });
        Self {
            pitch_length,
            pitch_width,
            scale,
            overrides,
            resolved,
            axis_scale: (Scalar::ONE, Scalar::ONE),
        }
    }

    /// The resolved value of a dimension
    #[inline]
    pub fn resolve(&self, dimension: Dimension) -> Meters {
        self.resolved[dimension.index()]
    }

    pub fn pitch_length(&self) -> Meters {
        self.pitch_length
    }

    pub fn pitch_width(&self) -> Meters {
        self.pitch_width
    }

    pub fn scale(&self) -> MarkingScale {
        self.scale
    }

    /// `pitch_length / 105`
    pub fn length_ratio(&self) -> Scalar {
        self.pitch_length
            .checked_div(defaults::PITCH_LENGTH)
            .unwrap_or(Scalar::ONE)
    }

    /// `pitch_width / pitch_length`
    pub fn aspect_ratio(&self) -> Scalar {
        self.pitch_width
            .checked_div(self.pitch_length)
            .unwrap_or(Scalar::ONE)
    }

    pub fn centre_circle_radius(&self) -> Meters {
        self.resolve(Dimension::CentreCircleRadius)
    }

    pub fn penalty_area_length(&self) -> Meters {
        self.resolve(Dimension::PenaltyAreaLength)
    }

    pub fn penalty_mark_distance(&self) -> Meters {
        self.resolve(Dimension::PenaltyMarkDistance)
    }

    pub fn goal_area_length(&self) -> Meters {
        self.resolve(Dimension::GoalAreaLength)
    }

    pub fn corner_arc_radius(&self) -> Meters {
        self.resolve(Dimension::CornerArcRadius)
    }

    pub fn goal_width(&self) -> Meters {
        self.resolve(Dimension::GoalWidth)
    }

    pub fn goal_height(&self) -> Meters {
        self.resolve(Dimension::GoalHeight)
    }

    pub fn mark_radius(&self) -> Meters {
        self.resolve(Dimension::MarkRadius)
    }

    /// Re-resolve the same overrides and scaling mode for another pitch size.
    ///
    /// `length` and `width` are in meters. Any axis rescale already applied
    /// is applied again to the new dimensions.
    pub fn for_pitch(&self, length: f64, width: f64) -> Result<Self> {
        let pitch_length = Meters::try_positive(length)
            .map_err(|e| PitchError::invalid("pitch_length", length, e))?;
        let pitch_width = Meters::try_positive(width)
            .map_err(|e| PitchError::invalid("pitch_width", width, e))?;
        let (along, across) = self.axis_scale;
        Ok(Self::resolve_all(pitch_length, pitch_width, self.scale, self.overrides)
            .scaled_by(along, across))
    }

    /// Factors from meters to axis units, along and across the pitch length.
    ///
    /// Both are one until [`rescaled`](Self::rescaled) is applied; pitch
    /// length and width stay in meters either way.
    pub fn axis_scale(&self) -> (Scalar, Scalar) {
        self.axis_scale
    }

    fn scaled_by(mut self, along: Scalar, across: Scalar) -> Self {
        for dimension in Dimension::ALL {
            let factor = if dimension.runs_along_length() { along } else { across };
            self.resolved[dimension.index()] = self.resolve(dimension) * factor;
        }
        self.axis_scale = (
            Scalar(self.axis_scale.0.raw() * along.raw()),
            Scalar(self.axis_scale.1.raw() * across.raw()),
        );
        self
    }

    /// A copy with every dimension multiplied into axis units.
    ///
    /// Pitch length and width stay in meters; the factors are kept (see
    /// [`axis_scale`](Self::axis_scale)) and compound over repeated calls.
    ///
    /// `x_scale` and `y_scale` are the factors of the x and y axes; under
    /// vertical orientation the y axis carries the pitch length.
    pub fn rescaled(&self, x_scale: f64, y_scale: f64, orientation: Orientation) -> Result<Self> {
        let x_scale =
            Scalar::try_positive(x_scale).map_err(|e| PitchError::invalid("x_scale", x_scale, e))?;
        let y_scale =
            Scalar::try_positive(y_scale).map_err(|e| PitchError::invalid("y_scale", y_scale, e))?;
        let (along, across) = match orientation {
            Orientation::Horizontal => (x_scale, y_scale),
            Orientation::Vertical => (y_scale, x_scale),
        };
        debug!(along = along.raw(), across = across.raw(), "rescaling markings");

        Ok(self.scaled_by(along, across))
    }
}

/// Equality is tolerance based: specs built from numerically close (not
/// bit-identical) values compare equal.
impl PartialEq for MarkingSpec {
    fn eq(&self, other: &Self) -> bool {
        self.pitch_length.approx_eq(other.pitch_length)
            && self.pitch_width.approx_eq(other.pitch_width)
            && Dimension::ALL
                .iter()
                .all(|&d| self.resolve(d).approx_eq(other.resolve(d)))
    }
}

/// Validate a raw override value for a dimension.
pub fn validate_override(dimension: Dimension, value: f64) -> Result<Meters> {
    Meters::try_non_negative(value).map_err(|e: NumericError| {
        PitchError::invalid(dimension.field_name(), value, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(value: Meters) -> i64 {
        (value.raw() * 100.0).round() as i64
    }

    #[test]
    fn defaults_are_regulation() {
        let markings = MarkingSpec::default();
        assert_eq!(cents(markings.centre_circle_radius()), 915);
        assert_eq!(cents(markings.penalty_area_length()), 1650);
        assert_eq!(cents(markings.penalty_mark_distance()), 1100);
        assert_eq!(cents(markings.goal_area_length()), 550);
        assert_eq!(cents(markings.corner_arc_radius()), 100);
        assert_eq!(cents(markings.goal_width()), 732);
        assert_eq!(cents(markings.goal_height()), 244);
        assert_eq!(cents(markings.mark_radius()), 20);
        assert_eq!(markings.pitch_length(), Meters(105.0));
        assert_eq!(markings.pitch_width(), Meters(68.0));
    }

    #[test]
    fn overrides_win_over_both_scales() {
        for scale in [MarkingScale::Standard, MarkingScale::Proportional] {
            let config = MarkingConfig::new()
                .with_pitch_size(120.0, 80.0)
                .with_scale(scale)
                .with_override(Dimension::CentreCircleRadius, 10.0)
                .with_override(Dimension::PenaltyAreaLength, 18.0)
                .with_override(Dimension::PenaltyMarkDistance, 12.0)
                .with_override(Dimension::GoalAreaLength, 6.0)
                .with_override(Dimension::GoalWidth, 8.0)
                .with_override(Dimension::GoalHeight, 2.67);
            let markings = MarkingSpec::new(&config).unwrap();
            assert_eq!(cents(markings.centre_circle_radius()), 1000);
            assert_eq!(cents(markings.penalty_area_length()), 1800);
            assert_eq!(cents(markings.penalty_mark_distance()), 1200);
            assert_eq!(cents(markings.goal_area_length()), 600);
            assert_eq!(cents(markings.goal_width()), 800);
            assert_eq!(cents(markings.goal_height()), 267);
        }
    }

    #[test]
    fn proportional_scale_follows_length_ratio() {
        let config = MarkingConfig::new()
            .with_pitch_size(52.5, 34.0)
            .with_scale(MarkingScale::Proportional);
        let markings = MarkingSpec::new(&config).unwrap();
        for dimension in Dimension::ALL {
            let expected = dimension.regulation().raw() * 0.5;
            assert!(
                (markings.resolve(dimension).raw() - expected).abs() < 1e-12,
                "{dimension} should be half the regulation value"
            );
        }
    }

    #[test]
    fn standard_scale_ignores_pitch_size() {
        let config = MarkingConfig::new().with_pitch_size(90.0, 45.0);
        let markings = MarkingSpec::new(&config).unwrap();
        for dimension in Dimension::ALL {
            assert_eq!(markings.resolve(dimension), dimension.regulation());
        }
    }

    #[test]
    fn rejects_non_positive_pitch_length() {
        let err = MarkingSpec::new(&MarkingConfig::new().with_pitch_size(0.0, 68.0)).unwrap_err();
        assert_eq!(
            err,
            PitchError::InvalidConfiguration {
                field: "pitch_length",
                value: 0.0,
                reason: NumericError::Zero,
            }
        );

        let err = MarkingSpec::new(&MarkingConfig::new().with_pitch_size(105.0, -1.0)).unwrap_err();
        assert!(matches!(
            err,
            PitchError::InvalidConfiguration { field: "pitch_width", .. }
        ));
    }

    #[test]
    fn rejects_negative_override() {
        let config = MarkingConfig::new().with_override(Dimension::GoalWidth, -7.32);
        let err = MarkingSpec::new(&config).unwrap_err();
        assert!(matches!(
            err,
            PitchError::InvalidConfiguration {
                field: "goal_width",
                reason: NumericError::Negative,
                ..
            }
        ));
        assert!(validate_override(Dimension::GoalHeight, f64::NAN).is_err());
        assert_eq!(validate_override(Dimension::GoalHeight, 2.0), Ok(Meters(2.0)));
    }

    #[test]
    fn equality_is_tolerant() {
        let a = MarkingSpec::new(
            &MarkingConfig::new().with_override(Dimension::CentreCircleRadius, 0.1 + 0.2),
        )
        .unwrap();
        let b = MarkingSpec::new(
            &MarkingConfig::new().with_override(Dimension::CentreCircleRadius, 0.3),
        )
        .unwrap();
        assert_eq!(a, b);

        let c = MarkingSpec::new(
            &MarkingConfig::new().with_override(Dimension::CentreCircleRadius, 10.0),
        )
        .unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn aspect_ratio_is_width_over_length() {
        let markings = MarkingSpec::default();
        assert!((markings.aspect_ratio().raw() - 68.0 / 105.0).abs() < 1e-12);
    }

    #[test]
    fn rescaled_returns_new_snapshot() {
        let markings = MarkingSpec::default();
        let scaled = markings.rescaled(2.0, 0.5, Orientation::Horizontal).unwrap();

        // Receiver is unchanged
        assert_eq!(markings, MarkingSpec::default());
        assert_eq!(scaled.penalty_area_length(), Meters(33.0));
        assert_eq!(scaled.goal_width(), Meters(3.66));
        assert_eq!(scaled.centre_circle_radius(), Meters(4.575));

        let vertical = markings.rescaled(0.5, 2.0, Orientation::Vertical).unwrap();
        assert_eq!(vertical, scaled);

        assert!(markings.rescaled(0.0, 1.0, Orientation::Horizontal).is_err());
    }

    #[test]
    fn for_pitch_reresolves_proportional_dimensions() {
        let config = MarkingConfig::new()
            .with_scale(MarkingScale::Proportional)
            .with_override(Dimension::GoalWidth, 7.0);
        let markings = MarkingSpec::new(&config).unwrap();
        let doubled = markings.for_pitch(210.0, 136.0).unwrap();
        assert_eq!(doubled.penalty_area_length(), Meters(33.0));
        assert_eq!(doubled.goal_width(), Meters(7.0));
        assert_eq!(doubled.pitch_width(), Meters(136.0));
        assert!(markings.for_pitch(-1.0, 68.0).is_err());
        assert_eq!(doubled.scale(), MarkingScale::Proportional);
        assert_eq!(doubled.length_ratio(), Scalar(2.0));
    }

    #[test]
    fn for_pitch_keeps_axis_rescale() {
        let scaled = MarkingSpec::default()
            .rescaled(2.0, 0.5, Orientation::Horizontal)
            .unwrap();
        assert_eq!(scaled.axis_scale(), (Scalar(2.0), Scalar(0.5)));
        assert_eq!(scaled.pitch_length(), Meters(105.0));

        let resized = scaled.for_pitch(120.0, 80.0).unwrap();
        assert_eq!(resized.axis_scale(), scaled.axis_scale());
        assert_eq!(resized.penalty_area_length(), Meters(33.0));
        assert_eq!(resized.goal_width(), Meters(3.66));
        assert_eq!(resized.pitch_length(), Meters(120.0));

        let twice = scaled.rescaled(2.0, 2.0, Orientation::Horizontal).unwrap();
        assert_eq!(twice.axis_scale(), (Scalar(4.0), Scalar(1.0)));
        assert_eq!(twice.penalty_area_length(), Meters(66.0));
    }
}
