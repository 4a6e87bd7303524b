//! Soccer pitch marking geometry.
//!
//! The crate computes the regions that make up a soccer pitch's markings
//! (pitch boundary, centre circle, penalty and goal areas, goals, corner
//! arcs) for regulation or custom pitches, in any orientation, for the whole
//! pitch or one half, and in any axis units.
//!
//! ```
//! use pitchgeo::{Outline, PitchConfig, PitchGeometry};
//!
//! let pitch = PitchGeometry::new(&PitchConfig::default())?;
//! let goal = pitch.left_goal().area();
//! assert_eq!(goal.x0, -2.44);
//! assert_eq!(goal.x1, 0.0);
//! # Ok::<(), pitchgeo::PitchError>(())
//! ```
//!
//! [`Pitch`] draws those regions onto a [`Canvas`] and places data on top
//! of them; [`Figure`] is a canvas that records what was drawn.

pub mod config;
pub mod coords;
pub mod defaults;
pub mod errors;
pub mod figure;
pub mod geometry;
pub mod log;
pub mod markings;
pub mod pitch;
pub mod region;
pub mod theme;
pub mod types;

pub use config::PitchConfig;
pub use coords::{AxisRange, CoordinateSpace, HalfSelection, Orientation, compute_ranges};
pub use errors::{PitchError, Result};
pub use figure::{Canvas, Figure, FigureItem, FigureLayout};
pub use geometry::{Corner, PitchGeometry, RegionName};
pub use markings::{Dimension, MarkingConfig, MarkingScale, MarkingSpec};
pub use pitch::{GradientOptions, LineOptions, Pitch, PitchOptions, PointStyle, StrokeOptions};
pub use region::{Area, Outline, Primitive, Region};
pub use theme::{Color, DefaultTheme, Theme, ThemeVariant};
pub use types::{Meters, NumericError, Scalar};

/// Regions of a pitch built from `config`, in [`RegionName::ALL`] order.
pub fn pitch_regions(config: &PitchConfig) -> Result<Vec<(RegionName, Region)>> {
    Ok(PitchGeometry::new(config)?.regions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_for_default_config() {
        let regions = pitch_regions(&PitchConfig::default()).unwrap();
        assert_eq!(regions.len(), 18);
        assert_eq!(regions[0].0, RegionName::PitchArea);
        assert_eq!(regions[0].1.area(), Area::new(0.0, 0.0, 105.0, 68.0));
    }

    #[test]
    fn invalid_config_is_reported() {
        let config = PitchConfig::new().with_markings(MarkingConfig::new().with_pitch_size(0.0, 68.0));
        let err = pitch_regions(&config).unwrap_err();
        assert!(matches!(
            err,
            PitchError::InvalidConfiguration { field: "pitch_length", reason: NumericError::Zero, .. }
        ));
    }
}
