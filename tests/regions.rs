use std::fmt::Write as _;

use pitchgeo::{
    Area, Corner, Dimension, HalfSelection, MarkingConfig, MarkingScale, Orientation, Outline,
    PitchConfig, PitchError, PitchGeometry, Primitive, RegionName,
};

/// Tolerance for comparing computed coordinates
const FLOAT_TOLERANCE: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < FLOAT_TOLERANCE
}

fn assert_area(actual: Area, expected: (f64, f64, f64, f64)) {
    let (x0, y0, x1, y1) = expected;
    assert!(
        close(actual.x0, x0) && close(actual.y0, y0) && close(actual.x1, x1) && close(actual.y1, y1),
        "expected {expected:?}, got {:?}",
        actual.as_tuple()
    );
}

fn geometry(config: PitchConfig) -> PitchGeometry {
    PitchGeometry::new(&config).unwrap()
}

fn primitive_name(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Rect => "rect",
        Primitive::Circle => "circle",
        Primitive::Line => "line",
    }
}

fn region_table(pitch: &PitchGeometry) -> String {
    let mut out = String::new();
    for (name, region) in pitch.regions() {
        let a = region.area();
        writeln!(
            out,
            "{:<22} {:<6} ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            name.as_str(),
            primitive_name(region.primitive()),
            a.x0,
            a.y0,
            a.x1,
            a.y1
        )
        .unwrap();
    }
    out
}

// =============================================================================
// Regulation pitch
// =============================================================================

#[test]
fn regulation_region_table() {
    let pitch = geometry(PitchConfig::default());
    insta::assert_snapshot!(region_table(&pitch), @r"
    pitch_area             rect   (0.00, 0.00) -> (105.00, 68.00)
    centre_circle          circle (43.35, 24.85) -> (61.65, 43.15)
    centre_mark            circle (52.30, 33.80) -> (52.70, 34.20)
    halfway_line           line   (52.50, 0.00) -> (52.50, 68.00)
    left_penalty_arc       circle (1.85, 24.85) -> (20.15, 43.15)
    left_penalty_area      rect   (0.00, 13.84) -> (16.50, 54.16)
    left_penalty_mark      circle (10.80, 33.80) -> (11.20, 34.20)
    left_goal_area         rect   (0.00, 24.84) -> (5.50, 43.16)
    left_goal              rect   (-2.44, 30.34) -> (0.00, 37.66)
    right_penalty_arc      circle (84.85, 24.85) -> (103.15, 43.15)
    right_penalty_area     rect   (88.50, 13.84) -> (105.00, 54.16)
    right_penalty_mark     circle (93.80, 33.80) -> (94.20, 34.20)
    right_goal_area        rect   (99.50, 24.84) -> (105.00, 43.16)
    right_goal             rect   (105.00, 30.34) -> (107.44, 37.66)
    corner_arc_left_near   circle (-1.00, -1.00) -> (1.00, 1.00)
    corner_arc_left_far    circle (-1.00, 67.00) -> (1.00, 69.00)
    corner_arc_right_near  circle (104.00, -1.00) -> (106.00, 1.00)
    corner_arc_right_far   circle (104.00, 67.00) -> (106.00, 69.00)
    ");
}

#[test]
fn vertical_region_table() {
    let pitch = geometry(PitchConfig::new().vertical());
    insta::assert_snapshot!(region_table(&pitch), @r"
    pitch_area             rect   (0.00, 0.00) -> (68.00, 105.00)
    centre_circle          circle (24.85, 43.35) -> (43.15, 61.65)
    centre_mark            circle (33.80, 52.30) -> (34.20, 52.70)
    halfway_line           line   (0.00, 52.50) -> (68.00, 52.50)
    left_penalty_arc       circle (24.85, 1.85) -> (43.15, 20.15)
    left_penalty_area      rect   (13.84, 0.00) -> (54.16, 16.50)
    left_penalty_mark      circle (33.80, 10.80) -> (34.20, 11.20)
    left_goal_area         rect   (24.84, 0.00) -> (43.16, 5.50)
    left_goal              rect   (30.34, -2.44) -> (37.66, 0.00)
    right_penalty_arc      circle (24.85, 84.85) -> (43.15, 103.15)
    right_penalty_area     rect   (13.84, 88.50) -> (54.16, 105.00)
    right_penalty_mark     circle (33.80, 93.80) -> (34.20, 94.20)
    right_goal_area        rect   (24.84, 99.50) -> (43.16, 105.00)
    right_goal             rect   (30.34, 105.00) -> (37.66, 107.44)
    corner_arc_left_near   circle (-1.00, -1.00) -> (1.00, 1.00)
    corner_arc_left_far    circle (67.00, -1.00) -> (69.00, 1.00)
    corner_arc_right_near  circle (-1.00, 104.00) -> (1.00, 106.00)
    corner_arc_right_far   circle (67.00, 104.00) -> (69.00, 106.00)
    ");
}

#[test]
fn regulation_headline_regions() {
    let pitch = geometry(PitchConfig::default());
    assert_area(pitch.pitch_area().area(), (0.0, 0.0, 105.0, 68.0));

    let circle = pitch.centre_circle();
    assert_eq!(circle.primitive(), Primitive::Circle);
    let half = circle.area().half_extent();
    assert!(close(half.x, 9.15) && close(half.y, 9.15));
    let centre = circle.center();
    assert!(close(centre.x, 52.5) && close(centre.y, 34.0));

    let goal = pitch.left_goal().area();
    assert!(close(goal.x0, -2.44) && close(goal.x1, 0.0));
    assert!(close(goal.center().y, 34.0));
    assert!(close(goal.half_extent().y, 3.66));
}

// =============================================================================
// Custom pitch sizes
// =============================================================================

#[test]
fn custom_size_with_standard_markings() {
    let config =
        PitchConfig::new().with_markings(MarkingConfig::new().with_pitch_size(120.0, 80.0));
    let pitch = geometry(config);

    assert_area(pitch.pitch_area().area(), (0.0, 0.0, 120.0, 80.0));
    assert_area(pitch.right_goal().area(), (120.0, 36.34, 122.44, 43.66));
    let half = pitch.centre_circle().area().half_extent();
    assert!(close(half.x, 9.15));
}

#[test]
fn proportional_markings_scale_with_length() {
    let standard = PitchConfig::new().with_markings(MarkingConfig::new().with_pitch_size(84.0, 60.0));
    let proportional = PitchConfig::new().with_markings(
        MarkingConfig::new()
            .with_pitch_size(84.0, 60.0)
            .with_scale(MarkingScale::Proportional),
    );
    let standard = geometry(standard);
    let proportional = geometry(proportional);
    let ratio = 84.0 / 105.0;

    for dimension in Dimension::ALL {
        let fixed = standard.markings().resolve(dimension).raw();
        let scaled = proportional.markings().resolve(dimension).raw();
        assert!(close(fixed, dimension.regulation().raw()), "{dimension}");
        assert!(close(scaled, dimension.regulation().raw() * ratio), "{dimension}");
    }
    assert!(close(proportional.left_penalty_area().area().x1, 16.5 * ratio));
}

#[test]
fn overrides_replace_single_dimensions() {
    let config = PitchConfig::new().with_markings(
        MarkingConfig::new()
            .with_override(Dimension::GoalWidth, 5.0)
            .with_override(Dimension::GoalHeight, 2.0),
    );
    let pitch = geometry(config);
    assert_area(pitch.left_goal().area(), (-2.0, 31.5, 0.0, 36.5));
    assert_area(pitch.left_penalty_area().area(), (0.0, 15.0, 16.5, 53.0));
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn right_goal_mirrors_left_goal() {
    for (length, width) in [(105.0, 68.0), (120.0, 80.0), (90.0, 45.0)] {
        let config =
            PitchConfig::new().with_markings(MarkingConfig::new().with_pitch_size(length, width));
        let pitch = geometry(config);
        let left = pitch.left_goal().area();
        let right = pitch.right_goal().area();
        assert!(close(right.x1 - length, -left.x0));
        assert!(close(left.y0, right.y0) && close(left.y1, right.y1));

        let left_box = pitch.left_penalty_area().area();
        let right_box = pitch.right_penalty_area().area();
        assert!(close(length - right_box.x0, left_box.x1));
    }
}

#[test]
fn vertical_is_horizontal_transposed() {
    let sizes = [(105.0, 68.0), (120.0, 80.0), (90.0, 45.0)];
    let scales = [MarkingScale::Standard, MarkingScale::Proportional];
    let halves = [HalfSelection::Both, HalfSelection::Left, HalfSelection::Right];
    for (length, width) in sizes {
        for scale in scales {
            let markings = MarkingConfig::new()
                .with_pitch_size(length, width)
                .with_scale(scale);
            for half in halves {
                let config = PitchConfig::new().with_markings(markings.clone()).with_half(half);
                let horizontal = geometry(config.clone());
                let vertical = geometry(config.vertical());
                for name in RegionName::ALL {
                    let h = horizontal.region(name);
                    let v = vertical.region(name);
                    assert!(
                        v.approx_eq(&h.transposed()),
                        "{name} {length}x{width} {scale:?} {half}"
                    );
                }
            }
        }
    }
}

#[test]
fn vertical_is_transposed_with_unlocked_data_ranges() {
    for half in [HalfSelection::Both, HalfSelection::Left, HalfSelection::Right] {
        let base = PitchConfig::new().with_half(half).lock_markings(false);
        let horizontal = geometry(base.clone().with_x_range(0.0, 100.0).with_y_range(0.0, 50.0));
        let vertical = geometry(base.vertical().with_x_range(0.0, 50.0).with_y_range(0.0, 100.0));
        for name in RegionName::ALL {
            let h = horizontal.region(name);
            let v = vertical.region(name);
            assert!(v.approx_eq(&h.transposed()), "{name} {half}");
        }
    }
}

#[test]
fn halves_reconstruct_whole_pitch() {
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let config = PitchConfig::new().with_orientation(orientation);
        let both = geometry(config.clone().with_half(HalfSelection::Both));
        let left = geometry(config.clone().with_half(HalfSelection::Left));
        let right = geometry(config.with_half(HalfSelection::Right));

        let (b, l, r) = (
            both.space().length_range(),
            left.space().length_range(),
            right.space().length_range(),
        );
        assert_eq!(l.start, b.start, "{orientation}");
        assert_eq!(r.end, b.end, "{orientation}");
        assert_eq!(l.end, r.start, "{orientation}");
        assert_eq!(l.end, b.midpoint(), "{orientation}");
        assert_eq!(left.space().width_range(), both.space().width_range());
    }
}

#[test]
fn half_selection_keeps_full_pitch_frame() {
    let both = geometry(PitchConfig::default());
    let right = geometry(PitchConfig::new().with_half(HalfSelection::Right));
    assert_area(right.pitch_area().area(), (52.5, 0.0, 105.0, 68.0));
    assert_eq!(right.right_goal(), both.right_goal());
    assert_eq!(right.halfway_line(), both.halfway_line());
    assert_eq!(right.halfway_line().area().x0, right.space().x_start());
}

#[test]
fn inverted_axes_keep_direction_aware_corners() {
    let config = PitchConfig::new()
        .with_x_range(100.0, 0.0)
        .with_y_range(0.0, 100.0);
    let pitch = geometry(config);
    let area = pitch.left_penalty_area().area();
    assert!(close(area.x0, 100.0));
    assert!(close(area.x1, 100.0 - 16.5));
    let normalized = area.normalized();
    assert!(normalized.x0 < normalized.x1);
    assert!(close(pitch.corner_arc(Corner::RightNear).center().x, 0.0));
}

#[test]
fn queries_are_idempotent() {
    let pitch = geometry(PitchConfig::new().vertical().with_half(HalfSelection::Left));
    let first = pitch.regions();
    let second = pitch.regions();
    for ((_, a), (_, b)) in first.iter().zip(&second) {
        assert_eq!(a.area().as_tuple(), b.area().as_tuple());
    }
}

#[test]
fn near_equal_overrides_compare_equal() {
    let a = PitchConfig::new()
        .with_markings(MarkingConfig::new().with_override(Dimension::GoalWidth, 0.1 + 0.2));
    let b = PitchConfig::new()
        .with_markings(MarkingConfig::new().with_override(Dimension::GoalWidth, 0.3));
    assert_eq!(geometry(a), geometry(b));

    let c = PitchConfig::new()
        .with_markings(MarkingConfig::new().with_override(Dimension::GoalWidth, 0.31));
    assert_ne!(geometry(c), geometry(PitchConfig::default()));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn rejects_invalid_configuration() {
    let cases = [
        MarkingConfig::new().with_pitch_size(f64::NAN, 68.0),
        MarkingConfig::new().with_pitch_size(105.0, -68.0),
        MarkingConfig::new().with_pitch_size(f64::INFINITY, 68.0),
        MarkingConfig::new().with_override(Dimension::PenaltyAreaLength, -1.0),
    ];
    for markings in cases {
        let result = PitchGeometry::new(&PitchConfig::new().with_markings(markings.clone()));
        assert!(
            matches!(result, Err(PitchError::InvalidConfiguration { .. })),
            "{markings:?}"
        );
    }
}

#[test]
fn rejects_unknown_half_selection() {
    let err = "centre".parse::<HalfSelection>().unwrap_err();
    assert_eq!(
        err,
        PitchError::InvalidHalfSelection {
            value: "centre".into()
        }
    );
}
