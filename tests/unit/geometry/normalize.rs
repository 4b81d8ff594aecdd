use super::*;
use crate::SafeframeError;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn full_screen_maps_to_unit_anchors() {
    let screen = ScreenSize::new(1125, 2436).unwrap();
    let anchors = normalize_anchors(screen.to_rect(), screen).unwrap();
    assert_eq!(anchors, AnchorRect::FULL);
}

#[test]
fn iphone_x_portrait_anchor_values() {
    let screen = ScreenSize::new(1125, 2436).unwrap();
    let safe = Rect::from_origin_size((0.0, 102.0), (1125.0, 2202.0));
    let anchors = normalize_anchors(safe, screen).unwrap();

    assert_eq!(anchors.min.x, 0.0);
    assert!(approx(anchors.min.y, 102.0 / 2436.0));
    assert!(approx(anchors.min.y, 0.041871921));
    assert_eq!(anchors.max.x, 1.0);
    assert!(approx(anchors.max.y, 2304.0 / 2436.0));
    assert!(approx(anchors.max.y, 0.945812808));
}

#[test]
fn contained_safe_areas_stay_in_unit_range() {
    let screen = ScreenSize::new(828, 1792).unwrap();
    let cases = [
        Rect::from_origin_size((0.0, 68.0), (828.0, 1636.0)),
        Rect::from_origin_size((88.0, 42.0), (640.0, 786.0)),
        Rect::from_origin_size((0.0, 0.0), (1.0, 1.0)),
    ];
    for safe in cases {
        let anchors = normalize_anchors(safe, screen).unwrap();
        assert!(anchors.is_unit(), "anchors out of range for {safe:?}");
        assert!(anchors.is_ordered(), "anchors unordered for {safe:?}");
    }
}

#[test]
fn out_of_bounds_safe_area_leaves_unit_range_unguarded() {
    let screen = ScreenSize::new(100, 100).unwrap();
    let safe = Rect::from_origin_size((-10.0, 0.0), (150.0, 100.0));
    let anchors = normalize_anchors(safe, screen).unwrap();
    assert!(!anchors.is_unit());
    assert!(anchors.is_ordered());
}

#[test]
fn zero_screen_dimension_is_rejected() {
    let safe = Rect::from_origin_size((0.0, 0.0), (100.0, 100.0));
    for screen in [
        ScreenSize {
            width: 0,
            height: 2436,
        },
        ScreenSize {
            width: 1125,
            height: 0,
        },
    ] {
        let err = normalize_anchors(safe, screen).unwrap_err();
        assert!(matches!(err, SafeframeError::Validation(_)));
    }
}
