use super::*;
use crate::SafeframeError;

#[test]
fn full_height_safe_area_is_identity() {
    let screen = ScreenSize::new(1125, 2436).unwrap();
    let safe = screen.to_rect();
    let local = Rect::from_origin_size((0.0, 0.0), (800.0, 600.0));
    let comp = compensate(safe, screen, local).unwrap();
    assert_eq!(comp, ScaleCompensation::IDENTITY);
}

#[test]
fn taller_safe_area_clamps_rate_to_one() {
    let screen = ScreenSize::new(100, 100).unwrap();
    let safe = Rect::from_origin_size((0.0, 0.0), (100.0, 150.0));
    assert_eq!(height_rate(safe, screen).unwrap(), 1.0);
}

#[test]
fn iphone_x_autoscale_values() {
    let screen = ScreenSize::new(1125, 2436).unwrap();
    let safe = Rect::from_origin_size((0.0, 102.0), (1125.0, 2202.0));
    let local = Rect::from_origin_size((0.0, 0.0), (800.0, 600.0));

    let rate = height_rate(safe, screen).unwrap();
    assert!((rate - 0.90394).abs() < 1e-5);

    let comp = compensate(safe, screen, local).unwrap();
    assert_eq!(comp.factor, rate);
    // Delta grows the rect back by exactly what the scale removes.
    assert!((comp.size_delta.x - (800.0 - 800.0 * rate)).abs() < 1e-9);
    assert!((comp.size_delta.y - (600.0 - 600.0 * rate)).abs() < 1e-9);
    assert!((comp.size_delta.x - 76.847).abs() < 1e-2);
    assert!((comp.size_delta.y - 57.635).abs() < 1e-2);
}

#[test]
fn height_ratio_drives_both_axes() {
    // A safe area that only trims horizontally leaves the rate at 1: the
    // compensation reads the vertical shrink alone.
    let screen = ScreenSize::new(1000, 1000).unwrap();
    let safe = Rect::from_origin_size((200.0, 0.0), (600.0, 1000.0));
    let comp = compensate(safe, screen, Rect::from_origin_size((0.0, 0.0), (400.0, 400.0)))
        .unwrap();
    assert_eq!(comp, ScaleCompensation::IDENTITY);

    // A vertical trim scales and compensates the horizontal axis too.
    let safe = Rect::from_origin_size((0.0, 250.0), (1000.0, 500.0));
    let comp = compensate(safe, screen, Rect::from_origin_size((0.0, 0.0), (400.0, 400.0)))
        .unwrap();
    assert_eq!(comp.factor, 0.5);
    assert_eq!(comp.size_delta, Vec2::new(200.0, 200.0));
}

#[test]
fn zero_height_screen_is_rejected() {
    let screen = ScreenSize {
        width: 1125,
        height: 0,
    };
    let safe = Rect::from_origin_size((0.0, 0.0), (100.0, 100.0));
    let err = height_rate(safe, screen).unwrap_err();
    assert!(matches!(err, SafeframeError::Validation(_)));
}
