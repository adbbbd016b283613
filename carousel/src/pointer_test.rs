#![allow(clippy::float_cmp)]

use super::*;

const ORIGIN: Bounds = Bounds { left: 0.0, top: 0.0 };

fn mouse(x: f64, y: f64) -> RawPointer {
    RawPointer::Mouse { client_x: x, client_y: y }
}

fn touch(touches: &[(f64, f64)], changed: &[(f64, f64)]) -> RawPointer {
    RawPointer::Touch { touches: touches.to_vec(), changed: changed.to_vec() }
}

// --- Point ---

#[test]
fn point_distance_is_euclidean() {
    assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

// --- Mouse ---

#[test]
fn mouse_is_offset_by_bounds() {
    let mut n = PointerNormalizer::new();
    let p = n.normalize(&mouse(150.0, 80.0), Bounds { left: 100.0, top: 30.0 });
    assert_eq!(p, Point::new(50.0, 50.0));
}

#[test]
fn mouse_with_origin_bounds_is_identity() {
    let mut n = PointerNormalizer::new();
    assert_eq!(n.normalize(&mouse(12.0, 34.0), ORIGIN), Point::new(12.0, 34.0));
}

// --- Touch ---

#[test]
fn touch_uses_first_active_touch() {
    let mut n = PointerNormalizer::new();
    let p = n.normalize(&touch(&[(10.0, 20.0), (99.0, 99.0)], &[(50.0, 50.0)]), ORIGIN);
    assert_eq!(p, Point::new(10.0, 20.0));
}

#[test]
fn touch_end_falls_back_to_changed_touch() {
    let mut n = PointerNormalizer::new();
    let p = n.normalize(&touch(&[], &[(40.0, 60.0)]), Bounds { left: 10.0, top: 10.0 });
    assert_eq!(p, Point::new(30.0, 50.0));
}

#[test]
fn empty_touch_reuses_last_point() {
    let mut n = PointerNormalizer::new();
    n.normalize(&mouse(70.0, 80.0), ORIGIN);
    let p = n.normalize(&touch(&[], &[]), ORIGIN);
    assert_eq!(p, Point::new(70.0, 80.0));
}

#[test]
fn non_finite_sample_reuses_last_point() {
    let mut n = PointerNormalizer::new();
    n.normalize(&mouse(5.0, 6.0), ORIGIN);
    let p = n.normalize(&mouse(f64::NAN, 1.0), ORIGIN);
    assert_eq!(p, Point::new(5.0, 6.0));
}

#[test]
fn mouse_and_touch_share_coordinate_space() {
    let bounds = Bounds { left: 25.0, top: 25.0 };
    let mut n = PointerNormalizer::new();
    let a = n.normalize(&mouse(100.0, 100.0), bounds);
    let b = n.normalize(&touch(&[(100.0, 100.0)], &[]), bounds);
    assert_eq!(a, b);
}

#[test]
fn raw_pointer_deserializes_tagged_json() {
    let raw: RawPointer = serde_json::from_str(r#"{ "source": "mouse", "client_x": 1.0, "client_y": 2.0 }"#)
        .unwrap_or(RawPointer::Touch { touches: vec![], changed: vec![] });
    assert_eq!(raw, mouse(1.0, 2.0));
}
