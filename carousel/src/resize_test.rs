use super::*;

fn sized(width: f64, item_height: f64) -> Measurements {
    Measurements { container_width: width, container_height: 300.0, item_width: 120.0, item_height, content_width: 0.0 }
}

#[test]
fn default_measurement_is_not_measurable() {
    assert!(!Measurements::default().is_measurable());
}

#[test]
fn non_finite_measurement_is_not_measurable() {
    let m = Measurements { item_height: f64::NAN, ..sized(500.0, 100.0) };
    assert!(!m.is_measurable());
}

#[test]
fn first_usable_measurement_changes() {
    let mut adapter = ResizeAdapter::new();
    assert_eq!(adapter.observe(sized(500.0, 100.0)), ResizeOutcome::Changed);
    assert_eq!(adapter.current(), Some(sized(500.0, 100.0)));
}

#[test]
fn zero_width_is_deferred_and_keeps_previous() {
    let mut adapter = ResizeAdapter::new();
    adapter.observe(sized(500.0, 100.0));
    assert_eq!(adapter.observe(sized(0.0, 100.0)), ResizeOutcome::Deferred);
    assert_eq!(adapter.current(), Some(sized(500.0, 100.0)));
}

#[test]
fn zero_width_before_any_measurement_is_deferred() {
    let mut adapter = ResizeAdapter::new();
    assert_eq!(adapter.observe(sized(0.0, 100.0)), ResizeOutcome::Deferred);
    assert_eq!(adapter.current(), None);
}

#[test]
fn repeated_measurement_is_unchanged() {
    let mut adapter = ResizeAdapter::new();
    adapter.observe(sized(500.0, 100.0));
    assert_eq!(adapter.observe(sized(500.0, 100.0)), ResizeOutcome::Unchanged);
}

#[test]
fn content_height_change_is_a_change() {
    let mut adapter = ResizeAdapter::new();
    adapter.observe(sized(500.0, 100.0));
    assert_eq!(adapter.observe(sized(500.0, 180.0)), ResizeOutcome::Changed);
}
