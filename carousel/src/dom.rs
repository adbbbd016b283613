//! Browser bridge: the only module that reads from or writes to `web_sys` elements.
//!
//! Event translation is total: any missing coordinate simply yields an empty
//! touch list, which the pointer normalizer resolves to the last known point.

use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, MouseEvent, TouchEvent, TouchList};

use crate::pointer::{Bounds, RawPointer};
use crate::resize::Measurements;

/// Attribute set on the highlighted item.
pub const ACTIVE_ATTRIBUTE: &str = "data-active";

#[must_use]
pub fn raw_from_mouse(event: &MouseEvent) -> RawPointer {
    RawPointer::Mouse { client_x: f64::from(event.client_x()), client_y: f64::from(event.client_y()) }
}

#[must_use]
pub fn raw_from_touch(event: &TouchEvent) -> RawPointer {
    RawPointer::Touch { touches: touch_points(&event.touches()), changed: touch_points(&event.changed_touches()) }
}

fn touch_points(list: &TouchList) -> Vec<(f64, f64)> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| (f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

/// Container origin in client coordinates.
#[must_use]
pub fn bounds_of(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds { left: rect.left(), top: rect.top() }
}

/// Read container and item sizes. A missing item measures as zero.
#[must_use]
pub fn measure(container: &HtmlElement, first_item: Option<&HtmlElement>) -> Measurements {
    let (item_width, item_height) =
        first_item.map_or((0.0, 0.0), |item| (f64::from(item.offset_width()), f64::from(item.offset_height())));
    Measurements {
        container_width: f64::from(container.client_width()),
        container_height: f64::from(container.client_height()),
        item_width,
        item_height,
        content_width: f64::from(container.scroll_width()),
    }
}

/// Write inline style properties.
///
/// # Errors
///
/// Returns `Err` if the browser rejects a property.
pub fn apply_styles(element: &HtmlElement, styles: &[(&'static str, String)]) -> Result<(), JsValue> {
    let style = element.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Toggle the highlight attribute.
///
/// # Errors
///
/// Returns `Err` if the attribute write fails.
pub fn set_active(element: &Element, active: bool) -> Result<(), JsValue> {
    if active { element.set_attribute(ACTIVE_ATTRIBUTE, "") } else { element.remove_attribute(ACTIVE_ATTRIBUTE) }
}

pub fn set_scroll_left(container: &Element, offset: f64) {
    container.set_scroll_left(offset.round() as i32);
}
