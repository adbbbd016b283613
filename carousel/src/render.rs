//! Style projection: turns item poses into inline CSS properties.
//!
//! Pure and DOM-free. [`crate::dom::apply_styles`] writes the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::layout::{Anchor, ItemPose};

/// Format a pixel length.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value:.2}px")
}

/// Inline style properties for one item.
///
/// Ring items are anchored by their center; depth items by their left edge
/// as a percentage of the container.
#[must_use]
pub fn item_style(pose: &ItemPose) -> Vec<(&'static str, String)> {
    let (left, top, transform) = match pose.anchor {
        Anchor::Center { x, y } => (
            px(x),
            Some(px(y)),
            format!("translate(-50%, -50%) rotate({:.2}deg) scale({:.4})", pose.tilt_deg, pose.scale),
        ),
        Anchor::LeftPercent { percent } => {
            (format!("{percent:.3}%"), None, format!("rotate({:.2}deg) scale({:.4})", pose.tilt_deg, pose.scale))
        }
    };
    let mut styles = vec![("left", left)];
    if let Some(top) = top {
        styles.push(("top", top));
    }
    styles.push(("transform", transform));
    styles.push(("z-index", pose.z_index.to_string()));
    styles
}
