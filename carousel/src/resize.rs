//! Container and item measurements, and when to recompute geometry from them.
//!
//! DESIGN
//! ======
//! Geometry is recomputed, never recreated: a resize or an image finishing
//! loading only changes radius, center and extents. Rotation, scroll offset
//! and in-flight animation progress are left alone. A zero-width measurement
//! (container hidden or not yet attached) is deferred, and the last usable
//! measurement stays in effect until a non-zero one arrives.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use serde::{Deserialize, Serialize};

/// Sizes read from the hosting surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Measurements {
    pub container_width: f64,
    pub container_height: f64,
    /// Width of one item element.
    pub item_width: f64,
    /// Height of one item element; changes when images load.
    pub item_height: f64,
    /// Full scrollable width of the content. Zero when unknown.
    pub content_width: f64,
}

impl Measurements {
    /// Whether layout can be computed from these sizes.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.container_width > 0.0
            && self.container_width.is_finite()
            && self.item_width.is_finite()
            && self.item_height.is_finite()
            && self.content_width.is_finite()
    }
}

/// Result of observing a new measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Not measurable yet; previous geometry (if any) stays.
    Deferred,
    /// Same as the last usable measurement.
    Unchanged,
    /// Geometry must be recomputed.
    Changed,
}

/// Tracks the last usable measurement.
#[derive(Debug, Clone, Default)]
pub struct ResizeAdapter {
    current: Option<Measurements>,
}

impl ResizeAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The measurement geometry is currently based on.
    #[must_use]
    pub fn current(&self) -> Option<Measurements> {
        self.current
    }

    pub fn observe(&mut self, m: Measurements) -> ResizeOutcome {
        if !m.is_measurable() {
            return ResizeOutcome::Deferred;
        }
        if self.current == Some(m) {
            return ResizeOutcome::Unchanged;
        }
        self.current = Some(m);
        ResizeOutcome::Changed
    }
}
