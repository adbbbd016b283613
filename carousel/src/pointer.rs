//! Pointer normalization: mouse and touch samples in one coordinate space.
//!
//! Raw samples carry client (viewport) coordinates. [`PointerNormalizer`]
//! subtracts the container's bounding-box origin so every press, move and
//! release of a gesture lands in the same container-relative space no matter
//! which input produced it.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use serde::{Deserialize, Serialize};

/// A point in container-relative CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Top-left corner of the container in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
}

/// Which end of a gesture a sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A raw input sample in client coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum RawPointer {
    /// Mouse or pen pointer.
    Mouse { client_x: f64, client_y: f64 },
    /// Touch sample. `touches` are fingers still down; `changed` are fingers
    /// that triggered this event (the only data on `touchend`).
    Touch { touches: Vec<(f64, f64)>, changed: Vec<(f64, f64)> },
}

/// Converts raw samples into container-relative points.
///
/// Remembers the last point so that a sample without coordinates (a touch
/// end with empty lists) still resolves to a position.
#[derive(Debug, Clone, Default)]
pub struct PointerNormalizer {
    last: Point,
}

impl PointerNormalizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `raw` against `bounds`. Never fails.
    pub fn normalize(&mut self, raw: &RawPointer, bounds: Bounds) -> Point {
        let client = match raw {
            RawPointer::Mouse { client_x, client_y } => Some((*client_x, *client_y)),
            RawPointer::Touch { touches, changed } => touches.first().or_else(|| changed.first()).copied(),
        };
        let Some((cx, cy)) = client.filter(|(x, y)| x.is_finite() && y.is_finite()) else {
            return self.last;
        };
        let point = Point::new(cx - bounds.left, cy - bounds.top);
        self.last = point;
        point
    }
}
