//! Depth layout: a centered perspective row that wraps items through its edges.
//!
//! DESIGN
//! ======
//! Items sit at integer logical offsets `x = slot - center_index`. The
//! `window` ring buffer maps each slot to the item currently occupying it; the
//! item collection itself is never reordered.
//!
//! A drag adds a fractional `shift` to every offset. Whenever the shift passes
//! half a slot, the window rotates by one and the shift drops by one, so the
//! item that left one edge re-enters at the other while every other item keeps
//! its effective position. On release the shift eases back to zero, landing
//! every item on its nearest integer offset.
//!
//! Stepping by whole slots is an eased slide through the same wrapping rule,
//! so a multi-slot step moves items one edge crossing at a time instead of
//! re-indexing the window in a single jump.

#[cfg(test)]
#[path = "depth_test.rs"]
mod depth_test;

use std::collections::VecDeque;

use crate::config::CarouselConfig;
use crate::consts::{DEPTH_LEADING_SPREAD, DEPTH_SCALE_DIVISOR, DEPTH_TILT_DEG, DEPTH_TRAILING_SPREAD};
use crate::layout::{Anchor, ItemPose};
use crate::pointer::Point;
use crate::resize::Measurements;

/// Perspective scale at logical offset `x`.
#[must_use]
pub fn scale(x: f64) -> f64 {
    (1.0 - x * x / DEPTH_SCALE_DIVISOR).max(0.0)
}

/// Packing scale at logical offset `x`. Left of center packs looser than right.
#[must_use]
pub fn packing_scale(x: f64) -> f64 {
    let spread = if x <= 0.0 { DEPTH_LEADING_SPREAD } else { DEPTH_TRAILING_SPREAD };
    (1.0 - x * x / spread).max(0.0)
}

/// Tilt in degrees at logical offset `x`.
#[must_use]
pub fn tilt(x: f64) -> f64 {
    DEPTH_TILT_DEG * x
}

/// Left edge, in percent of the container width, for an item `item_width_pct` wide.
#[must_use]
pub fn left_percent(x: f64, item_width_pct: f64) -> f64 {
    let s = packing_scale(x) * 100.0;
    if x < 0.0 { (s - item_width_pct) / 2.0 } else { 100.0 - (s + item_width_pct) / 2.0 }
}

/// Whether offset `x` is the one highlighted slot in `(-0.5, 0.5]`.
#[must_use]
pub fn is_center(x: f64) -> bool {
    x > -0.5 && x <= 0.5
}

/// Full pose of `item` at (possibly fractional) offset `x`.
#[must_use]
pub fn pose_at(item: usize, x: f64, item_width_pct: f64) -> ItemPose {
    let highlighted = is_center(x);
    ItemPose {
        index: item,
        anchor: Anchor::LeftPercent { percent: left_percent(x, item_width_pct) },
        scale: scale(x),
        tilt_deg: tilt(x),
        z_index: if highlighted { 0 } else { -(x.abs().round() as i32) },
        highlighted,
    }
}

/// Travel accumulated since a drag or slide began.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Travel {
    shift_at_start: f64,
    wraps: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DepthDrag {
    start_x: f64,
    travel: Travel,
}

/// Move the shift to `raw - wraps`, rotating the window once per half-slot crossing.
fn wrap_shift(window: &mut VecDeque<usize>, raw: f64, wraps: &mut i64) -> f64 {
    let mut shift = raw - *wraps as f64;
    while shift > 0.5 {
        window.rotate_right(1.min(window.len()));
        *wraps += 1;
        shift -= 1.0;
    }
    while shift < -0.5 {
        window.rotate_left(1.min(window.len()));
        *wraps -= 1;
        shift += 1.0;
    }
    shift
}

/// Depth layout state.
#[derive(Debug, Clone)]
pub struct DepthLayout {
    item_count: usize,
    center_index: usize,
    window: VecDeque<usize>,
    shift: f64,
    item_width_pct: f64,
    drag: Option<DepthDrag>,
    slide: Option<Travel>,
    drag_divisor: f64,
}

impl DepthLayout {
    #[must_use]
    pub fn new(item_count: usize, config: &CarouselConfig) -> Self {
        Self {
            item_count,
            center_index: item_count.saturating_sub(1) / 2,
            window: (0..item_count).collect(),
            shift: 0.0,
            item_width_pct: 0.0,
            drag: None,
            slide: None,
            drag_divisor: config.depth_drag_divisor,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn center_index(&self) -> usize {
        self.center_index
    }

    #[must_use]
    pub fn shift(&self) -> f64 {
        self.shift
    }

    #[must_use]
    pub fn item_width_pct(&self) -> f64 {
        self.item_width_pct
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Item occupying integer logical offset `offset`, if inside the window.
    #[must_use]
    pub fn occupant(&self, offset: i64) -> Option<usize> {
        let slot = offset + self.center_index as i64;
        if slot < 0 {
            return None;
        }
        self.window.get(slot as usize).copied()
    }

    /// Item at offset 0.
    #[must_use]
    pub fn center_item(&self) -> Option<usize> {
        self.occupant(0)
    }

    /// Current effective offset of `item`.
    #[must_use]
    pub fn offset_of(&self, item: usize) -> Option<f64> {
        let slot = self.window.iter().position(|&i| i == item)?;
        Some(self.slot_offset(slot) + self.shift)
    }

    fn slot_offset(&self, slot: usize) -> f64 {
        slot as f64 - self.center_index as f64
    }

    // --- Geometry ---

    /// Recompute the item width percentage. Returns `false` for zero width.
    pub fn apply_measurements(&mut self, m: &Measurements) -> bool {
        if !m.is_measurable() {
            return false;
        }
        self.item_width_pct = m.item_width / m.container_width * 100.0;
        true
    }

    // --- Motion ---

    pub fn begin_drag(&mut self, pointer: Point) {
        self.slide = None;
        self.drag = Some(DepthDrag { start_x: pointer.x, travel: Travel { shift_at_start: self.shift, wraps: 0 } });
    }

    /// Shift by the horizontal travel since the drag began, wrapping items through the edges.
    pub fn drag_to(&mut self, pointer: Point) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let raw = drag.travel.shift_at_start + (pointer.x - drag.start_x) / self.drag_divisor;
        if !raw.is_finite() {
            return;
        }
        self.shift = wrap_shift(&mut self.window, raw, &mut drag.travel.wraps);
    }

    /// Finish a drag. Returns the shift to ease back from.
    pub fn end_drag(&mut self) -> f64 {
        self.drag = None;
        self.shift
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    // --- Slides ---

    /// Start an eased slide from the current shift. Travel passed to
    /// [`Self::slide_to`] is measured from here.
    pub fn begin_slide(&mut self) {
        self.slide = Some(Travel { shift_at_start: self.shift, wraps: 0 });
    }

    /// Slide travel that brings the item `steps` to the right of center (negative:
    /// left) into the center with zero shift. `slide_target(0)` is the smooth
    /// return to the nearest integer offsets.
    #[must_use]
    pub fn slide_target(&self, steps: i64) -> f64 {
        -(steps as f64) - self.shift
    }

    /// Move `travel` slots from where the slide began. Items wrap through the
    /// edges one at a time, exactly as during a drag.
    pub fn slide_to(&mut self, travel: f64) {
        let Some(slide) = self.slide.as_mut() else {
            return;
        };
        let raw = slide.shift_at_start + travel;
        if !raw.is_finite() {
            return;
        }
        self.shift = wrap_shift(&mut self.window, raw, &mut slide.wraps);
    }

    pub fn end_slide(&mut self) {
        self.slide = None;
    }

    // --- Poses ---

    /// Pose every item, in item order. Empty until measured.
    #[must_use]
    pub fn poses(&self) -> Vec<ItemPose> {
        if self.item_width_pct <= 0.0 {
            return Vec::new();
        }
        let mut poses: Vec<ItemPose> = self
            .window
            .iter()
            .enumerate()
            .map(|(slot, &item)| pose_at(item, self.slot_offset(slot) + self.shift, self.item_width_pct))
            .collect();
        poses.sort_by_key(|p| p.index);
        poses
    }
}
