//! Ring layout: items on fixed angular slots around a rotating circle.
//!
//! DESIGN
//! ======
//! Templates are repeated around the ring so that the slot spacing stays close
//! to the requested gap angle and wraparound is seamless. The repeat count is
//! at least two, so `SLOTS` is always a multiple of the template count and
//! `gap_angle = 2π / SLOTS` never divides by zero.
//!
//! Slot `mid = SLOTS / 2` sits at the top of the circle (−π/2) when the
//! rotation offset is zero. Dragging rotates the whole ring by the angle the
//! pointer sweeps around the ring center.

#[cfg(test)]
#[path = "ring_test.rs"]
mod ring_test;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::config::CarouselConfig;
use crate::consts::MIN_REPEAT_COUNT;
use crate::layout::{Anchor, ItemPose};
use crate::pointer::Point;
use crate::resize::Measurements;

/// Repeat count and total slots for `template_count` templates at `gap_angle_deg`.
///
/// A template count of zero is treated as one.
#[must_use]
pub fn slot_plan(template_count: usize, gap_angle_deg: f64) -> (usize, usize) {
    let templates = template_count.max(1);
    let gap_rad = gap_angle_deg.to_radians();
    let approx_slots = if gap_rad > 0.0 && gap_rad.is_finite() { TAU / gap_rad } else { 0.0 };
    let repeat = ((approx_slots / templates as f64).round() as usize).max(MIN_REPEAT_COUNT);
    (repeat, templates * repeat)
}

/// Bring a rotation offset into `(-2π, 2π)`. Non-finite input resets to zero.
#[must_use]
pub fn normalize_rotation(rotation: f64) -> f64 {
    if rotation.is_finite() { rotation % TAU } else { 0.0 }
}

/// Wrap an angle into `(-π, π]`.
#[must_use]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Measured ring geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
    pub cx: f64,
    pub cy: f64,
    pub item_width: f64,
    pub item_height: f64,
    pub container_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RingDrag {
    rotation_at_start: f64,
    last_pointer_angle: f64,
    travel: f64,
}

/// Ring layout state.
#[derive(Debug, Clone)]
pub struct RingLayout {
    template_count: usize,
    slots: usize,
    gap_angle: f64,
    base_angles: Vec<f64>,
    rotation: f64,
    geometry: Option<RingGeometry>,
    drag: Option<RingDrag>,
    spacing_factor: f64,
    tilt_factor: f64,
    depth_px: f64,
    drag_speed_multiplier: f64,
}

impl RingLayout {
    #[must_use]
    pub fn new(template_count: usize, config: &CarouselConfig) -> Self {
        let (_, slots) = slot_plan(template_count, config.gap_angle_deg);
        let gap_angle = TAU / slots as f64;
        let mid = slots / 2;
        let base_angles = (0..slots)
            .map(|i| (i as f64 - mid as f64) * gap_angle - FRAC_PI_2)
            .collect();
        Self {
            template_count: template_count.max(1),
            slots,
            gap_angle,
            base_angles,
            rotation: 0.0,
            geometry: None,
            drag: None,
            spacing_factor: config.spacing_factor,
            tilt_factor: config.tilt_factor,
            depth_px: config.ring_depth_px,
            drag_speed_multiplier: config.drag_speed_multiplier,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn slots(&self) -> usize {
        self.slots
    }

    #[must_use]
    pub fn template_count(&self) -> usize {
        self.template_count
    }

    #[must_use]
    pub fn gap_angle(&self) -> f64 {
        self.gap_angle
    }

    #[must_use]
    pub fn base_angles(&self) -> &[f64] {
        &self.base_angles
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[must_use]
    pub fn geometry(&self) -> Option<RingGeometry> {
        self.geometry
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Template shown by `slot`.
    #[must_use]
    pub fn template_of(&self, slot: usize) -> usize {
        slot % self.template_count
    }

    /// The slot nearest the top of the circle.
    #[must_use]
    pub fn current_slot(&self) -> usize {
        let steps = (self.rotation / self.gap_angle).round() as i64;
        (self.slots as i64 / 2 - steps).rem_euclid(self.slots as i64) as usize
    }

    /// Nearest slot-aligned rotation.
    #[must_use]
    pub fn snap_target(&self) -> f64 {
        (self.rotation / self.gap_angle).round() * self.gap_angle
    }

    /// Rotation that brings the slot `steps` away from the current one to the top.
    #[must_use]
    pub fn step_target(&self, steps: i64) -> f64 {
        ((self.rotation / self.gap_angle).round() - steps as f64) * self.gap_angle
    }

    /// Container height needed to show every item whose center lies within the container width.
    #[must_use]
    pub fn required_height(&self) -> Option<f64> {
        let g = self.geometry?;
        let half_sweep = (g.container_width / (2.0 * g.radius)).clamp(0.0, 1.0).asin();
        Some(g.item_height + g.radius * (1.0 - half_sweep.cos()))
    }

    // --- Geometry ---

    /// Recompute radius and center. Returns `false` (and keeps the old geometry) for zero width.
    pub fn apply_measurements(&mut self, m: &Measurements) -> bool {
        if !m.is_measurable() {
            return false;
        }
        let mut radius = m.container_width / 2.0 + self.depth_px;
        let min_arc = m.item_width * self.spacing_factor;
        if radius * self.gap_angle < min_arc {
            radius = min_arc / self.gap_angle;
        }
        self.geometry = Some(RingGeometry {
            radius,
            cx: m.container_width / 2.0,
            cy: radius + m.item_height / 2.0,
            item_width: m.item_width,
            item_height: m.item_height,
            container_width: m.container_width,
        });
        true
    }

    // --- Motion ---

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = normalize_rotation(rotation);
    }

    pub fn advance_autoplay(&mut self, speed: f64) {
        self.set_rotation(self.rotation + speed);
    }

    /// Anchor a drag at `pointer`. Ignored until geometry is known.
    pub fn begin_drag(&mut self, pointer: Point) {
        let Some(angle) = self.pointer_angle(pointer) else {
            return;
        };
        self.drag = Some(RingDrag { rotation_at_start: self.rotation, last_pointer_angle: angle, travel: 0.0 });
    }

    /// Rotate by the angle swept since the drag began.
    ///
    /// Travel is accumulated frame by frame so crossing the `atan2` branch cut
    /// does not jump a full turn.
    pub fn drag_to(&mut self, pointer: Point) {
        let Some(angle) = self.pointer_angle(pointer) else {
            return;
        };
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.travel += wrap_angle(angle - drag.last_pointer_angle);
        drag.last_pointer_angle = angle;
        let rotation = drag.rotation_at_start + drag.travel * self.drag_speed_multiplier;
        self.set_rotation(rotation);
    }

    /// Finish a drag and return the snap target.
    pub fn end_drag(&mut self) -> f64 {
        self.drag = None;
        self.snap_target()
    }

    /// Drop a drag that never crossed the threshold.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    fn pointer_angle(&self, pointer: Point) -> Option<f64> {
        let g = self.geometry?;
        let dy = pointer.y - g.cy;
        let dx = pointer.x - g.cx;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(dy.atan2(dx))
    }

    // --- Poses ---

    /// Pose every slot. Empty until geometry is known.
    #[must_use]
    pub fn poses(&self) -> Vec<ItemPose> {
        let Some(g) = self.geometry else {
            return Vec::new();
        };
        let current = self.current_slot();
        self.base_angles
            .iter()
            .enumerate()
            .map(|(index, base)| {
                let angle = base + self.rotation;
                ItemPose {
                    index,
                    anchor: Anchor::Center { x: g.cx + g.radius * angle.cos(), y: g.cy + g.radius * angle.sin() },
                    scale: 1.0,
                    tilt_deg: (wrap_angle(angle + FRAC_PI_2) * self.tilt_factor).to_degrees(),
                    z_index: 0,
                    highlighted: index == current,
                }
            })
            .collect()
    }
}
