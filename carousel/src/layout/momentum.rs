//! Momentum layout: a horizontal strip scrolled by dragging, with inertial glide.

#[cfg(test)]
#[path = "momentum_test.rs"]
mod momentum_test;

use crate::config::CarouselConfig;
use crate::pointer::Point;
use crate::resize::Measurements;

/// Scroll offset and velocity of a free-scrolling strip.
#[derive(Debug, Clone)]
pub struct MomentumLayout {
    scroll_offset: f64,
    velocity: f64,
    max_offset: Option<f64>,
    last_x: Option<f64>,
    friction: f64,
    stop_velocity: f64,
}

impl MomentumLayout {
    #[must_use]
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            scroll_offset: 0.0,
            velocity: 0.0,
            max_offset: None,
            last_x: None,
            friction: config.friction_coefficient,
            stop_velocity: config.momentum_stop_velocity,
        }
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[must_use]
    pub fn max_offset(&self) -> Option<f64> {
        self.max_offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_x.is_some()
    }

    /// Update the scroll extent. Unknown content width leaves the offset unclamped.
    pub fn apply_measurements(&mut self, m: &Measurements) -> bool {
        if !m.is_measurable() {
            return false;
        }
        self.max_offset = (m.content_width > 0.0).then(|| (m.content_width - m.container_width).max(0.0));
        self.scroll_offset = self.clamp(self.scroll_offset);
        true
    }

    pub fn set_scroll_offset(&mut self, offset: f64) {
        if offset.is_finite() {
            self.scroll_offset = self.clamp(offset);
        }
    }

    fn clamp(&self, offset: f64) -> f64 {
        match self.max_offset {
            Some(max) => offset.clamp(0.0, max),
            None => offset,
        }
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        self.last_x = Some(pointer.x);
        self.velocity = 0.0;
    }

    /// Content follows the pointer; velocity is this frame's delta.
    pub fn drag_to(&mut self, pointer: Point) {
        let Some(last_x) = self.last_x else {
            return;
        };
        let dx = pointer.x - last_x;
        if !dx.is_finite() {
            return;
        }
        self.scroll_offset = self.clamp(self.scroll_offset - dx);
        self.velocity = dx;
        self.last_x = Some(pointer.x);
    }

    /// A frame passed with the pointer held still.
    pub fn hold(&mut self) {
        if self.last_x.is_some() {
            self.velocity = 0.0;
        }
    }

    /// Finish a drag. Returns whether there is enough velocity to glide.
    pub fn end_drag(&mut self) -> bool {
        self.last_x = None;
        self.velocity.abs() >= self.stop_velocity
    }

    pub fn cancel_drag(&mut self) {
        self.last_x = None;
        self.velocity = 0.0;
    }

    /// Advance the glide by one frame. Returns `false` once it has stopped.
    pub fn step(&mut self) -> bool {
        self.velocity *= self.friction;
        self.scroll_offset = self.clamp(self.scroll_offset - self.velocity);
        if self.velocity.abs() < self.stop_velocity {
            self.velocity = 0.0;
            return false;
        }
        true
    }
}
