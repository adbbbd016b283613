//! Per-instance carousel tuning.
//!
//! Every option is independently overridable; anything left out of a JSON
//! payload takes the documented default from [`crate::consts`]. The catalog's
//! carousels were tuned by eye per page, so the presets below keep those
//! per-widget values instead of forcing one "correct" set.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEPTH_DRAG_DIVISOR, DRAG_THRESHOLD_PX, FRICTION_COEFFICIENT, GAP_ANGLE_DEG, MOMENTUM_STOP_VELOCITY,
    RING_DEPTH_PX, SNAP_DURATION_MS, SPACING_FACTOR, TILT_FACTOR,
};
use crate::error::ConfigError;

/// Immutable tuning options for one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Number of distinct logical items. Zero means "use the item count given at init".
    pub template_count: usize,
    /// Requested angle between neighbouring ring slots, in degrees.
    pub gap_angle_deg: f64,
    /// Minimum arc between ring neighbours as a multiple of the item width.
    pub spacing_factor: f64,
    /// Fraction of the slot angle applied as ring item tilt.
    pub tilt_factor: f64,
    /// Multiplier from pointer angle travel to ring rotation.
    pub drag_speed_multiplier: f64,
    /// Pointer travel in pixels before a press becomes a drag.
    pub drag_threshold_px: f64,
    /// Per-frame velocity multiplier after a momentum release.
    pub friction_coefficient: f64,
    /// Duration of snap and smooth-return easing.
    pub snap_duration_ms: f64,
    /// Ring rotation per frame while idle, in radians. Zero disables autoplay.
    pub autoplay_speed: f64,
    /// Extra ring radius beyond half the container width.
    pub ring_depth_px: f64,
    /// Pointer pixels per logical depth offset.
    pub depth_drag_divisor: f64,
    /// Momentum stops below this velocity, in pixels per frame.
    pub momentum_stop_velocity: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            template_count: 0,
            gap_angle_deg: GAP_ANGLE_DEG,
            spacing_factor: SPACING_FACTOR,
            tilt_factor: TILT_FACTOR,
            drag_speed_multiplier: 1.0,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            friction_coefficient: FRICTION_COEFFICIENT,
            snap_duration_ms: SNAP_DURATION_MS,
            autoplay_speed: 0.0,
            ring_depth_px: RING_DEPTH_PX,
            depth_drag_divisor: DEPTH_DRAG_DIVISOR,
            momentum_stop_velocity: MOMENTUM_STOP_VELOCITY,
        }
    }
}

impl CarouselConfig {
    /// Landing-page ring: slow autoplay, gentle drag.
    #[must_use]
    pub fn ring_intro() -> Self {
        Self { gap_angle_deg: 22.0, autoplay_speed: 0.002, drag_speed_multiplier: 0.8, ..Self::default() }
    }

    /// Category ring: no autoplay, tighter slots.
    #[must_use]
    pub fn ring_category() -> Self {
        Self { gap_angle_deg: 20.5, spacing_factor: 1.15, ..Self::default() }
    }

    /// Course-detail ring: wider slots and a firmer drag threshold.
    #[must_use]
    pub fn ring_detail() -> Self {
        Self { gap_angle_deg: 24.0, drag_threshold_px: 6.0, snap_duration_ms: 350.0, ..Self::default() }
    }

    /// Perspective carousel.
    #[must_use]
    pub fn depth() -> Self {
        Self { snap_duration_ms: 250.0, ..Self::default() }
    }

    /// Free-scrolling strip.
    #[must_use]
    pub fn momentum() -> Self {
        Self { friction_coefficient: 0.92, ..Self::default() }
    }

    /// Parse a (possibly partial) JSON object and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, or a range error from
    /// [`CarouselConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Return a copy with `template_count` set.
    #[must_use]
    pub fn with_template_count(self, template_count: usize) -> Self {
        Self { template_count, ..self }
    }

    /// Check every numeric option, returning the config unchanged on success.
    ///
    /// # Errors
    ///
    /// Returns the first non-finite or out-of-range option found.
    pub fn validate(self) -> Result<Self, ConfigError> {
        finite("gapAngleDeg", self.gap_angle_deg)?;
        finite("spacingFactor", self.spacing_factor)?;
        finite("tiltFactor", self.tilt_factor)?;
        finite("dragSpeedMultiplier", self.drag_speed_multiplier)?;
        finite("dragThresholdPx", self.drag_threshold_px)?;
        finite("frictionCoefficient", self.friction_coefficient)?;
        finite("snapDurationMs", self.snap_duration_ms)?;
        finite("autoplaySpeed", self.autoplay_speed)?;
        finite("ringDepthPx", self.ring_depth_px)?;
        finite("depthDragDivisor", self.depth_drag_divisor)?;
        finite("momentumStopVelocity", self.momentum_stop_velocity)?;

        if self.gap_angle_deg <= 0.0 || self.gap_angle_deg >= 180.0 {
            return Err(out_of_range("gapAngleDeg", "(0, 180)", self.gap_angle_deg));
        }
        if self.spacing_factor <= 0.0 {
            return Err(out_of_range("spacingFactor", "(0, inf)", self.spacing_factor));
        }
        if self.drag_threshold_px < 0.0 {
            return Err(out_of_range("dragThresholdPx", "[0, inf)", self.drag_threshold_px));
        }
        if !(0.0..1.0).contains(&self.friction_coefficient) {
            return Err(out_of_range("frictionCoefficient", "[0, 1)", self.friction_coefficient));
        }
        if self.snap_duration_ms < 0.0 {
            return Err(out_of_range("snapDurationMs", "[0, inf)", self.snap_duration_ms));
        }
        if self.ring_depth_px < 0.0 {
            return Err(out_of_range("ringDepthPx", "[0, inf)", self.ring_depth_px));
        }
        if self.depth_drag_divisor <= 0.0 {
            return Err(out_of_range("depthDragDivisor", "(0, inf)", self.depth_drag_divisor));
        }
        if self.momentum_stop_velocity <= 0.0 {
            return Err(out_of_range("momentumStopVelocity", "(0, inf)", self.momentum_stop_velocity));
        }
        Ok(self)
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() { Ok(()) } else { Err(ConfigError::NotFinite { field, value }) }
}

fn out_of_range(field: &'static str, range: &'static str, value: f64) -> ConfigError {
    ConfigError::OutOfRange { field, range, value }
}
