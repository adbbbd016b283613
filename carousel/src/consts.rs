//! Shared numeric constants for the carousel crate.

// ── Gestures ────────────────────────────────────────────────────

/// Pointer travel in CSS pixels before a press becomes a drag.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

// ── Animation ───────────────────────────────────────────────────

/// Duration of the snap and smooth-return easing.
pub const SNAP_DURATION_MS: f64 = 300.0;

/// Per-frame velocity multiplier applied after a momentum release.
pub const FRICTION_COEFFICIENT: f64 = 0.95;

/// Momentum stops once `|velocity|` drops below this many pixels per frame.
pub const MOMENTUM_STOP_VELOCITY: f64 = 0.1;

// ── Ring ────────────────────────────────────────────────────────

/// Requested angle between neighbouring ring slots, before slot inflation.
pub const GAP_ANGLE_DEG: f64 = 20.0;

/// Minimum arc between neighbouring items as a multiple of the item width.
pub const SPACING_FACTOR: f64 = 1.1;

/// Fraction of the slot angle applied as item tilt.
pub const TILT_FACTOR: f64 = 1.0;

/// Extra radius beyond half the container width.
pub const RING_DEPTH_PX: f64 = 120.0;

/// Every template is repeated at least this many times around the ring.
pub const MIN_REPEAT_COUNT: usize = 2;

// ── Depth ───────────────────────────────────────────────────────

/// Divisor of the `x²` term in the depth scale curve.
pub const DEPTH_SCALE_DIVISOR: f64 = 5.0;

/// Divisor of the `x²` term in the packing curve left of center.
pub const DEPTH_LEADING_SPREAD: f64 = 10.0;

/// Divisor of the `x²` term in the packing curve right of center.
pub const DEPTH_TRAILING_SPREAD: f64 = 8.0;

/// Tilt in degrees per logical offset.
pub const DEPTH_TILT_DEG: f64 = 6.0;

/// Pointer travel in CSS pixels per logical depth offset.
pub const DEPTH_DRAG_DIVISOR: f64 = 200.0;

// ── Tolerances ──────────────────────────────────────────────────

/// Float tolerance for angle and offset comparisons.
pub const EPSILON: f64 = 1e-9;
