//! Animation scheduling: one frame-driven loop per engine instance.
//!
//! DESIGN
//! ======
//! The host calls the engine once per animation frame. The scheduler decides
//! what that frame does: spin the ring (autoplay), ease toward a target
//! (snap or smooth return) or decay a glide (momentum). At most one task is
//! active. Scheduling a task hands back a [`CancellationToken`] and cancels
//! whatever ran before it; a token from an earlier task is simply stale.
//!
//! Cancellation is immediate. Every frame leaves layout state consistent, so
//! dropping a task between frames needs no cleanup.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use serde::Serialize;

/// Smoothstep easing, `t²(3 − 2t)`, with `t` clamped to `[0, 1]`.
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Handle for one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CancellationToken(u64);

/// Eased interpolation from `from` to `to`.
///
/// The clock starts at the first sampled frame, so a tween scheduled from a
/// pointer handler begins on the next animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    started_at: Option<f64>,
}

impl Tween {
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self { from, to, duration_ms: duration_ms.max(0.0), started_at: None }
    }

    /// Value at `now_ms` and whether the tween has finished.
    pub fn sample(&mut self, now_ms: f64) -> (f64, bool) {
        let start = *self.started_at.get_or_insert(now_ms);
        let t = if self.duration_ms > 0.0 { (now_ms - start) / self.duration_ms } else { 1.0 };
        if t >= 1.0 {
            return (self.to, true);
        }
        (self.from + (self.to - self.from) * smoothstep(t), false)
    }
}

/// What the active loop does each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationTask {
    /// Rotate the ring by the configured speed, indefinitely.
    Autoplay,
    /// Ease ring rotation, or depth slide travel, toward a target.
    Snap(Tween),
    /// Decay the strip's glide velocity.
    Momentum,
}

impl AnimationTask {
    fn label(&self) -> &'static str {
        match self {
            Self::Autoplay => "autoplay",
            Self::Snap(_) => "snap",
            Self::Momentum => "momentum",
        }
    }
}

/// Holds the single active task for an engine instance.
#[derive(Debug, Clone, Default)]
pub struct AnimationScheduler {
    next_id: u64,
    active: Option<(CancellationToken, AnimationTask)>,
}

impl AnimationScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `task`, cancelling any task already running.
    pub fn schedule(&mut self, task: AnimationTask) -> CancellationToken {
        self.next_id += 1;
        let token = CancellationToken(self.next_id);
        if let Some((previous, old)) = self.active.replace((token, task)) {
            tracing::trace!(previous = previous.0, task = old.label(), "animation replaced");
        }
        tracing::trace!(token = token.0, task = task.label(), "animation scheduled");
        token
    }

    /// Stop whatever is running.
    pub fn cancel(&mut self) {
        if let Some((token, task)) = self.active.take() {
            tracing::trace!(token = token.0, task = task.label(), "animation cancelled");
        }
    }

    /// Clear the active task if it is still `token`.
    pub fn finish(&mut self, token: CancellationToken) {
        if self.is_active(token) {
            self.active = None;
        }
    }

    #[must_use]
    pub fn is_active(&self, token: CancellationToken) -> bool {
        self.active.is_some_and(|(active, _)| active == token)
    }

    #[must_use]
    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<(CancellationToken, AnimationTask)> {
        self.active
    }

    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        matches!(self.active, Some((_, AnimationTask::Autoplay)))
    }

    /// Sample the active snap tween, storing its advanced clock.
    ///
    /// Returns `None` when the active task is not a snap.
    pub fn sample_snap(&mut self, now_ms: f64) -> Option<(CancellationToken, f64, bool)> {
        let (token, AnimationTask::Snap(tween)) = self.active.as_mut()? else {
            return None;
        };
        let (value, done) = tween.sample(now_ms);
        Some((*token, value, done))
    }
}
