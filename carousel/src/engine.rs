//! Engine instance: the glue between input, layout and animation.
//!
//! DESIGN
//! ======
//! [`EngineCore`] holds every piece of per-instance state and has no browser
//! dependency, so gesture, layout and animation behavior are testable natively.
//! [`Engine`] wraps it with the container and item elements, measures them,
//! translates DOM events and writes styles.
//!
//! All mutation happens in a pointer handler or in [`EngineCore::frame`].
//! Pointer moves during a drag are only recorded; the latest one is applied
//! at the next frame so several moves between frames cost one layout pass.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, TouchEvent};

use crate::config::CarouselConfig;
use crate::consts::EPSILON;
use crate::dom;
use crate::error::{CarouselError, ConfigError};
use crate::input::{ClickDecision, GestureClassifier, GesturePhase, GestureState, MoveOutcome, ReleaseOutcome};
use crate::layout::{Layout, LayoutStrategy, StrategyKind};
use crate::pointer::{Bounds, Point, PointerNormalizer, PointerPhase, RawPointer};
use crate::registry::CarouselInstance;
use crate::render;
use crate::resize::{Measurements, ResizeAdapter, ResizeOutcome};
use crate::scheduler::{AnimationScheduler, AnimationTask, Tween};

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Action {
    None,
    /// Item poses changed; render now.
    RenderNeeded,
    /// Nothing to draw yet, but keep calling `frame`.
    RequestFrame,
    /// A genuine click on `item`; `template` is the logical item behind it.
    Activate { item: usize, template: usize },
    /// A click that ended a drag. The host must not navigate.
    ClickSuppressed,
}

/// Core engine state: all logic that doesn't depend on DOM elements.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    config: CarouselConfig,
    strategy: LayoutStrategy,
    gesture: GestureClassifier,
    scheduler: AnimationScheduler,
    resize: ResizeAdapter,
    normalizer: PointerNormalizer,
    bounds: Bounds,
    item_count: usize,
}

impl EngineCore {
    /// Build an instance for `item_count` items.
    ///
    /// For rings, `item_count` is the number of templates unless the config
    /// overrides it. Autoplay (ring only) starts immediately.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration fails validation.
    pub fn new(kind: StrategyKind, item_count: usize, config: CarouselConfig) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let logical = match (kind, config.template_count) {
            (StrategyKind::Ring, 0) => item_count,
            (StrategyKind::Ring, templates) => templates,
            _ => item_count,
        };
        let strategy = LayoutStrategy::new(kind, logical, &config);
        tracing::debug!(?kind, item_count, elements = strategy.element_count(item_count), "carousel created");
        let mut core = Self {
            config,
            strategy,
            gesture: GestureClassifier::new(config.drag_threshold_px),
            scheduler: AnimationScheduler::new(),
            resize: ResizeAdapter::new(),
            normalizer: PointerNormalizer::new(),
            bounds: Bounds::default(),
            item_count,
        };
        core.resume_idle();
        Ok(core)
    }

    // --- Queries ---

    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[must_use]
    pub fn strategy(&self) -> &LayoutStrategy {
        &self.strategy
    }

    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    #[must_use]
    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    /// Number of item elements the host renders (ring slots for rings).
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.strategy.element_count(self.item_count)
    }

    /// Poses for the current frame.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.strategy.layout()
    }

    /// The focused element: the ring slot at the top or the depth item at center.
    #[must_use]
    pub fn current_item(&self) -> Option<usize> {
        match &self.strategy {
            LayoutStrategy::Ring(ring) => Some(ring.current_slot()),
            LayoutStrategy::Depth(depth) => depth.center_item(),
            LayoutStrategy::Momentum(_) => None,
        }
    }

    /// Logical item behind [`Self::current_item`].
    #[must_use]
    pub fn current_template(&self) -> Option<usize> {
        self.current_item().map(|item| self.strategy.template_of(item))
    }

    /// Container height a ring needs once items are measured.
    #[must_use]
    pub fn required_height(&self) -> Option<f64> {
        match &self.strategy {
            LayoutStrategy::Ring(ring) => ring.required_height(),
            LayoutStrategy::Depth(_) | LayoutStrategy::Momentum(_) => None,
        }
    }

    /// Whether the host should keep scheduling animation frames.
    #[must_use]
    pub fn wants_frame(&self) -> bool {
        self.scheduler.has_active() || self.gesture.is_dragging()
    }

    // --- Geometry ---

    /// Container origin in client coordinates, read at gesture start.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Recompute geometry for new measurements. Rotation, scroll and animation are untouched.
    pub fn relayout(&mut self, m: Measurements) -> Action {
        match self.resize.observe(m) {
            ResizeOutcome::Deferred => {
                tracing::debug!(width = m.container_width, "relayout deferred");
                Action::None
            }
            ResizeOutcome::Unchanged => Action::None,
            ResizeOutcome::Changed => {
                self.strategy.apply_measurements(&m);
                tracing::debug!(width = m.container_width, item_height = m.item_height, "relayout");
                Action::RenderNeeded
            }
        }
    }

    /// Re-apply the last usable measurement.
    pub fn refresh(&mut self) -> Action {
        let Some(m) = self.resize.current() else {
            return Action::None;
        };
        self.strategy.apply_measurements(&m);
        Action::RenderNeeded
    }

    // --- Pointer input ---

    /// Route one raw sample through the normalizer.
    pub fn on_pointer(&mut self, phase: PointerPhase, raw: &RawPointer) -> Action {
        let at = self.normalizer.normalize(raw, self.bounds);
        match phase {
            PointerPhase::Start => self.press(at),
            PointerPhase::Move => self.move_to(at),
            PointerPhase::End | PointerPhase::Cancel => self.release(),
        }
    }

    /// Start a gesture session. Nothing moves and no animation stops until
    /// the pointer travels past the drag threshold.
    pub fn press(&mut self, at: Point) -> Action {
        self.gesture.press(at);
        Action::None
    }

    pub fn move_to(&mut self, at: Point) -> Action {
        match self.gesture.on_move(at) {
            MoveOutcome::Ignored => Action::None,
            MoveOutcome::DragStarted { start } => {
                // Autoplay or a snap may have moved things since the press.
                self.scheduler.cancel();
                self.strategy.begin_drag(start);
                tracing::debug!(x = start.x, y = start.y, "drag started");
                Action::RequestFrame
            }
            MoveOutcome::Dragged => Action::RequestFrame,
        }
    }

    /// End the session and hand off to snap or momentum.
    pub fn release(&mut self) -> Action {
        match self.gesture.release() {
            ReleaseOutcome::Ignored => return Action::None,
            // No drag was begun, so there is nothing to settle.
            ReleaseOutcome::Click => return Action::None,
            ReleaseOutcome::DragEnded { pending } => {
                if let Some(at) = pending {
                    self.strategy.drag_to(at);
                }
                tracing::debug!("drag ended");
            }
        }
        self.hand_off();
        Action::RenderNeeded
    }

    fn hand_off(&mut self) {
        let snap = match &mut self.strategy {
            LayoutStrategy::Ring(ring) => {
                let from = ring.rotation();
                Some((from, ring.end_drag()))
            }
            LayoutStrategy::Depth(depth) => {
                depth.end_drag();
                depth.begin_slide();
                Some((0.0, depth.slide_target(0)))
            }
            LayoutStrategy::Momentum(strip) => {
                if strip.end_drag() {
                    self.scheduler.schedule(AnimationTask::Momentum);
                }
                None
            }
        };
        if let Some((from, to)) = snap {
            self.snap(from, to);
        }
    }

    /// Ease from `from` to `to`, or land immediately when already there.
    fn snap(&mut self, from: f64, to: f64) {
        if (to - from).abs() > EPSILON {
            self.scheduler.schedule(AnimationTask::Snap(Tween::new(from, to, self.config.snap_duration_ms)));
        } else {
            self.apply_snap(to);
            self.settle();
        }
    }

    fn apply_snap(&mut self, value: f64) {
        match &mut self.strategy {
            LayoutStrategy::Ring(ring) => ring.set_rotation(value),
            LayoutStrategy::Depth(depth) => depth.slide_to(value),
            LayoutStrategy::Momentum(strip) => strip.set_scroll_offset(value),
        }
    }

    /// A snap has landed.
    fn settle(&mut self) {
        if let LayoutStrategy::Depth(depth) = &mut self.strategy {
            depth.end_slide();
        }
        self.resume_idle();
    }

    /// Start autoplay if this instance has one and nothing else is running.
    fn resume_idle(&mut self) {
        let autoplays = matches!(self.strategy, LayoutStrategy::Ring(_)) && self.config.autoplay_speed != 0.0;
        if autoplays && !self.scheduler.has_active() && !self.gesture.is_dragging() {
            self.scheduler.schedule(AnimationTask::Autoplay);
        }
    }

    // --- Navigation ---

    /// Classify a click on element `item` (if the click landed on one).
    pub fn on_click(&mut self, item: Option<usize>) -> Action {
        if self.gesture.click() == ClickDecision::Suppressed {
            tracing::debug!(?item, "click suppressed");
            return Action::ClickSuppressed;
        }
        match item.filter(|&i| i < self.element_count()) {
            Some(item) => Action::Activate { item, template: self.strategy.template_of(item) },
            None => Action::None,
        }
    }

    /// Animate `steps` slots forward (negative: backward). Ignored mid-gesture
    /// and for momentum strips.
    pub fn go_to_step(&mut self, steps: i64) -> Action {
        if self.gesture.is_pressed() || steps == 0 {
            return Action::None;
        }
        let (from, to) = match &mut self.strategy {
            LayoutStrategy::Ring(ring) => (ring.rotation(), ring.step_target(steps)),
            LayoutStrategy::Depth(depth) => {
                depth.begin_slide();
                (0.0, depth.slide_target(steps))
            }
            LayoutStrategy::Momentum(_) => return Action::None,
        };
        self.scheduler.cancel();
        self.snap(from, to);
        Action::RequestFrame
    }

    // --- Frames ---

    /// Advance one animation frame at `now_ms`.
    pub fn frame(&mut self, now_ms: f64) -> Action {
        let mut changed = false;
        if self.gesture.is_dragging() {
            match self.gesture.take_pending() {
                Some(at) => {
                    self.strategy.drag_to(at);
                    changed = true;
                }
                None => {
                    if let LayoutStrategy::Momentum(strip) = &mut self.strategy {
                        strip.hold();
                    }
                }
            }
        }
        changed |= self.advance(now_ms);
        tracing::trace!(now_ms, changed, "frame");
        if changed { Action::RenderNeeded } else { Action::None }
    }

    fn advance(&mut self, now_ms: f64) -> bool {
        let Some((token, task)) = self.scheduler.active() else {
            return false;
        };
        match task {
            AnimationTask::Autoplay => {
                let LayoutStrategy::Ring(ring) = &mut self.strategy else {
                    self.scheduler.finish(token);
                    return false;
                };
                ring.advance_autoplay(self.config.autoplay_speed);
                true
            }
            AnimationTask::Snap(_) => {
                let Some((token, value, done)) = self.scheduler.sample_snap(now_ms) else {
                    return false;
                };
                self.apply_snap(value);
                if done {
                    self.scheduler.finish(token);
                    tracing::debug!(value, "snap settled");
                    self.settle();
                }
                true
            }
            AnimationTask::Momentum => {
                let LayoutStrategy::Momentum(strip) = &mut self.strategy else {
                    self.scheduler.finish(token);
                    return false;
                };
                if !strip.step() {
                    self.scheduler.finish(token);
                    tracing::debug!(offset = strip.scroll_offset(), "momentum stopped");
                }
                true
            }
        }
    }

    /// Whether a drag session currently has an unapplied move.
    #[must_use]
    pub fn has_pending_move(&self) -> bool {
        matches!(self.gesture.state(), GestureState::Dragging { pending: Some(_), .. })
    }
}

impl CarouselInstance for EngineCore {
    fn item_count(&self) -> usize {
        self.item_count
    }
}

/// The full carousel engine. Wraps `EngineCore` and owns the container and item elements.
pub struct Engine {
    container: HtmlElement,
    items: Vec<HtmlElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Bind an engine to `container` and its `items`. A container with no
    /// items is left alone and yields `Ok(None)`.
    ///
    /// Rings repeat their templates around the circle, so the missing slot
    /// elements are cloned from `items` and appended to the container.
    ///
    /// # Errors
    ///
    /// Returns `CarouselError` for invalid configuration or a failed DOM call.
    pub fn new(
        container: HtmlElement,
        mut items: Vec<HtmlElement>,
        kind: StrategyKind,
        config: CarouselConfig,
    ) -> Result<Option<Self>, CarouselError> {
        if items.is_empty() {
            tracing::debug!("container has no items, carousel not bound");
            return Ok(None);
        }
        let core = EngineCore::new(kind, items.len(), config)?;
        let templates = items.len();
        for slot in templates..core.element_count() {
            let clone = items[slot % templates].clone_node_with_deep(true)?;
            container.append_child(&clone)?;
            let clone = clone
                .dyn_into::<HtmlElement>()
                .map_err(|_| CarouselError::Dom("cloned item is not an HtmlElement".into()))?;
            items.push(clone);
        }
        let mut engine = Self { container, items, core };
        engine.refresh()?;
        Ok(Some(engine))
    }

    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    // --- Input events ---

    pub fn on_mouse_down(&mut self, event: &MouseEvent) -> Action {
        self.core.set_bounds(dom::bounds_of(&self.container));
        self.core.on_pointer(PointerPhase::Start, &dom::raw_from_mouse(event))
    }

    pub fn on_mouse_move(&mut self, event: &MouseEvent) -> Action {
        self.core.on_pointer(PointerPhase::Move, &dom::raw_from_mouse(event))
    }

    pub fn on_mouse_up(&mut self, event: &MouseEvent) -> Action {
        self.core.on_pointer(PointerPhase::End, &dom::raw_from_mouse(event))
    }

    pub fn on_touch(&mut self, phase: PointerPhase, event: &TouchEvent) -> Action {
        if phase == PointerPhase::Start {
            self.core.set_bounds(dom::bounds_of(&self.container));
        }
        self.core.on_pointer(phase, &dom::raw_from_touch(event))
    }

    pub fn on_click(&mut self, item: Option<usize>) -> Action {
        self.core.on_click(item)
    }

    pub fn go_to_step(&mut self, steps: i64) -> Action {
        self.core.go_to_step(steps)
    }

    // --- Frames ---

    /// Advance one animation frame and draw it.
    ///
    /// # Errors
    ///
    /// Returns `CarouselError::Dom` if a style write fails.
    pub fn frame(&mut self, now_ms: f64) -> Result<Action, CarouselError> {
        let action = self.core.frame(now_ms);
        if action == Action::RenderNeeded {
            self.render()?;
        }
        Ok(action)
    }

    #[must_use]
    pub fn wants_frame(&self) -> bool {
        self.core.wants_frame()
    }

    /// Measure the container and items again and redraw. Call on resize and image load.
    ///
    /// # Errors
    ///
    /// Returns `CarouselError::Dom` if a style write fails.
    pub fn refresh(&mut self) -> Result<Action, CarouselError> {
        let m = dom::measure(&self.container, self.items.first());
        let action = self.core.relayout(m);
        if let Some(height) = self.core.required_height() {
            dom::apply_styles(&self.container, &[("min-height", render::px(height))])?;
        }
        self.render()?;
        Ok(action)
    }

    // --- Render ---

    /// Write the current layout to the DOM.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any style or attribute write fails.
    pub fn render(&self) -> Result<(), CarouselError> {
        match self.core.layout() {
            Layout::Pending => {}
            Layout::Scroll { offset } => dom::set_scroll_left(&self.container, offset),
            Layout::Items { poses } => {
                for pose in &poses {
                    let Some(element) = self.items.get(pose.index) else {
                        continue;
                    };
                    dom::apply_styles(element, &render::item_style(pose))?;
                    dom::set_active(element, pose.highlighted)?;
                }
            }
        }
        Ok(())
    }
}

impl CarouselInstance for Engine {
    fn item_count(&self) -> usize {
        self.core.item_count()
    }
}
