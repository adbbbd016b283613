//! Layout strategies and their shared pose types.
//!
//! One engine drives every catalog carousel. The arrangement is picked once,
//! at construction, as a [`StrategyKind`]; [`LayoutStrategy`] then dispatches
//! drag input, measurements and animation values to the matching layout.


pub mod depth;
pub mod momentum;
pub mod ring;

use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;
use crate::pointer::Point;
use crate::resize::Measurements;

use self::depth::DepthLayout;
use self::momentum::MomentumLayout;
use self::ring::RingLayout;

/// Which arrangement an engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Items on a rotating circle.
    Ring,
    /// Centered perspective row.
    Depth,
    /// Free-scrolling strip with inertia.
    Momentum,
}

/// Where an item is placed inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Anchor {
    /// Item center, in container pixels.
    Center { x: f64, y: f64 },
    /// Item left edge, in percent of the container width.
    LeftPercent { percent: f64 },
}

/// Computed placement for one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemPose {
    /// Item (or ring slot) index.
    pub index: usize,
    pub anchor: Anchor,
    pub scale: f64,
    /// Rotation in degrees.
    pub tilt_deg: f64,
    pub z_index: i32,
    /// Whether this item is the focused one.
    pub highlighted: bool,
}

/// Everything the host needs to place items for the current frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Layout {
    /// Nothing measurable yet.
    Pending,
    /// Per-item placement.
    Items { poses: Vec<ItemPose> },
    /// The container scrolls as a whole.
    Scroll { offset: f64 },
}

/// The active arrangement for one engine instance.
#[derive(Debug, Clone)]
pub enum LayoutStrategy {
    Ring(RingLayout),
    Depth(DepthLayout),
    Momentum(MomentumLayout),
}

impl LayoutStrategy {
    /// Build the strategy for `kind`. For rings `item_count` is the template count.
    #[must_use]
    pub fn new(kind: StrategyKind, item_count: usize, config: &CarouselConfig) -> Self {
        match kind {
            StrategyKind::Ring => Self::Ring(RingLayout::new(item_count, config)),
            StrategyKind::Depth => Self::Depth(DepthLayout::new(item_count, config)),
            StrategyKind::Momentum => Self::Momentum(MomentumLayout::new(config)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Ring(_) => StrategyKind::Ring,
            Self::Depth(_) => StrategyKind::Depth,
            Self::Momentum(_) => StrategyKind::Momentum,
        }
    }

    pub fn apply_measurements(&mut self, m: &Measurements) -> bool {
        match self {
            Self::Ring(ring) => ring.apply_measurements(m),
            Self::Depth(depth) => depth.apply_measurements(m),
            Self::Momentum(strip) => strip.apply_measurements(m),
        }
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        match self {
            Self::Ring(ring) => ring.begin_drag(pointer),
            Self::Depth(depth) => depth.begin_drag(pointer),
            Self::Momentum(strip) => strip.begin_drag(pointer),
        }
    }

    pub fn drag_to(&mut self, pointer: Point) {
        match self {
            Self::Ring(ring) => ring.drag_to(pointer),
            Self::Depth(depth) => depth.drag_to(pointer),
            Self::Momentum(strip) => strip.drag_to(pointer),
        }
    }

    pub fn cancel_drag(&mut self) {
        match self {
            Self::Ring(ring) => ring.cancel_drag(),
            Self::Depth(depth) => depth.cancel_drag(),
            Self::Momentum(strip) => strip.cancel_drag(),
        }
    }

    /// Template index behind an item, for navigation.
    #[must_use]
    pub fn template_of(&self, item: usize) -> usize {
        match self {
            Self::Ring(ring) => ring.template_of(item),
            Self::Depth(_) | Self::Momentum(_) => item,
        }
    }

    /// Number of item elements the host must render.
    #[must_use]
    pub fn element_count(&self, item_count: usize) -> usize {
        match self {
            Self::Ring(ring) => ring.slots(),
            Self::Depth(_) | Self::Momentum(_) => item_count,
        }
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        let poses = match self {
            Self::Ring(ring) => ring.poses(),
            Self::Depth(depth) => depth.poses(),
            Self::Momentum(strip) => return Layout::Scroll { offset: strip.scroll_offset() },
        };
        if poses.is_empty() { Layout::Pending } else { Layout::Items { poses } }
    }
}
