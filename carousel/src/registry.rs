//! Per-container carousel instances.
//!
//! DESIGN
//! ======
//! Pages initialize carousels whenever their item set becomes known, which
//! can happen more than once for the same container (re-renders, late data).
//! The registry keys instances by container id so that a second `init` is a
//! no-op instead of a second engine fighting over the same elements. An
//! instance is rebuilt only when its item count changes.
//!
//! Hosts bind carousels through the registry: `init` skips an empty item set
//! before `build` runs, so an empty container never reaches the engine.
//! Frame and input handlers look their instance up again with `get_mut`.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;

use crate::error::CarouselError;

/// Anything the registry can hold.
pub trait CarouselInstance {
    /// Item count the instance was built for.
    fn item_count(&self) -> usize;
}

/// What an `init` or `sync_items` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    /// An instance already exists with the same item count.
    AlreadyBound,
    /// Empty container id or no items; nothing was built.
    Skipped,
    Rebuilt,
    /// The item set became empty and the instance was torn down.
    Removed,
}

/// Carousel instances keyed by container id.
#[derive(Debug)]
pub struct Registry<E> {
    instances: HashMap<String, E>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self { instances: HashMap::new() }
    }
}

impl<E: CarouselInstance> Registry<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an instance for `container` unless one is already bound.
    ///
    /// # Errors
    ///
    /// Propagates the error from `build`; nothing is registered in that case.
    pub fn init<F>(&mut self, container: &str, item_count: usize, build: F) -> Result<InitOutcome, CarouselError>
    where
        F: FnOnce() -> Result<E, CarouselError>,
    {
        if container.is_empty() || item_count == 0 {
            tracing::debug!(container, item_count, "carousel init skipped");
            return Ok(InitOutcome::Skipped);
        }
        if self.instances.contains_key(container) {
            return Ok(InitOutcome::AlreadyBound);
        }
        self.instances.insert(container.to_owned(), build()?);
        tracing::debug!(container, item_count, "carousel bound");
        Ok(InitOutcome::Created)
    }

    /// Reconcile `container` with a possibly changed item count.
    ///
    /// # Errors
    ///
    /// Propagates the error from `build`. The old instance is already gone by then.
    pub fn sync_items<F>(&mut self, container: &str, item_count: usize, build: F) -> Result<InitOutcome, CarouselError>
    where
        F: FnOnce() -> Result<E, CarouselError>,
    {
        let Some(existing) = self.instances.get(container) else {
            return self.init(container, item_count, build);
        };
        if existing.item_count() == item_count {
            return Ok(InitOutcome::AlreadyBound);
        }
        self.instances.remove(container);
        if item_count == 0 {
            tracing::debug!(container, "carousel removed");
            return Ok(InitOutcome::Removed);
        }
        self.instances.insert(container.to_owned(), build()?);
        tracing::debug!(container, item_count, "carousel rebuilt");
        Ok(InitOutcome::Rebuilt)
    }

    /// Drop the instance for `container`. Returns whether one existed.
    pub fn teardown(&mut self, container: &str) -> bool {
        let removed = self.instances.remove(container).is_some();
        if removed {
            tracing::debug!(container, "carousel torn down");
        }
        removed
    }

    #[must_use]
    pub fn get(&self, container: &str) -> Option<&E> {
        self.instances.get(container)
    }

    /// The instance bound to `container`, for routing events and frames to it.
    pub fn get_mut(&mut self, container: &str) -> Option<&mut E> {
        self.instances.get_mut(container)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut E)> {
        self.instances.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
