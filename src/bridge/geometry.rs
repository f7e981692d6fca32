//! Move/resize change detection.
//!
//! Toolkits emit configure events on every geometry recomputation, often
//! with nothing changed. `GeometryTracker` turns that stream into at most
//! one "moved" and one "resized" notification per event.

use tracing::debug;

use crate::types::geometry::{Bounds, MonitorInfo, Position, Size};

/// What changed in one geometry event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeometryChange {
    pub moved: Option<Position>,
    pub resized: Option<Size>,
}

impl GeometryChange {
    pub fn is_empty(&self) -> bool {
        self.moved.is_none() && self.resized.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct GeometryTracker {
    last: Bounds,
}

impl GeometryTracker {
    pub fn new(initial: Bounds) -> Self {
        Self { last: initial }
    }

    pub fn last(&self) -> Bounds {
        self.last
    }

    pub fn observe(&mut self, bounds: Bounds) -> GeometryChange {
        let mut change = GeometryChange::default();
        if bounds.position != self.last.position {
            change.moved = Some(bounds.position);
        }
        if bounds.size != self.last.size {
            change.resized = Some(bounds.size);
        }
        if !change.is_empty() {
            debug!(?change, "window geometry changed");
        }
        self.last = bounds;
        change
    }

    /// For toolkits that report position on its own.
    pub fn observe_position(&mut self, position: Position) -> GeometryChange {
        let size = self.last.size;
        self.observe(Bounds { position, size })
    }

    /// For toolkits that report size on its own.
    pub fn observe_size(&mut self, size: Size) -> GeometryChange {
        let position = self.last.position;
        self.observe(Bounds { position, size })
    }
}

/// Feeds monitors to `callback` in order until it returns false.
/// Returns how many monitors were visited.
pub fn visit_monitors<I, F>(monitors: I, mut callback: F) -> usize
where
    I: IntoIterator<Item = MonitorInfo>,
    F: FnMut(&MonitorInfo) -> bool,
{
    let mut visited = 0;
    for monitor in monitors {
        visited += 1;
        if !callback(&monitor) {
            break;
        }
    }
    visited
}
