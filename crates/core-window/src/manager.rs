//! Window collection.
//!
//! Windows are independent values owned by a `WindowManager` and addressed by
//! a `WindowId`. Ids are handed out monotonically and never reused, so a stale
//! id held by a caller after `close` simply resolves to `None`.
//!
//! Invariants:
//! * `active` is `None` iff the manager is empty.
//! * `active`, when set, names a live window.

use crate::window::Window;
use std::collections::BTreeMap;

/// Stable identifier for a `Window` inside a `WindowManager`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

#[derive(Debug)]
pub struct WindowManager<S> {
    windows: BTreeMap<WindowId, Window<S>>,
    active: Option<WindowId>,
    next_id: u64,
}

impl<S> Default for WindowManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> WindowManager<S> {
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            active: None,
            next_id: 0,
        }
    }

    /// Take ownership of `window`; the new window becomes active.
    pub fn open(&mut self, window: Window<S>) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        tracing::debug!(target: "window.manager", id = id.0, name = window.name(), "open");
        self.windows.insert(id, window);
        self.active = Some(id);
        id
    }

    /// Remove a window, returning it. If it was active, focus moves to the
    /// next window by id (or the last one when closing the highest id).
    pub fn close(&mut self, id: WindowId) -> Option<Window<S>> {
        let window = self.windows.remove(&id)?;
        if self.active == Some(id) {
            self.active = self
                .windows
                .range(id..)
                .next()
                .or_else(|| self.windows.iter().next_back())
                .map(|(k, _)| *k);
        }
        tracing::debug!(target: "window.manager", id = id.0, active = ?self.active.map(|a| a.0), "close");
        Some(window)
    }

    /// Make `id` the active window. Returns false for unknown ids.
    pub fn focus(&mut self, id: WindowId) -> bool {
        if self.windows.contains_key(&id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    pub fn active_id(&self) -> Option<WindowId> {
        self.active
    }

    pub fn active(&self) -> Option<&Window<S>> {
        self.active.and_then(|id| self.windows.get(&id))
    }

    pub fn active_mut(&mut self) -> Option<&mut Window<S>> {
        let id = self.active?;
        self.windows.get_mut(&id)
    }

    pub fn get(&self, id: WindowId) -> Option<&Window<S>> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window<S>> {
        self.windows.get_mut(&id)
    }

    /// Ids in opening order.
    pub fn ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.windows.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
