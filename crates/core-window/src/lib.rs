//! Viewport and edit engine for one hex editing window.
//!
//! A `Window` owns the addressable view state over a `ByteSource`: the cursor,
//! the first visible address (`offset`), the fixed row width, the current
//! editor `Mode`, an optional staged (pending) byte and the list of edited
//! address ranges. Navigation and mutation commands are methods on `Window`;
//! renderers consume the immutable `WindowState` produced by `Window::state`.
//!
//! Why is `height` a parameter?
//! ----------------------------
//! The number of visible rows belongs to the surrounding layout, not to the
//! buffer. Every operation that has to keep the cursor visible (vertical,
//! linear and line-relative motions, scrolling, paging, edits that shrink the
//! content) takes the current height from the caller, and so does `state`.
//! A height of 0 is treated as 1.
//!
//! Core invariants (must hold after every public call):
//! * `offset % width == 0` and `0 <= offset <= max_offset(height)` where
//!   `max_offset = max(last_row - (height - 1), 0) * width`.
//! * `cursor <= max(len - 1, 0)`; an empty window has `cursor == 0`.
//! * After any vertical / linear / line-relative motion the cursor lies inside
//!   `[offset, offset + height * width)`.
//! * Edited ranges are sorted, disjoint, non-touching half-open intervals.
//!
//! Counts:
//! * Every count-bearing command treats a count of 0 as 1. Motions and scrolls
//!   clamp instead of failing; counts saturate rather than wrap.
//!
//! Errors:
//! * Only the byte source can fail (`WindowError::Source`). A failing source
//!   call leaves the window's own fields untouched.
//!
//! Multiple windows live in a `WindowManager` keyed by `WindowId`; they share
//! no mutable state.

use thiserror::Error;

mod edited;
mod manager;
mod mode;
mod state;
mod window;

pub use core_source::{ByteSource, MemorySource, SourceError};
pub use edited::EditedRanges;
pub use manager::{WindowId, WindowManager};
pub use mode::Mode;
pub use state::WindowState;
pub use window::Window;

/// Errors surfaced by window operations.
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("window width must be at least 1")]
    InvalidWidth,
    #[error(transparent)]
    Source(#[from] SourceError),
}

pub type Result<T> = std::result::Result<T, WindowError>;
