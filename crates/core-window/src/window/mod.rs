//! `Window`: one editing view over a byte source.
//!
//! The command surface is split by concern:
//! * `motion`  - cursor-driven navigation (viewport follows the cursor)
//! * `scroll`  - viewport-driven navigation (cursor is clamped into view)
//! * `edit`    - delete / arithmetic edits
//! * `pending` - staged byte entry for Insert / Replace modes
//!
//! Addressing helpers and the bring-into-view rule live here because every
//! sub-module leans on them.

use crate::{EditedRanges, Mode, Result, WindowError};
use core_source::ByteSource;

mod edit;
mod motion;
mod pending;
mod scroll;

pub struct Window<S> {
    source: S,
    name: String,
    width: u64,
    offset: u64,
    cursor: u64,
    length: u64,
    mode: Mode,
    pending: Option<u8>,
    edited: EditedRanges,
}

impl<S> std::fmt::Debug for Window<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("offset", &self.offset)
            .field("cursor", &self.cursor)
            .field("length", &self.length)
            .field("mode", &self.mode)
            .field("pending", &self.pending)
            .finish()
    }
}

/// Count convention shared by every command: 0 means 1.
fn count(n: u64) -> u64 {
    n.max(1)
}

fn rows(height: usize) -> u64 {
    height.max(1) as u64
}

impl<S: ByteSource> Window<S> {
    /// Bind a window to `source`. `width` is the number of bytes per row.
    pub fn new(source: S, name: impl Into<String>, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(WindowError::InvalidWidth);
        }
        let length = source.len();
        let name = name.into();
        tracing::debug!(target: "window", name = name.as_str(), width, length, "window_open");
        Ok(Self {
            source,
            name,
            width: width as u64,
            offset: 0,
            cursor: 0,
            length,
            mode: Mode::Normal,
            pending: None,
            edited: EditedRanges::new(),
        })
    }
}

impl<S> Window<S> {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn width(&self) -> usize {
        self.width as usize
    }
    pub fn offset(&self) -> u64 {
        self.offset
    }
    pub fn cursor(&self) -> u64 {
        self.cursor
    }
    pub fn len(&self) -> u64 {
        self.length
    }
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn pending(&self) -> Option<u8> {
        self.pending
    }
    pub fn edited(&self) -> &EditedRanges {
        &self.edited
    }
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Release the byte source (e.g. for a save routine).
    pub fn into_source(self) -> S {
        self.source
    }

    /// Switch mode. Any staged byte is dropped on a mode change.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            if self.pending.take().is_some() {
                tracing::trace!(target: "window.edit", from = ?self.mode, to = ?mode, "pending_dropped_on_mode_change");
            }
            self.mode = mode;
        }
    }

    fn row(&self, address: u64) -> u64 {
        address / self.width
    }

    fn col(&self, address: u64) -> u64 {
        address % self.width
    }

    fn last_address(&self) -> u64 {
        self.length.saturating_sub(1)
    }

    fn last_row(&self) -> u64 {
        self.row(self.last_address())
    }

    /// Number of real bytes in row `r` (0 past the end).
    fn row_len(&self, r: u64) -> u64 {
        let start = r.saturating_mul(self.width);
        if start < self.length {
            (self.length - start).min(self.width)
        } else {
            0
        }
    }

    /// Address of column `col` in row `r`, clamped to the row's last real byte.
    fn clamp_in_row(&self, r: u64, col: u64) -> u64 {
        r * self.width + col.min(self.row_len(r).saturating_sub(1))
    }

    fn max_offset(&self, height: usize) -> u64 {
        self.last_row().saturating_sub(rows(height) - 1) * self.width
    }

    fn clamp_offset(&mut self, height: usize) {
        self.offset = self.offset.min(self.max_offset(height));
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.last_address());
    }

    /// Move the viewport minimally so the cursor row is visible.
    fn bring_into_view(&mut self, height: usize) {
        let h = rows(height);
        let cursor_row = self.row(self.cursor);
        if self.cursor < self.offset {
            self.offset = cursor_row * self.width;
        } else if self.cursor >= self.offset.saturating_add(h.saturating_mul(self.width)) {
            self.offset = cursor_row.saturating_sub(h - 1) * self.width;
        }
        self.clamp_offset(height);
    }
}
