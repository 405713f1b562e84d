//! Cursor-driven navigation.
//!
//! Horizontal motions stay inside the cursor's row and never touch the
//! offset. Vertical, linear and line-relative motions move the cursor first
//! and then apply the bring-into-view rule with the caller's height.

use super::{Window, count};

impl<S> Window<S> {
    pub fn cursor_left(&mut self, n: u64) {
        let before = self.cursor;
        let r = self.row(self.cursor);
        let col = self.col(self.cursor).saturating_sub(count(n));
        self.cursor = self.clamp_in_row(r, col);
        self.trace_motion("cursor_left", before);
    }

    pub fn cursor_right(&mut self, n: u64) {
        let before = self.cursor;
        let r = self.row(self.cursor);
        let col = self.col(self.cursor).saturating_add(count(n));
        self.cursor = self.clamp_in_row(r, col);
        self.trace_motion("cursor_right", before);
    }

    /// Move up `n` rows keeping the column where the target row allows it.
    pub fn cursor_up(&mut self, n: u64, height: usize) {
        let before = self.cursor;
        let r = self.row(self.cursor).saturating_sub(count(n));
        self.cursor = self.clamp_in_row(r, self.col(self.cursor));
        self.bring_into_view(height);
        self.trace_motion("cursor_up", before);
    }

    /// Move down `n` rows, stopping on the last row; the column clamps on a
    /// short last row.
    pub fn cursor_down(&mut self, n: u64, height: usize) {
        let before = self.cursor;
        let r = self
            .row(self.cursor)
            .saturating_add(count(n))
            .min(self.last_row());
        self.cursor = self.clamp_in_row(r, self.col(self.cursor));
        self.bring_into_view(height);
        self.trace_motion("cursor_down", before);
    }

    /// Linear motion backwards, crossing row boundaries.
    pub fn cursor_prev(&mut self, n: u64, height: usize) {
        let before = self.cursor;
        self.cursor = self.cursor.saturating_sub(count(n));
        self.bring_into_view(height);
        self.trace_motion("cursor_prev", before);
    }

    /// Linear motion forwards, crossing row boundaries.
    pub fn cursor_next(&mut self, n: u64, height: usize) {
        let before = self.cursor;
        self.cursor = self
            .cursor
            .saturating_add(count(n))
            .min(self.last_address());
        self.bring_into_view(height);
        self.trace_motion("cursor_next", before);
    }

    /// First byte of the `n`-th row counted from the cursor's row (1 is the
    /// cursor's own row).
    pub fn cursor_head(&mut self, n: u64, height: usize) {
        let before = self.cursor;
        let r = self.relative_row(n);
        self.cursor = r * self.width;
        self.bring_into_view(height);
        self.trace_motion("cursor_head", before);
    }

    /// Last real byte of the `n`-th row counted from the cursor's row.
    pub fn cursor_end(&mut self, n: u64, height: usize) {
        let before = self.cursor;
        let r = self.relative_row(n);
        self.cursor = self.clamp_in_row(r, self.width - 1);
        self.bring_into_view(height);
        self.trace_motion("cursor_end", before);
    }

    /// Jump to an absolute address (clamped to the content).
    pub fn cursor_goto(&mut self, address: u64, height: usize) {
        let before = self.cursor;
        self.cursor = address.min(self.last_address());
        self.bring_into_view(height);
        self.trace_motion("cursor_goto", before);
    }

    fn relative_row(&self, n: u64) -> u64 {
        self.row(self.cursor)
            .saturating_add(count(n) - 1)
            .min(self.last_row())
    }

    fn trace_motion(&self, op: &'static str, before: u64) {
        tracing::trace!(target: "window.motion", op, from = before, to = self.cursor, offset = self.offset, "motion");
    }
}
