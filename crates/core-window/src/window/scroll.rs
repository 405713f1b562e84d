//! Viewport-driven navigation.
//!
//! Here the viewport moves first and the cursor is clamped to stay inside it,
//! the reverse of `motion`. Full-page flips additionally reset the cursor to
//! the top-left of the new page while half-page scrolls keep its column.

use super::{Window, count, rows};

impl<S> Window<S> {
    /// Scroll the viewport down `n` rows (0 means 1).
    pub fn scroll_down(&mut self, n: u64, height: usize) {
        let before = (self.offset, self.cursor);
        let delta = count(n).saturating_mul(self.width);
        self.offset = self
            .offset
            .saturating_add(delta)
            .min(self.max_offset(height));
        self.keep_cursor_in_view(height);
        self.trace_scroll("scroll_down", before);
    }

    /// Scroll the viewport up `n` rows (0 means 1).
    pub fn scroll_up(&mut self, n: u64, height: usize) {
        let before = (self.offset, self.cursor);
        let delta = count(n).saturating_mul(self.width);
        self.offset = self.offset.saturating_sub(delta);
        self.clamp_offset(height);
        self.keep_cursor_in_view(height);
        self.trace_scroll("scroll_up", before);
    }

    pub fn page_down_half(&mut self, height: usize) {
        self.scroll_down(rows(height) / 2, height);
    }

    pub fn page_up_half(&mut self, height: usize) {
        self.scroll_up(rows(height) / 2, height);
    }

    /// Flip forward by `height - 2` rows and put the cursor on the first byte
    /// of the new page.
    pub fn page_down(&mut self, height: usize) {
        let before = (self.offset, self.cursor);
        let delta = page_rows(height).saturating_mul(self.width);
        self.offset = self
            .offset
            .saturating_add(delta)
            .min(self.max_offset(height));
        self.cursor = self.offset.min(self.last_address());
        self.trace_scroll("page_down", before);
    }

    /// Flip backward by `height - 2` rows; cursor to the new top-left.
    pub fn page_up(&mut self, height: usize) {
        let before = (self.offset, self.cursor);
        let delta = page_rows(height).saturating_mul(self.width);
        self.offset = self.offset.saturating_sub(delta);
        self.clamp_offset(height);
        self.cursor = self.offset.min(self.last_address());
        self.trace_scroll("page_up", before);
    }

    pub fn page_top(&mut self) {
        let before = (self.offset, self.cursor);
        self.offset = 0;
        self.cursor = 0;
        self.trace_scroll("page_top", before);
    }

    /// Show the last page with the cursor at the head of the last row.
    pub fn page_end(&mut self, height: usize) {
        let before = (self.offset, self.cursor);
        self.offset = self.max_offset(height);
        self.cursor = self.last_row() * self.width;
        self.trace_scroll("page_end", before);
    }

    fn keep_cursor_in_view(&mut self, height: usize) {
        let top = self.row(self.offset);
        let bottom = top + (rows(height) - 1);
        let r = self.row(self.cursor);
        let col = self.col(self.cursor);
        if r < top {
            self.cursor = self.clamp_in_row(top, col);
        } else if r > bottom {
            self.cursor = self.clamp_in_row(bottom, col);
        }
    }

    fn trace_scroll(&self, op: &'static str, before: (u64, u64)) {
        tracing::trace!(
            target: "window.scroll",
            op,
            from_offset = before.0,
            from_cursor = before.1,
            offset = self.offset,
            cursor = self.cursor,
            "scroll"
        );
    }
}

/// Rows moved by a full page flip; at least one so tiny viewports still move.
fn page_rows(height: usize) -> u64 {
    rows(height).saturating_sub(2).max(1)
}
