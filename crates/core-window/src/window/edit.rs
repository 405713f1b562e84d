//! Byte mutation: deletion and modular arithmetic edits.
//!
//! Every edit makes one source mutation first and only then updates the window's
//! own fields, so a failing source leaves cursor/offset/length untouched.

use super::{Window, count};
use crate::Result;
use core_source::ByteSource;
use tracing::trace;

impl<S: ByteSource> Window<S> {
    /// Delete `n` bytes (0 means 1) starting at the cursor. The cursor stays
    /// put unless its address no longer exists.
    pub fn delete_byte(&mut self, n: u64, height: usize) -> Result<()> {
        if self.length == 0 {
            return Ok(());
        }
        let k = count(n).min(self.length - self.cursor);
        let removed = self.source.delete_range(self.cursor, k)?;
        self.apply_deletion(self.cursor, removed, height);
        trace!(target: "window.edit", op = "delete_byte", at = self.cursor, removed, length = self.length, "edit");
        Ok(())
    }

    /// Delete up to `n` bytes (0 means 1) immediately before the cursor; the
    /// cursor moves back by the number removed.
    pub fn delete_prev_byte(&mut self, n: u64, height: usize) -> Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        let k = count(n).min(self.cursor);
        let start = self.cursor - k;
        let removed = self.source.delete_range(start, k)?;
        self.cursor = start;
        self.apply_deletion(start, removed, height);
        trace!(target: "window.edit", op = "delete_prev_byte", at = start, removed, length = self.length, "edit");
        Ok(())
    }

    /// Add `n` (0 means 1) to the byte under the cursor, modulo 256.
    pub fn increment(&mut self, n: u64) -> Result<()> {
        let delta = (count(n) % 256) as u8;
        self.modify_byte("increment", |b| b.wrapping_add(delta))
    }

    /// Subtract `n` (0 means 1) from the byte under the cursor, modulo 256.
    pub fn decrement(&mut self, n: u64) -> Result<()> {
        let delta = (count(n) % 256) as u8;
        self.modify_byte("decrement", |b| b.wrapping_sub(delta))
    }

    fn modify_byte(&mut self, op: &'static str, f: impl FnOnce(u8) -> u8) -> Result<()> {
        let (old, new) = if self.length == 0 {
            // Editing an empty buffer creates the edited byte from zero.
            let new = f(0);
            self.source.insert_bytes(0, &[new])?;
            self.length = 1;
            self.cursor = 0;
            self.offset = 0;
            (0, new)
        } else {
            let old = self.source.byte_at(self.cursor)?;
            let new = f(old);
            self.source.write_byte(self.cursor, new)?;
            (old, new)
        };
        self.edited.insert(self.cursor..self.cursor + 1);
        trace!(target: "window.edit", op, at = self.cursor, old, new, "edit");
        Ok(())
    }

    fn apply_deletion(&mut self, start: u64, removed: u64, height: usize) {
        self.length -= removed;
        self.edited.delete_adjust(start, removed);
        self.clamp_cursor();
        self.clamp_offset(height);
        self.bring_into_view(height);
    }
}
