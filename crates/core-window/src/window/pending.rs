//! Staged byte entry for Insert / Replace modes.
//!
//! A staged byte is only displayed (see `Window::state`) until the dispatcher
//! commits or cancels it; the source is not touched before commit.

use super::Window;
use crate::{Mode, Result};
use core_source::ByteSource;
use tracing::trace;

impl<S> Window<S> {
    /// Stage `value` at the cursor. Refused (returns false) outside byte-entry
    /// modes.
    pub fn stage_byte(&mut self, value: u8) -> bool {
        if !self.mode.accepts_staged_byte() {
            return false;
        }
        self.pending = Some(value);
        trace!(target: "window.edit", op = "stage", at = self.cursor, value, "pending");
        true
    }

    /// Drop the staged byte without writing it.
    pub fn cancel_pending(&mut self) {
        if let Some(value) = self.pending.take() {
            trace!(target: "window.edit", op = "cancel", at = self.cursor, value, "pending");
        }
    }
}

impl<S: ByteSource> Window<S> {
    /// Hex digit entry. The first nibble stages `nibble << 4`; the second
    /// completes the byte and commits it. Returns whether a byte was
    /// committed. Values above `0xf` and non byte-entry modes are ignored.
    pub fn input_nibble(&mut self, nibble: u8, height: usize) -> Result<bool> {
        if nibble > 0x0f || !self.mode.accepts_staged_byte() {
            return Ok(false);
        }
        match self.pending {
            None => {
                self.stage_byte(nibble << 4);
                Ok(false)
            }
            Some(high) => {
                self.pending = Some((high & 0xf0) | nibble);
                self.commit_pending(height)
            }
        }
    }

    /// Write the staged byte: overwrite in Replace mode, insert in Insert mode.
    /// The committed byte is marked edited and the cursor advances one byte.
    /// Returns false when nothing was staged.
    pub fn commit_pending(&mut self, height: usize) -> Result<bool> {
        let Some(value) = self.pending else {
            return Ok(false);
        };
        let at = self.cursor;
        match self.mode {
            Mode::Insert => {
                self.source.insert_bytes(at, &[value])?;
                self.length += 1;
                self.edited.insert_adjust(at, 1);
            }
            Mode::Replace if self.length == 0 => {
                self.source.insert_bytes(0, &[value])?;
                self.length = 1;
            }
            Mode::Replace => self.source.write_byte(at, value)?,
            Mode::Normal | Mode::Visual => {
                self.pending = None;
                return Ok(false);
            }
        }
        self.pending = None;
        self.edited.insert(at..at + 1);
        self.cursor = at.saturating_add(1).min(self.last_address());
        self.bring_into_view(height);
        trace!(target: "window.edit", op = "commit", mode = ?self.mode, at, value, length = self.length, "pending");
        Ok(true)
    }
}
