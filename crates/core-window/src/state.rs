//! Render-facing snapshot of a window.
//!
//! `WindowState` is plain data: the renderer draws from it and never reaches
//! back into the `Window`. `bytes` always holds exactly `height * width`
//! entries; positions past the content are zero and `size` says how many are
//! real.

use crate::window::Window;
use crate::{Mode, Result};
use core_source::ByteSource;
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowState {
    pub name: String,
    pub width: usize,
    pub offset: u64,
    pub cursor: u64,
    pub bytes: Vec<u8>,
    pub size: usize,
    pub length: u64,
    pub mode: Mode,
    pub pending: bool,
    pub pending_byte: u8,
    pub edited_indices: Vec<Range<u64>>,
}

impl WindowState {
    /// Number of rows carried in `bytes`.
    pub fn height(&self) -> usize {
        self.bytes.len() / self.width.max(1)
    }

    /// Byte displayed under the cursor, if the cursor sits on real content
    /// (a staged byte counts as real).
    pub fn cursor_byte(&self) -> Option<u8> {
        let i = usize::try_from(self.cursor.checked_sub(self.offset)?).ok()?;
        if i < self.size || (self.pending && i < self.bytes.len()) {
            self.bytes.get(i).copied()
        } else {
            None
        }
    }

    pub fn is_edited(&self, address: u64) -> bool {
        self.edited_indices.iter().any(|r| r.contains(&address))
    }
}

impl<S: ByteSource> Window<S> {
    /// Snapshot for a viewport of `height` rows. Only the visible range is
    /// read from the source.
    pub fn state(&self, height: usize) -> Result<WindowState> {
        let width = self.width();
        let visible = height.max(1).saturating_mul(width);
        let mut bytes = self.source().read_range(self.offset(), visible)?;
        let size = usize::try_from(self.len().saturating_sub(self.offset()))
            .unwrap_or(usize::MAX)
            .min(visible);
        bytes.resize(visible, 0);

        let cursor_slot = self
            .cursor()
            .checked_sub(self.offset())
            .and_then(|d| usize::try_from(d).ok())
            .filter(|i| *i < visible);
        if let Some(value) = self.pending()
            && let Some(i) = cursor_slot
        {
            if self.mode() == Mode::Insert {
                bytes.insert(i, value);
                bytes.truncate(visible);
            } else {
                bytes[i] = value;
            }
        }

        Ok(WindowState {
            name: self.name().to_string(),
            width,
            offset: self.offset(),
            cursor: self.cursor(),
            bytes,
            size,
            length: self.len(),
            mode: self.mode(),
            pending: self.pending().is_some(),
            pending_byte: self.pending().unwrap_or(0),
            edited_indices: self.edited().as_slice().to_vec(),
        })
    }
}
