//! Plain-text projection of a `WindowState`.
//!
//! One line per visible row: `offset | hex cells | ascii`. Each hex cell is a
//! marker column followed by two hex digits; the marker is `>` for the cursor,
//! `*` for an edited byte and a space otherwise. Cells past the content are
//! blank. A byte staged in Insert mode occupies the cursor cell and shifts the
//! rest of the page right.

use core_window::{Mode, WindowState};

/// Hex digits used for the offset column: 6 up to 0xfffff, then two more per
/// additional byte of magnitude, capped at 16.
pub fn offset_width(length: u64) -> usize {
    let mut threshold: u64 = 0xfffff;
    for i in 0..5 {
        if length <= threshold {
            return 6 + i * 2;
        }
        threshold = (threshold << 8) | 0xff;
    }
    16
}

pub fn render(state: &WindowState) -> Vec<String> {
    let ow = offset_width(state.length);
    let width = state.width.max(1);
    let staged = staged_slot(state);
    let shifted = state.mode == Mode::Insert;
    let mut lines = Vec::with_capacity(state.height() + 2);
    lines.push(header(width, ow));
    for (row, chunk) in state.bytes.chunks(width).enumerate() {
        let base = row * width;
        let address = state.offset + base as u64;
        let mut hex = String::with_capacity(width * 3);
        let mut ascii = String::with_capacity(width);
        for (j, b) in chunk.iter().enumerate() {
            let i = base + j;
            // Index into the source page; an inserted staged byte has none and
            // pushes the following bytes one cell right.
            let source_index = match staged {
                Some(s) if i == s => None,
                Some(s) if shifted && i > s => Some(i - 1),
                _ => Some(i),
            };
            if source_index.is_some_and(|k| k >= state.size) {
                hex.push_str("   ");
                ascii.push(' ');
                continue;
            }
            let marker = if address + j as u64 == state.cursor {
                '>'
            } else if source_index.is_some_and(|k| state.is_edited(state.offset + k as u64)) {
                '*'
            } else {
                ' '
            };
            hex.push(marker);
            hex.push_str(&format!("{b:02x}"));
            ascii.push(pretty_byte(*b));
        }
        lines.push(format!(" {address:0ow$x} |{hex} | {ascii}"));
    }
    lines.push(footer(state, ow));
    lines
}

/// Page cell holding the staged byte, if one is pending and visible.
fn staged_slot(state: &WindowState) -> Option<usize> {
    if !state.pending {
        return None;
    }
    let i = usize::try_from(state.cursor.checked_sub(state.offset)?).ok()?;
    (i < state.bytes.len()).then_some(i)
}

fn header(width: usize, ow: usize) -> String {
    let cols: String = (0..width).map(|i| format!(" {i:2x}")).collect();
    format!(" {:ow$} |{cols} |", "")
}

fn footer(state: &WindowState, ow: usize) -> String {
    let name = if state.name.is_empty() {
        "[No name]"
    } else {
        state.name.as_str()
    };
    let byte = state.cursor_byte().unwrap_or(0);
    let pct = state.cursor as f64 * 100.0 / state.length.max(1) as f64;
    format!(
        " {}{}: {:0ow$x} / {:0ow$x} ({:.2}%) [0x{:02x} '{}']",
        state.mode.label(),
        name,
        state.cursor,
        state.length,
        pct,
        byte,
        pretty_byte(byte)
    )
}

fn pretty_byte(b: u8) -> char {
    if b.is_ascii_graphic() || b == b' ' {
        b as char
    } else {
        '.'
    }
}
