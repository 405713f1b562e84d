use serde::Serialize;

/// Editor mode as seen by a window.
///
/// Only byte-entry modes (`Insert`, `Replace`) interact with the pending byte;
/// the others are tags passed through to the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    Replace,
    Visual,
}

impl Mode {
    /// Whether a staged (pending) byte may exist in this mode.
    pub fn accepts_staged_byte(self) -> bool {
        matches!(self, Mode::Insert | Mode::Replace)
    }

    /// Short label for status lines.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "",
            Mode::Insert => "[INSERT] ",
            Mode::Replace => "[REPLACE] ",
            Mode::Visual => "[VISUAL] ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_byte_entry_modes_stage() {
        assert!(!Mode::Normal.accepts_staged_byte());
        assert!(Mode::Insert.accepts_staged_byte());
        assert!(Mode::Replace.accepts_staged_byte());
        assert!(!Mode::Visual.accepts_staged_byte());
    }
}
