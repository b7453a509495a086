//! Caret and selection offsets
//!
//! Offsets are UTF-16 code units, the unit browsers use for
//! `selectionStart`/`selectionEnd` and `String.length`.

/// A selection inside an editable field (start inclusive, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaretPosition {
    pub start: u32,
    pub end: u32,
}

impl CaretPosition {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a collapsed caret (no selection)
    pub fn collapsed(offset: u32) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Caret at the end of `content`
    pub fn end_of(content: &str) -> Self {
        Self::collapsed(utf16_len(content))
    }

    /// Clamp into `[0, len]` with `start <= end`
    ///
    /// An end before the start collapses onto the start.
    pub fn clamped(&self, len: u32) -> Self {
        let start = self.start.min(len);
        let end = self.end.clamp(start, len);
        Self { start, end }
    }
}

/// Length of `text` in UTF-16 code units
pub fn utf16_len(text: &str) -> u32 {
    let units = text.encode_utf16().count();
    u32::try_from(units).unwrap_or(u32::MAX)
}
