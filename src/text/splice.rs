//! Replace-selection arithmetic
//!
//! Models "paste over the selection": the selected range is replaced by the
//! inserted text, which degrades to a plain insert when the selection is
//! collapsed. The caret ends up right after the inserted text.

use super::caret::{utf16_len, CaretPosition};

/// Result of splicing text into a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// New field value
    pub value: String,
    /// Range of the old value that was replaced
    pub replaced: CaretPosition,
    /// Selection the field is left in (always collapsed)
    pub caret: CaretPosition,
}

/// Replace `selection` in `content` with `text`
///
/// `None` selection means the field keeps no selection state, in which case the
/// text is appended at the end.
pub fn splice(content: &str, selection: Option<CaretPosition>, text: &str) -> Splice {
    let units: Vec<u16> = content.encode_utf16().collect();
    let len = utf16_len(content);
    let range = selection
        .unwrap_or_else(|| CaretPosition::collapsed(len))
        .clamped(len);

    let start = range.start as usize;
    let end = range.end as usize;

    let mut spliced: Vec<u16> = Vec::with_capacity(units.len() + text.len());
    spliced.extend_from_slice(&units[..start]);
    spliced.extend(text.encode_utf16());
    spliced.extend_from_slice(&units[end..]);

    Splice {
        // Browser offsets may split a surrogate pair, same as a real paste would
        value: String::from_utf16_lossy(&spliced),
        replaced: range,
        caret: CaretPosition::collapsed(range.start.saturating_add(utf16_len(text))),
    }
}
