//! Plain-text editing primitives
//!
//! Pure caret arithmetic with no DOM knowledge.
//!
//! ## Modules
//!
//! - `caret`: Selection offsets in UTF-16 code units
//! - `splice`: Replace-selection-with-text computation

pub mod caret;
pub mod splice;

// Re-exports for convenience
pub use caret::{utf16_len, CaretPosition};
pub use splice::{splice, Splice};
