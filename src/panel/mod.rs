//! Floating template panel
//!
//! ## Modules
//!
//! - `position`: Drag arithmetic and position persistence
//! - `render`: DOM construction and event wiring
//! - `storage`: localStorage key-value store
//! - `style`: Panel stylesheet

pub mod position;
pub mod render;
pub mod storage;
pub mod style;

pub use position::{DragGesture, KeyValueStore, MemoryStore, PanelPosition, PositionStore};

/// What a request to (re)build the panel should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Build the panel from the loaded templates
    Build,
    /// A panel is already in the document
    AlreadyPresent,
    /// Templates are still loading (or failed); the loader builds the panel
    AwaitTemplates,
}

/// Decide whether a panel should be built
///
/// Building is idempotent: never a second panel, never an empty panel built
/// before the templates arrive.
pub fn panel_action(panel_present: bool, templates_loaded: bool) -> PanelAction {
    if panel_present {
        PanelAction::AlreadyPresent
    } else if !templates_loaded {
        PanelAction::AwaitTemplates
    } else {
        PanelAction::Build
    }
}
