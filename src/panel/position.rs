//! Panel position: drag arithmetic and persistence
//!
//! The position is the panel's top-left corner in viewport pixels. It is
//! stored as two numbers under two fixed keys, written when a drag ends and
//! read once when the panel is created.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::PositionKeys;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPosition {
    pub x: f64,
    pub y: f64,
}

impl PanelPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Keep a `width` x `height` panel inside a `viewport` of the given size
    ///
    /// The top-left corner wins when the panel is larger than the viewport, so
    /// the header (the drag handle) stays reachable.
    pub fn clamp_to_viewport(&self, size: (f64, f64), viewport: (f64, f64)) -> Self {
        let (width, height) = size;
        let (view_w, view_h) = viewport;
        Self {
            x: self.x.min(view_w - width).max(0.0),
            y: self.y.min(view_h - height).max(0.0),
        }
    }
}

/// An in-progress drag of the panel header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pointer_origin: (f64, f64),
    panel_origin: PanelPosition,
}

impl DragGesture {
    /// Start dragging: pointer at `pointer`, panel at `panel`
    pub fn start(pointer: (f64, f64), panel: PanelPosition) -> Self {
        Self {
            pointer_origin: pointer,
            panel_origin: panel,
        }
    }

    /// Whether the pointer left its starting point; a plain click is no drag
    pub fn has_moved(&self, pointer: (f64, f64)) -> bool {
        pointer != self.pointer_origin
    }

    /// Panel position for the pointer at `pointer`
    pub fn position_at(&self, pointer: (f64, f64)) -> PanelPosition {
        PanelPosition {
            x: self.panel_origin.x + (pointer.0 - self.pointer_origin.0),
            y: self.panel_origin.y + (pointer.1 - self.pointer_origin.1),
        }
    }
}

/// Minimal string key-value store (`localStorage` in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the panel position under two keys
#[derive(Debug)]
pub struct PositionStore<S> {
    store: S,
    keys: PositionKeys,
}

impl<S: KeyValueStore> PositionStore<S> {
    pub fn new(store: S, keys: PositionKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saved position, or `None` if either coordinate is missing or unreadable
    pub fn load(&self) -> Result<Option<PanelPosition>> {
        let x = self.read_coordinate(&self.keys.x)?;
        let y = self.read_coordinate(&self.keys.y)?;
        Ok(x.zip(y).map(|(x, y)| PanelPosition::new(x, y)))
    }

    pub fn save(&self, position: PanelPosition) -> Result<()> {
        self.store.set(&self.keys.x, &position.x.to_string())?;
        self.store.set(&self.keys.y, &position.y.to_string())?;
        Ok(())
    }

    fn read_coordinate(&self, key: &str) -> Result<Option<f64>> {
        let value = self.store.get(key)?;
        Ok(value
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite()))
    }
}
