//! Host document abstraction
//!
//! Focus tracking and insertion only need a handful of questions answered by
//! the page ("is this field still attached?", "what is focused?") and a handful
//! of operations on a field. These traits describe exactly that, so the core can
//! run against the browser DOM (`web`) or an in-memory document (`memory`).
//!
//! Only plain textareas count as editable fields.

pub mod memory;
pub mod web;

use crate::text::CaretPosition;

/// An editable text field on the host page
pub trait EditableField: Clone + PartialEq {
    /// Current text content
    fn value(&self) -> String;

    /// Replace the text content
    fn set_value(&self, value: &str);

    /// Current selection, `None` when the field keeps no selection state
    fn selection(&self) -> Option<CaretPosition>;

    /// Move the selection
    fn set_selection(&self, caret: CaretPosition);

    /// Give the field keyboard focus
    fn focus(&self);

    /// Dispatch a bubbling `input` event on the field
    fn notify_input(&self);
}

/// The live document the toolbox is injected into
pub trait HostPage {
    type Field: EditableField;

    /// Whether `field` is still attached to the document
    fn contains(&self, field: &Self::Field) -> bool;

    /// The focused element, if it is an editable field
    fn focused_field(&self) -> Option<Self::Field>;

    /// Element with the given id, if it is an editable field
    fn field_by_id(&self, id: &str) -> Option<Self::Field>;

    /// First editable field in document order
    fn first_field(&self) -> Option<Self::Field>;
}
