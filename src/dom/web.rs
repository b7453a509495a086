//! Browser DOM backend
//!
//! Implements the host traits on `web_sys::Document` and
//! `web_sys::HtmlTextAreaElement`. Failures of individual DOM calls are logged
//! and swallowed: a textarea that refuses a selection change still gets its
//! value and its `input` event.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventInit, EventTarget, HtmlTextAreaElement};

use super::{EditableField, HostPage};
use crate::error::describe_js;
use crate::text::CaretPosition;

/// Narrow an event target to a textarea
pub fn as_text_area(target: Option<EventTarget>) -> Option<HtmlTextAreaElement> {
    target?.dyn_into::<HtmlTextAreaElement>().ok()
}

/// Narrow an element to a textarea
pub fn element_as_text_area(element: Element) -> Option<HtmlTextAreaElement> {
    element.dyn_into::<HtmlTextAreaElement>().ok()
}

impl EditableField for HtmlTextAreaElement {
    fn value(&self) -> String {
        HtmlTextAreaElement::value(self)
    }

    fn set_value(&self, value: &str) {
        HtmlTextAreaElement::set_value(self, value);
    }

    fn selection(&self) -> Option<CaretPosition> {
        let start = self.selection_start().ok().flatten()?;
        let end = self.selection_end().ok().flatten()?;
        Some(CaretPosition::new(start, end))
    }

    fn set_selection(&self, caret: CaretPosition) {
        if let Err(e) = self.set_selection_range(caret.start, caret.end) {
            log::warn!("[toolbox] could not move caret: {}", describe_js(&e));
        }
    }

    fn focus(&self) {
        if let Err(e) = web_sys::HtmlElement::focus(self) {
            log::warn!("[toolbox] could not focus field: {}", describe_js(&e));
        }
    }

    fn notify_input(&self) {
        let init = EventInit::new();
        init.set_bubbles(true);
        let dispatched = Event::new_with_event_init_dict("input", &init)
            .and_then(|event| self.dispatch_event(&event));
        if let Err(e) = dispatched {
            log::warn!("[toolbox] could not dispatch input event: {}", describe_js(&e));
        }
    }
}

impl HostPage for Document {
    type Field = HtmlTextAreaElement;

    fn contains(&self, field: &HtmlTextAreaElement) -> bool {
        let node: &web_sys::Node = field;
        web_sys::Node::contains(self, Some(node))
    }

    fn focused_field(&self) -> Option<HtmlTextAreaElement> {
        element_as_text_area(self.active_element()?)
    }

    fn field_by_id(&self, id: &str) -> Option<HtmlTextAreaElement> {
        element_as_text_area(self.get_element_by_id(id)?)
    }

    fn first_field(&self) -> Option<HtmlTextAreaElement> {
        let element = self.query_selector("textarea").ok().flatten()?;
        element_as_text_area(element)
    }
}
