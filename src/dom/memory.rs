//! In-memory document
//!
//! A small element tree that implements [`HostPage`] the way a browser would
//! answer it: detached subtrees are not contained, `getElementById` only sees
//! attached nodes, document order is pre-order. Dispatched `input` events are
//! recorded together with their bubbling path so listeners on any ancestor can
//! be checked.

use std::cell::RefCell;
use std::rc::Rc;

use super::{EditableField, HostPage};
use crate::text::CaretPosition;

/// Handle to a node in a [`MemoryPage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct NodeData {
    tag: String,
    id: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    value: String,
    selection: Option<CaretPosition>,
}

/// A dispatched `input` event
#[derive(Debug, Clone)]
struct InputEvent {
    /// Target first, then each ancestor up to the root
    path: Vec<NodeId>,
}

#[derive(Debug)]
struct PageState {
    nodes: Vec<NodeData>,
    focused: Option<NodeId>,
    input_events: Vec<InputEvent>,
}

impl PageState {
    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    fn ancestry(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            path.push(parent);
            current = self.node(parent).parent;
        }
        path
    }

    fn is_connected(&self, id: NodeId) -> bool {
        self.ancestry(id).last() == Some(&MemoryPage::ROOT)
    }

    fn is_text_area(&self, id: NodeId) -> bool {
        self.node(id).tag.eq_ignore_ascii_case("textarea")
    }

    /// Attached nodes in document (pre-)order
    fn document_order(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![MemoryPage::ROOT];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        order
    }
}

/// An in-memory host document rooted at a `body` element
#[derive(Debug, Clone)]
pub struct MemoryPage {
    state: Rc<RefCell<PageState>>,
}

impl MemoryPage {
    /// The `body` element
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        let body = NodeData {
            tag: "BODY".to_string(),
            id: None,
            parent: None,
            children: Vec::new(),
            value: String::new(),
            selection: None,
        };
        Self {
            state: Rc::new(RefCell::new(PageState {
                nodes: vec![body],
                focused: None,
                input_events: Vec::new(),
            })),
        }
    }

    /// Append a new element under `parent`
    pub fn append(&self, parent: NodeId, tag: &str, id: Option<&str>) -> NodeId {
        let mut state = self.state.borrow_mut();
        let node = NodeId(state.nodes.len());
        state.nodes.push(NodeData {
            tag: tag.to_ascii_uppercase(),
            id: id.map(str::to_string),
            parent: Some(parent),
            children: Vec::new(),
            value: String::new(),
            selection: None,
        });
        state.node_mut(parent).children.push(node);
        node
    }

    /// Append a textarea under `parent` and return it as a field
    pub fn append_text_area(&self, parent: NodeId, id: Option<&str>) -> MemoryField {
        let node = self.append(parent, "textarea", id);
        MemoryField {
            state: Rc::clone(&self.state),
            node,
        }
    }

    /// Field handle for `node`, if it is a textarea
    pub fn field(&self, node: NodeId) -> Option<MemoryField> {
        if self.state.borrow().is_text_area(node) {
            Some(MemoryField {
                state: Rc::clone(&self.state),
                node,
            })
        } else {
            None
        }
    }

    /// Detach `node` (and its subtree) from the document
    pub fn remove(&self, node: NodeId) {
        let mut state = self.state.borrow_mut();
        if let Some(parent) = state.node_mut(node).parent.take() {
            state.node_mut(parent).children.retain(|child| *child != node);
        }
        if state.focused.is_some_and(|focused| !state.is_connected(focused)) {
            state.focused = None;
        }
    }

    /// Focus any element, editable or not
    pub fn focus_node(&self, node: NodeId) {
        let mut state = self.state.borrow_mut();
        if state.is_connected(node) {
            state.focused = Some(node);
        }
    }

    pub fn focused_node(&self) -> Option<NodeId> {
        self.state.borrow().focused
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        self.state.borrow().is_connected(node)
    }

    /// Tag name in upper case, like `Element.tagName`
    pub fn tag_name(&self, node: NodeId) -> String {
        self.state.borrow().node(node).tag.clone()
    }

    pub fn element_id(&self, node: NodeId) -> Option<String> {
        self.state.borrow().node(node).id.clone()
    }

    /// Number of `input` events that reached a listener on `node`
    pub fn input_events_at(&self, node: NodeId) -> usize {
        self.state
            .borrow()
            .input_events
            .iter()
            .filter(|event| event.path.contains(&node))
            .count()
    }

    /// Total number of `input` events dispatched anywhere
    pub fn input_event_count(&self) -> usize {
        self.state.borrow().input_events.len()
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HostPage for MemoryPage {
    type Field = MemoryField;

    fn contains(&self, field: &MemoryField) -> bool {
        Rc::ptr_eq(&self.state, &field.state) && self.is_connected(field.node)
    }

    fn focused_field(&self) -> Option<MemoryField> {
        let focused = self.focused_node()?;
        self.field(focused)
    }

    fn field_by_id(&self, id: &str) -> Option<MemoryField> {
        let found = {
            let state = self.state.borrow();
            let found = state
                .document_order()
                .into_iter()
                .find(|node| state.node(*node).id.as_deref() == Some(id));
            found
        };
        self.field(found?)
    }

    fn first_field(&self) -> Option<MemoryField> {
        let found = {
            let state = self.state.borrow();
            let found = state
                .document_order()
                .into_iter()
                .find(|node| state.is_text_area(*node));
            found
        };
        self.field(found?)
    }
}

/// A textarea living in a [`MemoryPage`]
#[derive(Debug, Clone)]
pub struct MemoryField {
    state: Rc<RefCell<PageState>>,
    node: NodeId,
}

impl MemoryField {
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Set content and selection as if the user had typed and selected
    pub fn set_content(&self, value: &str, selection: Option<CaretPosition>) {
        let mut state = self.state.borrow_mut();
        let data = state.node_mut(self.node);
        data.value = value.to_string();
        data.selection = selection;
    }
}

impl PartialEq for MemoryField {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state) && self.node == other.node
    }
}

impl EditableField for MemoryField {
    fn value(&self) -> String {
        self.state.borrow().node(self.node).value.clone()
    }

    fn set_value(&self, value: &str) {
        self.state.borrow_mut().node_mut(self.node).value = value.to_string();
    }

    fn selection(&self) -> Option<CaretPosition> {
        self.state.borrow().node(self.node).selection
    }

    fn set_selection(&self, caret: CaretPosition) {
        self.state.borrow_mut().node_mut(self.node).selection = Some(caret);
    }

    fn focus(&self) {
        let mut state = self.state.borrow_mut();
        if state.is_connected(self.node) {
            state.focused = Some(self.node);
        }
    }

    fn notify_input(&self) {
        let mut state = self.state.borrow_mut();
        let path = state.ancestry(self.node);
        state.input_events.push(InputEvent { path });
    }
}
