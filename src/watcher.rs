//! Host editor watcher
//!
//! Some hosts tear down and recreate their editor (e.g. when switching between
//! answer and edit modes). A `MutationObserver` on `<body>` watches for the
//! primary editor textarea being added, directly or inside an inserted subtree,
//! and asks the toolbox to make sure its panel is still there.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MutationObserver, MutationObserverInit, MutationRecord};

use crate::error::{dom_err, Result, ToolboxError};

/// Whether an element with `tag_name` and `id` is the host's primary editor
pub fn is_primary_editor(tag_name: &str, id: &str, editor_id: &str) -> bool {
    tag_name.eq_ignore_ascii_case("textarea") && id == editor_id
}

/// Whether any added `(tag_name, id)` pair is the primary editor
pub fn adds_primary_editor<I, S>(added: I, editor_id: &str) -> bool
where
    I: IntoIterator<Item = (S, S)>,
    S: AsRef<str>,
{
    added
        .into_iter()
        .any(|(tag, id)| is_primary_editor(tag.as_ref(), id.as_ref(), editor_id))
}

fn subtree_contains_editor(element: &Element, editor_id: &str) -> bool {
    let selector = format!("textarea[id=\"{}\"]", editor_id);
    matches!(element.query_selector(&selector), Ok(Some(_)))
}

/// Whether a batch of mutation records adds the primary editor
pub fn records_add_editor(records: &js_sys::Array, editor_id: &str) -> bool {
    let elements: Vec<Element> = records
        .iter()
        .flat_map(|record| {
            let added = record.unchecked_into::<MutationRecord>().added_nodes();
            (0..added.length())
                .filter_map(move |i| added.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect::<Vec<_>>()
        })
        .collect();

    adds_primary_editor(elements.iter().map(|e| (e.tag_name(), e.id())), editor_id)
        || elements.iter().any(|e| subtree_contains_editor(e, editor_id))
}

/// Call `on_editor` whenever the primary editor appears under `<body>`
pub fn watch_editor_insertions(
    document: &Document,
    editor_id: &str,
    on_editor: Rc<dyn Fn()>,
) -> Result<MutationObserver> {
    let body = document
        .body()
        .ok_or_else(|| ToolboxError::Dom("document has no <body>".to_string()))?;

    let editor_id = editor_id.to_string();
    let callback = Closure::wrap(Box::new(move |records: js_sys::Array, _observer: MutationObserver| {
        if records_add_editor(&records, &editor_id) {
            log::debug!("[toolbox] host editor '{}' inserted", editor_id);
            on_editor();
        }
    }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(dom_err)?;
    callback.forget();

    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer
        .observe_with_options(&body, &options)
        .map_err(dom_err)?;

    Ok(observer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_editor_match() {
        assert!(is_primary_editor("TEXTAREA", "wmd-input", "wmd-input"));
        assert!(is_primary_editor("textarea", "wmd-input", "wmd-input"));
        assert!(!is_primary_editor("DIV", "wmd-input", "wmd-input"));
        assert!(!is_primary_editor("TEXTAREA", "comment", "wmd-input"));
    }

    #[test]
    fn test_adds_primary_editor() {
        let added = vec![("DIV", ""), ("TEXTAREA", "wmd-input")];
        assert!(adds_primary_editor(added, "wmd-input"));

        let unrelated = vec![("TEXTAREA", "comment"), ("SPAN", "wmd-input")];
        assert!(!adds_primary_editor(unrelated, "wmd-input"));

        assert!(!adds_primary_editor(Vec::<(&str, &str)>::new(), "wmd-input"));
    }
}
