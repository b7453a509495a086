// Focus tracking + insertion behaviour against an in-memory page

use std::cell::RefCell;

use toolbox_wasm::dom::memory::{MemoryField, MemoryPage};
use toolbox_wasm::dom::EditableField;
use toolbox_wasm::{insert_text, CaretPosition, FocusTracker};

fn new_tracker() -> RefCell<FocusTracker<MemoryField>> {
    RefCell::new(FocusTracker::new("wmd-input"))
}

#[test]
fn test_text_lands_in_most_recently_focused_or_clicked_field() {
    let page = MemoryPage::new();
    let question = page.append_text_area(MemoryPage::ROOT, Some("wmd-input"));
    let comment_a = page.append_text_area(MemoryPage::ROOT, Some("comment-a"));
    let comment_b = page.append_text_area(MemoryPage::ROOT, Some("comment-b"));
    let tracker = new_tracker();

    // focus A, click B, focus question, click A  ->  A
    tracker.borrow_mut().observe_focus(Some(comment_a.clone()));
    tracker.borrow_mut().observe_click(Some(comment_b.clone()));
    tracker.borrow_mut().observe_focus(Some(question.clone()));
    tracker.borrow_mut().observe_click(Some(comment_a.clone()));

    insert_text(&tracker, &page, "Welcome!", None);

    assert_eq!(comment_a.value(), "Welcome!");
    assert_eq!(comment_b.value(), "");
    assert_eq!(question.value(), "");
}

#[test]
fn test_detached_tracked_field_is_skipped() {
    let page = MemoryPage::new();
    let wrapper = page.append(MemoryPage::ROOT, "div", None);
    let old_editor = page.append_text_area(wrapper, Some("wmd-input"));
    let tracker = new_tracker();
    tracker.borrow_mut().observe_focus(Some(old_editor.clone()));

    // Host page rebuilds its editor
    page.remove(wrapper);
    let new_editor = page.append_text_area(MemoryPage::ROOT, Some("wmd-input"));

    let outcome = insert_text(&tracker, &page, "text", None).expect("new editor resolves");

    assert_eq!(outcome.field, new_editor);
    assert_eq!(new_editor.value(), "text");
    assert_eq!(old_editor.value(), "");
    assert_eq!(tracker.borrow().cached(), Some(&new_editor));
}

#[test]
fn test_no_field_anywhere_is_a_noop() {
    let page = MemoryPage::new();
    let form = page.append(MemoryPage::ROOT, "form", None);
    let button = page.append(form, "button", None);
    page.focus_node(button);
    let tracker = new_tracker();

    assert!(insert_text(&tracker, &page, "text", None).is_none());
    assert_eq!(page.input_event_count(), 0);
    assert_eq!(page.focused_node(), Some(button));
}

#[test]
fn test_insert_at_collapsed_caret() {
    let page = MemoryPage::new();
    let field = page.append_text_area(MemoryPage::ROOT, None);
    field.set_content("AB", Some(CaretPosition::collapsed(1)));
    let text = "template";

    insert_text(&new_tracker(), &page, text, None);

    assert_eq!(field.value(), format!("A{}B", text));
    let after = 1 + text.len() as u32;
    assert_eq!(field.selection(), Some(CaretPosition::new(after, after)));
}

#[test]
fn test_insert_replaces_selection() {
    let page = MemoryPage::new();
    let field = page.append_text_area(MemoryPage::ROOT, None);
    field.set_content("ABCD", Some(CaretPosition::new(1, 3)));
    let text = "template";

    insert_text(&new_tracker(), &page, text, None);

    assert_eq!(field.value(), format!("A{}D", text));
    assert_eq!(field.selection(), Some(CaretPosition::collapsed(1 + text.len() as u32)));
}

#[test]
fn test_exactly_one_bubbling_input_event() {
    let page = MemoryPage::new();
    let form = page.append(MemoryPage::ROOT, "form", None);
    let field = page.append_text_area(form, None);

    insert_text(&new_tracker(), &page, "x", Some(field.clone()));

    assert_eq!(page.input_events_at(field.node()), 1);
    assert_eq!(page.input_events_at(form), 1);
    assert_eq!(page.input_events_at(MemoryPage::ROOT), 1);
    assert_eq!(page.input_event_count(), 1);
}

#[test]
fn test_insertion_keeps_targeting_the_same_field() {
    let page = MemoryPage::new();
    let first = page.append_text_area(MemoryPage::ROOT, None);
    let comment = page.append_text_area(MemoryPage::ROOT, Some("comment"));
    let tracker = new_tracker();

    insert_text(&tracker, &page, "one ", Some(comment.clone()));
    // Focus drifts somewhere non-editable
    let link = page.append(MemoryPage::ROOT, "a", None);
    page.focus_node(link);
    insert_text(&tracker, &page, "two", None);

    assert_eq!(comment.value(), "one two");
    assert_eq!(first.value(), "");
}

#[test]
fn test_fallback_order_focus_then_editor_then_first() {
    let page = MemoryPage::new();
    let search = page.append_text_area(MemoryPage::ROOT, Some("search"));
    let editor = page.append_text_area(MemoryPage::ROOT, Some("wmd-input"));
    let comment = page.append_text_area(MemoryPage::ROOT, Some("comment"));
    let tracker = new_tracker();

    comment.focus();
    assert_eq!(tracker.borrow().resolve_target(&page), Some(comment.clone()));

    page.remove(comment.node());
    assert_eq!(tracker.borrow().resolve_target(&page), Some(editor.clone()));

    page.remove(editor.node());
    assert_eq!(tracker.borrow().resolve_target(&page), Some(search));
}
