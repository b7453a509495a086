//! Template insertion
//!
//! Writes a snippet into a field the way a paste would: the selection is
//! replaced, the caret lands after the snippet, the field keeps focus and the
//! host page receives a bubbling `input` event so its own bindings (preview,
//! counters, framework models) pick the change up.

use std::cell::RefCell;

use crate::dom::{EditableField, HostPage};
use crate::focus::FocusTracker;
use crate::text::{splice, CaretPosition};

/// What an insertion did
#[derive(Debug, Clone, PartialEq)]
pub struct Insertion<F> {
    /// Field that was written to
    pub field: F,
    /// Selection the text replaced
    pub replaced: CaretPosition,
    /// Caret after the insertion
    pub caret: CaretPosition,
}

/// Insert `text` into `field`, or into the tracker's best candidate
///
/// Returns `None` when there is no candidate at all; that is not an error, the
/// click simply does nothing.
///
/// The tracker is only borrowed to resolve the target and to record it
/// afterwards. Focusing the field and dispatching `input` run host listeners
/// synchronously, and those may re-enter the tracker.
pub fn insert_text<P>(
    tracker: &RefCell<FocusTracker<P::Field>>,
    page: &P,
    text: &str,
    field: Option<P::Field>,
) -> Option<Insertion<P::Field>>
where
    P: HostPage,
{
    let field = match field {
        Some(field) => field,
        None => {
            let resolved = tracker.borrow().resolve_target(page);
            match resolved {
                Some(field) => field,
                None => {
                    log::debug!("[toolbox] no editable field to insert into");
                    return None;
                }
            }
        }
    };

    let result = splice(&field.value(), field.selection(), text);

    field.set_value(&result.value);
    field.set_selection(result.caret);
    field.focus();
    field.notify_input();

    tracker.borrow_mut().remember(field.clone());

    Some(Insertion {
        field,
        replaced: result.replaced,
        caret: result.caret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryPage;

    fn tracker() -> RefCell<FocusTracker<crate::dom::memory::MemoryField>> {
        RefCell::new(FocusTracker::new("wmd-input"))
    }

    #[test]
    fn test_inserts_at_caret() {
        let page = MemoryPage::new();
        let field = page.append_text_area(MemoryPage::ROOT, None);
        field.set_content("AB", Some(CaretPosition::collapsed(1)));

        let outcome = insert_text(&tracker(), &page, "Hi", Some(field.clone()));

        assert_eq!(field.value(), "AHiB");
        assert_eq!(field.selection(), Some(CaretPosition::collapsed(3)));
        assert_eq!(outcome.map(|o| o.replaced), Some(CaretPosition::collapsed(1)));
    }

    #[test]
    fn test_replaces_selection() {
        let page = MemoryPage::new();
        let field = page.append_text_area(MemoryPage::ROOT, None);
        field.set_content("ABCD", Some(CaretPosition::new(1, 3)));

        insert_text(&tracker(), &page, "xy", Some(field.clone()));

        assert_eq!(field.value(), "AxyD");
        assert_eq!(field.selection(), Some(CaretPosition::collapsed(3)));
    }

    #[test]
    fn test_no_selection_state_appends() {
        let page = MemoryPage::new();
        let field = page.append_text_area(MemoryPage::ROOT, None);
        field.set_content("Thanks", None);

        insert_text(&tracker(), &page, "!", Some(field.clone()));

        assert_eq!(field.value(), "Thanks!");
        assert_eq!(field.selection(), Some(CaretPosition::collapsed(7)));
    }

    #[test]
    fn test_no_target_is_noop() {
        let page = MemoryPage::new();
        page.append(MemoryPage::ROOT, "div", None);
        let tracker = tracker();

        assert_eq!(insert_text(&tracker, &page, "text", None), None);
        assert_eq!(page.input_event_count(), 0);
        assert_eq!(tracker.borrow().cached(), None);
    }

    #[test]
    fn test_focuses_notifies_and_remembers() {
        let page = MemoryPage::new();
        let field = page.append_text_area(MemoryPage::ROOT, None);
        let tracker = tracker();

        insert_text(&tracker, &page, "x", None);

        assert_eq!(page.focused_field(), Some(field.clone()));
        assert_eq!(page.input_events_at(field.node()), 1);
        assert_eq!(tracker.borrow().cached(), Some(&field));
    }

    #[test]
    fn test_repeated_insertion_duplicates() {
        let page = MemoryPage::new();
        let field = page.append_text_area(MemoryPage::ROOT, None);
        let tracker = tracker();

        insert_text(&tracker, &page, "ab", None);
        insert_text(&tracker, &page, "ab", None);

        assert_eq!(field.value(), "abab");
        assert_eq!(page.input_events_at(field.node()), 2);
    }

    #[test]
    fn test_detached_field_write_is_silent() {
        let page = MemoryPage::new();
        let field = page.append_text_area(MemoryPage::ROOT, None);
        page.remove(field.node());

        let outcome = insert_text(&tracker(), &page, "lost", Some(field.clone()));

        assert!(outcome.is_some());
        assert!(!page.contains(&field));
        // Focus cannot land on a detached node
        assert_eq!(page.focused_node(), None);
    }
}
