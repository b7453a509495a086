//! Active field tracking
//!
//! Keeps a best guess of which textarea a template click should write into.
//! The guess is only a hint: host pages rebuild their editors at will, so the
//! cached field is checked against the live document on every resolution and
//! ignored once it is detached.
//!
//! Resolution order:
//! 1. cached field, if still attached
//! 2. focused element, if it is a textarea
//! 3. host editor by id
//! 4. first textarea in the document

use crate::dom::HostPage;

/// Single-slot cache of the most recently used field
#[derive(Debug, Clone)]
pub struct ActiveField<F> {
    field: Option<F>,
}

impl<F: Clone> ActiveField<F> {
    pub fn empty() -> Self {
        Self { field: None }
    }

    pub fn get(&self) -> Option<&F> {
        self.field.as_ref()
    }

    /// Replace the cached field (last writer wins)
    pub fn set(&mut self, field: F) {
        self.field = Some(field);
    }

    pub fn clear(&mut self) {
        self.field = None;
    }
}

impl<F: Clone> Default for ActiveField<F> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Resolves the insertion target from cached and live document state
#[derive(Debug, Clone)]
pub struct FocusTracker<F> {
    active: ActiveField<F>,
    editor_id: String,
}

impl<F: Clone> FocusTracker<F> {
    /// Create a tracker that falls back to the host editor with `editor_id`
    pub fn new(editor_id: impl Into<String>) -> Self {
        Self {
            active: ActiveField::empty(),
            editor_id: editor_id.into(),
        }
    }

    /// The raw cached value, without freshness validation
    pub fn cached(&self) -> Option<&F> {
        self.active.get()
    }

    /// A focus event landed on `target`
    ///
    /// Callers pass `None` when the target is not a textarea, which leaves the
    /// cache untouched.
    pub fn observe_focus(&mut self, target: Option<F>) {
        if let Some(field) = target {
            self.active.set(field);
        }
    }

    /// A click event landed on `target`
    ///
    /// Some hosts do not synthesize a focus event for clicks, so clicks are
    /// tracked on their own.
    pub fn observe_click(&mut self, target: Option<F>) {
        if let Some(field) = target {
            self.active.set(field);
        }
    }

    /// Record a field that was just written to
    pub fn remember(&mut self, field: F) {
        self.active.set(field);
    }

    pub fn forget(&mut self) {
        self.active.clear();
    }

    /// Pick the field the next insertion should go to
    pub fn resolve_target<P>(&self, page: &P) -> Option<F>
    where
        P: HostPage<Field = F>,
    {
        if let Some(cached) = self.active.get() {
            if page.contains(cached) {
                return Some(cached.clone());
            }
        }

        page.focused_field()
            .or_else(|| page.field_by_id(&self.editor_id))
            .or_else(|| page.first_field())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryPage;
    use crate::dom::EditableField;

    #[test]
    fn test_empty_page_resolves_nothing() {
        let page = MemoryPage::new();
        page.append(MemoryPage::ROOT, "div", None);
        let tracker = FocusTracker::new("wmd-input");
        assert_eq!(tracker.resolve_target(&page), None);
    }

    #[test]
    fn test_cached_field_wins_over_focus() {
        let page = MemoryPage::new();
        let comment = page.append_text_area(MemoryPage::ROOT, Some("comment"));
        let editor = page.append_text_area(MemoryPage::ROOT, Some("wmd-input"));
        let mut tracker = FocusTracker::new("wmd-input");

        tracker.observe_click(Some(comment.clone()));
        editor.focus();

        assert_eq!(tracker.resolve_target(&page), Some(comment));
    }

    #[test]
    fn test_detached_cache_falls_through_to_focus() {
        let page = MemoryPage::new();
        let old = page.append_text_area(MemoryPage::ROOT, Some("wmd-input"));
        let other = page.append_text_area(MemoryPage::ROOT, None);
        let mut tracker = FocusTracker::new("wmd-input");

        tracker.observe_focus(Some(old.clone()));
        page.remove(old.node());
        other.focus();

        assert_eq!(tracker.resolve_target(&page), Some(other));
        // The stale value stays cached; it is just never returned
        assert_eq!(tracker.cached(), Some(&old));
    }

    #[test]
    fn test_focused_button_does_not_qualify() {
        let page = MemoryPage::new();
        let button = page.append(MemoryPage::ROOT, "button", None);
        let first = page.append_text_area(MemoryPage::ROOT, None);
        page.focus_node(button);

        let tracker = FocusTracker::new("wmd-input");
        assert_eq!(tracker.resolve_target(&page), Some(first));
    }

    #[test]
    fn test_editor_id_beats_document_order() {
        let page = MemoryPage::new();
        page.append_text_area(MemoryPage::ROOT, Some("search"));
        let editor = page.append_text_area(MemoryPage::ROOT, Some("wmd-input"));

        let tracker = FocusTracker::new("wmd-input");
        assert_eq!(tracker.resolve_target(&page), Some(editor));
    }

    #[test]
    fn test_non_text_area_events_keep_cache() {
        let page = MemoryPage::new();
        let field = page.append_text_area(MemoryPage::ROOT, None);
        let mut tracker = FocusTracker::new("wmd-input");

        tracker.observe_focus(Some(field.clone()));
        tracker.observe_click(None);
        tracker.observe_focus(None);

        assert_eq!(tracker.cached(), Some(&field));
    }

    #[test]
    fn test_most_recent_event_wins() {
        let page = MemoryPage::new();
        let a = page.append_text_area(MemoryPage::ROOT, None);
        let b = page.append_text_area(MemoryPage::ROOT, None);
        let mut tracker = FocusTracker::new("wmd-input");

        tracker.observe_focus(Some(a.clone()));
        tracker.observe_click(Some(b.clone()));
        assert_eq!(tracker.resolve_target(&page), Some(b));

        tracker.observe_focus(Some(a.clone()));
        assert_eq!(tracker.resolve_target(&page), Some(a));
    }

    #[test]
    fn test_forget_clears_cache() {
        let page = MemoryPage::new();
        let field = page.append_text_area(MemoryPage::ROOT, None);
        let mut tracker = FocusTracker::new("wmd-input");
        tracker.remember(field);
        tracker.forget();
        assert_eq!(tracker.cached(), None);
    }
}
