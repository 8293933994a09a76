//! Select controller state.

use std::fmt;

use super::{Choice, Filter};

/// The single source of truth shared by the match, search and choices views.
///
/// Two states, closed and open. Opening is refused while disabled, and
/// disabling an open select closes it, so `is_open()` is never true together
/// with `is_disabled()`.
pub struct SelectState<T> {
    open: bool,
    disabled: bool,
    required: bool,
    tagging: bool,
    search: String,
    selected: Option<Choice<T>>,
    items: Vec<T>,
    /// Cursor into the filtered list (keyboard navigation)
    active_index: usize,
    filter: Filter<T>,
}

impl<T: Clone + PartialEq + 'static> SelectState<T> {
    /// Create a closed, enabled select with nothing selected.
    pub fn new(items: Vec<T>, filter: Filter<T>) -> Self {
        Self {
            open: false,
            disabled: false,
            required: false,
            tagging: false,
            search: String::new(),
            selected: None,
            items,
            active_index: 0,
            filter,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn tagging_enabled(&self) -> bool {
        self.tagging
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current selection. `None` means unset, never "falsy".
    pub fn selected(&self) -> Option<&Choice<T>> {
        self.selected.as_ref()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// False only when a value is required and nothing is selected.
    pub fn is_valid(&self) -> bool {
        !self.required || self.selected.is_some()
    }

    // -------------------------------------------------------------------------
    // Inbound bindings
    // -------------------------------------------------------------------------

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.clamp_active();
    }

    /// Disabling an open select closes it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled && self.open {
            self.close();
        }
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn set_tagging(&mut self, tagging: bool) {
        self.tagging = tagging;
    }

    /// Replace the search text; the cursor returns to the first row.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.active_index = 0;
    }

    /// Set the selection from outside, bypassing the membership check.
    ///
    /// Used for the bound model's initial or externally pushed value.
    pub fn set_selected(&mut self, selected: Option<Choice<T>>) {
        self.selected = selected;
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Open the dropdown. Returns false when disabled or already open.
    pub fn open(&mut self) -> bool {
        if self.disabled {
            log::trace!("SelectState::open ignored: disabled");
            return false;
        }
        if self.open {
            return false;
        }

        self.open = true;
        self.search.clear();
        // Start the cursor on the current selection
        self.active_index = self
            .selected
            .as_ref()
            .and_then(Choice::as_item)
            .and_then(|item| self.filtered_items().iter().position(|i| i == item))
            .unwrap_or(0);
        log::debug!("SelectState::open active_index={}", self.active_index);
        true
    }

    /// Close the dropdown and clear the search text.
    pub fn close(&mut self) {
        self.open = false;
        self.search.clear();
        self.active_index = 0;
    }

    /// Open if closed, close if open. Does nothing while disabled.
    pub fn toggle(&mut self) {
        if self.disabled {
            log::trace!("SelectState::toggle ignored: disabled");
            return;
        }
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Commit `value` as the selection and close.
    ///
    /// Without tagging, a value that is not among the currently filtered
    /// items is ignored and the state stays as it was. Returns whether the
    /// selection was committed.
    pub fn select(&mut self, value: Choice<T>) -> bool {
        if !self.tagging && !self.is_selectable(&value) {
            log::debug!("SelectState::select ignored: not in the filtered items");
            return false;
        }

        self.selected = Some(value);
        self.close();
        true
    }

    /// Explicitly unset the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    fn is_selectable(&self, value: &Choice<T>) -> bool {
        match value {
            Choice::Item(item) => self.filtered_items().contains(item),
            Choice::Tag(_) => false,
        }
    }

    // -------------------------------------------------------------------------
    // Filtered list
    // -------------------------------------------------------------------------

    /// Indices into `items()` of the visible candidates, in display order.
    pub fn filtered_indices(&self) -> Vec<usize> {
        self.filter.apply(&self.search, &self.items)
    }

    /// The visible candidates. Recomputed on every call.
    pub fn filtered_items(&self) -> Vec<T> {
        self.filtered_indices()
            .into_iter()
            .filter_map(|i| self.items.get(i).cloned())
            .collect()
    }

    /// The filtered item under the keyboard cursor.
    pub fn active_item(&self) -> Option<T> {
        self.filtered_items().into_iter().nth(self.active_index)
    }

    /// Move the cursor by `delta` rows, clamped to the filtered list.
    pub fn move_active(&mut self, delta: isize) {
        let max = self.filtered_indices().len().saturating_sub(1);
        self.active_index = self.active_index.saturating_add_signed(delta).min(max);
    }

    fn clamp_active(&mut self) {
        let max = self.filtered_indices().len().saturating_sub(1);
        self.active_index = self.active_index.min(max);
    }
}

impl<T: fmt::Debug> fmt::Debug for SelectState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectState")
            .field("open", &self.open)
            .field("disabled", &self.disabled)
            .field("required", &self.required)
            .field("tagging", &self.tagging)
            .field("search", &self.search)
            .field("selected", &self.selected)
            .field("items", &self.items.len())
            .field("active_index", &self.active_index)
            .finish()
    }
}
