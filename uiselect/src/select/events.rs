//! Event handling for the Select widget.

use crate::events::{EventResult, Key, WidgetEvents};

use super::{Choice, Select};

impl<T: Clone + PartialEq + 'static> WidgetEvents for Select<T> {
    fn on_activate_clicked(&mut self) -> EventResult {
        if self.state().is_disabled() {
            log::trace!("Select id={} activation ignored: disabled", self.id());
            return EventResult::Ignored;
        }
        self.toggle();
        EventResult::Consumed
    }

    fn on_row_clicked(&mut self, index: usize) -> EventResult {
        let Some(item) = self.filtered_items().into_iter().nth(index) else {
            log::trace!("Select id={} row {} is not in the list", self.id(), index);
            return EventResult::Ignored;
        };
        self.select(Choice::Item(item));
        EventResult::Consumed
    }

    fn on_search_input(&mut self, text: &str) -> EventResult {
        if self.state().is_disabled() {
            return EventResult::Ignored;
        }
        self.set_search(text);
        EventResult::Consumed
    }

    fn on_key(&mut self, key: Key) -> EventResult {
        if self.state().is_disabled() {
            return EventResult::Ignored;
        }

        if !self.state().is_open() {
            // Closed state - open on Enter, Space, or Down
            return match key {
                Key::Enter | Key::Char(' ') | Key::Down => {
                    self.open();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        // Open state - navigate and select
        match key {
            Key::Up => {
                self.move_active(-1);
                EventResult::Consumed
            }
            Key::Down => {
                self.move_active(1);
                EventResult::Consumed
            }
            Key::Enter => {
                self.select_active();
                EventResult::Consumed
            }
            Key::Tab => {
                self.select_active();
                self.close();
                EventResult::Consumed
            }
            Key::Escape => {
                self.close();
                EventResult::Consumed
            }
            // Typed characters reach the search field through on_search_input
            Key::Char(_) => EventResult::Ignored,
        }
    }

    fn on_blur(&mut self) -> EventResult {
        if !self.state().is_open() {
            return EventResult::Ignored;
        }
        self.close();
        EventResult::Consumed
    }
}

impl<T: Clone + PartialEq + 'static> Select<T> {
    /// Commit the row under the cursor, or tag the search text when tagging
    /// is on and nothing matches it.
    fn select_active(&mut self) -> bool {
        if let Some(item) = self.state().active_item() {
            return self.select(Choice::Item(item));
        }

        let search = self.state().search().trim().to_string();
        if self.state().tagging_enabled() && !search.is_empty() {
            return self.select(Choice::Tag(search));
        }

        false
    }
}
