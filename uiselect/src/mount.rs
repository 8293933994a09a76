//! Host side of a mounted select.
//!
//! A [`Mount`] owns one widget and the tree it last rendered. Every
//! dispatched event runs synchronously and re-renders before returning, so
//! the tree never lags behind the state.

use crate::events::{EventResult, Key, WidgetEvents};
use crate::markup::{self, Element};
use crate::select::render::{
    ACTION_ACTIVATE, ACTION_CHOOSE, DATA_ACTION, DATA_INDEX, LABEL_CLASS, PLACEHOLDER_CLASS,
    ROW_CLASS,
};
use crate::select::Select;

/// A select mounted into a host, with its current element tree.
#[derive(Debug)]
pub struct Mount<T> {
    select: Select<T>,
    root: Element,
}

impl<T: Clone + PartialEq + 'static> Mount<T> {
    pub fn new(select: Select<T>) -> Self {
        let root = select.render();
        Self { select, root }
    }

    /// The tree as of the last event.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn select(&self) -> &Select<T> {
        &self.select
    }

    /// Mutate the widget directly (inbound bindings, controller calls), then re-render.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Select<T>) -> R) -> R {
        let out = f(&mut self.select);
        self.rerender();
        out
    }

    /// Unmount, handing the widget back.
    pub fn into_inner(self) -> Select<T> {
        self.select
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Click the element with `id`.
    ///
    /// The click bubbles up to the nearest element that records an action.
    /// Unknown ids and elements without an action are ignored.
    pub fn click(&mut self, id: &str) -> EventResult {
        let Some(path) = markup::path_to(&self.root, id) else {
            log::trace!("Mount::click no element {}", id);
            return EventResult::Ignored;
        };

        let target = path.iter().rev().find_map(|el| {
            let action = el.get_data(DATA_ACTION)?;
            let index = el.get_data(DATA_INDEX).and_then(|i| i.parse::<usize>().ok());
            Some((action.clone(), index))
        });

        let result = match target {
            Some((action, _)) if action == ACTION_ACTIVATE => self.select.on_activate_clicked(),
            Some((action, Some(index))) if action == ACTION_CHOOSE => {
                self.select.on_row_clicked(index)
            }
            // Search field clicks only focus it
            _ => EventResult::Ignored,
        };

        self.rerender();
        result
    }

    /// Click the deepest element inside a choices row whose text contains `text`.
    ///
    /// The click goes to the row holding the match, whatever ids the row
    /// template gave its elements. Text that appears in no row matches
    /// nothing and the click is a no-op.
    pub fn click_text(&mut self, text: &str) -> EventResult {
        let index = markup::find_by_class(&self.root, ROW_CLASS)
            .into_iter()
            .find(|row| markup::deepest_containing(row, text).is_some())
            .and_then(|row| row.get_data(DATA_INDEX)?.parse::<usize>().ok());

        let Some(index) = index else {
            log::trace!("Mount::click_text nothing contains {:?}", text);
            return EventResult::Ignored;
        };

        let result = self.select.on_row_clicked(index);
        self.rerender();
        result
    }

    /// Type into the search field, replacing its text.
    pub fn input(&mut self, text: &str) -> EventResult {
        let result = self.select.on_search_input(text);
        self.rerender();
        result
    }

    pub fn key(&mut self, key: Key) -> EventResult {
        let result = self.select.on_key(key);
        self.rerender();
        result
    }

    pub fn blur(&mut self) -> EventResult {
        let result = self.select.on_blur();
        self.rerender();
        result
    }

    fn rerender(&mut self) {
        self.root = self.select.render();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn find(&self, id: &str) -> Option<&Element> {
        markup::find_element(&self.root, id)
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        markup::find_by_class(&self.root, class)
    }

    /// Text of the visible match label, empty while the placeholder shows.
    pub fn match_label(&self) -> String {
        self.find_by_class(LABEL_CLASS)
            .into_iter()
            .filter(|el| !el.hidden)
            .map(Element::text_content)
            .collect()
    }

    /// Whether the placeholder is the visible part of the match view.
    pub fn placeholder_visible(&self) -> bool {
        self.find_by_class(PLACEHOLDER_CLASS)
            .iter()
            .any(|el| !el.hidden)
    }

    /// Open according to both the state and the rendered container.
    pub fn is_open(&self) -> bool {
        self.select.state().is_open() && self.root.has_class("open")
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}
