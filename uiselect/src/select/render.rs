//! Rendering for the Select widget.
//!
//! Three views share one [`SelectState`](super::SelectState): the match view
//! (always visible), the search field and the choices list (present but
//! hidden while closed). Interactive elements record an action in their data
//! so a host can dispatch clicks by element id.

use crate::markup::Element;

use super::{Choice, Select, TemplateContext};

pub const CONTAINER_CLASS: &str = "ui-select-container";
pub const MATCH_CLASS: &str = "ui-select-match";
pub const LABEL_CLASS: &str = "ui-select-match-label";
pub const PLACEHOLDER_CLASS: &str = "ui-select-placeholder";
pub const SEARCH_CLASS: &str = "ui-select-search";
pub const CHOICES_CLASS: &str = "ui-select-choices";
pub const CONTENT_CLASS: &str = "ui-select-choices-content";
pub const ROW_CLASS: &str = "ui-select-choices-row";

/// Data key holding the action an element triggers.
pub const DATA_ACTION: &str = "action";
/// Data key holding a row's position in the filtered list.
pub const DATA_INDEX: &str = "index";

pub const ACTION_ACTIVATE: &str = "activate";
pub const ACTION_SEARCH: &str = "search";
pub const ACTION_CHOOSE: &str = "choose";

/// Render the whole widget: container with match, search and choices.
pub fn render_select<T: Clone + PartialEq + 'static>(select: &Select<T>) -> Element {
    let state = select.state();

    log::debug!(
        "Select::render id={} open={} selected={} search={:?}",
        select.id(),
        state.is_open(),
        state.selected().is_some(),
        state.search()
    );

    Element::div()
        .id(select.id())
        .class(CONTAINER_CLASS)
        .class_if("open", state.is_open())
        .class_if("disabled", state.is_disabled())
        .class_if("invalid", !state.is_valid())
        .disabled(state.is_disabled())
        .child(render_match(select))
        .child(render_search(select))
        .child(render_choices(select))
}

/// Render the match view.
///
/// The placeholder is visible exactly when nothing is selected. A selected
/// value is always rendered, whatever its label looks like.
pub fn render_match<T: Clone + PartialEq + 'static>(select: &Select<T>) -> Element {
    let state = select.state();
    let id = select.id();
    let cx = TemplateContext {
        search: state.search(),
    };

    let content = match state.selected() {
        Some(Choice::Item(item)) => Some((select.match_template())(item, &cx)),
        Some(Choice::Tag(text)) => Some(Element::text(text)),
        None => None,
    };
    let is_placeholder = content.is_none();

    let mut label = Element::span()
        .id(format!("{id}-label"))
        .class(LABEL_CLASS)
        .hidden(is_placeholder);
    if let Some(content) = content {
        label = label.child(content);
    }

    let placeholder = Element::text(select.placeholder().unwrap_or_default())
        .id(format!("{id}-placeholder"))
        .class(PLACEHOLDER_CLASS)
        .hidden(!is_placeholder);

    let arrow = if state.is_open() { "▲" } else { "▼" };

    Element::div()
        .id(format!("{id}-match"))
        .class(MATCH_CLASS)
        .clickable(!state.is_disabled())
        .disabled(state.is_disabled())
        .data(DATA_ACTION, ACTION_ACTIVATE)
        .child(placeholder)
        .child(label)
        .child(Element::text(arrow).class("ui-select-toggle"))
}

/// Render the search field, bound to the search text.
pub fn render_search<T: Clone + PartialEq + 'static>(select: &Select<T>) -> Element {
    let state = select.state();

    let mut input = Element::input(state.search())
        .id(format!("{}-search", select.id()))
        .class(SEARCH_CLASS)
        .hidden(!state.is_open())
        .disabled(state.is_disabled())
        .data(DATA_ACTION, ACTION_SEARCH);

    if let Some(placeholder) = select.placeholder() {
        input = input.placeholder(placeholder);
    }

    input
}

/// Render the choices list: one row per filtered item.
pub fn render_choices<T: Clone + PartialEq + 'static>(select: &Select<T>) -> Element {
    let state = select.state();
    let id = select.id();
    let cx = TemplateContext {
        search: state.search(),
    };
    let selected = state.selected().and_then(Choice::as_item);
    let items = state.filtered_items();

    log::trace!("Select::render_choices id={} rows={}", id, items.len());

    let rows = items.iter().enumerate().map(|(i, item)| {
        Element::div()
            .id(format!("{id}-row-{i}"))
            .class(ROW_CLASS)
            .class_if("active", state.is_open() && i == state.active_index())
            .class_if("selected", selected == Some(item))
            .clickable(true)
            .data(DATA_ACTION, ACTION_CHOOSE)
            .data(DATA_INDEX, i.to_string())
            .child((select.choice_template())(item, &cx))
    });

    Element::list()
        .id(format!("{id}-choices"))
        .class(CHOICES_CLASS)
        .hidden(!state.is_open())
        .child(
            Element::div()
                .id(format!("{id}-choices-content"))
                .class(CONTENT_CLASS)
                .children(rows),
        )
}
