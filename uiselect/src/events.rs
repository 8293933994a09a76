//! Widget event handling types and traits.
//!
//! Hosts translate their own input (mouse clicks, key presses, text edits)
//! into calls on [`WidgetEvents`]. Every handler runs the matching state
//! transition synchronously, so the host may re-render and assert right
//! after the call returns.
//!
//! Widgets record what happened as [`WidgetEvent`]s; the host drains them
//! after each interaction.

// =============================================================================
// Input
// =============================================================================

/// Keys the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    Tab,
    Char(char),
}

// =============================================================================
// Widget Event Types
// =============================================================================

/// What a widget reports back to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEventKind {
    /// Dropdown opened
    Open,
    /// Dropdown closed
    Close,
    /// A selection was committed (fires even when the value is unchanged)
    Select,
    /// Selected value changed, including a clear
    Change,
}

/// A widget event to be handled by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEvent {
    /// Which kind of event
    pub kind: WidgetEventKind,
    /// Widget ID that triggered the event
    pub widget_id: String,
}

impl WidgetEvent {
    /// Create a new widget event.
    pub fn new(kind: WidgetEventKind, widget_id: impl Into<String>) -> Self {
        Self {
            kind,
            widget_id: widget_id.into(),
        }
    }
}

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Trait for widgets that can handle events.
///
/// All methods default to `EventResult::Ignored`, so widgets only implement
/// the events they care about.
pub trait WidgetEvents {
    /// The always-visible activation control was clicked.
    fn on_activate_clicked(&mut self) -> EventResult {
        EventResult::Ignored
    }

    /// A row of the visible list was clicked, by position in that list.
    fn on_row_clicked(&mut self, _index: usize) -> EventResult {
        EventResult::Ignored
    }

    /// The search field's text changed.
    fn on_search_input(&mut self, _text: &str) -> EventResult {
        EventResult::Ignored
    }

    /// A key was pressed while the widget had focus.
    fn on_key(&mut self, _key: Key) -> EventResult {
        EventResult::Ignored
    }

    /// Focus left the widget.
    fn on_blur(&mut self) -> EventResult {
        EventResult::Ignored
    }
}
