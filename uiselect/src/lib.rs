//! A searchable dropdown select widget.
//!
//! The widget is a small state machine ([`select::SelectState`]) wrapped by
//! [`select::Select`], which adds host templates, a two-way bound model and
//! change listeners. It renders into a plain [`markup::Element`] tree; a
//! [`mount::Mount`] keeps the latest tree and routes clicks, key presses and
//! text input back into the widget.

pub mod error;
pub mod events;
pub mod markup;
pub mod mount;
pub mod select;
pub mod state;

pub use error::SelectError;
pub use state::State;

pub mod prelude {
    pub use crate::error::SelectError;
    pub use crate::events::{EventResult, Key, WidgetEvent, WidgetEventKind, WidgetEvents};
    pub use crate::markup::Element;
    pub use crate::mount::Mount;
    pub use crate::select::{
        Choice, Filter, FilterMode, Model, Select, SelectBuilder, SelectConfig, SelectItem,
        TemplateContext, highlight,
    };
    pub use crate::state::State;
}
