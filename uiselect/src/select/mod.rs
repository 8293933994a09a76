//! Select widget - a searchable dropdown with tagging support.

mod config;
mod events;
mod filter;
mod highlight;
mod item;
pub mod render;
mod state;
mod widget;

pub use config::SelectConfig;
pub use filter::{Filter, FilterMatch, FilterMode, fuzzy_filter};
pub use highlight::{HIGHLIGHT_CLASS, highlight, highlight_ranges};
pub use item::{Choice, SelectItem};
pub use state::SelectState;
pub use widget::{Model, Select, SelectBuilder, SelectId, Template, TemplateContext};
