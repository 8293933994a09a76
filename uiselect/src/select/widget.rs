//! The Select widget: controller plus templates, binding and listeners.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::SelectError;
use crate::events::{WidgetEvent, WidgetEventKind};
use crate::markup::Element;
use crate::state::State;

use super::render;
use super::{Choice, Filter, SelectConfig, SelectItem, SelectState};

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for SelectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "select-{}", self.0)
    }
}

/// What a template gets to see besides the item itself.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    /// Current search text, for highlighting.
    pub search: &'a str,
}

/// Host-supplied render function for one item.
pub type Template<T> = Arc<dyn Fn(&T, &TemplateContext<'_>) -> Element + Send + Sync>;

type SelectListener<T> = Arc<dyn Fn(&Choice<T>) + Send + Sync>;
type ChangeListener<T> = Arc<dyn Fn(Option<&Choice<T>>) + Send + Sync>;

/// Two-way bound model value.
pub type Model<T> = State<Option<Choice<T>>>;

/// A searchable dropdown select.
///
/// Owns its [`SelectState`] exclusively. Every transition that changes the
/// selection is written back to the bound [`Model`], reported to the
/// listeners and queued as a [`WidgetEvent`].
///
/// # Example
///
/// ```
/// use uiselect::select::{Choice, Select};
///
/// let mut select = Select::builder(vec!["Adam", "Samantha"])
///     .placeholder("Pick one...")
///     .build()?;
///
/// select.toggle();
/// assert!(select.state().is_open());
///
/// select.select(Choice::Item("Samantha"));
/// assert!(!select.state().is_open());
/// assert_eq!(select.model().get(), Some(Choice::Item("Samantha")));
/// # Ok::<(), uiselect::SelectError>(())
/// ```
pub struct Select<T> {
    id: String,
    state: SelectState<T>,
    placeholder: Option<String>,
    match_template: Template<T>,
    choice_template: Template<T>,
    model: Model<T>,
    on_select: Vec<SelectListener<T>>,
    on_change: Vec<ChangeListener<T>>,
    events: Vec<WidgetEvent>,
}

impl<T: Clone + PartialEq + 'static> Select<T> {
    /// Builder with the default text templates and the configured built-in filter.
    pub fn builder(items: Vec<T>) -> SelectBuilder<T>
    where
        T: SelectItem,
    {
        SelectBuilder::new(items)
            .match_template(|item: &T, _cx: &TemplateContext<'_>| {
                Element::text(item.select_label())
            })
            .choice_template(|item: &T, cx: &TemplateContext<'_>| {
                super::highlight(&item.select_label(), cx.search)
            })
            .default_filter(Filter::from_mode)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Read-only view of the controller.
    pub fn state(&self) -> &SelectState<T> {
        &self.state
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Handle to the bound model.
    pub fn model(&self) -> &Model<T> {
        &self.model
    }

    pub(crate) fn match_template(&self) -> &Template<T> {
        &self.match_template
    }

    pub(crate) fn choice_template(&self) -> &Template<T> {
        &self.choice_template
    }

    // -------------------------------------------------------------------------
    // Controller operations
    // -------------------------------------------------------------------------

    pub fn open(&mut self) -> bool {
        self.apply(SelectState::open)
    }

    pub fn close(&mut self) {
        self.apply(SelectState::close)
    }

    pub fn toggle(&mut self) {
        self.apply(SelectState::toggle)
    }

    /// Commit a selection; see [`SelectState::select`].
    pub fn select(&mut self, value: Choice<T>) -> bool {
        let committed = self.apply(|s| s.select(value));
        if committed {
            if let Some(choice) = self.state.selected() {
                for listener in &self.on_select {
                    listener(choice);
                }
            }
            self.push_event(WidgetEventKind::Select);
        }
        committed
    }

    pub fn clear(&mut self) {
        self.apply(SelectState::clear)
    }

    /// The visible candidates for the current search.
    pub fn filtered_items(&self) -> Vec<T> {
        self.state.filtered_items()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.apply(|s| s.set_search(search))
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.apply(|s| s.set_items(items))
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.apply(|s| s.set_disabled(disabled))
    }

    pub fn set_required(&mut self, required: bool) {
        self.state.set_required(required);
    }

    pub fn set_tagging(&mut self, tagging: bool) {
        self.state.set_tagging(tagging);
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = Some(placeholder.into());
    }

    pub(crate) fn move_active(&mut self, delta: isize) {
        self.state.move_active(delta);
    }

    /// Pull a value the host wrote into the model.
    ///
    /// The model is not written back and no listener fires.
    pub fn sync_from_model(&mut self) {
        let value = self.model.get();
        log::debug!("Select::sync_from_model id={} set={}", self.id, value.is_some());
        self.state.set_selected(value);
        self.model.clear_dirty();
    }

    // -------------------------------------------------------------------------
    // Listeners and events
    // -------------------------------------------------------------------------

    /// Call `f` after every committed selection.
    pub fn on_select<F>(&mut self, f: F)
    where
        F: Fn(&Choice<T>) + Send + Sync + 'static,
    {
        self.on_select.push(Arc::new(f));
    }

    /// Call `f` whenever the selected value changes, clears included.
    pub fn on_change<F>(&mut self, f: F)
    where
        F: Fn(Option<&Choice<T>>) + Send + Sync + 'static,
    {
        self.on_change.push(Arc::new(f));
    }

    /// Take the queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.events)
    }

    /// Render the whole widget.
    pub fn render(&self) -> Element {
        render::render_select(self)
    }

    /// Run a state transition, then propagate what it changed.
    fn apply<R>(&mut self, f: impl FnOnce(&mut SelectState<T>) -> R) -> R {
        let was_open = self.state.is_open();
        let before = self.state.selected().cloned();

        let out = f(&mut self.state);

        match (was_open, self.state.is_open()) {
            (false, true) => self.push_event(WidgetEventKind::Open),
            (true, false) => self.push_event(WidgetEventKind::Close),
            _ => {}
        }

        if before.as_ref() != self.state.selected() {
            let selected = self.state.selected().cloned();
            log::debug!("Select id={} selection changed", self.id);
            self.model.set(selected);
            for listener in &self.on_change {
                listener(self.state.selected());
            }
            self.push_event(WidgetEventKind::Change);
        }

        out
    }

    fn push_event(&mut self, kind: WidgetEventKind) {
        self.events.push(WidgetEvent::new(kind, self.id.clone()));
    }
}

impl<T: fmt::Debug> fmt::Debug for Select<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Builder
// -----------------------------------------------------------------------------

type DefaultFilter<T> = fn(super::FilterMode) -> Filter<T>;

/// Builder for [`Select`].
///
/// Templates and the filter are required unless the item type implements
/// [`SelectItem`] and the builder came from [`Select::builder`].
pub struct SelectBuilder<T> {
    items: Vec<T>,
    config: SelectConfig,
    filter: Option<Filter<T>>,
    default_filter: Option<DefaultFilter<T>>,
    match_template: Option<Template<T>>,
    choice_template: Option<Template<T>>,
    model: Option<Model<T>>,
    on_select: Vec<SelectListener<T>>,
    on_change: Vec<ChangeListener<T>>,
}

impl<T: Clone + PartialEq + 'static> SelectBuilder<T> {
    /// Bare builder: no templates, no filter.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            config: SelectConfig::default(),
            filter: None,
            default_filter: None,
            match_template: None,
            choice_template: None,
            model: None,
            on_select: Vec::new(),
            on_change: Vec::new(),
        }
    }

    /// Apply declarative attributes, replacing any set so far.
    pub fn config(mut self, config: SelectConfig) -> Self {
        self.config = config;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.config.id = Some(id.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.config.required = required;
        self
    }

    pub fn tagging(mut self, tagging: bool) -> Self {
        self.config.tagging = tagging;
        self
    }

    /// Host filter; overrides the configured built-in one.
    pub fn filter(mut self, filter: Filter<T>) -> Self {
        self.filter = Some(filter);
        self
    }

    fn default_filter(mut self, f: DefaultFilter<T>) -> Self {
        self.default_filter = Some(f);
        self
    }

    /// Template for the selected item in the match view.
    pub fn match_template<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &TemplateContext<'_>) -> Element + Send + Sync + 'static,
    {
        self.match_template = Some(Arc::new(f));
        self
    }

    /// Template for each row of the choices list.
    pub fn choice_template<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &TemplateContext<'_>) -> Element + Send + Sync + 'static,
    {
        self.choice_template = Some(Arc::new(f));
        self
    }

    /// Bind the selection to `model`. Its current value becomes the initial selection.
    pub fn model(mut self, model: Model<T>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn on_select<F>(mut self, f: F) -> Self
    where
        F: Fn(&Choice<T>) + Send + Sync + 'static,
    {
        self.on_select.push(Arc::new(f));
        self
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&Choice<T>>) + Send + Sync + 'static,
    {
        self.on_change.push(Arc::new(f));
        self
    }

    /// Mount-time validation of the slots, then the widget.
    pub fn build(self) -> Result<Select<T>, SelectError> {
        let match_template = self
            .match_template
            .ok_or(SelectError::MissingTemplate("match"))?;
        let choice_template = self
            .choice_template
            .ok_or(SelectError::MissingTemplate("choice"))?;
        let filter = match (self.filter, self.default_filter) {
            (Some(filter), _) => filter,
            (None, Some(default)) => default(self.config.filter),
            (None, None) => return Err(SelectError::MissingFilter),
        };

        let config = self.config;
        let model = self.model.unwrap_or_default();

        let mut state = SelectState::new(self.items, filter);
        state.set_required(config.required);
        state.set_tagging(config.tagging);
        state.set_disabled(config.disabled);
        state.set_selected(model.get());
        model.clear_dirty();

        let id = config.id.unwrap_or_else(|| SelectId::new().to_string());
        log::debug!(
            "Select::build id={} items={} disabled={} tagging={}",
            id,
            state.items().len(),
            config.disabled,
            config.tagging
        );

        Ok(Select {
            id,
            state,
            placeholder: config.placeholder,
            match_template,
            choice_template,
            model,
            on_select: self.on_select,
            on_change: self.on_change,
            events: Vec::new(),
        })
    }
}
